use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{portfolio, Project};
use crate::filter::{card_tags, categories, ProjectFilter};
use crate::modal::ProjectModal;

use super::SectionTitle;

#[component]
pub fn Projects(modal: RwSignal<ProjectModal>) -> impl IntoView {
    let projects = &portfolio().projects;
    let filter = RwSignal::new(ProjectFilter::default());

    let buttons = categories(projects)
        .into_iter()
        .map(|category| {
            let label = category.clone();
            let class = {
                let category = category.clone();
                move || {
                    if filter.with(|f| f.is_selected(&category)) {
                        "px-4 py-2 rounded-md bg-gradient-to-r from-cyan-400 to-green-400 text-black font-medium transition-all duration-200"
                    } else {
                        "px-4 py-2 rounded-md border border-cyan-400/50 text-cyan-400 hover:bg-cyan-400/10 transition-all duration-200"
                    }
                }
            };
            view! {
                <button class=class on:click=move |_| filter.update(|f| f.select(category.clone()))>
                    {label}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        let shown = filter.with(|f| f.apply(projects));
        if shown.is_empty() {
            return view! {
                <div class="text-center py-12">
                    <p class="text-gray-400 text-lg">"No projects found for this category."</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {shown.into_iter().map(|p| card(p, modal)).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="projects" class="py-20 bg-slate-950">
            <div class="container mx-auto px-6">
                <div class="max-w-7xl mx-auto">
                    <SectionTitle lead="Featured" accent="Projects" />
                    <div class="flex flex-wrap justify-center gap-3 mb-12">{buttons}</div>
                    {cards}
                </div>
            </div>
        </section>
    }
}

fn card(project: &'static Project, modal: RwSignal<ProjectModal>) -> impl IntoView {
    let (tags, more) = card_tags(project);
    let open = move |_: MouseEvent| modal.update(|m| m.open(project));

    view! {
        <div class="bg-slate-800/50 border border-cyan-400/20 rounded-lg backdrop-blur-sm hover:border-cyan-400/40 transition-all duration-300 group overflow-hidden">
            <div class="relative overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-slate-900/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="absolute bottom-4 left-4 right-4">
                        <button
                            class="w-full bg-cyan-400 text-black hover:bg-cyan-300 font-medium rounded-md py-2"
                            on:click=open
                        >
                            "View Details"
                        </button>
                    </div>
                </div>
                <span class=format!(
                    "absolute top-4 right-4 text-xs border rounded-full px-2 py-0.5 bg-slate-900/70 {}",
                    project.status.badge_class(),
                )>{project.status.label().to_string()}</span>
            </div>
            <div class="p-6">
                <div class="flex items-center justify-between mb-3">
                    <span class="text-xs border border-purple-400/50 text-purple-400 rounded-full px-2 py-0.5">
                        {project.category.clone()}
                    </span>
                    <div class="flex items-center gap-1 text-xs text-gray-400">
                        <i class="extra-calendar"></i>
                        {project.timeline.clone()}
                    </div>
                </div>
                <h3 class="text-xl font-bold text-white mb-3 group-hover:text-cyan-400 transition-colors">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-300 text-sm mb-4 line-clamp-3">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="text-xs border border-green-400/50 text-green-400 rounded-full px-2 py-0.5">
                                    {t.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(more > 0)
                        .then(|| {
                            view! {
                                <span class="text-xs border border-gray-400/50 text-gray-400 rounded-full px-2 py-0.5">
                                    {format!("+{more} more")}
                                </span>
                            }
                        })}
                </div>
                <button
                    class="w-full flex items-center justify-between text-cyan-400 hover:text-white hover:bg-cyan-400/10 rounded-md px-3 py-2"
                    on:click=open
                >
                    "Learn More"
                    <span>"→"</span>
                </button>
            </div>
        </div>
    }
}
