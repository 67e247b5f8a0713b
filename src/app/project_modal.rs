use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::content::{portfolio, Project};
use crate::modal::{project_action, project_year, ProjectModal};

/// Overlay for the selected project. Escape, the backdrop, the close icon and
/// the Close button all dismiss it.
#[component]
pub fn ProjectDetail(modal: RwSignal<ProjectModal>) -> impl IntoView {
    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" && modal.with_untracked(|m| m.is_open()) {
            modal.update(|m| m.close());
        }
    });

    move || {
        modal
            .with(|m| m.selected(&portfolio().projects))
            .map(|project| detail(project, modal))
    }
}

fn detail(project: &'static Project, modal: RwSignal<ProjectModal>) -> impl IntoView {
    let close = move |_: ev::MouseEvent| modal.update(|m| m.close());
    let action = project_action(project, &portfolio().profile);
    let highlight = project.highlight.clone();

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/80" on:click=close></div>
            <div
                role="dialog"
                aria-modal="true"
                class="relative w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-lg bg-slate-900 border border-cyan-400/30 text-white p-6"
            >
                <button
                    class="absolute right-4 top-4 p-2 hover:bg-slate-800 rounded-lg transition-colors"
                    aria-label="Close"
                    on:click=close
                >
                    <i class="extra-close"></i>
                </button>
                <div class="pr-10 mb-6">
                    <div class="flex items-center gap-3 mb-2">
                        <span class="text-xs border border-purple-400/50 text-purple-400 rounded-full px-2 py-0.5">
                            {project.category.clone()}
                        </span>
                        <span class=format!(
                            "text-xs border rounded-full px-2 py-0.5 {}",
                            project.status.badge_class(),
                        )>{project.status.label().to_string()}</span>
                    </div>
                    <h2 class="text-3xl font-bold mb-2">{project.title.clone()}</h2>
                    <div class="flex items-center gap-2 text-sm text-gray-400">
                        <i class="extra-calendar"></i>
                        {project.timeline.clone()}
                    </div>
                </div>
                <div class="space-y-6">
                    <div class="relative overflow-hidden rounded-lg">
                        <img
                            src=project.image.clone()
                            alt=project.title.clone()
                            class="w-full h-64 md:h-80 object-cover"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-slate-900/60 to-transparent"></div>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold text-cyan-400 mb-3">"About This Project"</h3>
                        <p class="text-gray-300 leading-relaxed mb-4">
                            {project.long_description.clone()}
                        </p>
                        <p class="text-gray-400">{project.description.clone()}</p>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold text-cyan-400 mb-3">"Technologies & Tools"</h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="text-sm border border-green-400/50 text-green-400 bg-green-400/5 rounded-full px-3 py-1">
                                            {t.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold text-cyan-400 mb-3">
                            "Key Features & Achievements"
                        </h3>
                        <div class="space-y-2">
                            {project
                                .features
                                .iter()
                                .map(|f| {
                                    view! {
                                        <div class="flex items-start gap-3">
                                            <span class="text-green-400">"›"</span>
                                            <span class="text-gray-300">{f.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="grid md:grid-cols-3 gap-4 p-6 bg-slate-800/50 rounded-lg border border-cyan-400/20 text-center">
                        {highlight
                            .map(|h| {
                                view! {
                                    <div>
                                        <div class="text-2xl font-bold text-cyan-400">{h.value}</div>
                                        <div class="text-sm text-gray-400">{h.label}</div>
                                    </div>
                                }
                            })}
                        <div>
                            <div class="text-2xl font-bold text-green-400">
                                {project.technologies.len()}
                            </div>
                            <div class="text-sm text-gray-400">"Technologies Used"</div>
                        </div>
                        <div>
                            <div class="text-2xl font-bold text-purple-400">
                                {project_year(&project.timeline)}
                            </div>
                            <div class="text-sm text-gray-400">"Project Year"</div>
                        </div>
                    </div>
                    <div class="flex flex-col sm:flex-row gap-3 pt-4 border-t border-slate-700">
                        {action
                            .map(|a| {
                                view! {
                                    <a
                                        href=a.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center justify-center gap-2 bg-gradient-to-r from-cyan-400 to-green-400 text-black font-semibold rounded-md px-4 py-2 hover:from-cyan-300 hover:to-green-300"
                                    >
                                        <i class=a.icon></i>
                                        {a.label}
                                    </a>
                                }
                            })}
                        <button
                            class="border border-gray-400 text-gray-400 hover:bg-gray-400 hover:text-black rounded-md px-4 py-2"
                            on:click=close
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
