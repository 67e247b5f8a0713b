use leptos::prelude::*;

use crate::content::{portfolio, ExperienceEntry};

use super::SectionTitle;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-slate-900/50">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <SectionTitle lead="Professional" accent="Experience" />
                    <div class="relative border-l-2 border-cyan-400/30 ml-4 space-y-12">
                        {portfolio().experience.iter().map(entry).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn entry(job: &ExperienceEntry) -> impl IntoView {
    view! {
        <div class="relative pl-8">
            <span class="absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-gradient-to-r from-cyan-400 to-green-400"></span>
            <div class="bg-slate-800/50 border border-cyan-400/20 rounded-lg p-6">
                <div class="flex flex-wrap items-start justify-between gap-2 mb-3">
                    <div>
                        <h3 class="text-xl font-bold text-white">{job.title.clone()}</h3>
                        <div class="text-cyan-400">{job.organization.clone()}</div>
                    </div>
                    <div class="text-right text-sm">
                        <div class="flex items-center gap-1 text-gray-400">
                            <i class="extra-calendar"></i>
                            {job.duration.clone()}
                        </div>
                        <span class="inline-block mt-1 text-xs border border-green-400/50 text-green-400 rounded-full px-2 py-0.5">
                            {job.employment.clone()}
                        </span>
                    </div>
                </div>
                <p class="text-gray-300 mb-4">{job.description.clone()}</p>
                <ul class="space-y-2 mb-4">
                    {job
                        .achievements
                        .iter()
                        .map(|a| {
                            view! {
                                <li class="flex gap-2 text-sm text-gray-300">
                                    <span class="text-green-400">"●"</span>
                                    {a.clone()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2">
                    {job
                        .technologies
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="text-xs border border-purple-400/50 text-purple-400 rounded-full px-2 py-0.5">
                                    {t.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
