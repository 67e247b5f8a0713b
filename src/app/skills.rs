use leptos::prelude::*;

use crate::content::{portfolio, SkillTier};

use super::SectionTitle;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &portfolio().skills;

    view! {
        <section id="skills" class="py-20 bg-slate-950">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionTitle lead="Technical" accent="Proficiency" />
                    <div class="grid md:grid-cols-3 gap-8">
                        {skills
                            .iter()
                            .enumerate()
                            .map(|(i, group)| {
                                let tier = SkillTier::for_position(i);
                                view! {
                                    <div class="bg-slate-800/50 border border-cyan-400/20 rounded-lg p-6 hover:border-cyan-400/40 transition-all duration-300">
                                        <div class="flex items-center gap-3 mb-4">
                                            <div class="p-3 rounded-lg bg-gradient-to-br from-cyan-400/20 to-green-400/20 text-cyan-400 text-2xl">
                                                <i class=group.icon.class()></i>
                                            </div>
                                            <h3 class="text-lg font-semibold text-white">
                                                {group.name.clone()}
                                            </h3>
                                        </div>
                                        <div class="mb-4">
                                            <div class="flex justify-between text-sm mb-2">
                                                <span class="text-gray-400">"Proficiency"</span>
                                                <span class="text-cyan-400">{format!("{}%", group.level)}</span>
                                            </div>
                                            <div class="h-2 rounded-full bg-slate-700 overflow-hidden">
                                                <div
                                                    class="h-full bg-gradient-to-r from-cyan-400 to-green-400"
                                                    style=format!("width: {}%", group.level)
                                                ></div>
                                            </div>
                                        </div>
                                        <ul class="space-y-2 mb-4">
                                            {group
                                                .items
                                                .iter()
                                                .map(|item| {
                                                    view! {
                                                        <li class="flex items-center gap-2 text-sm text-gray-300">
                                                            <span class="w-1.5 h-1.5 rounded-full bg-green-400"></span>
                                                            {item.clone()}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                        <div class="flex items-center gap-2 text-xs text-gray-400">
                                            <span class=format!("w-2 h-2 rounded-full {}", tier.dot_class())></span>
                                            {tier.label()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
