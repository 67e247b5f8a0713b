use leptos::prelude::*;

use crate::content::portfolio;

use super::SectionTitle;

#[component]
pub fn About() -> impl IntoView {
    let portfolio = portfolio();
    let about = &portfolio.about;

    view! {
        <section id="about" class="py-20 bg-slate-900/50">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionTitle lead="About" accent="Me" />
                    <div class="grid md:grid-cols-2 gap-12 items-start">
                        <div class="space-y-6">
                            <p class="text-lg text-gray-300 leading-relaxed">
                                {about.description.clone()}
                            </p>
                            <div class="flex items-center gap-2 text-gray-400">
                                <i class="extra-location text-cyan-400"></i>
                                {portfolio.profile.location.clone()}
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold text-cyan-400 mb-4">
                                    "Key Highlights"
                                </h3>
                                <ul class="space-y-3">
                                    {about
                                        .highlights
                                        .iter()
                                        .map(|h| {
                                            view! {
                                                <li class="flex items-start gap-3 text-gray-300">
                                                    <i class="extra-check text-green-400 mt-1 shrink-0"></i>
                                                    {h.clone()}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                        <div class="space-y-6">
                            <Card title="Current Focus">
                                <div class="space-y-3">
                                    {about
                                        .focus
                                        .iter()
                                        .map(|f| {
                                            view! {
                                                <div class="flex items-center justify-between">
                                                    <span class="text-gray-300">{f.label.clone()}</span>
                                                    <span class=format!(
                                                        "text-xs border rounded-full px-2 py-0.5 {}",
                                                        f.stage.badge_class(),
                                                    )>{f.stage.label()}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Card>
                            <Card title="Education">
                                <div class="space-y-4">
                                    {portfolio
                                        .education
                                        .iter()
                                        .map(|e| {
                                            let detail = e
                                                .grade
                                                .iter()
                                                .chain(e.subjects.iter())
                                                .cloned()
                                                .collect::<Vec<_>>()
                                                .join(" • ");
                                            view! {
                                                <div class="flex gap-3">
                                                    <i class="extra-graduation text-green-400 mt-1 shrink-0"></i>
                                                    <div>
                                                        <div class="text-white font-medium">
                                                            {e.degree.clone()}
                                                        </div>
                                                        <div class="text-sm text-gray-400">
                                                            {format!(
                                                                "{} • {} • {}",
                                                                e.institution,
                                                                e.location,
                                                                e.year,
                                                            )}
                                                        </div>
                                                        {(!detail.is_empty())
                                                            .then(|| {
                                                                view! {
                                                                    <div class="text-sm text-gray-500">{detail}</div>
                                                                }
                                                            })}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Card>
                            <div class="grid sm:grid-cols-2 gap-6">
                                <Card title="Achievements">
                                    <ul class="space-y-2 text-sm text-gray-300">
                                        {portfolio
                                            .achievements
                                            .iter()
                                            .map(|a| {
                                                view! {
                                                    <li class="flex gap-2">
                                                        <i class="extra-award text-yellow-400 mt-0.5 shrink-0"></i>
                                                        {a.clone()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Card>
                                <Card title="Languages">
                                    <ul class="space-y-2 text-sm">
                                        {portfolio
                                            .languages
                                            .iter()
                                            .map(|l| {
                                                view! {
                                                    <li class="flex justify-between">
                                                        <span class="text-gray-300">{l.name.clone()}</span>
                                                        <span class="text-gray-500">{l.level.clone()}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Card>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-slate-800/50 border border-cyan-400/20 rounded-lg p-6 backdrop-blur-sm">
            <h3 class="text-lg font-semibold text-white mb-4">{title}</h3>
            {children()}
        </div>
    }
}
