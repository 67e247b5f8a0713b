use leptos::prelude::*;

use crate::content::portfolio;
use crate::page::{copyright_year, NAV_SECTIONS};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &portfolio().profile;
    let year = copyright_year(env!("BUILD_TIME"));

    view! {
        <footer class="bg-slate-950 border-t border-cyan-400/20 py-12">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-4 gap-8 mb-8">
                    <div class="md:col-span-2">
                        <div class="text-3xl font-bold mb-4">
                            <span class="text-white">{profile.first_name()}</span>
                            <span class="text-cyan-400">".dev"</span>
                        </div>
                        <p class="text-gray-400 mb-6 max-w-md">
                            {format!(
                                "{} passionate about creating engaging digital experiences through visual storytelling and interactive design.",
                                profile.title,
                            )}
                        </p>
                        <div class="flex space-x-4 text-xl">
                            <a
                                href=profile.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn Profile"
                                class="text-gray-400 hover:text-cyan-400 transition-colors"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href=profile.github.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub Profile"
                                class="text-gray-400 hover:text-cyan-400 transition-colors"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href=format!("mailto:{}", profile.email)
                                aria-label="Email"
                                class="text-gray-400 hover:text-cyan-400 transition-colors"
                            >
                                <i class="extra-email"></i>
                            </a>
                            <a
                                href=format!("tel:{}", profile.phone)
                                aria-label="Phone"
                                class="text-gray-400 hover:text-cyan-400 transition-colors"
                            >
                                <i class="extra-phone"></i>
                            </a>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {NAV_SECTIONS
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <li>
                                            <a
                                                href=section.href()
                                                class="text-gray-400 hover:text-cyan-400 transition-colors"
                                            >
                                                {section.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-4">"Contact"</h3>
                        <div class="space-y-2 text-gray-400">
                            <p>{profile.location.clone()}</p>
                            <p class="break-all">{profile.email.clone()}</p>
                            <p>{profile.phone.clone()}</p>
                        </div>
                    </div>
                </div>
                <div class="border-t border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400 text-sm mb-4 md:mb-0">
                        {format!("© {year} {}. All rights reserved.", profile.name)}
                    </p>
                    <a
                        href="#"
                        class="text-cyan-400 hover:text-white border border-cyan-400/50 rounded-md px-3 py-1 text-sm"
                    >
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
