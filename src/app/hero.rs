use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::portfolio;
use crate::page::Section;
use crate::typewriter::{Typewriter, TICK};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;

    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 bg-slate-950">
                <div class="absolute inset-0 bg-gradient-to-br from-cyan-400/10 via-transparent to-green-400/10"></div>
                <div
                    class="absolute inset-0"
                    style="background-image: linear-gradient(rgba(0, 212, 255, 0.1) 1px, transparent 1px), linear-gradient(90deg, rgba(0, 212, 255, 0.1) 1px, transparent 1px); background-size: 50px 50px;"
                ></div>
            </div>
            <div class="container mx-auto px-6 text-center relative z-10">
                <div class="max-w-4xl mx-auto">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        <span class="text-white">"Hi, I'm "</span>
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-green-400">
                            {profile.first_name()}
                        </span>
                    </h1>
                    <div class="text-2xl md:text-4xl font-light mb-8 h-16 flex items-center justify-center">
                        <span class="text-gray-300">"I'm a "</span>
                        <span class="text-cyan-400 ml-2 font-mono">
                            <RotatingTitle />
                            <span class="animate-pulse">"|"</span>
                        </span>
                    </div>
                    <p class="text-xl text-gray-300 mb-8 max-w-2xl mx-auto leading-relaxed">
                        {profile.subtitle.clone()}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                        <a
                            href=Section::About.href()
                            class="bg-gradient-to-r from-cyan-400 to-green-400 text-black font-semibold px-8 py-3 text-lg rounded-md hover:from-cyan-300 hover:to-green-300"
                        >
                            "Explore My Work"
                        </a>
                        <a
                            href=Section::Contact.href()
                            class="border border-cyan-400 text-cyan-400 font-semibold px-8 py-3 text-lg rounded-md hover:bg-cyan-400 hover:text-black"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                    <div class="flex justify-center space-x-6 mb-12 text-2xl">
                        <a
                            href=profile.linkedin.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-cyan-400 transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href=profile.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-cyan-400 transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=format!("mailto:{}", profile.email)
                            class="text-gray-400 hover:text-cyan-400 transition-colors"
                            aria-label="Email"
                        >
                            <i class="extra-email"></i>
                        </a>
                        <a
                            href=format!("tel:{}", profile.phone)
                            class="text-gray-400 hover:text-cyan-400 transition-colors"
                            aria-label="Phone"
                        >
                            <i class="extra-phone"></i>
                        </a>
                    </div>
                </div>
                <a
                    href=Section::About.href()
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 text-cyan-400 hover:text-white text-4xl animate-bounce"
                    aria-label="Scroll to about"
                >
                    <i class="extra-chevron-down"></i>
                </a>
            </div>
        </section>
    }
}

/// Types, holds, deletes and moves to the next title, forever. The interval is
/// torn down with the component.
#[component]
fn RotatingTitle() -> impl IntoView {
    let portfolio = portfolio();
    let typewriter = match Typewriter::new(portfolio.titles.clone()) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("{e}; showing static title");
            return portfolio.profile.title.clone().into_any();
        }
    };
    let machine = StoredValue::new(typewriter);
    let text = RwSignal::new(String::new());

    use_interval_fn(
        move || {
            let changed = machine
                .try_update_value(|t| t.advance(TICK).then(|| t.text().to_string()))
                .flatten();
            if let Some(changed) = changed {
                text.set(changed);
            }
        },
        TICK.as_millis() as u64,
    );

    view! { <span>{move || text.get()}</span> }.into_any()
}
