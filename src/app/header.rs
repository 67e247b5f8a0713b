use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::portfolio;
use crate::page::{HeaderState, Section, NAV_SECTIONS};

#[component]
pub fn Header() -> impl IntoView {
    let state = RwSignal::new(HeaderState::default());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        state.update(|s| s.on_scroll(y));
    });

    let nav_links = move |mobile: bool| {
        NAV_SECTIONS
            .into_iter()
            .map(|section| {
                let class = if mobile {
                    "block w-full text-left py-2 text-gray-300 hover:text-cyan-400 transition-colors"
                } else {
                    "text-gray-300 hover:text-cyan-400 transition-colors duration-200 font-medium"
                };
                view! {
                    <a href=section.href() class=class on:click=move |_| state.update(|s| s.navigate())>
                        {section.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 w-full z-50 transition-all duration-300 {}",
                state.with(|s| s.class()),
            )
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="#" class="text-2xl font-bold">
                        <span class="text-cyan-400">{portfolio().profile.first_name()}</span>
                        <span class="text-green-400">".dev"</span>
                    </a>
                    <nav class="hidden md:flex items-center space-x-8">
                        {nav_links(false)}
                        <a
                            href=Section::Contact.href()
                            class="bg-gradient-to-r from-cyan-400 to-green-400 text-black font-semibold px-4 py-2 rounded-md hover:from-cyan-300 hover:to-green-300"
                        >
                            "Hire Me"
                        </a>
                    </nav>
                    <button
                        class="md:hidden text-white text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| state.update(|s| s.toggle_menu())
                    >
                        <i class=move || {
                            if state.with(|s| s.menu_open) { "extra-close" } else { "extra-menu" }
                        }></i>
                    </button>
                </div>
                {move || {
                    state
                        .with(|s| s.menu_open)
                        .then(|| {
                            view! {
                                <nav class="md:hidden mt-4 pb-4 border-t border-cyan-400/20 pt-4 space-y-2">
                                    {nav_links(true)}
                                </nav>
                            }
                        })
                }}
            </div>
        </header>
    }
}
