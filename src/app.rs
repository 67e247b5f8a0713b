mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod project_modal;
mod projects;
mod skills;
mod toaster;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SiteConfig;
use crate::content::portfolio;
use crate::modal::ProjectModal;
use crate::page::{LoadPhase, Section, SECTION_ORDER};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use project_modal::ProjectDetail;
use projects::Projects;
use skills::Skills;
use toaster::{provide_toaster, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950 text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let name = portfolio().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Single page: a short loading screen, then every section in order with the
/// project detail layered on top.
#[component]
fn PortfolioPage() -> impl IntoView {
    let config = SiteConfig::from_build_env(&portfolio().profile.email);
    let delay = config.timings.loading.as_millis() as f64;
    provide_toaster(config.timings.toast_dismiss);
    provide_context(config);

    let phase = RwSignal::new(LoadPhase::Loading);
    let modal = RwSignal::new(ProjectModal::default());

    // effects never run on the server, so the shell is all it renders
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| phase.set(LoadPhase::Ready), delay);
    Effect::new(move |_| start(()));

    view! {
        <Title text=portfolio().profile.title.clone() />
        {move || match phase.get() {
            LoadPhase::Loading => Either::Left(view! { <Loading /> }),
            LoadPhase::Ready => {
                Either::Right(
                    view! {
                        <div class="min-h-screen">
                            {SECTION_ORDER
                                .into_iter()
                                .map(|section| section_view(section, modal))
                                .collect_view()}
                            <ProjectDetail modal />
                        </div>
                    },
                )
            }
        }}
        <Toaster />
    }
}

fn section_view(section: Section, modal: RwSignal<ProjectModal>) -> AnyView {
    match section {
        Section::Header => view! { <Header /> }.into_any(),
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::About => view! { <About /> }.into_any(),
        Section::Skills => view! { <Skills /> }.into_any(),
        Section::Experience => view! { <Experience /> }.into_any(),
        Section::Projects => view! { <Projects modal /> }.into_any(),
        Section::Contact => view! { <Contact /> }.into_any(),
        Section::Footer => view! { <Footer /> }.into_any(),
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-slate-950">
            <div class="text-center">
                <div class="w-16 h-16 mx-auto mb-4 rounded-full border-4 border-cyan-400/30 border-t-cyan-400 animate-spin"></div>
                <p class="text-cyan-400 font-mono">"Loading Portfolio..."</p>
            </div>
        </div>
    }
}

/// Heading used by every content section: plain lead words, gradient accent.
#[component]
fn SectionTitle(lead: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-6">
                <span class="text-white">{lead} " "</span>
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-green-400">
                    {accent}
                </span>
            </h2>
            <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-green-400 mx-auto"></div>
        </div>
    }
}
