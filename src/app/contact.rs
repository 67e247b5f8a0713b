use leptos::{ev, prelude::*, task::spawn_local};

use crate::config::{ContactMode, SiteConfig};
use crate::contact::{
    strategy_for, Begin, BrowserLauncher, ContactController, Field, MailClientStrategy,
    ResetPolicy, SubmitStrategy, LAUNCH_FAILED_MESSAGE,
};
use crate::content::portfolio;
use crate::notify::Notification;

use super::toaster::use_toasts;
use super::SectionTitle;

const INPUT_CLASS: &str = "w-full rounded-md bg-slate-700/50 border border-slate-600 text-white placeholder:text-gray-400 focus:border-cyan-400 focus:outline-none px-3 py-2 disabled:opacity-50";

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = use_toasts();
    let controller = RwSignal::new(ContactController::default());
    let profile = &portfolio().profile;
    let relay = matches!(config.contact, ContactMode::Relay { .. });

    let on_submit = {
        let config = config.clone();
        move |e: ev::SubmitEvent| {
            e.prevent_default();
            let Some(begin) = controller.try_update(|c| c.begin()) else {
                return;
            };
            let payload = match begin {
                Begin::Busy => return,
                Begin::Rejected(notification) => {
                    toasts.push(notification);
                    return;
                }
                Begin::Ready(payload) => payload,
            };
            let config = config.clone();
            spawn_local(async move {
                let strategy = strategy_for(&config, BrowserLauncher);
                let outcome = strategy.submit(&payload).await;
                // the section may have been torn down while the request ran
                let Some(notification) = controller.try_update(|c| c.complete(&outcome)) else {
                    return;
                };
                if let ResetPolicy::After(delay) = outcome.reset {
                    set_timeout(
                        move || {
                            controller.try_update(|c| c.reset());
                        },
                        delay,
                    );
                }
                toasts.push(notification);
            });
        }
    };

    let direct_email = {
        let address = profile.email.clone();
        let reset = config.timings.form_reset;
        move |_: ev::MouseEvent| {
            let strategy = MailClientStrategy::new(address.clone(), BrowserLauncher, reset);
            if let Err(e) = strategy.open_direct() {
                log::warn!("{e}");
                toasts.push(Notification::error("Error", LAUNCH_FAILED_MESSAGE));
            }
        }
    };
    let direct_email_alt = direct_email.clone();

    let submitting = move || controller.with(|c| c.is_submitting());

    view! {
        <section id="contact" class="py-20 bg-slate-900/50">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionTitle lead="Get In" accent="Touch" />
                    <p class="text-gray-300 max-w-2xl mx-auto text-lg text-center -mt-10 mb-16">
                        "Ready to collaborate or have a question? I'd love to hear from you. Let's create something amazing together!"
                    </p>
                    <div class="grid md:grid-cols-5 gap-8">
                        <div class="md:col-span-2 space-y-6">
                            <div class="bg-slate-800/50 border border-cyan-400/20 rounded-lg p-6">
                                <h3 class="text-2xl font-bold text-cyan-400 mb-6">
                                    "Contact Information"
                                </h3>
                                <div class="space-y-4">
                                    <InfoRow icon="extra-email" label="Email">
                                        <p class="text-white font-medium break-all">
                                            {profile.email.clone()}
                                        </p>
                                    </InfoRow>
                                    <InfoRow icon="extra-phone" label="Phone">
                                        <p class="text-white font-medium">{profile.phone.clone()}</p>
                                        {profile
                                            .alt_phone
                                            .clone()
                                            .map(|p| view! { <p class="text-white font-medium">{p}</p> })}
                                    </InfoRow>
                                    <InfoRow icon="extra-location" label="Location">
                                        <p class="text-white font-medium">{profile.location.clone()}</p>
                                    </InfoRow>
                                </div>
                            </div>
                            <div class="bg-slate-800/50 border border-cyan-400/20 rounded-lg p-6">
                                <h3 class="text-xl font-bold text-white mb-4">"Quick Contact"</h3>
                                <button
                                    type="button"
                                    class="w-full flex items-center justify-center gap-2 bg-gradient-to-r from-cyan-400 to-green-400 text-black font-semibold rounded-md py-2 mb-3 hover:from-cyan-300 hover:to-green-300"
                                    on:click=direct_email
                                >
                                    <i class="extra-email"></i>
                                    "Send Direct Email"
                                </button>
                                <div class="flex items-center gap-2 text-green-400 text-sm">
                                    <i class="extra-check"></i>
                                    <span>"Usually responds within 24 hours"</span>
                                </div>
                                <SocialLinks />
                            </div>
                        </div>
                        <div class="md:col-span-3">
                            <div class="bg-slate-800/50 border border-cyan-400/20 rounded-lg p-8">
                                <div class="mb-6">
                                    <h3 class="text-xl font-bold text-white mb-2">"Send Message"</h3>
                                    <p class="text-gray-400 text-sm">
                                        {if relay {
                                            "Fill out the form below and I'll get back to you as soon as possible."
                                        } else {
                                            "Fill out the form below and it will open your email client with the message pre-filled."
                                        }}
                                    </p>
                                </div>
                                <form class="space-y-6" novalidate=true on:submit=on_submit>
                                    <div class="grid md:grid-cols-2 gap-4">
                                        <TextField
                                            controller
                                            field=Field::Name
                                            label="Name *"
                                            placeholder="Your full name"
                                        />
                                        <TextField
                                            controller
                                            field=Field::Email
                                            label="Email *"
                                            placeholder="your.email@example.com"
                                            kind="email"
                                        />
                                    </div>
                                    <TextField
                                        controller
                                        field=Field::Subject
                                        label="Subject *"
                                        placeholder="What's this about?"
                                    />
                                    <div class="space-y-2">
                                        <label for=Field::Message.id() class="block text-white">
                                            "Message *"
                                        </label>
                                        <textarea
                                            id=Field::Message.id()
                                            name=Field::Message.id()
                                            rows="6"
                                            placeholder="Tell me about your project or question..."
                                            class=INPUT_CLASS
                                            prop:value=move || {
                                                controller.with(|c| c.form().message.clone())
                                            }
                                            prop:disabled=submitting
                                            on:input=move |e| {
                                                controller.update(|c| c.set(Field::Message, event_target_value(&e)))
                                            }
                                        ></textarea>
                                    </div>
                                    <button
                                        type="submit"
                                        class="w-full flex items-center justify-center gap-2 bg-gradient-to-r from-cyan-400 to-green-400 text-black font-semibold rounded-md py-3 text-lg hover:from-cyan-300 hover:to-green-300 disabled:opacity-50"
                                        prop:disabled=submitting
                                    >
                                        <i class="extra-send"></i>
                                        {move || {
                                            if submitting() {
                                                "Sending..."
                                            } else if relay {
                                                "Send Message"
                                            } else {
                                                "Open in Email Client"
                                            }
                                        }}
                                    </button>
                                    <div class="text-center">
                                        <p class="text-gray-400 text-sm mb-2">
                                            "Having trouble with the form?"
                                        </p>
                                        <button
                                            type="button"
                                            class="inline-flex items-center gap-2 border border-cyan-400/50 text-cyan-400 hover:bg-cyan-400/10 text-sm rounded-md px-3 py-1"
                                            on:click=direct_email_alt
                                        >
                                            <i class="extra-link"></i>
                                            "Email me directly"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TextField(
    controller: RwSignal<ContactController>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=field.id() class="block text-white">
                {label}
            </label>
            <input
                id=field.id()
                name=field.id()
                type=kind
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || controller.with(|c| c.form().get(field).to_string())
                prop:disabled=move || controller.with(|c| c.is_submitting())
                on:input=move |e| controller.update(|c| c.set(field, event_target_value(&e)))
            />
        </div>
    }
}

#[component]
fn InfoRow(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="p-3 bg-gradient-to-r from-cyan-400 to-green-400 rounded-lg text-black">
                <i class=icon></i>
            </div>
            <div>
                <p class="text-sm text-gray-400">{label}</p>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    let profile = &portfolio().profile;
    let links = [
        ("devicon-linkedin-plain", "LinkedIn", Some(profile.linkedin.clone())),
        ("devicon-github-plain", "GitHub", Some(profile.github.clone())),
        ("extra-youtube", "YouTube", Some(profile.youtube.clone())),
        ("extra-instagram", "Instagram", Some(profile.instagram.clone())),
        ("extra-instagram", "Personal Instagram", profile.personal_instagram.clone()),
    ];

    view! {
        <div class="flex gap-4 mt-6 text-xl">
            {links
                .into_iter()
                .filter_map(|(icon, label, href)| href.map(|href| (icon, label, href)))
                .map(|(icon, label, href)| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=label
                            class="text-gray-400 hover:text-cyan-400 transition-colors"
                        >
                            <i class=icon></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
