use std::time::Duration;

use leptos::prelude::*;

use crate::notify::{Notification, Notifications};

/// Handle to the page's notification stack.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    stack: RwSignal<Notifications>,
    dismiss_after: Duration,
}

impl Toasts {
    /// Shows `notification` and schedules its dismissal.
    pub fn push(&self, notification: Notification) {
        let stack = self.stack;
        let Some(id) = stack.try_update(|n| n.push(notification)) else {
            return;
        };
        // the page may be gone by the time this fires
        set_timeout(
            move || {
                stack.try_update(|n| n.dismiss(id));
            },
            self.dismiss_after,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|n| n.dismiss(id));
    }
}

pub fn provide_toaster(dismiss_after: Duration) -> Toasts {
    let toasts = Toasts {
        stack: RwSignal::new(Notifications::default()),
        dismiss_after,
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    let items = move || toasts.stack.with(|n| n.iter().cloned().collect::<Vec<_>>());

    view! {
        <ol class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full sm:max-w-[420px]">
            <For each=items key=|item: &(u64, Notification)| item.0 let:item>
                {
                    let (id, notification) = item;
                    let class = if notification.is_error() {
                        "border-red-500 bg-red-600 text-white"
                    } else {
                        "border-cyan-400/30 bg-slate-900 text-white"
                    };
                    view! {
                        <li class=format!(
                            "relative rounded-md border p-4 pr-8 shadow-lg {class}",
                        )>
                            <div class="text-sm font-semibold">{notification.title}</div>
                            <div class="text-sm opacity-90">{notification.description}</div>
                            <button
                                class="absolute right-2 top-2 opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <i class="extra-close"></i>
                            </button>
                        </li>
                    }
                }
            </For>
        </ol>
    }
}
