//! Toaster Component
//!
//! Transient notices in the corner of the screen. Each toast closes on
//! click or after the configured duration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notice::{Notice, NoticeLevel};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Toast queue handle, provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    /// Show a notice and schedule its dismissal
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::debug!("[TOAST] #{} {}", id, notice.title);
        self.items.update(|items| items.push(Toast { id, notice }));

        let toasts = *self;
        spawn_local(async move {
            TimeoutFuture::new(toasts.duration_ms).await;
            toasts.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // may already be gone after a click
        self.items.try_update(|items| remove_toast(items, id));
    }
}

fn remove_toast(items: &mut Vec<Toast>, id: u64) -> bool {
    let before = items.len();
    items.retain(|toast| toast.id != id);
    items.len() != before
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-viewport" role="status">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <div class="toast-title">{toast.notice.title}</div>
                            <div class="toast-description">{toast.notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
