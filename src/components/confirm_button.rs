//! Confirm Button Component
//!
//! Button that asks before running its action. The action fires once per
//! confirmation and the button stays locked until the action reports back.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    Asking,
    /// Action running
    Busy,
}

impl ConfirmState {
    pub fn ask(self) -> Self {
        match self {
            ConfirmState::Idle => ConfirmState::Asking,
            other => other,
        }
    }

    pub fn cancel(self) -> Self {
        match self {
            ConfirmState::Asking => ConfirmState::Idle,
            other => other,
        }
    }

    /// Next state, and whether the action should run now
    pub fn confirm(self) -> (Self, bool) {
        match self {
            ConfirmState::Asking => (ConfirmState::Busy, true),
            other => (other, false),
        }
    }
}

/// Inline confirmation button
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while asking
/// * `on_confirm` - Runs the action; call the passed `done` callback when it settles
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(optional, into)] button_class: String,
    #[prop(into)] on_confirm: Callback<Callback<()>>,
) -> impl IntoView {
    let (state, set_state) = signal(ConfirmState::Idle);
    let done = Callback::new(move |_: ()| set_state.set(ConfirmState::Idle));

    view! {
        <Show
            when=move || state.get() == ConfirmState::Asking
            fallback=move || view! {
                <button
                    class=button_class.clone()
                    disabled=move || state.get() == ConfirmState::Busy
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_state.update(|s| *s = s.ask());
                    }
                >
                    {label.clone()}
                </button>
            }
        >
            <span class="confirm-inline">
                <span class="confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let (next, fire) = state.get_untracked().confirm();
                        set_state.set(next);
                        if fire {
                            on_confirm.run(done);
                        }
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_state.update(|s| *s = s.cancel());
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
