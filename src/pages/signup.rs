//! Sign-up Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AppLink;
use crate::context::use_app_context;
use crate::route::{use_navigator, Route};
use crate::storage::LocalStorage;
use crate::store::{store_set_session, use_app_store};
use crate::validation::{error_for, validate_signup, FieldError};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let nav = use_navigator();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let registration = match validate_signup(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(registration) => registration,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(Vec::new());
        set_submitting.set(true);

        spawn_local(async move {
            let result = ctx.api().register(&registration).await;
            set_submitting.set(false);
            if let Ok(user) = result {
                log::info!("[SESSION] registered {}", user.username);
                store_set_session(&store, &LocalStorage, user);
                nav.go(Route::Home);
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|errs| error_for(errs, field)).map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <section class="auth-page">
            <h1>"Create an account"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                {field_error("username")}
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                {field_error("email")}
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {field_error("password")}
                <label>
                    "Confirm Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />
                </label>
                {field_error("confirm_password")}
                <button type="submit" class="primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <AppLink route=Route::Login>"Login"</AppLink>
            </p>
        </section>
    }
}
