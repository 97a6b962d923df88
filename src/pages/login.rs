//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AppLink;
use crate::context::use_app_context;
use crate::route::{use_navigator, Route};
use crate::storage::LocalStorage;
use crate::store::{store_set_session, use_app_store};
use crate::validation::{error_for, validate_login, FieldError};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let nav = use_navigator();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(Vec::new());
        set_submitting.set(true);

        spawn_local(async move {
            let result = ctx.api().login(&credentials).await;
            set_submitting.set(false);
            if let Ok(user) = result {
                log::info!("[SESSION] signed in as {}", user.username);
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
            <h1>"Login"</h1>
            <form class="auth-form" on:submit=on_submit>
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
                    <div class="password-row">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="secondary"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>
                {field_error("password")}
                <button type="submit" class="primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">
                "No account yet? "
                <AppLink route=Route::SignUp>"Sign up"</AppLink>
            </p>
        </section>
    }
}
