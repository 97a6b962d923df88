//! Banner Component
//!
//! Greeting shown above the todo list.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Banner() -> impl IntoView {
    let store = use_app_store();
    let username = move || {
        store
            .session()
            .with(|session| session.as_ref().map(|user| user.username.clone()))
            .unwrap_or_default()
    };

    view! {
        <section class="banner">
            <h1>{move || format!("Welcome back, {}!", username())}</h1>
            <p>"Plan your day, track what is due and tick off what is done."</p>
        </section>
    }
}
