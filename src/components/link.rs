//! In-app Link Component

use leptos::prelude::*;

use crate::route::{use_navigator, Route};

/// Anchor that switches routes through the navigator instead of reloading
#[component]
pub fn AppLink(
    route: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let nav = use_navigator();
    let href = route.path();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                nav.go(route.clone());
            }
        >
            {children()}
        </a>
    }
}
