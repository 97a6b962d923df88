//! Navigation Bar Component
//!
//! Brand link, theme switcher and logout.

use leptos::prelude::*;

use crate::components::AppLink;
use crate::route::{use_navigator, Route};
use crate::storage::LocalStorage;
use crate::store::{store_logout, store_set_theme, use_app_store, AppStateStoreFields};
use crate::theme::ThemeMode;

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let nav = use_navigator();
    let signed_in = move || store.session().with(Option::is_some);

    let on_logout = move |_| {
        log::info!("[SESSION] logout");
        store_logout(&store, &LocalStorage);
        nav.go(Route::Login);
    };

    view! {
        <nav class="navbar">
            <AppLink route=Route::Home class="navbar-brand">"Todo"</AppLink>
            <div class="navbar-actions">
                <select
                    class="theme-select"
                    aria-label="Theme"
                    on:change=move |ev| {
                        let mode = ThemeMode::from_str(&event_target_value(&ev));
                        store_set_theme(&store, &LocalStorage, mode);
                    }
                >
                    {ThemeMode::ALL.iter().map(|mode| {
                        let mode = *mode;
                        view! {
                            <option
                                value=mode.as_str()
                                selected=move || store.theme().get() == mode
                            >
                                {mode.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <Show when=signed_in>
                    <button class="logout-btn" on:click=on_logout>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}
