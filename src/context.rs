//! Application Context
//!
//! Shared handles provided via Leptos Context API, and the hooks that
//! connect the API client to the store, toasts and navigation.

use leptos::prelude::*;

use crate::api::{ApiClient, ClientHooks, FetchTransport};
use crate::components::Toasts;
use crate::config::AppConfig;
use crate::notice::Notice;
use crate::route::{Navigator, Route};
use crate::storage::{KeyValueStorage, LocalStorage};
use crate::store::{store_logout, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from the server - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
    hooks: AppHooks,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: AppConfig,
        hooks: AppHooks,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
            hooks,
        }
    }

    /// Trigger a reload of the todo list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client bound to the browser's fetch and this app's hooks
    pub fn api(&self) -> ApiClient<FetchTransport, AppHooks> {
        self.config
            .with_value(|config| ApiClient::new(config, FetchTransport, self.hooks))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Toasts for every outcome; a 401 signs out and goes to the login page
#[derive(Clone, Copy)]
pub struct AppHooks {
    pub store: AppStore,
    pub toasts: Toasts,
    pub nav: Navigator,
}

impl ClientHooks for AppHooks {
    fn notify(&self, notice: Notice) {
        self.toasts.push(notice);
    }

    fn session_expired(&self) {
        log::info!("[SESSION] expired, signing out");
        end_session(&self.store, &LocalStorage, &self.nav);
    }
}

/// Forget the session and show the login page
pub fn end_session(store: &AppStore, storage: &impl KeyValueStorage, nav: &Navigator) {
    store_logout(store, storage);
    nav.go(Route::Login);
}
