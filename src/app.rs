//! Todo Web Frontend App
//!
//! Root component: provides the store, navigation, toasts and context,
//! keeps the theme applied and routes between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NavBar, Spinner, ToastViewport, Toasts};
use crate::config::AppConfig;
use crate::context::{AppContext, AppHooks};
use crate::pages::{LoginPage, NotFoundPage, SignUpPage, TodoDetailPage, TodoListPage};
use crate::route::{guard, Access, Navigator, Route};
use crate::storage::LocalStorage;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::load(&LocalStorage));
    let nav = Navigator::from_location();
    let toasts = Toasts::new(config.toast_ms);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(nav);
    provide_context(toasts);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        config,
        AppHooks { store, toasts, nav },
    ));

    // System mode follows the OS setting as it changes
    let system_dark = RwSignal::new(theme::system_prefers_dark());
    theme::watch_system(move |dark| system_dark.set(dark));
    Effect::new(move |_| theme::apply(store.theme().get(), system_dark.get()));

    // Route guard
    Effect::new(move |_| {
        let route = nav.route();
        let signed_in = store.session().with(Option::is_some);
        if let Access::Redirect(to) = guard(&route, signed_in) {
            log::debug!("[ROUTE] {:?} not allowed, redirecting to {:?}", route, to);
            nav.replace(to);
        }
    });

    let page = move || {
        let route = nav.route();
        let signed_in = store.session().with(Option::is_some);
        match guard(&route, signed_in) {
            Access::Redirect(_) => view! { <Spinner /> }.into_any(),
            Access::Render => match route {
                Route::Home => view! { <TodoListPage /> }.into_any(),
                Route::TodoDetail(id) => view! { <TodoDetailPage id=id /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::SignUp => view! { <SignUpPage /> }.into_any(),
                Route::NotFound => view! { <NotFoundPage /> }.into_any(),
            },
        }
    };

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">{page}</main>
            <ToastViewport />
        </div>
    }
}
