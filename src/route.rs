//! Routes and Route Guard
//!
//! Path <-> route mapping, the signed-in/out access decision, and a small
//! History API navigator provided via context.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Todo list
    Home,
    TodoDetail(String),
    Login,
    SignUp,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::SignUp,
            ["todos", id] => Route::TodoDetail(
                percent_encoding::percent_decode_str(id)
                    .decode_utf8_lossy()
                    .into_owned(),
            ),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::TodoDetail(id) => format!(
                "/todos/{}",
                percent_encoding::utf8_percent_encode(id, percent_encoding::NON_ALPHANUMERIC)
            ),
            Route::Login => "/login".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Only reachable with a session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home | Route::TodoDetail(_))
    }

    /// Only reachable without a session
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::SignUp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(Route),
}

/// Decide whether `route` may render for the current session state
pub fn guard(route: &Route, signed_in: bool) -> Access {
    if route.is_protected() && !signed_in {
        Access::Redirect(Route::Login)
    } else if route.is_guest_only() && signed_in {
        Access::Redirect(Route::Home)
    } else {
        Access::Render
    }
}

/// Current route plus History API navigation
#[derive(Clone, Copy)]
pub struct Navigator {
    current: RwSignal<Route>,
}

impl Navigator {
    pub fn new(route: Route) -> Self {
        Self {
            current: RwSignal::new(route),
        }
    }

    /// Start from the browser's location and follow back/forward
    pub fn from_location() -> Self {
        let path = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        let nav = Self::new(Route::parse(&path));

        // lives as long as the app
        let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
            if let Some(path) = web_sys::window().and_then(|window| window.location().pathname().ok()) {
                nav.current.set(Route::parse(&path));
            }
        });

        nav
    }

    pub fn route(&self) -> Route {
        self.current.get()
    }

    /// Push a history entry and switch routes
    pub fn go(&self, route: Route) {
        self.change(route, false);
    }

    /// Swap the current entry (redirects)
    pub fn replace(&self, route: Route) {
        self.change(route, true);
    }

    /// Returns whether the route actually changed
    fn change(&self, route: Route, replace: bool) -> bool {
        if self.current.get_untracked() == route {
            return false;
        }
        let path = route.path();
        update_history(&path, replace);
        log::debug!("[ROUTE] -> {}", path);
        self.current.set(route);
        true
    }
}

#[cfg(target_arch = "wasm32")]
fn update_history(path: &str, replace: bool) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        let result = if replace {
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        } else {
            history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        };
        if result.is_err() {
            log::warn!("[ROUTE] history update failed for {}", path);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn update_history(_path: &str, _replace: bool) {}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
