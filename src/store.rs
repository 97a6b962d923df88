//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Session and
//! theme writes are persisted through a [`KeyValueStorage`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, UserInfo};
use crate::storage::{load_json, save_json, KeyValueStorage, THEME_KEY, USER_INFO_KEY};
use crate::theme::ThemeMode;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, `None` when logged out
    pub session: Option<UserInfo>,
    pub theme: ThemeMode,
    /// Last fetched todos (server copy, never edited locally)
    pub todos: Vec<Todo>,
}

impl AppState {
    /// Restore session and theme from storage
    pub fn load(storage: &impl KeyValueStorage) -> Self {
        Self {
            session: load_json(storage, USER_INFO_KEY),
            theme: storage
                .get(THEME_KEY)
                .map(|raw| ThemeMode::from_str(&raw))
                .unwrap_or_default(),
            todos: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Token of the current session, if any (untracked)
pub fn session_token(store: &AppStore) -> Option<String> {
    store.session().with_untracked(|session| session.as_ref().map(|user| user.token.clone()))
}

pub fn store_set_session(store: &AppStore, storage: &impl KeyValueStorage, user: UserInfo) {
    save_json(storage, USER_INFO_KEY, &user);
    store.session().set(Some(user));
}

/// Forget the session and the todos fetched with it
pub fn store_logout(store: &AppStore, storage: &impl KeyValueStorage) {
    storage.remove(USER_INFO_KEY);
    store.session().set(None);
    store.todos().write().clear();
}

pub fn store_set_theme(store: &AppStore, storage: &impl KeyValueStorage, mode: ThemeMode) {
    storage.set(THEME_KEY, mode.as_str());
    store.theme().set(mode);
}

/// Replace the cached list wholesale after a fetch
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

/// Put a todo returned by the server into the cache
pub fn store_put_todo(store: &AppStore, todo: Todo) {
    put_todo(&mut store.todos().write(), todo);
}

/// Drop a todo the server confirmed deleted
pub fn store_remove_todo(store: &AppStore, id: &str) {
    store.todos().write().retain(|todo| todo.id != id);
}

fn put_todo(todos: &mut Vec<Todo>, todo: Todo) {
    match todos.iter_mut().find(|existing| existing.id == todo.id) {
        Some(existing) => *existing = todo,
        None => todos.push(todo),
    }
}
