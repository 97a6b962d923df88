//! Theme Preference
//!
//! System/light/dark preference, applied as a class on `<html>`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// Unknown values fall back to `System`
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }

    /// Whether the page should render dark
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::System => system_prefers_dark,
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
        }
    }
}

fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

pub fn system_prefers_dark() -> bool {
    dark_query().map_or(false, |query| query.matches())
}

/// Call `on_change` whenever the OS switches between light and dark
pub fn watch_system(on_change: impl Fn(bool) + 'static) {
    let Some(query) = dark_query() else {
        return;
    };
    let watched = query.clone();
    let listener = Closure::<dyn FnMut()>::new(move || on_change(watched.matches()));
    query.set_onchange(Some(listener.as_ref().unchecked_ref()));
    // lives as long as the app
    listener.forget();
}

/// Classes to (add, remove) on the document element
fn theme_classes(mode: ThemeMode, system_dark: bool) -> (&'static str, &'static str) {
    if mode.is_dark(system_dark) {
        ("dark", "light")
    } else {
        ("light", "dark")
    }
}

/// Set the `dark`/`light` class on the document element
pub fn apply(mode: ThemeMode, system_dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let (add, remove) = theme_classes(mode, system_dark);
    let classes = root.class_list();
    let _ = classes.remove_1(remove);
    let _ = classes.add_1(add);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!(ThemeMode::from_str("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_str("sepia"), ThemeMode::System);
        assert!(ThemeMode::ALL.iter().all(|mode| ThemeMode::from_str(mode.as_str()) == *mode));
    }

    #[test]
    fn test_classes_follow_os_switch() {
        assert_eq!(theme_classes(ThemeMode::System, false), ("light", "dark"));
        assert_eq!(theme_classes(ThemeMode::System, true), ("dark", "light"));
        assert_eq!(theme_classes(ThemeMode::Light, true), ("light", "dark"));
    }

    #[test]
    fn test_system_follows_preference() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
    }
}
