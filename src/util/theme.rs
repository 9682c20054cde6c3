//! Theme application and persistence.
//!
//! Applies the `.light-theme` class to `<body>` and writes the choice to
//! `localStorage` under the `theme` key. The stored value is deliberately
//! never read back on load; every page load starts dark. Requires a browser
//! environment; a missing window or storage degrades with a logged warning.

use crate::state::theme::{LIGHT_CLASS, STORAGE_KEY, Theme};

/// Apply a theme and persist it, the single entry point used both at
/// startup (forcing dark) and by the toggle button.
pub fn set(theme: Theme) {
    apply(theme);
    persist(theme);
}

/// Add or remove the `.light-theme` class on `<body>`.
fn apply(theme: Theme) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("document body not found, theme not applied");
        return;
    };

    let class_list = body.class_list();
    let result = match theme {
        Theme::Light => class_list.add_1(LIGHT_CLASS),
        Theme::Dark => class_list.remove_1(LIGHT_CLASS),
    };
    if result.is_err() {
        log::warn!("failed to update body theme class");
    }
}

/// Write the preference to localStorage.
fn persist(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    } else {
        log::warn!("localStorage unavailable, theme preference not persisted");
    }
}

/// The theme currently displayed, read from the `<body>` class marker.
pub fn current() -> Theme {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map_or(Theme::Dark, |body| {
            if body.class_list().contains(LIGHT_CLASS) {
                Theme::Light
            } else {
                Theme::Dark
            }
        })
}

/// The persisted preference, if any. Used only by the console diagnostic;
/// initialization never consults it.
pub fn stored() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}
