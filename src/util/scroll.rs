//! Anchor scrolling and scroll-position watchers.
//!
//! The watchers follow one shape: run the check once at startup, then rerun
//! it on every window `scroll` event, writing the derived value into the
//! shared [`ScrollState`] signal.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::scroll::{HEADER_OFFSET, ScrollState, Section, active_section, is_home_page, navbar_scrolled};
use crate::util::dom;

/// Whether the current location is the site's home page. Computed once at
/// navbar construction; off the home page anchor clicks keep their default
/// browser behavior.
pub fn on_home_page() -> bool {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .is_some_and(|path| is_home_page(&path))
}

/// Scroll destination for an in-page target: its offset from the top of the
/// document minus the fixed-header correction. `None` when no element with
/// that id exists.
pub fn anchor_offset(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()) - HEADER_OFFSET)
}

/// Animate the viewport to a vertical offset. Fire-and-forget; the browser
/// owns the animation.
pub fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Rewrite the visible URL fragment without reloading.
pub fn push_fragment(href: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
}

/// Measure every `section[id]` element on the page.
pub fn measure_sections() -> Vec<Section> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    let mut sections = Vec::new();
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        sections.push(Section {
            id: element.id(),
            top: f64::from(element.offset_top()),
            height: f64::from(element.client_height()),
        });
    }
    sections
}

/// Watch the scroll offset and keep the navbar's compact flag current.
/// Checked once immediately, then on every scroll tick; no hysteresis.
pub fn install_navbar_watcher(scroll: RwSignal<ScrollState>) {
    let update = move || {
        scroll.update(|s| s.navbar_scrolled = navbar_scrolled(dom::scroll_offset()));
    };

    Effect::new(move || update());
    let _ = window_event_listener(ev::scroll, move |_| update());
    log::info!("navbar effects initialized");
}

/// Watch the scroll offset and keep the active-section id current.
///
/// The scan runs from scratch on every tick. When no section contains the
/// probe point the previous value is deliberately left in place.
pub fn install_active_link_watcher(scroll: RwSignal<ScrollState>) {
    let update = move || {
        if let Some(id) = active_section(dom::scroll_offset(), &measure_sections()) {
            scroll.update(|s| s.active_section = Some(id));
        }
    };

    Effect::new(move || update());
    let _ = window_event_listener(ev::scroll, move |_| update());
    log::info!("active link manager initialized");
}
