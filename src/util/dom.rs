//! Small window/document helpers.
//!
//! Everything degrades to a neutral value when the browser facility is
//! missing; nothing here panics.

use wasm_bindgen::JsCast;

/// Current vertical scroll offset of the page.
pub fn scroll_offset() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Current viewport width in logical pixels.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Lock or unlock page scrolling via an inline `overflow` style on
/// `<body>`, used while the mobile menu is open.
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("document body not found, scroll lock not applied");
        return;
    };

    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        log::warn!("failed to update body overflow style");
    }
}

/// Whether an event target is the given node or one of its descendants.
pub fn contains(node: &web_sys::Node, target: Option<&web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<web_sys::Node>())
        .is_some_and(|t| node.contains(Some(t)))
}
