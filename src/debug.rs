//! Console diagnostics.

use wasm_bindgen::prelude::wasm_bindgen;

use crate::util::{dom, theme};

/// Dump current site state to the console.
///
/// Exported so it can be invoked from the devtools console; a developer
/// aid, not part of the runtime contract.
#[wasm_bindgen]
pub fn debug_site() {
    let menu_open = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".nav-links").ok().flatten())
        .is_some_and(|el| el.class_list().contains("active"));

    log::info!("=== site debug info ===");
    log::info!("theme: {}", theme::current().as_str());
    log::info!(
        "stored theme: {}",
        theme::stored().unwrap_or_else(|| "<none>".to_owned())
    );
    log::info!("mobile menu open: {menu_open}");
    log::info!("viewport width: {}", dom::viewport_width());
    log::info!("scroll offset: {}", dom::scroll_offset());
}
