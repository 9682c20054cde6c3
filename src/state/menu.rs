#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Viewport width (logical px) above which the collapsible menu no longer
/// applies and an open menu is forced closed.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Open/closed state of the mobile navigation menu.
///
/// While open, the page body is scroll-locked and the toggle button shows a
/// close glyph; both are reverted on close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// The flipped state.
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// The closed state, regardless of what came before.
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Glyph shown on the menu toggle button: hamburger while closed, a
    /// cross while open.
    pub fn toggle_glyph(self) -> &'static str {
        if self.open { "\u{2715}" } else { "\u{2630}" }
    }
}

/// Whether a viewport resize must close the menu: only when the menu is open
/// and the viewport has widened past the mobile breakpoint.
pub fn closes_on_resize(state: MenuState, viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT && state.open
}

/// Whether a document-level click must close the menu: only when the menu is
/// open and the click landed outside both the link list and the toggle
/// button.
pub fn closes_on_outside_click(state: MenuState, in_links: bool, in_toggle: bool) -> bool {
    state.open && !in_links && !in_toggle
}
