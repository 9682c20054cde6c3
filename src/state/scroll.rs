#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical scroll offset past which the navbar switches to its compact
/// "scrolled" styling. The comparison is strict: exactly at the threshold
/// the navbar is still in its full-height state.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Fixed-header correction subtracted from a section's offset when
/// scrolling to it, so the section title clears the navbar.
pub const HEADER_OFFSET: f64 = 80.0;

/// Distance below the top of the viewport at which a section is probed for
/// active-link highlighting.
pub const ACTIVE_PROBE_OFFSET: f64 = 100.0;

/// Scroll-derived UI state: the navbar's compact flag and the id of the
/// section whose nav link is currently marked active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
}

/// Whether the given scroll offset puts the navbar in its compact state.
pub fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// Inline navbar styling as a function of the compact flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub padding: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub fn for_state(scrolled: bool) -> Self {
        if scrolled {
            Self {
                padding: "15px 0",
                box_shadow: "0 5px 20px rgba(0, 0, 0, 0.1)",
            }
        } else {
            Self {
                padding: "20px 0",
                box_shadow: "none",
            }
        }
    }

    pub fn for_offset(offset: f64) -> Self {
        Self::for_state(navbar_scrolled(offset))
    }
}

/// Measured geometry of one `section[id]` element.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section containing the probe point `scroll_offset + 100`, if any.
///
/// The interval is half-open: a probe exactly at `top + height` already
/// belongs to the next section. When no section contains the probe (gaps
/// between sections, or above the first one) the result is `None` and the
/// caller leaves the previously active link untouched.
pub fn active_section(scroll_offset: f64, sections: &[Section]) -> Option<String> {
    let probe = scroll_offset + ACTIVE_PROBE_OFFSET;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.clone())
}

/// Whether a location pathname is the site's home page. Smooth in-page
/// scrolling is a home-page-only feature; everywhere else anchor clicks get
/// default browser behavior.
pub fn is_home_page(pathname: &str) -> bool {
    pathname == "/" || pathname == "/index.html" || pathname.ends_with(".github.io/")
}

/// The fragment id an anchor href points at, if it is a real in-page
/// target. Bare `#` and `#!` hrefs are placeholders and non-fragment hrefs
/// are ordinary navigation; both yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "#" | "#!" => None,
        _ => href.strip_prefix('#').filter(|id| !id.is_empty()),
    }
}
