#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key the theme preference is persisted under.
pub const STORAGE_KEY: &str = "theme";

/// Class applied to `<body>` when the light theme is active. Dark is the
/// unmarked default.
pub const LIGHT_CLASS: &str = "light-theme";

/// Visual theme of the page.
///
/// Dark is the default and the fallback for any unrecognized stored value.
/// The persisted preference is written on every change but never consulted
/// on load: every page load starts dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The value written to localStorage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored or requested value. Anything other than `"light"`
    /// resolves to dark.
    pub fn from_value(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the theme toggle button: a sun while light, a moon
    /// while dark.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}",
            Theme::Dark => "\u{263e}",
        }
    }
}
