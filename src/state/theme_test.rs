use super::*;

// =============================================================
// Defaults and parsing
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_value_parses_light() {
    assert_eq!(Theme::from_value("light"), Theme::Light);
}

#[test]
fn from_value_parses_dark() {
    assert_eq!(Theme::from_value("dark"), Theme::Dark);
}

#[test]
fn from_value_falls_back_to_dark_for_unknown_values() {
    assert_eq!(Theme::from_value(""), Theme::Dark);
    assert_eq!(Theme::from_value("LIGHT"), Theme::Dark);
    assert_eq!(Theme::from_value("solarized"), Theme::Dark);
}

#[test]
fn as_str_round_trips_through_from_value() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_value(theme.as_str()), theme);
    }
}

#[test]
fn storage_key_is_theme() {
    assert_eq!(STORAGE_KEY, "theme");
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggled_flips_the_theme() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// Toggle button glyph
// =============================================================

#[test]
fn glyph_shows_sun_while_light_and_moon_while_dark() {
    assert_eq!(Theme::Light.toggle_glyph(), "\u{2600}");
    assert_eq!(Theme::Dark.toggle_glyph(), "\u{263e}");
    assert_ne!(Theme::Light.toggle_glyph(), Theme::Dark.toggle_glyph());
}
