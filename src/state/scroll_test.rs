use super::*;

fn three_sections() -> Vec<Section> {
    vec![
        Section {
            id: "home".to_owned(),
            top: 0.0,
            height: 600.0,
        },
        Section {
            id: "about".to_owned(),
            top: 600.0,
            height: 800.0,
        },
        Section {
            id: "projects".to_owned(),
            top: 1400.0,
            height: 600.0,
        },
    ]
}

// =============================================================
// Navbar threshold
// =============================================================

#[test]
fn navbar_is_full_height_at_the_top() {
    assert!(!navbar_scrolled(0.0));
}

#[test]
fn navbar_threshold_is_strict() {
    assert!(!navbar_scrolled(50.0));
    assert!(navbar_scrolled(51.0));
}

#[test]
fn navbar_style_full_height() {
    let style = NavbarStyle::for_offset(0.0);
    assert_eq!(style.padding, "20px 0");
    assert_eq!(style.box_shadow, "none");
}

#[test]
fn navbar_style_compact_past_threshold() {
    let style = NavbarStyle::for_offset(51.0);
    assert_eq!(style.padding, "15px 0");
    assert_eq!(style.box_shadow, "0 5px 20px rgba(0, 0, 0, 0.1)");
}

#[test]
fn navbar_style_is_a_pure_function_of_offset() {
    assert_eq!(NavbarStyle::for_offset(0.0), NavbarStyle::for_offset(50.0));
    assert_eq!(NavbarStyle::for_offset(51.0), NavbarStyle::for_offset(5000.0));
}

// =============================================================
// Active section scan
// =============================================================

#[test]
fn probe_lands_in_each_section_in_turn() {
    let sections = three_sections();
    assert_eq!(active_section(0.0, &sections).as_deref(), Some("home"));
    assert_eq!(active_section(700.0, &sections).as_deref(), Some("about"));
    assert_eq!(active_section(1500.0, &sections).as_deref(), Some("projects"));
}

#[test]
fn probe_sits_100px_below_the_scroll_offset() {
    let sections = three_sections();
    // scroll 500 -> probe 600, which is the start of the second section
    assert_eq!(active_section(500.0, &sections).as_deref(), Some("about"));
    assert_eq!(active_section(499.0, &sections).as_deref(), Some("home"));
}

#[test]
fn section_interval_is_half_open() {
    let sections = vec![Section {
        id: "only".to_owned(),
        top: 0.0,
        height: 100.0,
    }];
    // probe == top + height falls outside
    assert_eq!(active_section(0.0, &sections), None);

    let taller = vec![Section {
        id: "only".to_owned(),
        top: 0.0,
        height: 101.0,
    }];
    assert_eq!(active_section(0.0, &taller).as_deref(), Some("only"));
}

#[test]
fn no_match_when_probe_is_above_the_first_section() {
    let sections = vec![Section {
        id: "late".to_owned(),
        top: 400.0,
        height: 400.0,
    }];
    assert_eq!(active_section(0.0, &sections), None);
}

#[test]
fn no_match_in_gaps_between_sections() {
    let sections = vec![
        Section {
            id: "a".to_owned(),
            top: 0.0,
            height: 100.0,
        },
        Section {
            id: "b".to_owned(),
            top: 500.0,
            height: 100.0,
        },
    ];
    assert_eq!(active_section(100.0, &sections), None);
}

#[test]
fn no_sections_means_no_match() {
    assert_eq!(active_section(0.0, &[]), None);
}

#[test]
fn scroll_state_defaults_to_nothing_active() {
    let state = ScrollState::default();
    assert!(!state.navbar_scrolled);
    assert_eq!(state.active_section, None);
}

// =============================================================
// Home-page detection
// =============================================================

#[test]
fn root_and_index_html_are_the_home_page() {
    assert!(is_home_page("/"));
    assert!(is_home_page("/index.html"));
}

#[test]
fn github_pages_root_suffix_is_the_home_page() {
    assert!(is_home_page("/user.github.io/"));
}

#[test]
fn other_paths_are_not_the_home_page() {
    assert!(!is_home_page("/about.html"));
    assert!(!is_home_page("/projects"));
    assert!(!is_home_page(""));
}

// =============================================================
// Anchor target parsing
// =============================================================

#[test]
fn fragment_hrefs_yield_their_id() {
    assert_eq!(anchor_target("#home"), Some("home"));
    assert_eq!(anchor_target("#contact"), Some("contact"));
}

#[test]
fn placeholder_fragments_are_ignored() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("#!"), None);
}

#[test]
fn non_fragment_hrefs_are_ignored() {
    assert_eq!(anchor_target("/about.html"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
}
