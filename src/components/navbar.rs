//! Fixed top navigation bar: brand, nav links, theme toggle, mobile menu.
//!
//! Owns the mobile menu lifecycle (toggle, outside click, link click,
//! resize past the breakpoint) and the scroll-dependent compact styling.
//! Anchor clicks go through [`handle_anchor_click`], which is also used by
//! the hero call-to-action links.

use leptos::ev;
use leptos::prelude::*;

use crate::state::menu::{MenuState, closes_on_outside_click, closes_on_resize};
use crate::state::scroll::{NavbarStyle, ScrollState};
use crate::state::theme::Theme;
use crate::util::{dom, scroll};

/// Nav entries: fragment href and label, one per `section[id]` on the home
/// page.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// Force the menu closed: marker removed, glyph reset, scroll unlocked.
/// Terminal reset, safe to call regardless of current state.
pub(crate) fn close_menu(menu: RwSignal<MenuState>) {
    menu.set(MenuState::closed());
    dom::set_scroll_lock(false);
}

/// Shared anchor-click behavior.
///
/// Inert unless smooth scrolling is enabled (home page only). Placeholder
/// fragments and missing targets fall through to default browser behavior;
/// a hit suppresses the jump, animates to the target minus the fixed-header
/// correction, rewrites the URL fragment, and closes the mobile menu.
pub(crate) fn handle_anchor_click(
    event: &ev::MouseEvent,
    href: &str,
    menu: RwSignal<MenuState>,
    smooth: bool,
) {
    if !smooth {
        return;
    }
    let Some(id) = crate::state::scroll::anchor_target(href) else {
        return;
    };
    let Some(top) = scroll::anchor_offset(id) else {
        return;
    };

    event.prevent_default();
    scroll::scroll_to(top);
    scroll::push_fragment(href);
    close_menu(menu);
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let scroll_state = expect_context::<RwSignal<ScrollState>>();

    let links_ref = NodeRef::<leptos::html::Ul>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let on_theme_toggle = move |_| {
        // Flip whatever the body marker currently shows.
        let next = crate::util::theme::current().toggled();
        crate::util::theme::set(next);
        theme.set(next);
    };

    let on_menu_toggle = move |event: ev::MouseEvent| {
        event.stop_propagation();
        let next = menu.get().toggled();
        menu.set(next);
        dom::set_scroll_lock(next.open);
    };

    // Close when a click lands outside both the link list and the toggle.
    let _ = window_event_listener(ev::click, move |event| {
        let target = event.target();
        let in_links = links_ref
            .get()
            .is_some_and(|el| dom::contains(&el, target.as_ref()));
        let in_toggle = toggle_ref
            .get()
            .is_some_and(|el| dom::contains(&el, target.as_ref()));
        if closes_on_outside_click(menu.get(), in_links, in_toggle) {
            close_menu(menu);
        }
    });

    // Close when the viewport widens past the mobile breakpoint.
    let _ = window_event_listener(ev::resize, move |_| {
        if closes_on_resize(menu.get(), dom::viewport_width()) {
            close_menu(menu);
        }
    });
    log::info!("mobile navigation initialized");

    // Smooth scrolling is a home-page-only feature.
    let smooth = scroll::on_home_page();
    if smooth {
        log::info!("smooth scroll initialized");
    }

    scroll::install_navbar_watcher(scroll_state);
    scroll::install_active_link_watcher(scroll_state);

    view! {
        <nav
            class="navbar"
            class:scrolled=move || scroll_state.get().navbar_scrolled
            style:padding=move || NavbarStyle::for_state(scroll_state.get().navbar_scrolled).padding
            style:box-shadow=move || {
                NavbarStyle::for_state(scroll_state.get().navbar_scrolled).box_shadow
            }
        >
            <div class="navbar__inner">
                <a
                    href="#home"
                    class="navbar__brand"
                    on:click=move |event| handle_anchor_click(&event, "#home", menu, smooth)
                >
                    "dev.folio"
                </a>

                <ul class="nav-links" class:active=move || menu.get().open node_ref=links_ref>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            let id = &href[1..];
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class:active=move || {
                                            scroll_state.get().active_section.as_deref() == Some(id)
                                        }
                                        on:click=move |event| {
                                            handle_anchor_click(&event, href, menu, smooth);
                                            close_menu(menu);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>

                <button
                    id="themeToggle"
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=on_theme_toggle
                >
                    {move || theme.get().toggle_glyph()}
                </button>

                <button
                    id="menuToggle"
                    class="menu-toggle"
                    title="Toggle menu"
                    node_ref=toggle_ref
                    on:click=on_menu_toggle
                >
                    {move || menu.get().toggle_glyph()}
                </button>
            </div>
        </nav>
    }
}
