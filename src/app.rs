//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::state::{menu::MenuState, scroll::ScrollState, theme::Theme};
use crate::util;

/// Root application component.
///
/// Provides the shared behavior state and wires the page together. The
/// theme is forced to dark on every load; the persisted preference is
/// rewritten here, never read.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    let menu = RwSignal::new(MenuState::default());
    let scroll = RwSignal::new(ScrollState::default());

    provide_context(theme);
    provide_context(menu);
    provide_context(scroll);

    util::theme::set(Theme::Dark);
    log::info!("theme manager initialized");

    view! {
        <Title text="dev.folio"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
