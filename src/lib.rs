//! # portfolio-site
//!
//! Leptos + WASM front-end for a static portfolio site.
//!
//! The page behavior is split into small independent pieces: a light/dark
//! theme with a persisted preference, a collapsible mobile navigation menu,
//! smooth in-page anchor scrolling, scroll-dependent navbar styling, and
//! active-link highlighting. Pure state transitions live in [`state`] and
//! are unit-tested natively; browser glue (DOM, localStorage, scrolling)
//! lives in [`util`].

pub mod app;
pub mod components;
pub mod debug;
pub mod pages;
pub mod state;
pub mod util;
