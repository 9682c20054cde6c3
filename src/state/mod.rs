//! Pure page-behavior state: theme, mobile menu, and scroll-derived state.

pub mod menu;
pub mod scroll;
pub mod theme;
