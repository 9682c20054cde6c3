//! Browser glue: DOM access, localStorage, and scroll plumbing.

pub mod dom;
pub mod scroll;
pub mod theme;
