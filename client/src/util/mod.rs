//! Browser glue shared by providers and hooks.

pub mod browser;
pub mod theme_dom;
