//! Data sources behind the pages.

pub mod marketplace;
