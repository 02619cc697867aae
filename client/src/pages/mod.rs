//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps its layout around a container and delegates rendering to
//! `components`. Pages hold no state of their own.

pub mod canvas;
pub mod chat;
pub mod marketplace;
pub mod settings;
pub mod skills;
