//! Concrete slices shared across the agent builder.
//!
//! DESIGN
//! ======
//! Each model is a plain `Clone` value with pure mutators that return the
//! next value, so every change goes through one functional
//! `Slice::update(|prev| prev.toggled())` call and composes with concurrent
//! updates.

pub mod agents;
pub mod canvas;
pub mod chat;
pub mod marketplace;
pub mod nodes;
pub mod templates;
pub mod theme;
pub mod variables;
