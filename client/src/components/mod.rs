//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state only through the consumer hooks,
//! and render a visible provider error when mounted outside their provider.

pub mod agent_list;
pub mod chat_panel;
pub mod marketplace_filter_bar;
pub mod marketplace_grid;
pub mod node_palette;
pub mod sidebar_toggle;
pub mod skeleton;
pub mod template_list;
pub mod theme_toggle;
pub mod variables_panel;
