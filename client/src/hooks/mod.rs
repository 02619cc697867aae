//! Consumer and utility hooks.
//!
//! DESIGN
//! ======
//! Every consumer hook resolves against the nearest `Scope` in Leptos
//! context and returns `Result<_, ContextError>`; a component rendered
//! outside its provider gets `MissingProvider` rather than a silent default.

pub mod debounce;
pub mod domain;
pub mod local_storage;
pub mod slice;
pub mod window;

pub use debounce::{use_debounce, use_default_debounce};
pub use domain::{
    use_agents, use_canvas, use_chat, use_marketplace_filters, use_nodes, use_templates, use_theme,
    use_variables,
};
pub use local_storage::{PersistedSignal, use_local_storage};
pub use slice::{SliceBinding, use_scope, use_slice};
pub use window::{use_breakpoint, use_outside_click};
