//! Collapse control for the canvas sidebar.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::{use_breakpoint, use_canvas};
use crate::providers::provider_error;

#[component]
pub fn SidebarToggle() -> impl IntoView {
    let canvas = match use_canvas() {
        Ok(canvas) => canvas,
        Err(err) => return provider_error(&err),
    };
    // Optional: the toggle still works where no viewport is tracked.
    let compact = use_breakpoint().ok();
    let is_compact = move || compact.is_some_and(|bp| bp.is_mobile());

    view! {
        <button
            class="btn sidebar-toggle"
            class:sidebar-toggle--compact=is_compact
            aria-expanded=move || (!canvas.is_collapsed()).to_string()
            on:click=move |_| canvas.toggle_collapsed()
        >
            {move || if canvas.is_collapsed() { "»" } else { "«" }}
        </button>
    }
    .into_any()
}
