//! Hooks over window-level events: outside clicks and the viewport.
//!
//! ARCHITECTURE
//! ============
//! `App` bridges the browser's `mousedown` and `resize` listeners into the
//! shared `EventHub` once. Hooks attach hub listeners for as long as their
//! owner lives, so mounting and unmounting components never touches the
//! real window listeners.

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

use leptos::prelude::*;
use slices::{Breakpoint, ContextError, ElementRef, EventHub, OutsideClick, Viewport, WindowEvent};

use super::slice::{SliceBinding, use_slice};
use crate::env::use_env;

/// Attach `handler` to every mousedown outside all of `refs` until cleanup.
pub fn watch_outside_click(
    hub: &EventHub,
    refs: Vec<ElementRef>,
    handler: impl Fn(&WindowEvent) + Send + Sync + 'static,
) {
    let detector = OutsideClick::attach(hub, refs, handler);
    on_cleanup(move || detector.detach());
}

/// Call `handler` when the user presses the mouse outside every target.
///
/// Each target element is tagged with its [`ElementRef`] id once mounted.
/// The window bridge reports which tagged elements enclose the pressed node,
/// so children overflowing a target count as inside and overlays above it
/// count as outside.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] when no `AppEnv` is in context.
pub fn use_outside_click(
    targets: Vec<NodeRef<leptos::html::Div>>,
    handler: impl Fn() + Send + Sync + 'static,
) -> Result<(), ContextError> {
    let env = use_env()?;
    let refs: Vec<ElementRef> = targets.iter().map(|_| ElementRef::new()).collect();

    #[cfg(feature = "hydrate")]
    {
        let ids: Vec<_> = refs.iter().map(ElementRef::id).collect();
        Effect::new(move |_| {
            for (target, id) in targets.iter().zip(&ids) {
                let Some(element) = target.get() else { continue };
                if let Err(err) = element.set_attribute(slices::ELEMENT_ID_ATTR, &id.to_string()) {
                    log::warn!("failed to tag outside-click target {id}: {err:?}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(targets);
    }

    watch_outside_click(&env.hub, refs, move |_| handler());
    Ok(())
}

#[derive(Clone, Copy)]
pub struct BreakpointHandle(SliceBinding<Viewport>);

impl BreakpointHandle {
    /// Current viewport, or `None` after the provider unmounted.
    pub fn viewport(&self) -> Option<Viewport> {
        self.0.get().ok()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.viewport().map(|v| v.breakpoint).unwrap_or_default()
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport().is_some_and(|v| v.is_mobile())
    }
}

/// Responsive breakpoint of the window, updated on resize.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] when no viewport provider is mounted.
pub fn use_breakpoint() -> Result<BreakpointHandle, ContextError> {
    use_slice().map(BreakpointHandle)
}
