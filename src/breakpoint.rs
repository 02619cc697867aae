//! Responsive breakpoint tracking driven by window resize events.

#[cfg(test)]
#[path = "breakpoint_test.rs"]
mod breakpoint_test;

use serde::{Deserialize, Serialize};

use crate::composer::ProviderSpec;
use crate::error::ContextError;
use crate::events::{EventHub, EventKind, WindowEvent};
use crate::scope::{Scope, SliceKind};
use crate::slice::Slice;

pub const DEFAULT_TABLET_MIN: u32 = 768;
pub const DEFAULT_DESKTOP_MIN: u32 = 1024;

/// Layout class for the current viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// Minimum widths (inclusive) for each class above mobile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub tablet_min: u32,
    pub desktop_min: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { tablet_min: DEFAULT_TABLET_MIN, desktop_min: DEFAULT_DESKTOP_MIN }
    }
}

impl Breakpoints {
    #[must_use]
    pub fn classify(&self, width: u32) -> Breakpoint {
        if width >= self.desktop_min {
            Breakpoint::Desktop
        } else if width >= self.tablet_min {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }
}

/// Current window size and its breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub breakpoint: Breakpoint,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32, breakpoints: &Breakpoints) -> Self {
        Self { width, height, breakpoint: breakpoints.classify(width) }
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.breakpoint == Breakpoint::Mobile
    }
}

/// Provide a [`Viewport`] slice in `scope` that follows resize events on `hub`.
///
/// Only size changes commit; the resize listener detaches when `scope` unmounts.
///
/// # Errors
///
/// Same as [`Scope::provide`].
pub fn track_viewport(
    scope: &Scope,
    hub: &EventHub,
    breakpoints: Breakpoints,
    initial: (u32, u32),
) -> Result<Slice<Viewport>, ContextError> {
    let viewport = scope.provide(Viewport::new(initial.0, initial.1, &breakpoints))?;
    let target = viewport.clone();
    let listener = hub.listen(EventKind::Resize, move |event| {
        let &WindowEvent::Resize { width, height } = event else {
            return;
        };
        let next = Viewport::new(width, height, &breakpoints);
        if target.with(|current| *current != next).unwrap_or(false) {
            if let Err(err) = target.set(next) {
                tracing::debug!(error = %err, "resize after unmount");
            }
        }
    });
    scope.on_cleanup(move || listener.detach());
    Ok(viewport)
}

/// Composer entry that mounts [`track_viewport`].
#[derive(Clone)]
pub struct ViewportProvider {
    hub: EventHub,
    breakpoints: Breakpoints,
    initial: (u32, u32),
}

impl ViewportProvider {
    #[must_use]
    pub fn new(hub: EventHub, breakpoints: Breakpoints, initial: (u32, u32)) -> Self {
        Self { hub, breakpoints, initial }
    }
}

impl ProviderSpec for ViewportProvider {
    fn name(&self) -> &str {
        "viewport"
    }

    fn provides(&self) -> SliceKind {
        SliceKind::of::<Viewport>()
    }

    fn mount(&self, scope: &Scope) -> Result<(), ContextError> {
        track_viewport(scope, &self.hub, self.breakpoints, self.initial).map(|_| ())
    }
}
