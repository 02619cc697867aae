//! Detect presses that land outside a set of tracked elements.
//!
//! Used for dismissing dropdowns, popovers, and node context menus. Each
//! active detector owns exactly one mousedown [`Listener`].

#[cfg(test)]
#[path = "outside_click_test.rs"]
mod outside_click_test;

use std::sync::{Arc, Mutex};

use crate::events::{ElementId, EventHub, EventKind, Listener, PressTarget, WindowEvent};
use crate::lock;
use crate::scope::Scope;

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A tracked element: a stable [`ElementId`] plus its last known bounds.
///
/// A press is inside when the element encloses the pressed node in the
/// element tree, which covers children that overflow the element's box and
/// excludes overlays stacked above it. Bounds are consulted only for presses
/// that carry no tree information.
#[derive(Clone, Debug)]
pub struct ElementRef {
    id: ElementId,
    bounds: Arc<Mutex<Option<Rect>>>,
}

impl Default for ElementRef {
    fn default() -> Self {
        Self { id: ElementId::next(), bounds: Arc::default() }
    }
}

impl ElementRef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attached(rect: Rect) -> Self {
        let element = Self::new();
        element.set(Some(rect));
        element
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn set(&self, bounds: Option<Rect>) {
        *lock(&self.bounds) = bounds;
    }

    #[must_use]
    pub fn get(&self) -> Option<Rect> {
        *lock(&self.bounds)
    }

    /// An element that is not laid out contains nothing.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.get().is_some_and(|rect| rect.contains(x, y))
    }

    /// Whether a press at `(x, y)` on `target` landed inside this element.
    #[must_use]
    pub fn encloses(&self, x: f64, y: f64, target: &PressTarget) -> bool {
        match target {
            PressTarget::Within(ancestors) => ancestors.contains(&self.id),
            PressTarget::Unknown => self.contains(x, y),
        }
    }
}

/// True when a press at `(x, y)` on `target` is outside every element in `refs`.
#[must_use]
pub fn is_outside(refs: &[ElementRef], x: f64, y: f64, target: &PressTarget) -> bool {
    !refs.iter().any(|element| element.encloses(x, y, target))
}

/// Active outside-click detector. Dropping it detaches its listener.
#[derive(Debug)]
pub struct OutsideClick {
    listener: Listener,
}

impl OutsideClick {
    /// Call `handler` once for every mousedown outside all of `refs`.
    pub fn attach(hub: &EventHub, refs: Vec<ElementRef>, handler: impl Fn(&WindowEvent) + Send + Sync + 'static) -> Self {
        let listener = hub.listen(EventKind::MouseDown, move |event| {
            if let WindowEvent::MouseDown { x, y, target } = event {
                if is_outside(&refs, *x, *y, target) {
                    handler(event);
                }
            }
        });
        Self { listener }
    }

    /// Attach for the lifetime of `scope`.
    pub fn attach_scoped(
        scope: &Scope,
        hub: &EventHub,
        refs: Vec<ElementRef>,
        handler: impl Fn(&WindowEvent) + Send + Sync + 'static,
    ) {
        let detector = Self::attach(hub, refs, handler);
        scope.on_cleanup(move || detector.detach());
    }

    pub fn detach(self) {
        self.listener.detach();
    }
}
