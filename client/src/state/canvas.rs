//! Canvas editor geometry and chrome state.
//!
//! ARCHITECTURE
//! ============
//! Rendering and drag-and-drop live in the canvas engine; this slice only
//! holds what the surrounding chrome needs (zoom, pan, sidebar collapse,
//! selection). Selection is session-only and skipped when persisted.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 4.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// Whether the node sidebar is collapsed.
    pub is_collapsed: bool,
    pub grid_visible: bool,
    #[serde(skip)]
    pub selected_node: Option<String>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0, is_collapsed: false, grid_visible: true, selected_node: None }
    }
}

impl CanvasState {
    /// Multiply zoom by `factor`, clamped to [`MIN_ZOOM`, `MAX_ZOOM`].
    #[must_use]
    pub fn zoomed_by(&self, factor: f64) -> Self {
        self.with_zoom(self.zoom * factor)
    }

    #[must_use]
    pub fn with_zoom(&self, zoom: f64) -> Self {
        let zoom = if zoom.is_finite() { zoom.clamp(MIN_ZOOM, MAX_ZOOM) } else { self.zoom };
        Self { zoom, ..self.clone() }
    }

    #[must_use]
    pub fn panned_by(&self, dx: f64, dy: f64) -> Self {
        Self { pan_x: self.pan_x + dx, pan_y: self.pan_y + dy, ..self.clone() }
    }

    #[must_use]
    pub fn toggled_collapsed(&self) -> Self {
        Self { is_collapsed: !self.is_collapsed, ..self.clone() }
    }

    #[must_use]
    pub fn toggled_grid(&self) -> Self {
        Self { grid_visible: !self.grid_visible, ..self.clone() }
    }

    #[must_use]
    pub fn with_selection(&self, node_id: Option<String>) -> Self {
        Self { selected_node: node_id, ..self.clone() }
    }

    /// Back to 100% zoom at the origin; chrome flags are kept.
    #[must_use]
    pub fn reset_view(&self) -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0, ..self.clone() }
    }

    /// Zoom as a whole percentage for display.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        // Zoom is clamped to [0.1, 4.0], so the rounded percentage fits.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.zoom * 100.0).round() as u32;
        percent
    }
}
