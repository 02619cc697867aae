use super::*;

#[test]
fn canvas_default_is_unzoomed_with_grid() {
    let state = CanvasState::default();
    assert_eq!(state.zoom, 1.0);
    assert_eq!((state.pan_x, state.pan_y), (0.0, 0.0));
    assert!(!state.is_collapsed);
    assert!(state.grid_visible);
    assert_eq!(state.selected_node, None);
}

#[test]
fn zoom_is_clamped() {
    let state = CanvasState::default();
    assert_eq!(state.zoomed_by(100.0).zoom, MAX_ZOOM);
    assert_eq!(state.zoomed_by(0.0001).zoom, MIN_ZOOM);
    assert_eq!(state.zoomed_by(2.0).zoom, 2.0);
}

#[test]
fn non_finite_zoom_is_ignored() {
    let state = CanvasState::default().with_zoom(2.0);
    assert_eq!(state.with_zoom(f64::NAN).zoom, 2.0);
    assert_eq!(state.with_zoom(f64::INFINITY).zoom, 2.0);
}

#[test]
fn pan_accumulates() {
    let state = CanvasState::default().panned_by(10.0, -5.0).panned_by(2.5, 5.0);
    assert_eq!((state.pan_x, state.pan_y), (12.5, 0.0));
}

#[test]
fn toggles_flip_flags() {
    let state = CanvasState::default();
    assert!(state.toggled_collapsed().is_collapsed);
    assert!(!state.toggled_grid().grid_visible);
}

#[test]
fn reset_view_keeps_chrome_flags() {
    let state = CanvasState::default().toggled_collapsed().zoomed_by(3.0).panned_by(4.0, 4.0);
    let reset = state.reset_view();
    assert_eq!(reset.zoom, 1.0);
    assert_eq!((reset.pan_x, reset.pan_y), (0.0, 0.0));
    assert!(reset.is_collapsed);
}

#[test]
fn zoom_percent_rounds() {
    assert_eq!(CanvasState::default().zoom_percent(), 100);
    assert_eq!(CanvasState::default().with_zoom(0.125).zoom_percent(), 13);
}

#[test]
fn selection_is_not_persisted() {
    let state = CanvasState::default().with_selection(Some("node-1".into()));
    let json = serde_json::to_string(&state).expect("json");
    assert!(!json.contains("node-1"));
    let back: CanvasState = serde_json::from_str(&json).expect("parse");
    assert_eq!(back.selected_node, None);
}
