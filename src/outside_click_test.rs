use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

fn press(x: f64, y: f64) -> WindowEvent {
    WindowEvent::press(x, y)
}

fn counting(hub: &EventHub, refs: Vec<ElementRef>) -> (OutsideClick, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let detector = OutsideClick::attach(hub, refs, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (detector, calls)
}

#[test]
fn rect_containment_is_half_open() {
    let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(rect.contains(10.0, 10.0));
    assert!(rect.contains(29.9, 29.9));
    assert!(!rect.contains(30.0, 15.0));
    assert!(!rect.contains(15.0, 9.9));
}

#[test]
fn press_inside_any_tracked_ref_is_ignored() {
    let hub = EventHub::new();
    let menu = ElementRef::attached(Rect::new(0.0, 0.0, 100.0, 100.0));
    let trigger = ElementRef::attached(Rect::new(200.0, 0.0, 40.0, 20.0));
    let (_detector, calls) = counting(&hub, vec![menu, trigger]);

    hub.dispatch(&press(50.0, 50.0));
    hub.dispatch(&press(210.0, 10.0));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn press_outside_all_refs_fires_once_per_event() {
    let hub = EventHub::new();
    let menu = ElementRef::attached(Rect::new(0.0, 0.0, 100.0, 100.0));
    let (_detector, calls) = counting(&hub, vec![menu]);

    hub.dispatch(&press(500.0, 500.0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    hub.dispatch(&press(150.0, 20.0));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn unattached_ref_counts_as_outside() {
    let hub = EventHub::new();
    let pending = ElementRef::new();
    let (_detector, calls) = counting(&hub, vec![pending.clone()]);

    hub.dispatch(&press(5.0, 5.0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    pending.set(Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    hub.dispatch(&press(5.0, 5.0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn press_on_child_overflowing_its_tracked_parent_is_inside() {
    let hub = EventHub::new();
    let panel = ElementRef::attached(Rect::new(0.0, 0.0, 200.0, 100.0));
    let (_detector, calls) = counting(&hub, vec![panel.clone()]);

    // Dropdown hangs below the panel's box but is its descendant.
    hub.dispatch(&WindowEvent::press_within(50.0, 180.0, vec![ElementId::next(), panel.id()]));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn press_on_overlay_above_tracked_box_is_outside() {
    let hub = EventHub::new();
    let panel = ElementRef::attached(Rect::new(0.0, 0.0, 200.0, 100.0));
    let (_detector, calls) = counting(&hub, vec![panel]);

    // Modal stacked over the panel: inside its box, outside its subtree.
    let modal = ElementId::next();
    hub.dispatch(&WindowEvent::press_within(50.0, 50.0, vec![modal]));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn tree_target_ignores_missing_bounds() {
    let hub = EventHub::new();
    let menu = ElementRef::new();
    let (_detector, calls) = counting(&hub, vec![menu.clone()]);

    hub.dispatch(&WindowEvent::press_within(5.0, 5.0, vec![menu.id()]));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    hub.dispatch(&WindowEvent::press_within(5.0, 5.0, Vec::new()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn element_refs_have_distinct_ids() {
    let a = ElementRef::new();
    assert_eq!(a.clone().id(), a.id());
    assert_ne!(ElementRef::new().id(), a.id());
}

#[test]
fn resize_events_are_not_clicks() {
    let hub = EventHub::new();
    let (_detector, calls) = counting(&hub, Vec::new());
    hub.dispatch(&WindowEvent::Resize { width: 10, height: 10 });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn detach_stops_handler() {
    let hub = EventHub::new();
    let (detector, calls) = counting(&hub, Vec::new());
    detector.detach();
    hub.dispatch(&press(1.0, 1.0));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(hub.listener_count(EventKind::MouseDown), 0);
}

#[test]
fn repeated_scoped_mounts_return_to_baseline() {
    let hub = EventHub::new();
    let baseline = hub.listener_count(EventKind::MouseDown);
    for _ in 0..25 {
        let scope = Scope::root("popover");
        OutsideClick::attach_scoped(&scope, &hub, vec![ElementRef::new()], |_| {});
        assert_eq!(hub.listener_count(EventKind::MouseDown), baseline + 1);
        scope.unmount();
        assert_eq!(hub.listener_count(EventKind::MouseDown), baseline);
    }
}
