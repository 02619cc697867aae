use super::*;

fn resize(width: u32, height: u32) -> WindowEvent {
    WindowEvent::Resize { width, height }
}

#[test]
fn classify_uses_inclusive_minimums() {
    let bps = Breakpoints::default();
    assert_eq!(bps.classify(0), Breakpoint::Mobile);
    assert_eq!(bps.classify(767), Breakpoint::Mobile);
    assert_eq!(bps.classify(768), Breakpoint::Tablet);
    assert_eq!(bps.classify(1023), Breakpoint::Tablet);
    assert_eq!(bps.classify(1024), Breakpoint::Desktop);
}

#[test]
fn breakpoint_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Breakpoint::Tablet).expect("json"), "\"tablet\"");
}

#[test]
fn viewport_follows_resize_events() {
    let hub = EventHub::new();
    let scope = Scope::root("app");
    let viewport = track_viewport(&scope, &hub, Breakpoints::default(), (1280, 800)).expect("track");
    assert_eq!(viewport.get().expect("get").breakpoint, Breakpoint::Desktop);

    hub.dispatch(&resize(600, 900));
    let current = viewport.get().expect("get");
    assert_eq!((current.width, current.height), (600, 900));
    assert!(current.is_mobile());
}

#[test]
fn identical_resize_does_not_commit() {
    let hub = EventHub::new();
    let scope = Scope::root("app");
    let viewport = track_viewport(&scope, &hub, Breakpoints::default(), (800, 600)).expect("track");
    hub.dispatch(&resize(800, 600));
    assert_eq!(viewport.revision(), Ok(0));
    hub.dispatch(&resize(801, 600));
    assert_eq!(viewport.revision(), Ok(1));
}

#[test]
fn unmount_removes_resize_listener() {
    let hub = EventHub::new();
    for _ in 0..10 {
        let scope = Scope::root("app");
        track_viewport(&scope, &hub, Breakpoints::default(), (800, 600)).expect("track");
        assert_eq!(hub.listener_count(EventKind::Resize), 1);
        scope.unmount();
        assert_eq!(hub.listener_count(EventKind::Resize), 0);
    }
}

#[test]
fn viewport_provider_mounts_through_spec() {
    let hub = EventHub::new();
    let scope = Scope::root("app");
    let provider = ViewportProvider::new(hub.clone(), Breakpoints::default(), (500, 500));
    assert_eq!(provider.name(), "viewport");
    provider.mount(&scope).expect("mount");
    assert!(scope.resolve::<Viewport>().expect("resolve").get().expect("get").is_mobile());
}
