use super::*;

use std::io;
use std::sync::{Arc, Mutex};

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    fn run(&self, f: impl FnOnce()) -> String {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        String::from_utf8_lossy(&self.0.lock().expect("capture")).into_owned()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Theme(&'static str);

#[derive(Clone, Debug, PartialEq)]
struct Collapsed(bool);

// =============================================================
// Providing
// =============================================================

#[test]
fn provide_then_resolve_in_same_scope() {
    let scope = Scope::root("app");
    let provided = scope.provide(Theme("light")).expect("provide");
    let resolved = scope.resolve::<Theme>().expect("resolve");
    assert!(provided.ptr_eq(&resolved));
    assert_eq!(resolved.get(), Ok(Theme("light")));
}

#[test]
fn second_provider_of_same_kind_is_rejected() {
    let scope = Scope::root("app");
    scope.provide(Theme("light")).expect("provide");
    let err = scope.provide(Theme("dark")).expect_err("duplicate");
    assert!(matches!(err, ContextError::DuplicateProvider { scope, .. } if scope == "app"));
    assert_eq!(scope.resolve::<Theme>().expect("resolve").get(), Ok(Theme("light")));
}

#[test]
fn provide_with_runs_initializer() {
    let scope = Scope::root("app");
    let slice = scope.provide_with(|| Collapsed(true)).expect("provide");
    assert_eq!(slice.get(), Ok(Collapsed(true)));
}

#[test]
fn kinds_lists_local_slices_in_order() {
    let scope = Scope::root("app");
    scope.provide(Theme("light")).expect("provide");
    scope.provide(Collapsed(false)).expect("provide");
    let names: Vec<_> = scope.kinds().iter().map(SliceKind::name).collect();
    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("Theme"));
    assert!(names[1].ends_with("Collapsed"));
}

// =============================================================
// Resolving
// =============================================================

#[test]
fn missing_provider_is_an_explicit_error() {
    let scope = Scope::root("app").child("page");
    let err = scope.resolve::<Theme>().expect_err("no provider");
    match err {
        ContextError::MissingProvider { slice, scope } => {
            assert!(slice.ends_with("Theme"));
            assert_eq!(scope, "app/page");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(Scope::root("x").try_resolve::<Theme>().is_none());
}

#[test]
fn child_resolves_through_ancestors() {
    let root = Scope::root("app");
    root.provide(Theme("dark")).expect("provide");
    let leaf = root.child("layout").child("page");
    assert_eq!(leaf.resolve::<Theme>().expect("resolve").get(), Ok(Theme("dark")));
    assert_eq!(leaf.depth(), 2);
    assert_eq!(leaf.path(), "app/layout/page");
}

#[test]
fn nearest_enclosing_provider_wins() {
    let root = Scope::root("app");
    root.provide(Theme("light")).expect("provide");
    let inner = root.child("preview");
    inner.provide(Theme("dark")).expect("shadow");

    assert_eq!(inner.resolve::<Theme>().expect("resolve").get(), Ok(Theme("dark")));
    assert_eq!(root.resolve::<Theme>().expect("resolve").get(), Ok(Theme("light")));
}

#[test]
fn siblings_do_not_see_each_other() {
    let root = Scope::root("app");
    let left = root.child("left");
    let right = root.child("right");
    left.provide(Collapsed(true)).expect("provide");

    assert!(left.resolve::<Collapsed>().is_ok());
    assert!(matches!(right.resolve::<Collapsed>(), Err(ContextError::MissingProvider { .. })));
    assert!(left.resolves(SliceKind::of::<Collapsed>()));
    assert!(!right.resolves(SliceKind::of::<Collapsed>()));
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn unmount_disposes_slices_and_runs_cleanups_in_reverse() {
    let scope = Scope::root("app");
    let slice = scope.provide(Theme("light")).expect("provide");
    let order = Arc::new(Mutex::new(Vec::new()));
    for n in 0..3 {
        let order = Arc::clone(&order);
        scope.on_cleanup(move || order.lock().expect("lock").push(n));
    }

    scope.unmount();

    assert_eq!(*order.lock().expect("lock"), vec![2, 1, 0]);
    assert!(!slice.is_live());
    assert!(!scope.is_mounted());
    assert!(matches!(scope.resolve::<Theme>(), Err(ContextError::Unmounted { .. })));
    assert!(matches!(scope.provide(Collapsed(true)), Err(ContextError::Unmounted { .. })));
}

#[test]
fn unmount_is_idempotent() {
    let scope = Scope::root("app");
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    scope.on_cleanup(move || *counter.lock().expect("lock") += 1);
    scope.unmount();
    scope.unmount();
    assert_eq!(*count.lock().expect("lock"), 1);
}

#[test]
fn unmounting_parent_unmounts_children_first() {
    let root = Scope::root("app");
    let child = root.child("page");
    let order = Arc::new(Mutex::new(Vec::new()));
    let (a, b) = (Arc::clone(&order), Arc::clone(&order));
    root.on_cleanup(move || a.lock().expect("lock").push("root"));
    child.on_cleanup(move || b.lock().expect("lock").push("child"));

    root.unmount();

    assert_eq!(*order.lock().expect("lock"), vec!["child", "root"]);
    assert!(!child.is_mounted());
}

#[test]
fn cleanup_registered_after_unmount_runs_immediately() {
    let scope = Scope::root("app");
    scope.unmount();
    let ran = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&ran);
    scope.on_cleanup(move || *flag.lock().expect("lock") = true);
    assert!(*ran.lock().expect("lock"));
}

#[test]
fn child_of_unmounted_scope_starts_unmounted() {
    let root = Scope::root("app");
    root.unmount();
    let child = root.child("late");
    assert!(!child.is_mounted());
}

#[test]
fn child_of_unmounted_scope_is_not_logged_as_mounted() {
    let root = Scope::root("app");
    root.unmount();
    let logs = LogCapture::default().run(|| {
        let _late = root.child("late");
    });
    assert!(logs.contains("scope created under unmounted parent"), "{logs}");
    assert!(!logs.contains("scope mounted"), "{logs}");
}

#[test]
fn child_of_live_scope_is_logged_as_mounted() {
    let root = Scope::root("app");
    let logs = LogCapture::default().run(|| {
        let _page = root.child("page");
    });
    assert!(logs.contains("scope mounted"), "{logs}");
}

#[test]
fn child_unmount_leaves_parent_slices_live() {
    let root = Scope::root("app");
    let theme = root.provide(Theme("light")).expect("provide");
    let child = root.child("page");
    let local = child.provide(Collapsed(false)).expect("provide");

    child.unmount();

    assert!(theme.is_live());
    assert!(!local.is_live());
    assert!(root.is_mounted());
}
