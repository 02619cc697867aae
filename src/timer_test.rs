use super::*;

fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let make = move |name: &'static str| -> Task {
        let sink = Arc::clone(&sink);
        Box::new(move || sink.lock().expect("lock").push(name))
    };
    (log, make)
}

#[test]
fn tasks_run_only_when_due() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let _h = scheduler.schedule(Duration::from_millis(100), task("a"));

    assert_eq!(scheduler.advance(Duration::from_millis(99)), 0);
    assert!(log.lock().expect("lock").is_empty());
    assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    assert_eq!(*log.lock().expect("lock"), vec!["a"]);
    assert_eq!(scheduler.now(), Duration::from_millis(100));
}

#[test]
fn tasks_run_in_deadline_then_fifo_order() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let _late = scheduler.schedule(Duration::from_millis(50), task("late"));
    let _first = scheduler.schedule(Duration::from_millis(10), task("first"));
    let _second = scheduler.schedule(Duration::from_millis(10), task("second"));

    assert_eq!(scheduler.run_until_idle(), 3);
    assert_eq!(*log.lock().expect("lock"), vec!["first", "second", "late"]);
    assert_eq!(scheduler.now(), Duration::from_millis(50));
}

#[test]
fn dropping_handle_cancels_task() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let handle = scheduler.schedule(Duration::from_millis(10), task("a"));
    assert_eq!(scheduler.pending(), 1);
    drop(handle);
    assert_eq!(scheduler.pending(), 0);
    scheduler.advance(Duration::from_secs(1));
    assert!(log.lock().expect("lock").is_empty());
}

#[test]
fn cancel_after_run_is_noop() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let handle = scheduler.schedule(Duration::ZERO, task("a"));
    scheduler.run_until_idle();
    handle.cancel();
    assert_eq!(*log.lock().expect("lock"), vec!["a"]);
}

#[test]
fn inert_handle_does_nothing() {
    TimerHandle::inert().cancel();
}
