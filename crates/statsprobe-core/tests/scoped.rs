//! Scoping against a minimal recording receiver.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use statsprobe_core::{Counter, Gauge, NameKey, Stat, StatsReceiver, Verbosity};

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(&'static str, Verbosity, NameKey)>>,
}

struct Noop;

impl Counter for Noop {
    fn incr(&self, _delta: i64) {}
}
impl Stat for Noop {
    fn add(&self, _value: f32) {}
}
impl Gauge for Noop {
    fn remove(&self) {}
}

impl StatsReceiver for Recorder {
    type Counter = Noop;
    type Stat = Noop;
    type Gauge = Noop;

    fn counter_with(&self, verbosity: Verbosity, name: NameKey) -> Noop {
        self.seen.lock().unwrap().push(("counter", verbosity, name));
        Noop
    }

    fn stat_with(&self, verbosity: Verbosity, name: NameKey) -> Noop {
        self.seen.lock().unwrap().push(("stat", verbosity, name));
        Noop
    }

    fn add_gauge_with<F>(&self, verbosity: Verbosity, name: NameKey, _producer: F) -> Noop
    where
        F: Fn() -> f32 + Send + Sync + 'static,
    {
        self.seen.lock().unwrap().push(("gauge", verbosity, name));
        Noop
    }
}

fn seen(r: &Recorder) -> Vec<(&'static str, Verbosity, NameKey)> {
    r.seen.lock().unwrap().clone()
}

#[test]
fn scope_adds_leading_segment() {
    let r = Recorder::default();
    let s = r.scope("srv");
    s.counter(["requests"]).incr_one();
    s.stat_with(Verbosity::Debug, ["latency"].into()).add(1.0);

    assert_eq!(
        seen(&r),
        vec![
            ("counter", Verbosity::Default, NameKey::from(["srv", "requests"])),
            ("stat", Verbosity::Debug, NameKey::from(["srv", "latency"])),
        ]
    );
}

#[test]
fn nested_scopes_keep_outer_first() {
    let r = Recorder::default();
    let outer = r.scope("a");
    let inner = outer.scope("b");
    inner.add_gauge(["c"], || 1.0).remove();

    assert_eq!(seen(&r), vec![("gauge", Verbosity::Default, NameKey::from(["a", "b", "c"]))]);
}

#[test]
fn scope_is_a_segment_not_a_string_prefix() {
    let r = Recorder::default();
    r.scope("a").counter(["b"]);
    r.counter(["a/b"]);

    let names: Vec<NameKey> = seen(&r).into_iter().map(|(_, _, n)| n).collect();
    assert_ne!(names[0], names[1]);
    assert_eq!(names[0].to_string(), names[1].to_string());
}

#[test]
fn empty_scope_is_transparent() {
    let r = Recorder::default();
    let s = r.scope("");
    assert!(s.prefix().is_empty());
    s.counter(["x"]);
    assert_eq!(seen(&r), vec![("counter", Verbosity::Default, NameKey::from(["x"]))]);
}

#[test]
fn provide_gauge_registers_through_add_gauge() {
    let r = Arc::new(Recorder::default());
    r.provide_gauge(["up"], || 1.0);
    assert_eq!(seen(&r), vec![("gauge", Verbosity::Default, NameKey::from(["up"]))]);
}
