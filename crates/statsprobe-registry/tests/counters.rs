#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::thread;

use statsprobe_core::{Counter, NameKey, StatsReceiver, Verbosity};
use statsprobe_registry::InMemoryStatsReceiver;

#[test]
fn keys_with_colliding_display_stay_independent() {
    common::init_tracing();
    let r = InMemoryStatsReceiver::new();
    let foo = r.counter(["a", "b", "foo"]);
    let bar = r.counter(["a/b", "bar"]);
    let flat = r.counter(["a/b/foo"]);

    foo.incr(2);
    bar.incr(7);

    assert_eq!(foo.read(), 2);
    assert_eq!(bar.read(), 7);
    assert_eq!(flat.read(), 0);
    assert_eq!(foo.to_string(), "Counter(a/b/foo=2)");
    assert_eq!(flat.to_string(), "Counter(a/b/foo=0)");
    assert_eq!(r.counters().len(), 2);
}

#[test]
fn unincremented_counter_reads_zero_and_is_not_stored() {
    let r = InMemoryStatsReceiver::new();
    let c = r.counter(["never"]);
    assert_eq!(c.read(), 0);
    assert_eq!(r.counter_value(["never"]), 0);
    assert!(r.counters().is_empty());
}

#[test]
fn handles_for_same_name_share_state() {
    let r = InMemoryStatsReceiver::new();
    let a = r.counter(["x"]);
    let b = r.counter(["x"]);
    a.incr_one();
    b.incr(4);
    a.incr(-2);
    assert_eq!(a.read(), 3);
    assert_eq!(b.read(), 3);
    assert_eq!(r.counters().get(&NameKey::from(["x"])), Some(&3));
}

#[test]
fn concurrent_increments_are_conserved() {
    let r = InMemoryStatsReceiver::new();
    let threads = 8;
    let per_thread = 2_000;

    thread::scope(|s| {
        for t in 0..threads {
            let c = r.counter(["hot"]);
            s.spawn(move || {
                for i in 0..per_thread {
                    // Mix of positive and negative deltas.
                    c.incr((i % 5) as i64 - 1 + t);
                }
            });
        }
    });

    let expected: i64 = (0..threads)
        .map(|t| (0..per_thread).map(|i| (i % 5) as i64 - 1 + t).sum::<i64>())
        .sum();
    assert_eq!(r.counter_value(["hot"]), expected);
}

#[test]
fn verbosity_last_registration_wins() {
    let r = InMemoryStatsReceiver::new();
    r.counter_with(Verbosity::Debug, ["v"].into());
    assert_eq!(r.verbosity_of(["v"]), Some(Verbosity::Debug));

    r.stat(["v"]);
    assert_eq!(r.verbosity_of(["v"]), Some(Verbosity::Default));
    assert_eq!(r.verbosity_of(["other"]), None);
}

#[test]
fn scoped_counters_land_under_prefix() {
    let r = InMemoryStatsReceiver::new();
    r.scope("srv").scope("http").counter(["requests"]).incr(3);
    assert_eq!(r.counter_value(["srv", "http", "requests"]), 3);
    assert_eq!(r.counter_value(["srv/http/requests"]), 0);
}
