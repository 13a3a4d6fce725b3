//! Update validation and dispatch taxonomy.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tallyd_core::store::MetricStore;
use tallyd_core::update::apply_update;

#[test]
fn counter_update_applies() {
    let store = MetricStore::new();
    apply_update(&store, "counter", "hits", "42").unwrap();
    assert_eq!(store.counter("hits"), Some(42));
}

#[test]
fn gauge_update_applies() {
    let store = MetricStore::new();
    apply_update(&store, "gauge", "load", "0.75").unwrap();
    assert_eq!(store.gauge("load"), Some(0.75));
}

#[test]
fn gauge_accepts_scientific_notation() {
    let store = MetricStore::new();
    apply_update(&store, "gauge", "tiny", "1.5e-3").unwrap();
    assert_eq!(store.gauge("tiny"), Some(0.0015));
}

#[test]
fn counter_accepts_negative_value() {
    let store = MetricStore::new();
    apply_update(&store, "counter", "adj", "-3").unwrap();
    assert_eq!(store.counter("adj"), Some(-3));
}

#[test]
fn empty_name_is_not_found_for_any_kind() {
    let store = MetricStore::new();
    for kind in ["counter", "gauge", "histogram"] {
        let err = apply_update(&store, kind, "", "1.0").expect_err("must reject");
        assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    }
    assert!(store.is_empty());
}

#[test]
fn counter_rejects_non_integer_values() {
    let store = MetricStore::new();
    store.update_counter("hits", 5);

    for bad in ["abc", "1.5", "", "42 "] {
        let err = apply_update(&store, "counter", "hits", bad).expect_err("must reject");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }
    // prior value untouched by rejected updates
    assert_eq!(store.counter("hits"), Some(5));
}

#[test]
fn gauge_rejects_non_numeric_values() {
    let store = MetricStore::new();
    let err = apply_update(&store, "gauge", "temp", "xyz").expect_err("must reject");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert_eq!(store.gauge("temp"), None);
}

#[test]
fn unknown_kind_is_bad_request_without_mutation() {
    let store = MetricStore::new();
    // value is well-formed; the kind alone must cause rejection
    let err = apply_update(&store, "histogram", "x", "1").expect_err("must reject");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(store.is_empty());
}

#[test]
fn updates_to_same_name_and_different_kinds_coexist() {
    let store = MetricStore::new();
    apply_update(&store, "counter", "x", "7").unwrap();
    apply_update(&store, "gauge", "x", "2.5").unwrap();
    assert_eq!(store.counter("x"), Some(7));
    assert_eq!(store.gauge("x"), Some(2.5));
}
