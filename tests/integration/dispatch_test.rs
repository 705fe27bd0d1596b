//! Integration tests for hook dispatch semantics.

mod helpers;

use hookset::prelude::*;
use serde_json::json;

use helpers::{Order, recorder};

#[test]
fn test_hooks_without_callbacks_return_true() {
    let registry = HookRegistry::<Order>::new();
    let mut order = Order::default();

    for hook in HookName::all_builtin() {
        assert!(order.run_hooks(&registry, hook).unwrap(), "{hook} should pass");
    }
    assert!(order.after_initialize(&registry).unwrap());
    assert!(order.before_update_values(&registry).unwrap());
}

#[test]
fn test_all_callbacks_run_in_order_when_none_halts() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_save(None, recorder("c1", true)).unwrap();
    registry.before_save(None, recorder("c2", true)).unwrap();

    let mut order = Order::default();
    assert!(order.before_save(&registry).unwrap());
    assert_eq!(order.calls, vec!["c1", "c2"]);
}

#[test]
fn test_first_false_halts_and_skips_rest() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_save(None, recorder("c1", false)).unwrap();
    registry.before_save(None, recorder("c2", true)).unwrap();

    let mut order = Order::default();
    assert!(!order.before_save(&registry).unwrap());
    assert_eq!(order.calls, vec!["c1"]);
}

#[test]
fn test_nil_does_not_halt() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_update(None, recorder("unit", ())).unwrap();
    registry.before_update(None, recorder("none", None::<bool>)).unwrap();
    registry.before_update(None, recorder("null", json!(null))).unwrap();
    registry.before_update(None, recorder("zero", json!(0))).unwrap();
    registry.before_update(None, recorder("empty", json!(""))).unwrap();
    registry.before_update(None, recorder("last", ())).unwrap();

    let mut order = Order::default();
    assert!(order.before_update(&registry).unwrap());
    assert_eq!(order.calls, vec!["unit", "none", "null", "zero", "empty", "last"]);
}

#[test]
fn test_json_false_halts() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_create(None, recorder("json_false", json!(false))).unwrap();
    registry.before_create(None, recorder("never", true)).unwrap();

    let mut order = Order::default();
    assert!(!order.before_create(&registry).unwrap());
    assert_eq!(order.calls, vec!["json_false"]);
}

#[test]
fn test_tag_only_registration_calls_model_method() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_save(Some("check_unlocked".into()), None).unwrap();

    let mut open = Order::default();
    assert!(open.before_save(&registry).unwrap());

    let mut locked = Order {
        locked: true,
        ..Order::default()
    };
    assert!(!locked.before_save(&registry).unwrap());
    assert_eq!(locked.calls, vec!["check_unlocked"]);
}

#[test]
fn test_deferred_method_is_resolved_lazily() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_destroy(Some("check_unlocked".into()), None).unwrap();

    let mut order = Order::default();
    assert!(order.before_destroy(&registry).unwrap());

    order.locked = true;
    assert!(!order.before_destroy(&registry).unwrap());
}

#[test]
fn test_method_returning_unit_does_not_halt() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_save(Some("round_total".into()), None).unwrap();
    registry.before_save(None, recorder("after_round", true)).unwrap();

    let mut order = Order::with_total(1299);
    assert!(order.before_save(&registry).unwrap());
    assert_eq!(order.total, 1200);
    assert_eq!(order.calls, vec!["round_total", "after_round"]);
}

#[test]
fn test_callback_errors_propagate_unchanged() {
    let mut registry = HookRegistry::<Order>::new();
    registry
        .before_validation(Some("require_positive_total".into()), None)
        .unwrap();
    registry.before_validation(None, recorder("never", true)).unwrap();

    let mut order = Order::with_total(0);
    let err = order.before_validation(&registry).unwrap_err();
    assert!(err.is(ErrorKind::Validation));
    assert_eq!(err.message, "total must be positive");
    assert_eq!(order.calls, vec!["require_positive_total"]);
}

#[test]
fn test_undefined_method_fails_at_dispatch() {
    let mut registry = HookRegistry::<Order>::new();
    registry.after_save(Some("send_receipt".into()), None).unwrap();

    let mut order = Order::default();
    let err = order.after_save(&registry).unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[test]
fn test_registry_and_trigger_paths_agree() {
    let mut registry = HookRegistry::<Order>::new();
    registry.after_update(None, recorder("only", false)).unwrap();

    let mut order = Order::default();
    assert!(!registry.run_hooks(&mut order, &HookName::AfterUpdate).unwrap());
    assert!(!order.after_update(&registry).unwrap());
    assert_eq!(order.calls, vec!["only", "only"]);
}

#[test]
#[should_panic(expected = "never declared")]
fn test_dispatching_undeclared_hook_panics() {
    let registry = HookRegistry::<Order>::new();
    let mut order = Order::default();
    let _ = order.run_hooks(&registry, &HookName::custom("before_archive").unwrap());
}
