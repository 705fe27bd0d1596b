//! Integration tests for lifecycle sequencing around an operation.

mod helpers;

use hookset::config::hooks::HooksConfig;
use hookset::prelude::*;

use helpers::{Order, recorder};

fn registry() -> HookRegistry<Order> {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_validation(Some("require_positive_total".into()), None).unwrap();
    registry.before_save(Some("check_unlocked".into()), None).unwrap();
    registry.before_save(Some("round_total".into()), None).unwrap();
    registry.after_save(None, recorder("after_save", ())).unwrap();
    registry
}

fn insert(order: &mut Order) -> AppResult<u64> {
    order.calls.push("insert".to_string());
    Ok(42)
}

#[test]
fn test_validate_then_create() {
    let registry = registry();
    let lifecycle = Lifecycle::new(&registry, &HooksConfig::default());
    let mut order = Order::with_total(1550);

    let valid = lifecycle.validate(&mut order, |_| Ok(())).unwrap();
    assert!(valid.is_completed());

    let created = lifecycle.create(&mut order, insert).unwrap();
    assert_eq!(created.into_value(), Some(42));
    assert_eq!(order.total, 1500);
    assert_eq!(
        order.calls,
        vec![
            "require_positive_total",
            "check_unlocked",
            "round_total",
            "insert",
            "after_save",
        ]
    );
}

#[test]
fn test_locked_order_is_not_saved() {
    let registry = registry();
    let lifecycle = Lifecycle::new(&registry, &HooksConfig::default());
    let mut order = Order {
        locked: true,
        ..Order::with_total(1000)
    };

    let outcome = lifecycle.update(&mut order, insert).unwrap();
    assert_eq!(outcome, Completion::Halted { hook: HookName::BeforeSave });
    assert_eq!(order.calls, vec!["check_unlocked"]);
}

#[test]
fn test_validation_error_surfaces() {
    let registry = registry();
    let lifecycle = Lifecycle::new(&registry, &HooksConfig::default());
    let mut order = Order::with_total(-5);

    let err = lifecycle.validate(&mut order, |_| Ok(())).unwrap_err();
    assert!(err.is(ErrorKind::Validation));
}

#[test]
fn test_raise_on_halt_from_config() {
    let registry = registry();
    let config = HooksConfig {
        raise_on_halt: true,
        ..HooksConfig::default()
    };
    let lifecycle = Lifecycle::new(&registry, &config);
    let mut order = Order {
        locked: true,
        ..Order::default()
    };

    let err = lifecycle.create(&mut order, insert).unwrap_err();
    assert!(err.is(ErrorKind::HookHalted));
    assert!(err.message.contains("before_save"));
    assert!(!order.calls.contains(&"insert".to_string()));
}

#[test]
fn test_private_hooks_guard_raw_operations() {
    let mut registry = HookRegistry::<Order>::new();
    registry.before_delete(Some("check_unlocked".into()), None).unwrap();
    registry.before_update_values(None, recorder("bulk", false)).unwrap();
    let lifecycle = Lifecycle::new(&registry, &HooksConfig::default());

    let mut order = Order::default();
    assert!(lifecycle.delete(&mut order, |_| Ok(())).unwrap().is_completed());

    let outcome = lifecycle.update_values(&mut order, |_| Ok(())).unwrap();
    assert_eq!(outcome.halted_by(), Some(&HookName::BeforeUpdateValues));
}
