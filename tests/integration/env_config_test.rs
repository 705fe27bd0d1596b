//! Integration test for environment-variable configuration overrides.
//!
//! Lives in its own test binary because it mutates the process environment.

mod helpers;

use hookset::AppConfig;
use hookset::prelude::*;

use helpers::Order;

const VARS: [(&str, &str); 3] = [
    ("HOOKSET__HOOKS__RAISE_ON_HALT", "true"),
    ("HOOKSET__HOOKS__EXTRA_HOOKS", "before_move_to,after_move_to"),
    ("HOOKSET__LOGGING__LEVEL", "debug"),
];

#[test]
fn test_load_applies_environment_overrides() {
    // SAFETY: this binary holds a single test, so no other thread reads the
    // environment concurrently.
    unsafe {
        for (key, value) in VARS {
            std::env::set_var(key, value);
        }
    }

    let loaded = AppConfig::load("test");

    unsafe {
        for (key, _) in VARS {
            std::env::remove_var(key);
        }
    }

    let config = loaded.unwrap();
    assert!(config.hooks.raise_on_halt);
    assert_eq!(config.hooks.extra_hooks, ["before_move_to", "after_move_to"]);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "pretty");

    let registry = HookRegistry::<Order>::from_config(&config.hooks).unwrap();
    assert_eq!(registry.declared_hooks().len(), 15);
    assert!(registry.is_declared(&HookName::custom("after_move_to").unwrap()));
}
