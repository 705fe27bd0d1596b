//! Hook system: typed hook names, the per-model registry, and the runner.

#[macro_use]
mod macros;

pub mod builtin;
pub mod definitions;
pub mod registry;
pub mod runner;

pub use builtin::{CustomHook, HookName, Hooks};
pub use definitions::{Block, CallbackBody, HookOutcome, HookTag, IntoHookOutcome};
pub use registry::HookRegistry;
