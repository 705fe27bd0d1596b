//! # hookset-model
//!
//! Lifecycle hooks for data-record models. Provides:
//!
//! - Typed hook names, split into public and private sets
//! - A per-model hook registry with tag-based in-place replacement
//! - A hook runner with literal-`false` halt semantics
//! - Lifecycle sequencing that fires before/after hooks around an operation

pub mod hooks;
pub mod lifecycle;
mod macros;
pub mod model;
pub mod prelude;

pub use hooks::{Block, CallbackBody, HookName, HookOutcome, HookRegistry, HookTag, Hooks};
pub use lifecycle::{Completion, Lifecycle};
pub use model::Model;
