//! # hookset
//!
//! Lifecycle hooks for data-record models.
//!
//! A model type owns a [`HookRegistry`] with the built-in hook names
//! declared. Model authors register callbacks against those names, and the
//! surrounding persistence code fires them through the [`Hooks`] triggers or
//! a [`Lifecycle`] sequencer. Any callback returning literal `false` aborts
//! the operation in progress.
//!
//! ```rust,ignore
//! use hookset::prelude::*;
//!
//! let mut hooks = HookRegistry::<Order>::new();
//! hooks.before_save(None, Some(Block::new(|o: &mut Order| o.total > 0)))?;
//!
//! let mut order = Order::default();
//! if !order.before_save(&hooks)? {
//!     return Ok(());
//! }
//! ```

pub mod telemetry;

pub use hookset_core::config::AppConfig;
pub use hookset_core::{AppError, AppResult, ErrorKind, config};
pub use hookset_model::{
    Block, CallbackBody, Completion, HookName, HookOutcome, HookRegistry, HookTag, Hooks,
    Lifecycle, Model, hook_methods, hooks, lifecycle, prelude,
};
