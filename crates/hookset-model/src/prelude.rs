//! Prelude for model authors.
//!
//! ```rust,ignore
//! use hookset_model::prelude::*;
//! ```

pub use hookset_core::{AppError, AppResult, ErrorKind};

pub use crate::hooks::{
    Block, CallbackBody, CustomHook, HookName, HookOutcome, HookRegistry, HookTag, Hooks, IntoHookOutcome,
};
pub use crate::lifecycle::{Completion, Lifecycle};
pub use crate::model::Model;
