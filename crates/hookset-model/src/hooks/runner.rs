//! Hook runner: evaluates the callbacks of one hook against one instance.
//!
//! - Callbacks run in registration order.
//! - The first callback returning literal `false` stops the run and the
//!   hook reports `false`. `Nil` and other falsy-looking values do not.
//! - Callback errors propagate unchanged; later callbacks do not run.

use tracing::{debug, trace};

use hookset_core::{AppError, AppResult};

use super::builtin::HookName;
use super::definitions::{CallbackBody, HookOutcome};
use super::registry::HookRegistry;
use crate::model::Model;

/// Runs every callback registered for `hook` against `instance`.
///
/// Returns `Ok(true)` when no callbacks are registered.
///
/// # Panics
///
/// Panics if `hook` was never declared on `registry`.
pub fn run_hooks<M: Model>(
    registry: &HookRegistry<M>,
    instance: &mut M,
    hook: &HookName,
) -> AppResult<bool> {
    if !registry.has_callbacks(hook) {
        return Ok(true);
    }

    for (index, body) in registry.callbacks(hook).enumerate() {
        trace!(model = M::model_name(), hook = %hook, index, "Evaluating hook callback");

        if evaluate(body, instance)?.is_halt() {
            debug!(
                model = M::model_name(),
                hook = %hook,
                index,
                "Hook callback returned false, halting"
            );
            return Ok(false);
        }
    }

    Ok(true)
}

/// Evaluates a single callback body against `instance`.
pub fn evaluate<M: Model>(body: &CallbackBody<M>, instance: &mut M) -> AppResult<HookOutcome> {
    match body {
        CallbackBody::Block(block) => block.call(instance),
        CallbackBody::Method(tag) => instance.call_method(tag.as_str()).unwrap_or_else(|| {
            Err(AppError::not_found(format!(
                "Undefined method `{tag}` for model `{}`",
                M::model_name()
            )))
        }),
    }
}
