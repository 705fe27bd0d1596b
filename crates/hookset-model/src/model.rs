//! The trait every hooked model type implements.

use hookset_core::AppResult;

use crate::hooks::definitions::HookOutcome;

/// A data-record type that owns a [`HookRegistry`](crate::hooks::HookRegistry).
///
/// Implementing this trait also provides the [`Hooks`](crate::hooks::Hooks)
/// triggers.
pub trait Model: Sized {
    /// Name used in log fields and error messages.
    fn model_name() -> &'static str;

    /// Invokes the zero-argument method named `method`.
    ///
    /// Deferred callbacks (registered with a tag and no block) resolve
    /// through this lookup when the hook fires. Return `None` for names the
    /// model doesn't recognize. The [`hook_methods!`](crate::hook_methods)
    /// macro generates this from a list of method names.
    fn call_method(&mut self, method: &str) -> Option<AppResult<HookOutcome>> {
        let _ = method;
        None
    }
}
