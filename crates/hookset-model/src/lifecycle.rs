//! Lifecycle sequencing: fires the built-in hooks around a caller-supplied
//! operation.
//!
//! For `before_*` hooks:
//! - Hooks fire in sequence ahead of the operation.
//! - If any returns `false`, the operation and every later hook are skipped.
//!
//! For `after_*` hooks:
//! - Hooks fire in sequence once the operation succeeded.
//! - A `false` result stops that hook's remaining callbacks but is otherwise
//!   ignored, since the operation already happened.
//!
//! The operation itself is opaque: persisting, validating, or deleting a
//! record is the caller's business.

use tracing::{debug, info, warn};

use hookset_core::config::hooks::HooksConfig;
use hookset_core::{AppError, AppResult};

use crate::hooks::{HookName, HookRegistry};
use crate::model::Model;

/// Result of a lifecycle operation that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    /// Every before-hook passed and the operation ran.
    Completed(T),
    /// A before-hook returned `false`; the operation did not run.
    Halted {
        /// The hook that halted.
        hook: HookName,
    },
}

impl<T> Completion<T> {
    /// Returns whether the operation ran.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns the hook that halted the operation, if any.
    pub fn halted_by(&self) -> Option<&HookName> {
        match self {
            Self::Completed(_) => None,
            Self::Halted { hook } => Some(hook),
        }
    }

    /// Returns the operation's value, if it ran.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Halted { .. } => None,
        }
    }
}

/// Fires lifecycle hooks from one registry around caller-supplied operations.
///
/// # Panics
///
/// Every method panics if the registry lacks a built-in hook it fires, which
/// only happens for registries built with [`HookRegistry::empty`].
#[derive(Debug)]
pub struct Lifecycle<'a, M> {
    /// Hook registry.
    registry: &'a HookRegistry<M>,
    /// Turn a halt into a `HookHalted` error.
    raise_on_halt: bool,
}

impl<'a, M: Model> Lifecycle<'a, M> {
    /// Creates a lifecycle sequencer over `registry`.
    pub fn new(registry: &'a HookRegistry<M>, config: &HooksConfig) -> Self {
        Self {
            registry,
            raise_on_halt: config.raise_on_halt,
        }
    }

    /// Overrides whether a halt is reported as an error.
    pub fn raise_on_halt(mut self, raise: bool) -> Self {
        self.raise_on_halt = raise;
        self
    }

    /// Fires `after_initialize` on a freshly built instance.
    pub fn initialize(&self, instance: &mut M) -> AppResult<()> {
        self.fire_after(instance, &[HookName::AfterInitialize])
    }

    /// `before_validation` → `op` → `after_validation`.
    pub fn validate<T, F>(&self, instance: &mut M, op: F) -> AppResult<Completion<T>>
    where
        F: FnOnce(&mut M) -> AppResult<T>,
    {
        self.around(
            instance,
            &[HookName::BeforeValidation],
            op,
            &[HookName::AfterValidation],
        )
    }

    /// `before_save` → `before_create` → `op` → `after_create` → `after_save`.
    pub fn create<T, F>(&self, instance: &mut M, op: F) -> AppResult<Completion<T>>
    where
        F: FnOnce(&mut M) -> AppResult<T>,
    {
        self.around(
            instance,
            &[HookName::BeforeSave, HookName::BeforeCreate],
            op,
            &[HookName::AfterCreate, HookName::AfterSave],
        )
    }

    /// `before_save` → `before_update` → `op` → `after_update` → `after_save`.
    pub fn update<T, F>(&self, instance: &mut M, op: F) -> AppResult<Completion<T>>
    where
        F: FnOnce(&mut M) -> AppResult<T>,
    {
        self.around(
            instance,
            &[HookName::BeforeSave, HookName::BeforeUpdate],
            op,
            &[HookName::AfterUpdate, HookName::AfterSave],
        )
    }

    /// `before_destroy` → `op` → `after_destroy`.
    pub fn destroy<T, F>(&self, instance: &mut M, op: F) -> AppResult<Completion<T>>
    where
        F: FnOnce(&mut M) -> AppResult<T>,
    {
        self.around(
            instance,
            &[HookName::BeforeDestroy],
            op,
            &[HookName::AfterDestroy],
        )
    }

    /// `before_update_values` → `op`.
    pub fn update_values<T, F>(&self, instance: &mut M, op: F) -> AppResult<Completion<T>>
    where
        F: FnOnce(&mut M) -> AppResult<T>,
    {
        self.around(instance, &[HookName::BeforeUpdateValues], op, &[])
    }

    /// `before_delete` → `op`.
    pub fn delete<T, F>(&self, instance: &mut M, op: F) -> AppResult<Completion<T>>
    where
        F: FnOnce(&mut M) -> AppResult<T>,
    {
        self.around(instance, &[HookName::BeforeDelete], op, &[])
    }

    fn around<T, F>(
        &self,
        instance: &mut M,
        before: &[HookName],
        op: F,
        after: &[HookName],
    ) -> AppResult<Completion<T>>
    where
        F: FnOnce(&mut M) -> AppResult<T>,
    {
        for hook in before {
            if !self.registry.run_hooks(instance, hook)? {
                return self.halt(hook);
            }
        }

        let value = op(instance)?;
        self.fire_after(instance, after)?;

        Ok(Completion::Completed(value))
    }

    fn fire_after(&self, instance: &mut M, hooks: &[HookName]) -> AppResult<()> {
        for hook in hooks {
            if !self.registry.run_hooks(instance, hook)? {
                debug!(
                    model = M::model_name(),
                    hook = %hook,
                    "After hook returned false, ignoring"
                );
            }
        }
        Ok(())
    }

    fn halt<T>(&self, hook: &HookName) -> AppResult<Completion<T>> {
        if self.raise_on_halt {
            warn!(model = M::model_name(), hook = %hook, "Operation halted by hook");
            return Err(AppError::hook_halted(format!(
                "The `{hook}` hook failed for model `{}`",
                M::model_name()
            )));
        }

        info!(model = M::model_name(), hook = %hook, "Operation halted by hook");
        Ok(Completion::Halted { hook: hook.clone() })
    }
}
