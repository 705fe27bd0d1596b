//! Hook registry: one per model type, holding the ordered callbacks for each
//! declared hook.
//!
//! Mutation takes `&mut self` and dispatch takes `&self`, so callbacks can't
//! be registered while a dispatch is in progress. Populate the registry
//! while the model type is being set up, then share it read-only.

use std::collections::HashMap;

use tracing::debug;

use hookset_core::config::hooks::HooksConfig;
use hookset_core::{AppError, AppResult};

use super::builtin::HookName;
use super::definitions::{Block, CallbackBody, HookTag};
use super::runner;
use crate::model::Model;

/// Entry in the hook table.
#[derive(Debug)]
struct CallbackEntry<M> {
    /// Replacement key; never consulted during dispatch.
    tag: Option<HookTag>,
    /// What runs when the hook fires.
    body: CallbackBody<M>,
}

/// Registry of hook callbacks for the model type `M`.
#[derive(Debug)]
pub struct HookRegistry<M> {
    /// Model name for logs and panic messages.
    model: &'static str,
    /// Hook name → callbacks in registration order.
    callbacks: HashMap<HookName, Vec<CallbackEntry<M>>>,
    /// Declaration order of hook names.
    declared: Vec<HookName>,
}

impl<M: Model> HookRegistry<M> {
    /// Creates a registry with every built-in hook declared.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for hook in HookName::all_builtin() {
            registry.declare_hook(hook.clone());
        }
        registry
    }

    /// Creates a registry with no hooks declared.
    pub fn empty() -> Self {
        Self {
            model: M::model_name(),
            callbacks: HashMap::new(),
            declared: Vec::new(),
        }
    }

    /// Creates a registry with the built-in hooks plus every hook listed in
    /// `config.extra_hooks`.
    pub fn from_config(config: &HooksConfig) -> AppResult<Self> {
        let mut registry = Self::new();
        for name in &config.extra_hooks {
            registry.declare_hook(HookName::custom(name.as_str())?);
        }
        Ok(registry)
    }

    /// Declares a hook, creating an empty callback list for it.
    ///
    /// Declaring an already declared hook resets its list to empty. Once
    /// declared, the hook can be registered against and triggered; with no
    /// callbacks its trigger yields `true`.
    pub fn declare_hook(&mut self, hook: HookName) {
        debug!(model = self.model, hook = %hook, "Declaring hook");

        if self.callbacks.insert(hook.clone(), Vec::new()).is_none() {
            self.declared.push(hook);
        }
    }

    /// Registers a callback on `hook`.
    ///
    /// - With a `block`, registers `(tag, block)`.
    /// - With only a `tag`, registers a deferred call of the model method
    ///   named by the tag.
    /// - With neither, fails with a configuration error and leaves the
    ///   registry unchanged.
    ///
    /// If `tag` matches an existing entry, that entry's body is replaced in
    /// place; otherwise the callback is appended.
    ///
    /// # Panics
    ///
    /// Panics if `hook` was never declared.
    pub fn hook(
        &mut self,
        hook: HookName,
        tag: Option<HookTag>,
        block: Option<Block<M>>,
    ) -> AppResult<()> {
        let body = match (block, &tag) {
            (Some(block), _) => CallbackBody::Block(block),
            (None, Some(tag)) => CallbackBody::Method(tag.clone()),
            (None, None) => {
                return Err(AppError::configuration(format!(
                    "No hook callback specified for `{hook}` on model `{}`",
                    self.model
                )));
            }
        };

        self.register(&hook, tag, body);
        Ok(())
    }

    fn register(&mut self, hook: &HookName, tag: Option<HookTag>, body: CallbackBody<M>) {
        let model = self.model;
        let entries = self.slot_mut(hook);

        if let Some(tag) = &tag {
            if let Some(existing) = entries.iter_mut().find(|e| e.tag.as_ref() == Some(tag)) {
                existing.body = body;
                debug!(model, hook = %hook, tag = %tag, "Hook callback replaced");
                return;
            }
        }

        debug!(
            model,
            hook = %hook,
            tag = ?tag.as_ref().map(HookTag::as_str),
            position = entries.len(),
            "Hook callback registered"
        );

        entries.push(CallbackEntry { tag, body });
    }

    /// Returns whether any callbacks are registered for `hook`.
    ///
    /// # Panics
    ///
    /// Panics if `hook` was never declared.
    pub fn has_callbacks(&self, hook: &HookName) -> bool {
        !self.slot(hook).is_empty()
    }

    /// Calls `visit` with every callback body registered for `hook`, in
    /// stored order.
    ///
    /// # Panics
    ///
    /// Panics if `hook` was never declared.
    pub fn for_each_callback<F>(&self, hook: &HookName, mut visit: F)
    where
        F: FnMut(&CallbackBody<M>),
    {
        for entry in self.slot(hook) {
            visit(&entry.body);
        }
    }

    /// Runs every callback registered for `hook` against `instance`.
    ///
    /// Equivalent to calling the [`Hooks`](super::Hooks) trigger on the
    /// instance.
    pub fn run_hooks(&self, instance: &mut M, hook: &HookName) -> AppResult<bool> {
        runner::run_hooks(self, instance, hook)
    }

    /// Returns the number of callbacks registered for `hook`.
    ///
    /// # Panics
    ///
    /// Panics if `hook` was never declared.
    pub fn callback_count(&self, hook: &HookName) -> usize {
        self.slot(hook).len()
    }

    /// Returns whether `hook` has been declared.
    pub fn is_declared(&self, hook: &HookName) -> bool {
        self.callbacks.contains_key(hook)
    }

    /// Returns all declared hooks in declaration order.
    pub fn declared_hooks(&self) -> &[HookName] {
        &self.declared
    }

    /// Returns the model name this registry belongs to.
    pub fn model_name(&self) -> &'static str {
        self.model
    }

    pub(crate) fn callbacks(&self, hook: &HookName) -> impl Iterator<Item = &CallbackBody<M>> {
        self.slot(hook).iter().map(|entry| &entry.body)
    }

    fn slot(&self, hook: &HookName) -> &Vec<CallbackEntry<M>> {
        match self.callbacks.get(hook) {
            Some(entries) => entries,
            None => undeclared(self.model, hook),
        }
    }

    fn slot_mut(&mut self, hook: &HookName) -> &mut Vec<CallbackEntry<M>> {
        let model = self.model;
        match self.callbacks.get_mut(hook) {
            Some(entries) => entries,
            None => undeclared(model, hook),
        }
    }
}

impl<M: Model> Default for HookRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[track_caller]
fn undeclared(model: &str, hook: &HookName) -> ! {
    panic!("hook `{hook}` was never declared for model `{model}`")
}
