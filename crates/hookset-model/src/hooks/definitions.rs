//! Callback value types: tags, outcomes, blocks, and callback bodies.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use hookset_core::AppResult;

/// Identifier attached to a registered callback so it can later be replaced
/// in place instead of appended again.
///
/// When a callback is registered with a tag and no block, the tag also names
/// the zero-argument model method the callback invokes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookTag(String);

impl HookTag {
    /// Creates a new tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HookTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for HookTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Boolean-like value produced by a hook callback.
///
/// Only a literal `false` aborts a dispatch. `Nil` and other falsy-looking
/// values such as `0` or `""` let the remaining callbacks run.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HookOutcome {
    /// The callback produced no value.
    #[default]
    Nil,
    /// The callback produced a boolean.
    Bool(bool),
    /// The callback produced some other value.
    Value(Value),
}

impl HookOutcome {
    /// Returns whether this outcome is the literal value `false`.
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Bool(false) | Self::Value(Value::Bool(false)))
    }
}

impl From<Value> for HookOutcome {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::Bool(b) => Self::Bool(b),
            other => Self::Value(other),
        }
    }
}

/// Conversion from a callback's return value into an [`HookOutcome`].
///
/// Implemented for the common return shapes so callbacks can return `bool`,
/// `()`, `Option<bool>`, a JSON value, or an `AppResult` of any of those.
pub trait IntoHookOutcome {
    /// Converts `self` into a hook outcome, propagating callback errors.
    fn into_outcome(self) -> AppResult<HookOutcome>;
}

impl IntoHookOutcome for HookOutcome {
    fn into_outcome(self) -> AppResult<HookOutcome> {
        Ok(self)
    }
}

impl IntoHookOutcome for bool {
    fn into_outcome(self) -> AppResult<HookOutcome> {
        Ok(HookOutcome::Bool(self))
    }
}

impl IntoHookOutcome for () {
    fn into_outcome(self) -> AppResult<HookOutcome> {
        Ok(HookOutcome::Nil)
    }
}

impl IntoHookOutcome for Option<bool> {
    fn into_outcome(self) -> AppResult<HookOutcome> {
        Ok(self.map_or(HookOutcome::Nil, HookOutcome::Bool))
    }
}

impl IntoHookOutcome for Value {
    fn into_outcome(self) -> AppResult<HookOutcome> {
        Ok(HookOutcome::from(self))
    }
}

impl<T: IntoHookOutcome> IntoHookOutcome for AppResult<T> {
    fn into_outcome(self) -> AppResult<HookOutcome> {
        self?.into_outcome()
    }
}

type BlockFn<M> = dyn Fn(&mut M) -> AppResult<HookOutcome> + Send + Sync;

/// A callback closure evaluated against a model instance.
pub struct Block<M> {
    /// Handler function.
    handler: Arc<BlockFn<M>>,
}

impl<M> Block<M> {
    /// Wraps a closure as a hook block.
    pub fn new<F, R>(handler: F) -> Self
    where
        F: Fn(&mut M) -> R + Send + Sync + 'static,
        R: IntoHookOutcome,
    {
        Self {
            handler: Arc::new(move |instance| handler(instance).into_outcome()),
        }
    }

    /// Evaluates the block against an instance.
    pub fn call(&self, instance: &mut M) -> AppResult<HookOutcome> {
        (self.handler)(instance)
    }
}

impl<M> Clone for Block<M> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<M> fmt::Debug for Block<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("handler", &"<closure>")
            .finish()
    }
}

/// What a registered callback does when the hook fires.
pub enum CallbackBody<M> {
    /// Evaluate a closure.
    Block(Block<M>),
    /// Invoke the model's zero-argument method with this name, resolved at
    /// dispatch time through [`crate::model::Model::call_method`].
    Method(HookTag),
}

impl<M> Clone for CallbackBody<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Block(block) => Self::Block(block.clone()),
            Self::Method(tag) => Self::Method(tag.clone()),
        }
    }
}

impl<M> fmt::Debug for CallbackBody<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block(block) => f.debug_tuple("Block").field(block).finish(),
            Self::Method(tag) => f.debug_tuple("Method").field(tag).finish(),
        }
    }
}
