//! Built-in hook names with their registry accessors and instance triggers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use hookset_core::{AppError, AppResult};

use super::definitions::{Block, HookTag};
use super::registry::HookRegistry;
use super::runner;
use crate::model::Model;

/// Name of a hook declared at runtime.
///
/// The field is private so that [`HookName::custom`] is the only way to build
/// one; a built-in name can never end up wrapped here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomHook(String);

impl CustomHook {
    /// Returns the hook name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

define_hooks! {
    public {
        /// Fired once a new instance has been built.
        AfterInitialize => after_initialize,
        /// Fired before a new record is inserted. Can halt.
        BeforeCreate => before_create,
        /// Fired after a new record is inserted.
        AfterCreate => after_create,
        /// Fired before an existing record is updated. Can halt.
        BeforeUpdate => before_update,
        /// Fired after an existing record is updated.
        AfterUpdate => after_update,
        /// Fired before any save, new or existing. Can halt.
        BeforeSave => before_save,
        /// Fired after any save.
        AfterSave => after_save,
        /// Fired before a record is destroyed. Can halt.
        BeforeDestroy => before_destroy,
        /// Fired after a record is destroyed.
        AfterDestroy => after_destroy,
        /// Fired before validations run. Can halt.
        BeforeValidation => before_validation,
        /// Fired after validations run.
        AfterValidation => after_validation,
    }
    private {
        /// Fired before a bulk column update bypassing the save cycle.
        BeforeUpdateValues => before_update_values,
        /// Fired before a raw delete bypassing the destroy cycle.
        BeforeDelete => before_delete,
    }
}

impl HookName {
    /// Returns every built-in hook, public names first.
    pub fn all_builtin() -> impl Iterator<Item = &'static HookName> {
        Self::PUBLIC.iter().chain(Self::PRIVATE.iter())
    }

    /// Builds a hook name from a string.
    ///
    /// Built-in names resolve to their own variant, so
    /// `HookName::custom("before_save")` equals `HookName::BeforeSave`.
    /// Anything else must be a lowercase identifier.
    pub fn custom(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if let Some(builtin) = Self::builtin(&name) {
            return Ok(builtin);
        }

        let mut chars = name.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(AppError::configuration(format!(
                "Invalid hook name: '{name}'. Expected a lowercase identifier"
            )));
        }

        Ok(Self::Custom(CustomHook(name)))
    }

    /// Returns whether this is one of the predefined hooks.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::custom(s)
    }
}

impl TryFrom<String> for HookName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::custom(value)
    }
}

impl From<HookName> for String {
    fn from(hook: HookName) -> Self {
        match hook {
            HookName::Custom(name) => name.0,
            builtin => builtin.as_str().to_string(),
        }
    }
}
