//! Hook registry configuration.

use serde::{Deserialize, Serialize};

/// Settings consumed by the hook registry and lifecycle sequencer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HooksConfig {
    /// When `true`, a lifecycle operation halted by a hook returns a
    /// `HookHalted` error instead of a `Halted` completion.
    #[serde(default)]
    pub raise_on_halt: bool,
    /// Additional hook names declared on every registry built from this
    /// config, after the built-in names.
    #[serde(default)]
    pub extra_hooks: Vec<String>,
}
