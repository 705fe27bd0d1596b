//! Code generation for the built-in hook table.

/// Generates [`HookName`](crate::hooks::HookName) together with one typed
/// accessor per built-in hook on `HookRegistry` and one trigger per built-in
/// hook on the `Hooks` extension trait.
///
/// Every built-in name therefore maps to a fixed `(accessor, trigger)` pair
/// at compile time.
macro_rules! define_hooks {
    (
        public {
            $( $(#[$pmeta:meta])* $pvariant:ident => $pname:ident, )*
        }
        private {
            $( $(#[$qmeta:meta])* $qvariant:ident => $qname:ident, )*
        }
    ) => {
        /// Name of an extension point in a model's lifecycle.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub enum HookName {
            $( $(#[$pmeta])* $pvariant, )*
            $( $(#[$qmeta])* $qvariant, )*
            /// A hook declared at runtime, typically by a plugin. Built only
            /// through [`HookName::custom`].
            Custom(CustomHook),
        }

        impl HookName {
            /// Hooks intended for consumers of a model type.
            pub const PUBLIC: &'static [HookName] = &[ $( HookName::$pvariant, )* ];

            /// Hooks intended only for internal collaborators.
            pub const PRIVATE: &'static [HookName] = &[ $( HookName::$qvariant, )* ];

            /// Returns the snake_case name of this hook.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$pvariant => stringify!($pname), )*
                    $( Self::$qvariant => stringify!($qname), )*
                    Self::Custom(name) => name.as_str(),
                }
            }

            fn builtin(name: &str) -> Option<Self> {
                match name {
                    $( stringify!($pname) => Some(Self::$pvariant), )*
                    $( stringify!($qname) => Some(Self::$qvariant), )*
                    _ => None,
                }
            }

            /// Returns whether this hook belongs to the private set.
            pub fn is_private(&self) -> bool {
                matches!(self, $( Self::$qvariant )|*)
            }
        }

        impl<M: Model> HookRegistry<M> {
            $(
                #[doc = concat!("Registers a callback on `", stringify!($pname), "`. See [`HookRegistry::hook`].")]
                pub fn $pname(&mut self, tag: Option<HookTag>, block: Option<Block<M>>) -> AppResult<()> {
                    self.hook(HookName::$pvariant, tag, block)
                }
            )*
            $(
                #[doc = concat!("Registers a callback on the private `", stringify!($qname), "` hook.")]
                pub fn $qname(&mut self, tag: Option<HookTag>, block: Option<Block<M>>) -> AppResult<()> {
                    self.hook(HookName::$qvariant, tag, block)
                }
            )*
        }

        /// Instance-level hook triggers.
        ///
        /// Implemented for every [`Model`]. Each trigger runs the callbacks the
        /// registry holds for one hook and returns `Ok(false)` if any of them
        /// returned literal `false`.
        pub trait Hooks: Model {
            /// Runs every callback registered for `hook` against `self`.
            fn run_hooks(&mut self, registry: &HookRegistry<Self>, hook: &HookName) -> AppResult<bool> {
                runner::run_hooks(registry, self, hook)
            }

            $(
                #[doc = concat!("Fires `", stringify!($pname), "`.")]
                fn $pname(&mut self, registry: &HookRegistry<Self>) -> AppResult<bool> {
                    self.run_hooks(registry, &HookName::$pvariant)
                }
            )*
            $(
                #[doc = concat!("Fires the private `", stringify!($qname), "` hook.")]
                fn $qname(&mut self, registry: &HookRegistry<Self>) -> AppResult<bool> {
                    self.run_hooks(registry, &HookName::$qvariant)
                }
            )*
        }

        impl<M: Model> Hooks for M {}
    };
}
