//! Convenience macros for model authors.

/// Generates [`Model::call_method`](crate::model::Model::call_method) from a
/// list of zero-argument methods.
///
/// Each method may return anything implementing
/// [`IntoHookOutcome`](crate::hooks::IntoHookOutcome).
///
/// # Example
/// ```rust,ignore
/// impl Model for Order {
///     fn model_name() -> &'static str {
///         "Order"
///     }
///
///     hookset_model::hook_methods!(check_stock, stamp_totals);
/// }
/// ```
#[macro_export]
macro_rules! hook_methods {
    ($($method:ident),* $(,)?) => {
        fn call_method(
            &mut self,
            method: &str,
        ) -> ::core::option::Option<
            $crate::prelude::AppResult<$crate::prelude::HookOutcome>,
        > {
            #[allow(unused_imports)]
            use $crate::prelude::IntoHookOutcome as _;
            match method {
                $( ::core::stringify!($method) => ::core::option::Option::Some(self.$method().into_outcome()), )*
                _ => ::core::option::Option::None,
            }
        }
    };
}
