//! Procedural macros for scoparg.
//!
//! Provides `#[derive(Param)]`, which turns an uninhabited marker type into a
//! parameter identity with its own thread-local default slot.

use proc_macro::TokenStream;

/// Param derive macro implementation.
mod param;

/// Declares a parameter identity on a variant-less enum.
///
/// ```ignore
/// #[derive(Param)]
/// #[param(value = u32, default = 3)]
/// /// Log verbosity used when the caller does not pass one.
/// pub enum Verbosity {}
/// ```
///
/// Generates an `impl scoparg::Param` whose slot is a dedicated
/// `thread_local!` seeded on first access.
///
/// # Attributes
///
/// - `value = Type` - Required: the type callers receive on resolution
/// - `default = expr` - Optional: constant initial value (converted with `Into`)
/// - `init = path` - Optional: zero-argument function producing the initial value
/// - `name = "..."` - Optional: diagnostic name (defaults to the module-qualified type name)
///
/// Without `default` or `init`, the slot starts at `Default::default()`.
#[proc_macro_derive(Param, attributes(param))]
pub fn derive_param(input: TokenStream) -> TokenStream {
	param::derive_param(input)
}
