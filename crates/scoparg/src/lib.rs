//! Runtime defaults for omitted arguments.
//!
//! A function takes an [`Opt<P>`] instead of a plain value. Callers either pass
//! a value or leave it out; when it is left out, resolution reads the current
//! default for the parameter identity `P` on the calling thread. That default
//! can be replaced for the duration of a scope with an [`Override`], and nested
//! overrides unwind in order.
//!
//! ```
//! use scoparg::{Opt, override_default, param};
//!
//! param!(
//! 	/// Indentation width used when the caller does not pass one.
//! 	pub Indent: usize = 4usize
//! );
//!
//! fn indent(width: Opt<Indent>) -> String {
//! 	" ".repeat(width.into_value())
//! }
//!
//! assert_eq!(indent(Opt::none()), "    ");
//! {
//! 	override_default!(Indent, 2);
//! 	assert_eq!(indent(Opt::none()), "  ");
//! 	assert_eq!(indent(Opt::new(1)), " ");
//! }
//! assert_eq!(indent(Opt::none()), "    ");
//! ```
//!
//! # Parts
//!
//! * [`Param`]: a marker type naming one default slot, with its value type and initial-value policy
//! * [`registry`]: raw get/set access to the calling thread's slot
//! * [`Opt`]: explicit value, or defer to the slot
//! * [`Override`]: scope-bound replacement (or merge) of the slot's value
//! * [`BitMerge`]: named bitwise merge policies for flag-like defaults
//!
//! # Threads
//!
//! Every slot is thread-local. Threads never observe each other's defaults and
//! no locking takes place. A thread starts from each parameter's initial value
//! the first time it touches that parameter.
//!
//! Executors that reuse one OS thread for unrelated units of work carry any
//! [`registry::set`] made by an earlier unit into the next one. Re-establishing
//! defaults at the start of such work (for instance with [`registry::reset`])
//! is the caller's responsibility; nothing here detects it. Overrides are
//! unaffected as long as they end before the unit of work does. For async
//! tasks that migrate between threads, resolve and override within a single
//! poll.
//!
//! # Features
//!
//! * `derive` (default): re-exports `#[derive(Param)]`
//! * `serde`: `Serialize`/`Deserialize` for [`Opt`], absent fields defer to the default

pub mod error;
pub mod merge;
pub mod opt;
pub mod param;
pub mod registry;
pub mod scope;
#[cfg(feature = "serde")]
mod serde_support;
pub mod slot;

pub use error::{Error, Result};
pub use merge::{BitMerge, Bits};
pub use opt::Opt;
pub use param::{InitPolicy, Param};
#[cfg(feature = "derive")]
pub use scoparg_macro::Param;
pub use scope::{Override, scope, scope_bits, scope_merge};
pub use slot::Slot;
