//! Errors reported by the non-panicking registry accessors.

use thiserror::Error;

/// Failure to reach a parameter's default slot.
///
/// Only the `try_*` functions in [`crate::registry`] return these; the plain
/// accessors panic, as `thread_local!` access does after teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	/// The thread-local slot was already destroyed (thread teardown).
	#[error("default slot for `{param}` accessed after thread-local teardown")]
	SlotDestroyed {
		/// Name of the parameter identity.
		param: &'static str,
	},
}

/// Result alias for slot access.
pub type Result<T, E = Error> = std::result::Result<T, E>;
