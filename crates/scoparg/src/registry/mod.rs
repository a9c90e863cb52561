//! Raw access to the calling thread's default slots.
//!
//! Every function here acts on the slot of `P` belonging to the current
//! thread. Nothing is cached: each read observes the slot as it is right now,
//! including any live [`Override`](crate::Override).
//!
//! The slot is never left borrowed while caller code runs. A closure passed to
//! [`with`] sees the value that was current when it was called and may freely
//! set, override or reset the same parameter.

use std::rc::Rc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::param::Param;

#[cfg(test)]
mod tests;

/// Calls `f` with a reference to the current default of `P`.
///
/// The reference points at the live value; no copy of it is made.
pub fn with<P: Param, R>(f: impl FnOnce(&P::Value) -> R) -> R {
	let current = P::slot().with(|slot| slot.shared());
	f(&current)
}

/// Returns a copy of the current default of `P`.
pub fn get<P: Param>() -> P::Value {
	with::<P, _>(|value| value.clone())
}

/// Replaces the current default of `P`.
pub fn set<P: Param>(value: P::Value) {
	let previous = P::slot().with(|slot| slot.swap(Rc::new(value)));
	drop(previous);
}

/// Replaces the current default of `P`, returning the previous one.
pub fn replace<P: Param>(value: P::Value) -> P::Value {
	let previous = P::slot().with(|slot| slot.swap(Rc::new(value)));
	Rc::unwrap_or_clone(previous)
}

/// Mutates the default of `P` through a copy, then stores the copy.
///
/// `f` runs with the slot unborrowed; anything it does to `P` itself is
/// superseded by the stored result.
pub fn update<P: Param, R>(f: impl FnOnce(&mut P::Value) -> R) -> R {
	let mut value = get::<P>();
	let result = f(&mut value);
	set::<P>(value);
	result
}

/// Re-seeds the slot of `P` from its initial-value policy.
///
/// Returns the value that was replaced. Use this at the start of work running
/// on a reused thread to drop defaults left behind by earlier work.
pub fn reset<P: Param>() -> P::Value {
	let initial = P::initial();
	trace!(param = P::NAME, policy = ?P::POLICY, "default slot reset");
	replace::<P>(initial)
}

/// Like [`with`], but reports access after thread-local teardown instead of panicking.
pub fn try_with<P: Param, R>(f: impl FnOnce(&P::Value) -> R) -> Result<R> {
	let current = P::slot()
		.try_with(|slot| slot.shared())
		.map_err(|_| Error::SlotDestroyed { param: P::NAME })?;
	Ok(f(&current))
}

/// Like [`set`], but reports access after thread-local teardown instead of panicking.
///
/// On error `value` is dropped.
pub fn try_set<P: Param>(value: P::Value) -> Result<()> {
	let previous = P::slot()
		.try_with(|slot| slot.swap(Rc::new(value)))
		.map_err(|_| Error::SlotDestroyed { param: P::NAME })?;
	drop(previous);
	Ok(())
}

/// Installs an override value; returns the displaced handle and its nesting level.
pub(crate) fn enter<P: Param>(value: P::Value) -> (Rc<P::Value>, usize) {
	P::slot().with(|slot| slot.enter(Rc::new(value)))
}

/// Restores a handle saved by [`enter`].
///
/// `Ok(false)` means the override at `level` was not the innermost one.
pub(crate) fn leave<P: Param>(saved: Rc<P::Value>, level: usize) -> Result<bool> {
	P::slot()
		.try_with(|slot| slot.leave(saved, level))
		.map_err(|_| Error::SlotDestroyed { param: P::NAME })
}
