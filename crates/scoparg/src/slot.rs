//! Per-thread storage cell for one parameter's current default.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::param::Param;

/// The current default of one parameter on one thread.
///
/// The value sits behind an `Rc` handle. Readers clone the handle and release
/// the cell before running any caller code, so the cell is never borrowed
/// across a closure and every operation on it is total.
///
/// Slots are created by the `thread_local!` that [`Param::slot`] owns and are
/// only reached through [`crate::registry`].
pub struct Slot<V> {
	value: RefCell<Rc<V>>,
	depth: Cell<usize>,
}

impl<V> Slot<V> {
	/// Seeds a slot from `P`'s initial-value policy.
	///
	/// Runs once per thread, from the thread-local initializer.
	#[doc(hidden)]
	pub fn seeded<P: Param<Value = V>>() -> Self {
		let value = P::initial();
		trace!(param = P::NAME, policy = ?P::POLICY, "default slot seeded");
		Self {
			value: RefCell::new(Rc::new(value)),
			depth: Cell::new(0),
		}
	}

	/// Handle to the current value.
	pub(crate) fn shared(&self) -> Rc<V> {
		Rc::clone(&self.value.borrow())
	}

	/// Swaps in a new handle and returns the previous one.
	pub(crate) fn swap(&self, value: Rc<V>) -> Rc<V> {
		self.value.replace(value)
	}

	/// Installs an override value, returning the displaced handle and the
	/// nesting level the override occupies.
	pub(crate) fn enter(&self, value: Rc<V>) -> (Rc<V>, usize) {
		let level = self.depth.get() + 1;
		self.depth.set(level);
		(self.swap(value), level)
	}

	/// Restores the handle saved by the override at `level`.
	///
	/// Returns `false` when `level` was not the innermost live override.
	pub(crate) fn leave(&self, saved: Rc<V>, level: usize) -> bool {
		let innermost = self.depth.get() == level;
		self.depth.set(level - 1);
		drop(self.swap(saved));
		innermost
	}
}

impl<V: fmt::Debug> fmt::Debug for Slot<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Slot")
			.field("value", &*self.shared())
			.field("depth", &self.depth.get())
			.finish()
	}
}
