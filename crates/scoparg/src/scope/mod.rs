//! Scope-bound overrides of a parameter's default.
//!
//! An [`Override`] saves the current default when it is created and writes it
//! back when it is dropped, on every exit path including panics. Overrides of
//! the same parameter must end in reverse order of creation. The closure
//! helpers ([`scope`], [`scope_merge`], [`scope_bits`]) and
//! [`override_default!`](crate::override_default!) make that ordering
//! structural: the guard lives in a binding the caller cannot name, move or
//! drop early. Guards held by hand are checked against the slot's nesting
//! depth when they drop.

use std::fmt;
use std::rc::Rc;
use std::thread;

use tracing::{debug, error, trace};

use crate::merge::{BitMerge, Bits};
use crate::param::Param;
use crate::registry;


/// Temporarily replaces the default of `P` on the current thread.
///
/// Not `Clone`, not `Send`: an override restores exactly one saved value into
/// exactly one thread's slot.
///
/// Overrides of one parameter must be dropped innermost first. The slot
/// records how deeply its overrides are nested; dropping one that is not the
/// innermost is logged as an error and fails a debug assertion.
///
/// ```compile_fail
/// scoparg::param!(Level: u8);
/// let first = scoparg::Override::<Level>::new(1);
/// let second = first.clone();
/// ```
///
/// ```compile_fail
/// scoparg::param!(Level: u8);
/// fn assert_send<T: Send>(_: T) {}
/// assert_send(scoparg::Override::<Level>::new(1));
/// ```
#[must_use = "the previous default is restored as soon as the override is dropped"]
pub struct Override<P: Param> {
	saved: Option<Rc<P::Value>>,
	level: usize,
}

impl<P: Param> Override<P> {
	/// Makes `value` the default until the override is dropped.
	pub fn new(value: P::Value) -> Self {
		let (saved, level) = registry::enter::<P>(value);
		trace!(param = P::NAME, level, "default overridden");
		Self {
			saved: Some(saved),
			level,
		}
	}

	/// Combines `value` with the current default using `merge`.
	///
	/// `merge` receives a copy of the current default and the new value; the
	/// result becomes the default. If `merge` panics the slot is unchanged.
	pub fn merge(value: P::Value, merge: impl FnOnce(&mut P::Value, P::Value)) -> Self {
		let mut merged = registry::get::<P>();
		merge(&mut merged, value);
		let (saved, level) = registry::enter::<P>(merged);
		trace!(param = P::NAME, level, "default merged");
		Self {
			saved: Some(saved),
			level,
		}
	}

	/// Combines `mask` with the current default using a named bitwise policy.
	pub fn bits(mask: P::Value, policy: BitMerge) -> Self
	where
		P::Value: Bits,
	{
		Self::merge(mask, |current, mask| policy.apply(current, mask))
	}
}

impl<P: Param> Drop for Override<P> {
	fn drop(&mut self) {
		let Some(saved) = self.saved.take() else {
			return;
		};
		match registry::leave::<P>(saved, self.level) {
			Ok(true) => trace!(param = P::NAME, level = self.level, "default restored"),
			Ok(false) => {
				error!(param = P::NAME, level = self.level, "override dropped out of nesting order");
				debug_assert!(
					thread::panicking(),
					"override of `{}` dropped out of nesting order",
					P::NAME
				);
			}
			Err(error) => debug!(param = P::NAME, %error, "default restore skipped"),
		}
	}
}

impl<P: Param> fmt::Debug for Override<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Override")
			.field("param", &P::NAME)
			.finish_non_exhaustive()
	}
}

/// Runs `body` with `value` as the default of `P`.
pub fn scope<P: Param, R>(value: P::Value, body: impl FnOnce() -> R) -> R {
	let _override = Override::<P>::new(value);
	body()
}

/// Runs `body` with `value` merged into the default of `P`.
pub fn scope_merge<P: Param, R>(
	value: P::Value,
	merge: impl FnOnce(&mut P::Value, P::Value),
	body: impl FnOnce() -> R,
) -> R {
	let _override = Override::<P>::merge(value, merge);
	body()
}

/// Runs `body` with `mask` applied to the default of `P` by `policy`.
pub fn scope_bits<P: Param, R>(mask: P::Value, policy: BitMerge, body: impl FnOnce() -> R) -> R
where
	P::Value: Bits,
{
	let _override = Override::<P>::bits(mask, policy);
	body()
}

/// Overrides a default until the end of the enclosing block.
///
/// ```
/// use scoparg::{BitMerge, override_default, param, registry};
///
/// param!(Flags: u32);
///
/// {
/// 	override_default!(Flags, 0b011, bits = BitMerge::Union);
/// 	override_default!(Flags, 0b001, merge = |cur: &mut u32, mask| *cur &= !mask);
/// 	assert_eq!(registry::get::<Flags>(), 0b010);
/// 	override_default!(Flags, 0b111);
/// 	assert_eq!(registry::get::<Flags>(), 0b111);
/// }
/// assert_eq!(registry::get::<Flags>(), 0);
/// ```
#[macro_export]
macro_rules! override_default {
	($param:ty, $value:expr, merge = $merge:expr $(,)?) => {
		let _scoparg_override = $crate::Override::<$param>::merge($value, $merge);
	};
	($param:ty, $value:expr, bits = $policy:expr $(,)?) => {
		let _scoparg_override = $crate::Override::<$param>::bits($value, $policy);
	};
	($param:ty, $value:expr $(,)?) => {
		let _scoparg_override = $crate::Override::<$param>::new($value);
	};
}
