//! Optional arguments that fall back to a scoped default.

use std::fmt;

use crate::param::Param;
use crate::registry;


/// An argument that is either supplied explicitly or resolved from the
/// current default of `P`.
///
/// Resolution never caches: a holder without a value reads the slot every
/// time it is resolved, so it observes overrides made after its creation.
/// A holder with a value ignores the slot entirely.
pub struct Opt<P: Param> {
	value: Option<P::Value>,
}

impl<P: Param> Opt<P> {
	/// A holder with no value; resolution defers to the default.
	#[must_use]
	pub const fn none() -> Self {
		Self { value: None }
	}

	/// A holder carrying an explicit value.
	#[must_use]
	pub const fn new(value: P::Value) -> Self {
		Self { value: Some(value) }
	}

	/// Builds the explicit value from anything convertible into it.
	#[must_use]
	pub fn make(arg: impl Into<P::Value>) -> Self {
		Self::new(arg.into())
	}

	/// Whether a value was supplied (and not cleared since).
	pub fn is_explicit(&self) -> bool {
		self.value.is_some()
	}

	/// Whether resolution will read the default.
	pub fn is_default(&self) -> bool {
		self.value.is_none()
	}

	/// The explicit value, if any.
	pub fn explicit(&self) -> Option<&P::Value> {
		self.value.as_ref()
	}

	/// Calls `f` with the resolved value without copying it.
	///
	/// Borrows either the explicit value or the live default slot.
	pub fn with<R>(&self, f: impl FnOnce(&P::Value) -> R) -> R {
		match &self.value {
			Some(value) => f(value),
			None => registry::with::<P, _>(f),
		}
	}

	/// Returns a copy of the resolved value.
	pub fn get(&self) -> P::Value {
		self.with(|value| value.clone())
	}

	/// Resolves by value.
	///
	/// An explicit value is moved out. Otherwise the default is copied, and
	/// the slot keeps its value for later resolutions.
	pub fn into_value(self) -> P::Value {
		match self.value {
			Some(value) => value,
			None => registry::get::<P>(),
		}
	}

	/// Discards the explicit value so later resolutions read the default.
	pub fn clear(&mut self) {
		self.value = None;
	}

	/// Supplies (or replaces) the explicit value.
	pub fn set(&mut self, value: P::Value) {
		self.value = Some(value);
	}

	/// Returns the explicit value without consulting the default.
	pub fn into_option(self) -> Option<P::Value> {
		self.value
	}
}

impl<P: Param> Default for Opt<P> {
	fn default() -> Self {
		Self::none()
	}
}

impl<P: Param> Clone for Opt<P> {
	fn clone(&self) -> Self {
		Self {
			value: self.value.clone(),
		}
	}
}

impl<P: Param> From<Option<P::Value>> for Opt<P> {
	fn from(value: Option<P::Value>) -> Self {
		Self { value }
	}
}

impl<P: Param> fmt::Debug for Opt<P>
where
	P::Value: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.value {
			Some(value) => f.debug_tuple("Opt").field(value).finish(),
			None => write!(f, "Opt(<default {}>)", P::NAME),
		}
	}
}
