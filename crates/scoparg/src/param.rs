//! Parameter identities.
//!
//! A parameter identity is a type that is never instantiated. It names one
//! default slot, fixes the slot's value type, and decides how a thread's slot
//! is seeded the first time that thread touches it.

use std::thread::LocalKey;

use crate::slot::Slot;

/// How a parameter's slot obtains its initial value on each thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitPolicy {
	/// `Default::default()` of the value type.
	Zero,
	/// A declared constant expression.
	Constant,
	/// A zero-argument function, evaluated when the slot is seeded.
	Producer,
}

/// Identity of one scoped default.
///
/// Implement with `#[derive(Param)]` or [`param!`](crate::param!); both
/// generate a dedicated `thread_local!` inside [`Param::slot`], which is what
/// keeps two identities from ever sharing storage. Implementing this trait by
/// hand is possible but [`Param::slot`] must then return a `thread_local!` key
/// owned by this identity alone.
///
/// Identities are variant-less enums; the derive rejects anything that could
/// be instantiated.
///
/// ```compile_fail
/// use scoparg::Param;
///
/// #[derive(Param)]
/// #[param(value = u8)]
/// struct Marker;
/// ```
///
/// ```compile_fail
/// use scoparg::Param;
///
/// #[derive(Param)]
/// #[param(value = u8)]
/// enum Marker {
/// 	Only,
/// }
/// ```
pub trait Param: 'static {
	/// The type callers receive when an [`Opt`](crate::Opt) resolves.
	type Value: Clone + 'static;

	/// Diagnostic name, module-qualified by default.
	const NAME: &'static str;

	/// Which kind of initializer [`Param::initial`] is.
	const POLICY: InitPolicy;

	/// Produces the value a thread's slot starts with.
	///
	/// Must not touch this parameter's own slot; doing so re-enters the
	/// thread-local initializer and panics.
	fn initial() -> Self::Value;

	/// The thread-local slot backing this identity.
	#[doc(hidden)]
	fn slot() -> &'static LocalKey<Slot<Self::Value>>;
}

/// Declares a parameter identity without the derive macro.
///
/// ```
/// use scoparg::{InitPolicy, Param, param};
///
/// fn default_name() -> String {
/// 	"anonymous".into()
/// }
///
/// param!(pub Retries: u32);
/// param!(pub Timeout: u64 = 30u64);
/// param!(pub User: String => default_name);
///
/// assert_eq!(Retries::POLICY, InitPolicy::Zero);
/// assert_eq!(Timeout::initial(), 30);
/// assert_eq!(User::initial(), "anonymous");
/// ```
#[macro_export]
macro_rules! param {
	(@declare [$($meta:tt)*] $vis:vis $name:ident: $ty:ty, $policy:ident, $initial:expr) => {
		$($meta)*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {}

		impl $crate::Param for $name {
			type Value = $ty;

			const NAME: &'static str = ::core::concat!(::core::module_path!(), "::", ::core::stringify!($name));
			const POLICY: $crate::InitPolicy = $crate::InitPolicy::$policy;

			fn initial() -> $ty {
				$initial
			}

			fn slot() -> &'static ::std::thread::LocalKey<$crate::Slot<$ty>> {
				::std::thread_local! {
					static SLOT: $crate::Slot<$ty> = $crate::Slot::seeded::<$name>();
				}
				&SLOT
			}
		}
	};
	($(#[$meta:meta])* $vis:vis $name:ident: $ty:ty => $init:path) => {
		$crate::param!(@declare [$(#[$meta])*] $vis $name: $ty, Producer, $init());
	};
	($(#[$meta:meta])* $vis:vis $name:ident: $ty:ty = $value:expr) => {
		$crate::param!(@declare [$(#[$meta])*] $vis $name: $ty, Constant, ::core::convert::Into::<$ty>::into($value));
	};
	($(#[$meta:meta])* $vis:vis $name:ident: $ty:ty) => {
		$crate::param!(@declare [$(#[$meta])*] $vis $name: $ty, Zero, <$ty as ::core::default::Default>::default());
	};
}
