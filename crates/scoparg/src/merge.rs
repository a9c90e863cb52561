//! Named bitwise merge policies for flag-like defaults.

use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Values that support the bitwise operators used by [`BitMerge`].
///
/// Implemented for every type with `|`, `&`, `^` and `!` returning itself,
/// which covers the integer primitives, `bool` and `bitflags` types.
pub trait Bits:
	Clone + BitOr<Output = Self> + BitAnd<Output = Self> + BitXor<Output = Self> + Not<Output = Self>
{
}

impl<T> Bits for T where
	T: Clone + BitOr<Output = T> + BitAnd<Output = T> + BitXor<Output = T> + Not<Output = T>
{
}

/// How an override mask combines with the active default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitMerge {
	/// `current | mask`
	Union,
	/// `current & !mask`
	Clear,
	/// `current ^ mask`
	Toggle,
}

impl BitMerge {
	/// Applies the policy to `current` in place.
	pub fn apply<V: Bits>(self, current: &mut V, mask: V) {
		let merged = match self {
			Self::Union => current.clone() | mask,
			Self::Clear => current.clone() & !mask,
			Self::Toggle => current.clone() ^ mask,
		};
		*current = merged;
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(BitMerge::Union, 0b0101, 0b0011, 0b0111)]
	#[case(BitMerge::Clear, 0b0111, 0b0001, 0b0110)]
	#[case(BitMerge::Toggle, 0b0101, 0b0011, 0b0110)]
	#[case(BitMerge::Union, 0, 0, 0)]
	#[case(BitMerge::Clear, 0, 0b1111, 0)]
	fn test_policies_on_integers(
		#[case] policy: BitMerge,
		#[case] current: u8,
		#[case] mask: u8,
		#[case] expected: u8,
	) {
		let mut value = current;
		policy.apply(&mut value, mask);
		assert_eq!(value, expected);
	}

	#[test]
	fn test_policies_on_bool() {
		let mut flag = false;
		BitMerge::Union.apply(&mut flag, true);
		assert!(flag);
		BitMerge::Toggle.apply(&mut flag, true);
		assert!(!flag);
		BitMerge::Clear.apply(&mut flag, false);
		assert!(!flag);
	}

	#[test]
	fn test_toggle_twice_is_identity() {
		let mut value = 0xA5u16;
		BitMerge::Toggle.apply(&mut value, 0x0F0F);
		BitMerge::Toggle.apply(&mut value, 0x0F0F);
		assert_eq!(value, 0xA5);
	}
}
