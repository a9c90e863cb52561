//! `serde` support for [`Opt`].
//!
//! An `Opt` serializes as its explicit value or `null`. Combined with
//! `#[serde(default)]`, a missing field deserializes to a holder that defers
//! to the scoped default.

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::opt::Opt;
use crate::param::Param;

impl<P: Param> Serialize for Opt<P>
where
	P::Value: Serialize,
{
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.explicit().serialize(serializer)
	}
}

impl<'de, P: Param> Deserialize<'de> for Opt<P>
where
	P::Value: Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Option::<P::Value>::deserialize(deserializer).map(Self::from)
	}
}
