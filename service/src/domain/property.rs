//! [`Property`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::Status;

/// Property referenced by an [`Interest`].
///
/// [`Interest`]: super::Interest
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// Human-readable [`Uid`] of this [`Property`].
    #[serde(rename = "product_uid")]
    pub uid: Uid,

    /// Current [`Status`] of this [`Property`].
    pub status: Status,
}

/// ID of a [`Property`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

/// Display name of a [`Property`], unique among the properties.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Uid(String);

impl From<&str> for Uid {
    fn from(uid: &str) -> Self {
        Self(uid.to_owned())
    }
}
