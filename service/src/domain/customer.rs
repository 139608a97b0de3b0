//! Customer definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::Status;

/// ID of a customer.
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

/// Customer a visit is being scheduled for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Customer {
    /// ID of this [`Customer`].
    pub id: Id,

    /// Current [`Status`] of this [`Customer`].
    pub status: Status,
}
