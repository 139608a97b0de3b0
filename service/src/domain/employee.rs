//! Employee definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// ID of an employee performing the booking.
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
