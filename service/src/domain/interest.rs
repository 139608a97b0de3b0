//! [`Interest`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::{customer, property::Property, Status};

/// Record of a customer being interested in a [`Property`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Interest {
    /// ID of this [`Interest`].
    pub id: Id,

    /// ID of the interested customer.
    pub customer_id: customer::Id,

    /// [`Property`] the customer is interested in.
    #[serde(rename = "product_id")]
    pub property: Property,
}

impl Interest {
    /// Indicates whether the [`Property`] of this [`Interest`] can still be
    /// visited.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.property.status != Status::Sold
    }
}

/// ID of an [`Interest`].
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

#[cfg(test)]
mod spec {
    use super::Interest;
    use crate::domain::Status;

    #[test]
    fn deserializes_api_shape() {
        let interest: Interest = serde_json::from_str(
            r#"{
                "id": 11,
                "customer_id": 3,
                "product_id": {
                    "id": 7,
                    "product_uid": "RS-007",
                    "status": "available",
                    "price": 120000
                },
                "created_at": "2025-05-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(u64::from(interest.id), 11);
        assert_eq!(u64::from(interest.customer_id), 3);
        assert_eq!(u64::from(interest.property.id), 7);
        assert_eq!(interest.property.uid.to_string(), "RS-007");
        assert_eq!(interest.property.status, Status::Available);
        assert!(interest.is_selectable());
    }

    #[test]
    fn sold_property_is_not_selectable() {
        let interest: Interest = serde_json::from_str(
            r#"{
                "id": 12,
                "customer_id": 3,
                "product_id": {"id": 8, "product_uid": "RS-008", "status": "sold"}
            }"#,
        )
        .unwrap();

        assert!(!interest.is_selectable());
    }
}
