//! Visit schedule definitions.

use common::{unit, DateTimeOf};
use serde::Serialize;

use super::{customer, employee, property};

/// [`DateTimeOf`] a scheduled property visit.
pub type VisitDateTime = DateTimeOf<unit::Visit>;

/// Request to create a new visit schedule on the server.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct NewSchedule {
    /// When the visit takes place.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub visit_schedule: VisitDateTime,

    /// Customer visiting the property.
    pub customer_id: customer::Id,

    /// Employee who books the visit.
    pub employee_id: employee::Id,

    /// Property to be visited.
    pub property_id: property::Id,
}
