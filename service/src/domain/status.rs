//! [`Status`] definitions.

use common::define_kind;

define_kind! {
    #[doc = "Sales status of a property or a customer."]
    #[case = "lowercase"]
    enum Status {
        #[doc = "Open for visits and deals."]
        Available = 1,

        #[doc = "Reserved by someone, but not closed yet."]
        Booked = 2,

        #[doc = "Deal is closed."]
        Sold = 3,

        #[doc = "Abandoned lead or withdrawn listing."]
        Junk = 4,
    }
}

impl Status {
    /// Indicates whether no further visits can be scheduled for an entity in
    /// this [`Status`].
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Sold | Self::Junk)
    }
}
