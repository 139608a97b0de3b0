//! [`Command`] definition.

pub mod create_schedule;
pub mod load_properties;
pub mod submit_booking;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_schedule::CreateSchedule, load_properties::LoadProperties,
    submit_booking::SubmitBooking,
};
