//! Domain definitions.

pub mod customer;
pub mod draft;
pub mod employee;
pub mod failure;
pub mod interest;
pub mod picker;
pub mod property;
pub mod schedule;
pub mod slot;
mod status;
pub mod wizard;

pub use self::{
    draft::Draft,
    failure::{Failure, Notification},
    interest::Interest,
    picker::Picker,
    schedule::NewSchedule,
    slot::Slot,
    status::Status,
    wizard::Wizard,
};
