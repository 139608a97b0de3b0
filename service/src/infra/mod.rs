//! Infrastructure layer.

pub mod api;
pub mod cache;

#[cfg(feature = "rest")]
pub use self::api::{rest, Rest};
pub use self::{api::Api, cache::InterestCache};
