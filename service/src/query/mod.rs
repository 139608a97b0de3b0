//! [`Query`] definition.

pub mod interests;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::interests::Interests;
