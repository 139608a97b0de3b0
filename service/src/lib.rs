//! Service contains the property-visit booking logic of the client.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
#[cfg(test)]
mod testing;

#[cfg(doc)]
use infra::Api;
use infra::InterestCache;

pub use self::{command::Command, query::Query};

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<A> {
    /// [`Api`] of this [`Service`].
    api: A,

    /// Cached interests of customers.
    cache: InterestCache,
}

impl<A> Service<A> {
    /// Creates a new [`Service`] on top of the provided [`Api`].
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: InterestCache::default(),
        }
    }

    /// Returns [`Api`] of this [`Service`].
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns [`InterestCache`] of this [`Service`].
    #[must_use]
    pub fn cache(&self) -> &InterestCache {
        &self.cache
    }
}
