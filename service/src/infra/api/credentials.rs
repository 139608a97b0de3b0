//! [`Credentials`] of [`Api`] requests.

#[cfg(doc)]
use super::Api;

use std::fmt;

use secrecy::{ExposeSecret as _, SecretString};

/// Provider of the credentials authorizing [`Api`] requests.
///
/// Asked on every request, so implementations may refresh the token.
pub trait Credentials: fmt::Debug + Send + Sync {
    /// Returns the bearer token to authorize a request with, if any.
    fn bearer_token(&self) -> Option<SecretString>;
}

/// [`Credentials`] with a fixed bearer token.
#[derive(Debug, Default)]
pub struct StaticToken(Option<SecretString>);

impl StaticToken {
    /// Creates new [`StaticToken`] [`Credentials`].
    ///
    /// [`None`] means the requests are sent unauthorized.
    #[must_use]
    pub fn new(token: Option<SecretString>) -> Self {
        Self(token)
    }
}

impl Credentials for StaticToken {
    fn bearer_token(&self) -> Option<SecretString> {
        self.0
            .as_ref()
            .map(|t| SecretString::from(t.expose_secret().to_owned()))
    }
}
