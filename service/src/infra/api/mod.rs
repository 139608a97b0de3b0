//! [`Api`] of the CRM server.

mod credentials;
#[cfg(feature = "rest")]
pub mod rest;

use derive_more::{Display, Error as StdError, From};
use serde_json::Value;

use crate::domain::{failure::FieldError, Failure};

#[cfg(feature = "rest")]
pub use self::rest::Rest;
pub use self::credentials::{Credentials, StaticToken};

/// Operation of the CRM server [`Api`].
pub use common::Handler as Api;

/// [`Api`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request couldn't be performed or its response wasn't received.
    #[cfg(feature = "rest")]
    #[display("Request failed: {_0}")]
    #[from]
    Transport(reqwest::Error),

    /// Server responded with an unexpected status.
    #[display("Server responded with `{status}` status")]
    Status {
        /// HTTP status code of the response.
        status: u16,

        /// Raw body of the response.
        body: String,
    },

    /// Response body couldn't be decoded.
    #[display("Failed to decode response: {_0}")]
    #[from]
    Decode(serde_json::Error),
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        match err {
            Error::Status { status, body } => failure_of(*status, body),
            #[cfg(feature = "rest")]
            Error::Transport(_) => Self::General { message: None },
            Error::Decode(_) => Self::General { message: None },
        }
    }
}

/// Keys of a response body object holding a general error message.
const MESSAGE_KEYS: [&str; 3] = ["message", "detail", "error"];

/// Classifies the error response `body` of the provided `status`.
///
/// A general message is looked up first. Otherwise, a client error body
/// mapping fields to their messages is treated as field errors.
fn failure_of(status: u16, body: &str) -> Failure {
    let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(body) else {
        return Failure::General { message: None };
    };

    let message = MESSAGE_KEYS
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str));
    if let Some(message) = message {
        return Failure::General {
            message: Some(message.to_owned()),
        };
    }

    if (400..500).contains(&status) {
        let mut fields = obj
            .iter()
            .filter_map(|(field, v)| {
                let messages = match v {
                    Value::String(s) => vec![s.clone()],
                    Value::Array(items) => items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(ToOwned::to_owned)
                        .collect(),
                    Value::Null
                    | Value::Bool(_)
                    | Value::Number(_)
                    | Value::Object(_) => vec![],
                };
                (!messages.is_empty()).then(|| FieldError {
                    field: field.clone(),
                    messages,
                })
            })
            .collect::<Vec<_>>();
        if !fields.is_empty() {
            fields.sort_by(|a, b| a.field.cmp(&b.field));
            return Failure::Fields(fields);
        }
    }

    Failure::General { message: None }
}
