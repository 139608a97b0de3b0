//! [`Failure`] of a booking and user-facing [`Notification`]s.

use std::fmt;

use itertools::Itertools as _;

/// Error attached to a single form field by the server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    /// Name of the field as sent over the wire, e.g. `visit_schedule`.
    pub field: String,

    /// Human-readable messages describing what's wrong with the field.
    pub messages: Vec<String>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.messages.join(" "))
    }
}

/// Reason a schedule wasn't created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Failure {
    /// Server rejected some of the fields.
    ///
    /// Fixed by editing the draft rather than retrying it.
    Fields(Vec<FieldError>),

    /// Any other failure: network, unexpected status, server error.
    General {
        /// Message provided by the server, if any.
        message: Option<String>,
    },
}

impl Failure {
    /// Message shown when the server provides none.
    pub const FALLBACK_MESSAGE: &'static str = "Failed to add schedule";

    /// Indicates whether resubmitting the very same draft may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fields(_) => false,
            Self::General { .. } => true,
        }
    }

    /// Returns the human-readable message of this [`Failure`].
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Fields(errors) if !errors.is_empty() => errors.iter().join("; "),
            Self::Fields(_) | Self::General { message: None } => {
                Self::FALLBACK_MESSAGE.to_owned()
            }
            Self::General {
                message: Some(message),
            } => message.clone(),
        }
    }
}

/// Level of a [`Notification`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    /// Operation succeeded.
    Success,

    /// Operation failed.
    Error,
}

/// Dismissible notification shown to the user after a submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    /// [`Level`] of this [`Notification`].
    pub level: Level,

    /// Text of this [`Notification`].
    pub message: String,

    /// Indicator whether this [`Notification`] offers a "Retry" action.
    pub retry: bool,
}

impl Notification {
    /// Message of a successful schedule creation.
    pub const ADDED: &'static str = "Added!";

    /// Creates a [`Notification`] about a created schedule.
    #[must_use]
    pub fn added() -> Self {
        Self {
            level: Level::Success,
            message: Self::ADDED.to_owned(),
            retry: false,
        }
    }

    /// Creates a [`Notification`] about the provided [`Failure`].
    #[must_use]
    pub fn failed(failure: &Failure) -> Self {
        Self {
            level: Level::Error,
            message: failure.message(),
            retry: failure.is_retryable(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if self.retry {
            f.write_str(" [Retry]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use super::{Failure, FieldError, Level, Notification};

    #[test]
    fn general_failure_is_retryable() {
        let failure = Failure::General {
            message: Some("Service unavailable".to_owned()),
        };
        let n = Notification::failed(&failure);

        assert_eq!(n.level, Level::Error);
        assert_eq!(n.message, "Service unavailable");
        assert!(n.retry);
        assert_eq!(n.to_string(), "Service unavailable [Retry]");
    }

    #[test]
    fn falls_back_to_generic_message() {
        let n = Notification::failed(&Failure::General { message: None });

        assert_eq!(n.message, Failure::FALLBACK_MESSAGE);
    }

    #[test]
    fn field_failure_is_not_retryable() {
        let failure = Failure::Fields(vec![
            FieldError {
                field: "visit_schedule".to_owned(),
                messages: vec!["Enter a valid date.".to_owned()],
            },
            FieldError {
                field: "property_id".to_owned(),
                messages: vec!["Invalid pk.".to_owned(), "Sold.".to_owned()],
            },
        ]);
        let n = Notification::failed(&failure);

        assert!(!n.retry);
        assert_eq!(
            n.message,
            "visit_schedule: Enter a valid date.; property_id: Invalid pk. Sold.",
        );
    }

    #[test]
    fn added_notification() {
        let n = Notification::added();

        assert_eq!(n.level, Level::Success);
        assert_eq!(n.to_string(), "Added!");
    }
}
