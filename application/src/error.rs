//! [`Error`]-related definitions.

use std::fmt;

use config::ConfigError;
use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::{
    command::load_properties,
    domain::{
        wizard::{OpenError, SubmitError},
        Failure,
    },
    infra::api,
};
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// Client [`Error`] reported to the user.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] with the provided `code` and `message`.
    #[must_use]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            backtrace: None,
        }
    }

    /// Create a new [`Error`] representing an internal error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self::new("INTERNAL_ERROR", msg.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for api::Error {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Status { .. } => {
                Some(Error::new("API_ERROR", Failure::from(self).message()))
            }
            Self::Transport(e) => Some(Error::new("UNREACHABLE", e.to_string())),
            Self::Decode(_) => None,
        }
    }
}

impl AsError for OpenError {
    fn try_as_error(&self) -> Option<Error> {
        let code = match self {
            Self::PastDate => "PAST_DATE",
            Self::ClosedCustomer(_) => "CLOSED_CUSTOMER",
            Self::AlreadyOpen => "ALREADY_OPEN",
        };
        Some(Error::new(code, self.to_string()))
    }
}

impl AsError for SubmitError {
    fn try_as_error(&self) -> Option<Error> {
        let code = match self {
            Self::Busy => "SUBMISSION_IN_PROGRESS",
            Self::Incomplete => "INCOMPLETE_BOOKING",
            Self::NotRetryable => "NOT_RETRYABLE",
            Self::NotReady | Self::NotSubmitting => return None,
        };
        Some(Error::new(code, self.to_string()))
    }
}

impl AsError for load_properties::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for ConfigError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error::new("INVALID_CONFIG", self.to_string()))
    }
}

#[cfg(test)]
mod spec {
    use service::{
        domain::wizard::{OpenError, SubmitError},
        infra::api,
    };

    use super::AsError as _;

    #[test]
    fn renders_server_message() {
        let err = api::Error::Status {
            status: 409,
            body: r#"{"message": "Slot is taken"}"#.to_owned(),
        };

        let err = err.as_error();

        assert_eq!(err.code, "API_ERROR");
        assert_eq!(err.to_string(), "[API_ERROR]: Slot is taken");
    }

    #[test]
    fn falls_back_to_generic_message() {
        let err = api::Error::Status {
            status: 500,
            body: String::new(),
        };

        assert_eq!(err.as_error().message, "Failed to add schedule");
    }

    #[test]
    fn maps_wizard_errors() {
        assert_eq!(OpenError::PastDate.as_error().code, "PAST_DATE");
        assert_eq!(SubmitError::NotRetryable.as_error().code, "NOT_RETRYABLE");
        assert_eq!(SubmitError::NotSubmitting.as_error().code, "INTERNAL_ERROR");
    }

    #[test]
    fn traced_error_keeps_code() {
        let err = tracerr::new!(OpenError::AlreadyOpen);

        let err = err.as_error();

        assert_eq!(err.code, "ALREADY_OPEN");
        assert!(err.backtrace.is_some());
    }
}
