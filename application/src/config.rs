//! [`Config`]-related definitions.

use std::time::Duration;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use service::domain::{draft::DateChangePolicy, slot::DisplayMode};
use smart_default::SmartDefault;
use time::UtcOffset;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// CRM API configuration.
    #[serde(default)]
    pub api: Api,

    /// Booking configuration.
    #[serde(default)]
    pub booking: Booking,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// CRM API configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Api {
    /// Base URL of the CRM REST API.
    #[default("http://127.0.0.1:8000/api".to_owned())]
    pub base_url: String,

    /// Bearer token to authorize the requests with.
    pub token: Option<SecretString>,

    /// Timeout of a single request.
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl From<&Api> for service::infra::rest::Config {
    fn from(value: &Api) -> Self {
        Self {
            base_url: value.base_url.clone(),
            timeout: value.timeout,
        }
    }
}

/// Booking configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Booking {
    /// Offset of the time zone the visit times are picked in, e.g. `+07:00`.
    #[default(UtcOffset::UTC)]
    #[serde(deserialize_with = "deserialize_offset")]
    pub utc_offset: UtcOffset,

    /// Clock the time labels are shown in: `12` or `24`.
    pub display_mode: DisplayMode,

    /// What happens to the picked time once the visit date changes.
    pub date_change: DateChangePolicy,
}

impl From<Booking> for service::domain::wizard::Config {
    fn from(value: Booking) -> Self {
        let Booking {
            utc_offset,
            display_mode,
            date_change,
        } = value;
        Self {
            utc_offset,
            display_mode,
            date_change,
        }
    }
}

/// Deserializes a [`UtcOffset`] in the `+HH:MM` format.
fn deserialize_offset<'de, D>(deserializer: D) -> Result<UtcOffset, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    common::datetime::parse_offset(&raw).map_err(serde::de::Error::custom)
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use secrecy::ExposeSecret as _;
    use service::domain::{draft::DateChangePolicy, slot::DisplayMode};
    use time::{macros::offset, UtcOffset};

    use super::{Config, LogLevel};

    #[test]
    fn defaults() {
        let conf: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(conf.api.base_url, "http://127.0.0.1:8000/api");
        assert!(conf.api.token.is_none());
        assert_eq!(conf.api.timeout, None);
        assert_eq!(conf.booking.utc_offset, UtcOffset::UTC);
        assert_eq!(conf.booking.display_mode, DisplayMode::Twelve);
        assert_eq!(conf.booking.date_change, DateChangePolicy::Recompute);
        assert!(matches!(conf.log.level, LogLevel::Info));
    }

    #[test]
    fn parses_values() {
        let conf: Config = serde_json::from_str(
            r#"{
                "api": {"token": "t0k3n", "timeout": "5s"},
                "booking": {
                    "utc_offset": "+07:00",
                    "display_mode": "24",
                    "date_change": "keep_resolved"
                },
                "log": {"level": "DEBUG"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            conf.api.token.as_ref().map(|t| t.expose_secret().to_owned()),
            Some("t0k3n".to_owned()),
        );
        assert_eq!(conf.api.timeout, Some(Duration::from_secs(5)));
        assert_eq!(conf.booking.utc_offset, offset!(+7));
        assert_eq!(conf.booking.display_mode, DisplayMode::TwentyFour);
        assert_eq!(conf.booking.date_change, DateChangePolicy::KeepResolved);
        assert!(matches!(conf.log.level, LogLevel::Debug));
    }

    #[test]
    fn rejects_malformed_offset() {
        assert!(serde_json::from_str::<Config>(
            r#"{"booking": {"utc_offset": "7"}}"#,
        )
        .is_err());
    }
}
