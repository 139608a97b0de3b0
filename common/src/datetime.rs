//! Date and time utilities.

use std::{cmp::Ordering, marker::PhantomData, time::Duration};

use derive_more::{Debug, Display, Error};
use time::{
    format_description::well_known::Rfc3339, macros::format_description,
    OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
};

/// Calendar date without a time component.
pub type Date = time::Date;

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            inner: OffsetDateTime::now_utc(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`DateTime`] from a local wall-clock time.
    ///
    /// The `date` is taken at midnight in the provided `offset`, then
    /// `since_midnight` is added to it. Overflowing durations roll forward into
    /// the following days.
    ///
    /// [`None`] is returned if the result falls outside of years `0..=9999`.
    #[must_use]
    pub fn from_local(
        date: Date,
        offset: UtcOffset,
        since_midnight: Duration,
    ) -> Option<Self> {
        let inner = PrimitiveDateTime::new(date, Time::MIDNIGHT)
            .assume_offset(offset)
            .checked_add(since_midnight.try_into().ok()?)?
            .checked_to_offset(UtcOffset::UTC)?;
        (0..=9999).contains(&inner.year()).then_some(Self {
            inner,
            _of: PhantomData,
        })
    }

    /// Creates a new [`DateTime`] from the provided [RFC 3339] string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [RFC 3339] date and time.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    pub fn from_rfc3339(input: &str) -> Result<Self, ParseError> {
        let inner = OffsetDateTime::parse(input, &Rfc3339)
            .map_err(ParseError)?
            .to_offset(UtcOffset::UTC);
        Ok(Self {
            inner,
            _of: PhantomData,
        })
    }

    /// Returns the [`DateTime`] as an [RFC 3339] string in UTC.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.inner.format(&Rfc3339).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` as RFC 3339: {e}")
        })
    }

    /// Returns the calendar [`Date`] of this [`DateTime`] in the provided
    /// `offset`.
    #[must_use]
    pub fn date_at(&self, offset: UtcOffset) -> Date {
        self.inner.to_offset(offset).date()
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Returns today's [`Date`] in the provided `offset`.
#[must_use]
pub fn today(offset: UtcOffset) -> Date {
    DateTime::now().date_at(offset)
}

/// Parses a [`Date`] in a `YYYY-MM-DD` format.
///
/// # Errors
///
/// Returns an error if the `input` is not a valid date.
pub fn parse_date(input: &str) -> Result<Date, ParseError> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(ParseError)
}

/// Parses a [`UtcOffset`] in a `+HH:MM` format.
///
/// # Errors
///
/// Returns an error if the `input` is not a valid offset.
pub fn parse_offset(input: &str) -> Result<UtcOffset, ParseError> {
    UtcOffset::parse(
        input.trim(),
        format_description!(
            "[offset_hour sign:mandatory]:[offset_minute]"
        ),
    )
    .map_err(ParseError)
}

/// Error of parsing a date or time from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid date or time: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<DateTimeOf<Of>> for OffsetDateTime {
    fn from(dt: DateTimeOf<Of>) -> Self {
        dt.inner
    }
}

pub mod serde {
    //! Module providing integration with [`serde`] crate.
    //!
    //! [`serde`]: ::serde

    pub mod rfc3339 {
        //! Module providing serialization and deserialization of
        //! [`DateTimeOf`] as an [RFC 3339] string.
        //!
        //! [RFC 3339]: https://tools.ietf.org/html/rfc3339

        use ::serde::{de::Error, Deserialize as _, Deserializer, Serializer};

        use crate::DateTimeOf;

        /// Serializes the [`DateTimeOf`] as an [RFC 3339] string in UTC.
        ///
        /// # Errors
        ///
        /// Never errors on its own, only propagates the `serializer` errors.
        ///
        /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
        pub fn serialize<Of, S>(
            dt: &DateTimeOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_str(&dt.to_rfc3339())
        }

        /// Deserializes an [RFC 3339] string into a [`DateTimeOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid [RFC 3339] date.
        ///
        /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateTimeOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            let raw = String::deserialize(deserializer)?;
            DateTimeOf::from_rfc3339(&raw).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use time::macros::{date, offset};

    use super::{parse_date, parse_offset, DateTime};

    #[test]
    fn resolves_local_time_to_utc() {
        let dt = DateTime::from_local(
            date!(2025 - 06 - 01),
            offset!(+7),
            Duration::from_secs((14 * 60 + 30) * 60),
        )
        .unwrap();

        assert_eq!(dt.to_rfc3339(), "2025-06-01T07:30:00Z");
    }

    #[test]
    fn crosses_day_boundary_backwards() {
        let dt = DateTime::from_local(
            date!(2025 - 06 - 01),
            offset!(+9),
            Duration::from_secs(8 * 60 * 60),
        )
        .unwrap();

        assert_eq!(dt.to_rfc3339(), "2025-05-31T23:00:00Z");
        assert_eq!(dt.date_at(offset!(+9)), date!(2025 - 06 - 01));
    }

    #[test]
    fn rolls_overflowing_minutes_forward() {
        let dt = DateTime::from_local(
            date!(2025 - 06 - 01),
            offset!(UTC),
            Duration::from_secs((23 * 60 + 90) * 60),
        )
        .unwrap();

        assert_eq!(dt.to_rfc3339(), "2025-06-02T00:30:00Z");
    }

    #[test]
    fn refuses_out_of_range_results() {
        let late = Duration::from_secs((23 * 60 + 99) * 60);

        assert!(
            DateTime::from_local(date!(9999 - 12 - 31), offset!(UTC), late)
                .is_none(),
        );
        assert!(DateTime::from_local(
            date!(9999 - 12 - 31),
            offset!(-5),
            Duration::from_secs(22 * 60 * 60),
        )
        .is_none());
        assert!(DateTime::from_local(
            date!(0000 - 01 - 01),
            offset!(+9),
            Duration::ZERO,
        )
        .is_none());
        assert!(DateTime::from_local(
            date!(9999 - 12 - 31),
            offset!(UTC),
            Duration::from_secs(23 * 60 * 60),
        )
        .is_some());
    }

    #[test]
    fn rfc3339_round_trips_through_offset() {
        let dt = DateTime::from_rfc3339("2025-06-01T14:30:00+07:00").unwrap();

        assert_eq!(dt.to_rfc3339(), "2025-06-01T07:30:00Z");
    }

    #[test]
    fn parses_dates_and_offsets() {
        assert_eq!(parse_date("2025-06-01").unwrap(), date!(2025 - 06 - 01));
        assert!(parse_date("01/06/2025").is_err());

        assert_eq!(parse_offset("+07:00").unwrap(), offset!(+7));
        assert_eq!(parse_offset("-03:30").unwrap(), offset!(-3:30));
        assert!(parse_offset("7").is_err());
    }

    #[test]
    fn serializes_with_serde() {
        #[derive(serde::Deserialize, serde::Serialize)]
        struct Wrapper {
            #[serde(with = "super::serde::rfc3339")]
            at: DateTime,
        }

        let json = serde_json::to_string(&Wrapper {
            at: DateTime::from_rfc3339("2025-06-01T07:30:00Z").unwrap(),
        })
        .unwrap();
        assert_eq!(json, r#"{"at":"2025-06-01T07:30:00Z"}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at.to_rfc3339(), "2025-06-01T07:30:00Z");
    }
}
