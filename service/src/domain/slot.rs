//! Time [`Slot`]s of a visit and their [`Selector`].

use std::{fmt, str::FromStr, sync::LazyLock, time::Duration};

use common::{Date, DateTimeOf};
use regex::Regex;
use serde::Deserialize;
use time::UtcOffset;

use super::schedule::VisitDateTime;

/// Wall-clock time of a day, as parsed from a [`Slot`] label.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeOfDay {
    /// Hour in a 24-hour clock.
    hour: u8,

    /// Minute of the `hour`.
    ///
    /// Not range-checked: values above 59 roll forward into the next hours.
    minute: u8,
}

impl TimeOfDay {
    /// Parses a [`TimeOfDay`] from a [`Slot`] label.
    ///
    /// Accepted labels are `<hour> <minute>` optionally followed by `am` or
    /// `pm` (case-insensitive), where `hour` has one or two digits and `minute`
    /// has exactly two. With a meridiem the hour must be in `1..=12`, without
    /// it in `0..=23`.
    ///
    /// [`None`] is returned if the label doesn't match.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        /// Regular expression matching [`Slot`] labels.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?i)^(\d{1,2}) (\d{2})(am|pm)?$").expect("valid regex")
        });

        let caps = REGEX.captures(label.trim())?;
        let hour = caps[1].parse::<u8>().ok()?;
        let minute = caps[2].parse::<u8>().ok()?;

        let hour = match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
            Some(meridiem) => {
                if !(1..=12).contains(&hour) {
                    return None;
                }
                match (meridiem.as_str(), hour) {
                    ("am", 12) => 0,
                    ("pm", 12) | ("am", _) => hour,
                    _ => hour + 12,
                }
            }
            None if hour < 24 => hour,
            None => return None,
        };

        Some(Self { hour, minute })
    }

    /// Returns the hour of this [`TimeOfDay`] in a 24-hour clock.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute of this [`TimeOfDay`].
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the number of minutes passed since midnight.
    #[must_use]
    pub fn minute_of_day(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Formats this [`TimeOfDay`] as a label in the provided [`DisplayMode`].
    #[must_use]
    pub fn label(self, mode: DisplayMode) -> String {
        let Self { hour, minute } = self;
        match mode {
            DisplayMode::Twelve => {
                let meridiem = if hour < 12 { "am" } else { "pm" };
                let hour = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{hour} {minute:02}{meridiem}")
            }
            DisplayMode::TwentyFour => format!("{hour:02} {minute:02}"),
        }
    }

    /// Resolves this [`TimeOfDay`] on the provided [`Date`] in the provided
    /// `offset` into an absolute [`VisitDateTime`].
    ///
    /// [`None`] is returned if the result is out of the representable range.
    #[must_use]
    pub fn resolve(
        self,
        date: Date,
        offset: UtcOffset,
    ) -> Option<VisitDateTime> {
        DateTimeOf::from_local(
            date,
            offset,
            Duration::from_secs(u64::from(self.minute_of_day()) * 60),
        )
    }
}

/// Mode of displaying [`Slot`] labels.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
pub enum DisplayMode {
    /// 12-hour clock with `am`/`pm` meridiem, e.g. `2 30pm`.
    #[default]
    #[serde(rename = "12")]
    Twelve,

    /// 24-hour clock, e.g. `14 30`.
    #[serde(rename = "24")]
    TwentyFour,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Twelve => "12",
            Self::TwentyFour => "24",
        })
    }
}

impl FromStr for DisplayMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" => Ok(Self::Twelve),
            "24" => Ok(Self::TwentyFour),
            _ => Err("display mode must be either `12` or `24`"),
        }
    }
}

/// Bookable time of a visit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot(TimeOfDay);

impl Slot {
    /// Returns the [`TimeOfDay`] of this [`Slot`].
    #[must_use]
    pub const fn time(self) -> TimeOfDay {
        self.0
    }

    /// Returns the label of this [`Slot`] in the provided [`DisplayMode`].
    #[must_use]
    pub fn label(self, mode: DisplayMode) -> String {
        self.0.label(mode)
    }
}

/// Number of [`SLOTS`].
const SLOTS_COUNT: usize = 21;

/// Every bookable [`Slot`] of a day: from 08:00 till 18:00 each 30 minutes.
///
/// The same for every date, not checked against the existing bookings.
pub const SLOTS: [Slot; SLOTS_COUNT] = {
    let mut slots = [Slot(TimeOfDay { hour: 0, minute: 0 }); SLOTS_COUNT];
    let mut i = 0;
    let mut half_hours = 0_u8;
    while i < SLOTS_COUNT {
        slots[i] = Slot(TimeOfDay {
            hour: 8 + half_hours / 2,
            minute: (half_hours % 2) * 30,
        });
        i += 1;
        half_hours += 1;
    }
    slots
};

/// Single-choice selector of a [`Slot`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selector {
    /// [`DisplayMode`] the labels are rendered in.
    mode: DisplayMode,

    /// Currently selected [`TimeOfDay`], if any.
    selected: Option<TimeOfDay>,
}

impl Selector {
    /// Creates a new [`Selector`] rendering labels in the provided
    /// [`DisplayMode`].
    #[must_use]
    pub const fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            selected: None,
        }
    }

    /// Returns the current [`DisplayMode`].
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switches the [`DisplayMode`] without touching the selection.
    pub fn select_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Returns labels of all the [`SLOTS`] in the current [`DisplayMode`].
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        SLOTS.iter().map(|s| s.label(self.mode)).collect()
    }

    /// Selects the time denoted by the provided label, replacing the previous
    /// selection.
    ///
    /// A label which doesn't parse clears the selection and returns [`None`].
    pub fn select(&mut self, label: &str) -> Option<TimeOfDay> {
        self.selected = TimeOfDay::parse(label);
        self.selected
    }

    /// Drops the current selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Returns the currently selected [`TimeOfDay`], if any.
    #[must_use]
    pub const fn selected(&self) -> Option<TimeOfDay> {
        self.selected
    }

    /// Indicates whether the provided [`Slot`] is the selected one.
    #[must_use]
    pub fn is_selected(&self, slot: Slot) -> bool {
        self.selected.is_some_and(|t| t == slot.time())
    }
}
