//! Booking [`Wizard`] of a property visit.

use common::Date;
use derive_more::{Display, Error};
use smart_default::SmartDefault;
use time::UtcOffset;

use super::{
    customer::{self, Customer},
    draft::DateChangePolicy,
    employee, interest,
    slot::{DisplayMode, TimeOfDay},
    Draft, Failure, Interest, NewSchedule, Notification, Status,
};

/// [`Wizard`] configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Offset of the time zone the visit times are picked in.
    #[default(UtcOffset::UTC)]
    pub utc_offset: UtcOffset,

    /// [`DisplayMode`] of the time labels in a newly opened [`Wizard`].
    pub display_mode: DisplayMode,

    /// [`DateChangePolicy`] applied when the visit date changes.
    pub date_change: DateChangePolicy,
}

/// Tab of an open [`Wizard`] dialog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    /// Picking the visit time.
    Time,

    /// Picking the property to visit.
    Property,
}

/// State of a [`Wizard`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum State {
    /// Dialog is closed, there is no [`Draft`].
    #[default]
    Idle,

    /// Picking the visit time.
    PickingTime,

    /// Picking the property to visit.
    PickingProperty,

    /// [`NewSchedule`] request is in flight.
    Submitting {
        /// Request being submitted.
        payload: NewSchedule,
    },

    /// Last submission failed, the [`Draft`] is kept.
    Failed {
        /// Request which failed, resubmitted as is on retry.
        payload: NewSchedule,

        /// Reason of the failure.
        failure: Failure,
    },
}

impl State {
    /// Returns the [`Tab`] shown in this [`State`], if the dialog is open.
    #[must_use]
    pub fn tab(&self) -> Option<Tab> {
        match self {
            Self::Idle => None,
            Self::PickingTime => Some(Tab::Time),
            Self::PickingProperty
            | Self::Submitting { .. }
            | Self::Failed { .. } => Some(Tab::Property),
        }
    }
}

/// Outcome of a finished submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Schedule is created, the [`Wizard`] is closed and reset.
    Created,

    /// Schedule is not created, the [`Draft`] is kept.
    Failed(Failure),
}

impl Outcome {
    /// Returns the [`Notification`] to show for this [`Outcome`].
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::Created => Notification::added(),
            Self::Failed(failure) => Notification::failed(failure),
        }
    }
}

/// Indicates whether a booking may be started for a visit on the provided
/// `date`.
///
/// Visits can't be booked in the past, nor for sold or junk customers.
#[must_use]
pub fn can_open(date: Date, today: Date, status: Status) -> bool {
    date >= today && !status.is_closed()
}

/// Error of opening a [`Wizard`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum OpenError {
    /// Visit date is before today.
    #[display("Cannot schedule a visit in the past")]
    PastDate,

    /// Customer doesn't accept visits anymore.
    #[display("Cannot schedule a visit for a `{_0}` customer")]
    ClosedCustomer(#[error(not(source))] Status),

    /// [`Wizard`] is already open.
    #[display("Booking is already in progress")]
    AlreadyOpen,
}

/// Error of submitting a [`Wizard`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum SubmitError {
    /// Another submission is in flight.
    #[display("Schedule is being submitted already")]
    Busy,

    /// Current [`State`] doesn't allow the action.
    #[display("Nothing to submit in the current state")]
    NotReady,

    /// Either time or property is not picked.
    #[display("Both visit time and property must be picked")]
    Incomplete,

    /// Last failure cannot be fixed by resubmitting as is.
    #[display("Failed schedule cannot be retried as is")]
    NotRetryable,

    /// No submission is in flight.
    #[display("No schedule is being submitted")]
    NotSubmitting,
}

/// Two-step wizard booking a property visit: time first, property second.
#[derive(Clone, Debug, Default)]
pub struct Wizard {
    /// [`Config`] of this [`Wizard`].
    config: Config,

    /// Current [`State`] of this [`Wizard`].
    state: State,

    /// [`Draft`] being edited, [`None`] only in [`State::Idle`].
    draft: Option<Draft>,
}

impl Wizard {
    /// Creates a new closed [`Wizard`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::Idle,
            draft: None,
        }
    }

    /// Returns [`Config`] of this [`Wizard`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current [`State`].
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the [`Tab`] to show, if the dialog is open.
    #[must_use]
    pub fn tab(&self) -> Option<Tab> {
        self.state.tab()
    }

    /// Returns the current [`Draft`], if the dialog is open.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Opens the dialog for booking a visit of the provided [`Customer`] on
    /// the provided `date`.
    ///
    /// # Errors
    ///
    /// - If the `date` is before `today`.
    /// - If the [`Customer`] is sold or junk.
    /// - If the dialog is open already.
    pub fn open(
        &mut self,
        date: Date,
        customer: Customer,
        employee_id: employee::Id,
        today: Date,
    ) -> Result<(), OpenError> {
        if self.state != State::Idle {
            return Err(OpenError::AlreadyOpen);
        }
        if date < today {
            return Err(OpenError::PastDate);
        }
        if customer.status.is_closed() {
            return Err(OpenError::ClosedCustomer(customer.status));
        }

        self.draft = Some(Draft::new(
            customer.id,
            employee_id,
            date,
            self.config.display_mode,
        ));
        self.state = State::PickingTime;
        Ok(())
    }

    /// Closes the dialog, discarding the [`Draft`].
    ///
    /// Ignored while submitting, returning `false`.
    pub fn close(&mut self) -> bool {
        if matches!(self.state, State::Submitting { .. }) {
            return false;
        }
        self.reset();
        true
    }

    /// Switches the [`DisplayMode`] of the time labels.
    pub fn select_display_mode(&mut self, mode: DisplayMode) {
        self.config.display_mode = mode;
        if let Some(draft) = &mut self.draft {
            draft.select_display_mode(mode);
        }
    }

    /// Changes the visit date of the open [`Draft`].
    ///
    /// Returns `false` if the dialog is closed or submitting. Changing the date
    /// after a failure returns to editing.
    pub fn set_date(&mut self, date: Date) -> bool {
        let Config {
            utc_offset,
            date_change,
            ..
        } = self.config;
        match (&self.state, &mut self.draft) {
            (
                State::PickingTime
                | State::PickingProperty
                | State::Failed { .. },
                Some(draft),
            ) => {
                draft.set_date(date, utc_offset, date_change);
                if matches!(self.state, State::Failed { .. }) {
                    self.state = State::PickingProperty;
                }
                true
            }
            _ => false,
        }
    }

    /// Selects the visit time by its label.
    ///
    /// Only possible on the time [`Tab`]. A label which doesn't parse clears
    /// the selected time and returns [`None`].
    pub fn select_slot(&mut self, label: &str) -> Option<TimeOfDay> {
        if self.state != State::PickingTime {
            return None;
        }
        let offset = self.config.utc_offset;
        self.draft.as_mut()?.select_slot(label, offset)
    }

    /// Moves from the time [`Tab`] to the property one.
    ///
    /// Doesn't require a time to be selected.
    pub fn next(&mut self) -> bool {
        if self.state != State::PickingTime {
            return false;
        }
        self.state = State::PickingProperty;
        true
    }

    /// Moves back to the time [`Tab`], keeping the [`Draft`].
    pub fn back(&mut self) -> bool {
        match self.state {
            State::PickingProperty | State::Failed { .. } => {
                self.state = State::PickingTime;
                true
            }
            State::Idle | State::PickingTime | State::Submitting { .. } => {
                false
            }
        }
    }

    /// Starts loading the property rows.
    ///
    /// Returns ID of the customer to load the [`Interest`]s of, or [`None`]
    /// if not on the property [`Tab`]. Reloading after a failure drops the
    /// selected row and returns to editing.
    pub fn begin_load(&mut self) -> Option<customer::Id> {
        if !matches!(
            self.state,
            State::PickingProperty | State::Failed { .. },
        ) {
            return None;
        }
        let draft = self.draft.as_mut()?;
        draft.picker_mut().begin_load();
        let id = draft.customer_id();
        self.state = State::PickingProperty;
        Some(id)
    }

    /// Applies loaded property rows.
    pub fn finish_load(&mut self, result: Result<Vec<Interest>, String>) {
        if let Some(draft) = &mut self.draft {
            draft.picker_mut().finish_load(result);
        }
    }

    /// Selects the property row of the provided [`Interest`].
    ///
    /// Returns `false` if not on the property [`Tab`], or the row is not
    /// selectable. Selecting after a failure returns to editing.
    pub fn select_row(&mut self, id: interest::Id) -> bool {
        if !matches!(
            self.state,
            State::PickingProperty | State::Failed { .. },
        ) {
            return false;
        }
        let selected = self
            .draft
            .as_mut()
            .is_some_and(|d| d.picker_mut().select_row(id));
        if selected {
            self.state = State::PickingProperty;
        }
        selected
    }

    /// Starts submitting the [`Draft`].
    ///
    /// # Errors
    ///
    /// - If another submission is in flight.
    /// - If not on the property [`Tab`].
    /// - If either time or property is not picked.
    pub fn begin_submit(&mut self) -> Result<NewSchedule, SubmitError> {
        match self.state {
            State::PickingProperty | State::Failed { .. } => {}
            State::Submitting { .. } => return Err(SubmitError::Busy),
            State::Idle | State::PickingTime => {
                return Err(SubmitError::NotReady)
            }
        }
        let payload = self
            .draft
            .as_ref()
            .and_then(Draft::payload)
            .ok_or(SubmitError::Incomplete)?;
        self.state = State::Submitting { payload };
        Ok(payload)
    }

    /// Resubmits the very same request which failed last time.
    ///
    /// # Errors
    ///
    /// - If another submission is in flight.
    /// - If the last submission didn't fail.
    /// - If the failure cannot be fixed by retrying.
    pub fn retry(&mut self) -> Result<NewSchedule, SubmitError> {
        let payload = match &self.state {
            State::Failed { payload, failure } if failure.is_retryable() => {
                *payload
            }
            State::Failed { .. } => return Err(SubmitError::NotRetryable),
            State::Submitting { .. } => return Err(SubmitError::Busy),
            State::Idle | State::PickingTime | State::PickingProperty => {
                return Err(SubmitError::NotReady)
            }
        };
        self.state = State::Submitting { payload };
        Ok(payload)
    }

    /// Applies the result of the in-flight submission.
    ///
    /// On success the [`Wizard`] is closed and reset, on failure the
    /// [`Draft`] is kept for editing or retrying.
    ///
    /// # Errors
    ///
    /// If no submission is in flight.
    pub fn finish_submit(
        &mut self,
        result: Result<(), Failure>,
    ) -> Result<Outcome, SubmitError> {
        let State::Submitting { payload } = self.state else {
            return Err(SubmitError::NotSubmitting);
        };
        Ok(match result {
            Ok(()) => {
                self.reset();
                Outcome::Created
            }
            Err(failure) => {
                self.state = State::Failed {
                    payload,
                    failure: failure.clone(),
                };
                Outcome::Failed(failure)
            }
        })
    }

    /// Discards the [`Draft`] and closes the dialog.
    fn reset(&mut self) {
        self.draft = None;
        self.state = State::Idle;
    }
}
