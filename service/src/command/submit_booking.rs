//! [`Command`] for submitting a booking [`Wizard`].

use common::operations::Insert;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        wizard::{Outcome, SubmitError},
        Failure, NewSchedule, Wizard,
    },
    infra::{api, Api},
    Service,
};

use super::{Command, CreateSchedule};

/// Way of submitting a [`Wizard`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Submit the current draft.
    Create,

    /// Resubmit the request which failed last time, as is.
    Retry,
}

/// [`Command`] for submitting a booking [`Wizard`] and applying the result.
///
/// A server rejection is not an error of this [`Command`], but an
/// [`Outcome::Failed`] leaving the [`Wizard`] open.
#[derive(Debug)]
pub struct SubmitBooking<'w> {
    /// [`Wizard`] to submit.
    pub wizard: &'w mut Wizard,

    /// [`Mode`] of submitting.
    pub mode: Mode,
}

impl<'w> SubmitBooking<'w> {
    /// Creates a [`SubmitBooking`] of the current draft.
    #[must_use]
    pub fn create(wizard: &'w mut Wizard) -> Self {
        Self {
            wizard,
            mode: Mode::Create,
        }
    }

    /// Creates a [`SubmitBooking`] retrying the last failed request.
    #[must_use]
    pub fn retry(wizard: &'w mut Wizard) -> Self {
        Self {
            wizard,
            mode: Mode::Retry,
        }
    }
}

impl<'w, A> Command<SubmitBooking<'w>> for Service<A>
where
    A: Api<Insert<NewSchedule>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitBooking<'w>,
    ) -> Result<Self::Ok, Self::Err> {
        let SubmitBooking { wizard, mode } = cmd;

        let payload = match mode {
            Mode::Create => wizard.begin_submit(),
            Mode::Retry => wizard.retry(),
        }
        .map_err(tracerr::wrap!())?;

        let result = self
            .execute(CreateSchedule(payload))
            .await
            .map_err(|e| {
                log::warn!("failed to create schedule: {e}");
                Failure::from(e.as_ref())
            });

        wizard.finish_submit(result).map_err(tracerr::wrap!())
    }
}

/// Error of [`SubmitBooking`] [`Command`] execution.
pub type ExecutionError = SubmitError;
