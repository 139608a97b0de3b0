//! [`Command`] for loading the property rows of a booking [`Wizard`].

use common::operations::{By, Select};
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{customer, Interest, Wizard},
    infra::{api, Api},
    query::Interests,
    Service,
};

use super::Command;

/// [`Command`] for loading the property rows of a booking [`Wizard`].
///
/// A load failure is kept in the [`Wizard`] rather than returned, so it can
/// be shown in place of the rows.
#[derive(Debug)]
pub struct LoadProperties<'w>(pub &'w mut Wizard);

impl<'w, A> Command<LoadProperties<'w>> for Service<A>
where
    A: Api<
        Select<By<Vec<Interest>, customer::Id>>,
        Ok = Vec<Interest>,
        Err = Traced<api::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: LoadProperties<'w>,
    ) -> Result<Self::Ok, Self::Err> {
        let LoadProperties(wizard) = cmd;

        let customer_id = wizard
            .begin_load()
            .ok_or(ExecutionError::NotPickingProperty)
            .map_err(tracerr::wrap!())?;

        let result = self
            .execute(Interests::of(customer_id))
            .await
            .map_err(|e| {
                log::warn!("failed to load interests: {e}");
                e.as_ref().to_string()
            });

        wizard.finish_load(result);
        Ok(())
    }
}

/// Error of [`LoadProperties`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Wizard`] is not on the property tab.
    #[display("Properties can only be loaded on the property tab")]
    NotPickingProperty,
}
