//! [`Command`] for creating a new visit schedule.

use common::operations::Insert;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::NewSchedule,
    infra::{api, Api},
    Service,
};

use super::Command;

/// [`Command`] for creating a new visit schedule.
///
/// Marks the cached interests of the customer as stale once created.
#[derive(Clone, Copy, Debug)]
pub struct CreateSchedule(pub NewSchedule);

impl<A> Command<CreateSchedule> for Service<A>
where
    A: Api<Insert<NewSchedule>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    #[tracing::instrument(
        skip_all,
        fields(
            customer_id = %cmd.0.customer_id,
            employee_id = %cmd.0.employee_id,
            property_id = %cmd.0.property_id,
            visit_schedule = %cmd.0.visit_schedule.to_rfc3339(),
        ),
    )]
    async fn execute(&self, cmd: CreateSchedule) -> Result<Self::Ok, Self::Err> {
        let CreateSchedule(schedule) = cmd;

        self.api()
            .execute(Insert(schedule))
            .await
            .map_err(tracerr::wrap!())?;
        log::info!("schedule created");

        if self.cache().invalidate(schedule.customer_id).await {
            log::debug!("cached interests of customer marked stale");
        }
        Ok(())
    }
}

/// Error of [`CreateSchedule`] [`Command`] execution.
pub type ExecutionError = api::Error;

#[cfg(test)]
mod spec {
    use super::CreateSchedule;
    use crate::{
        domain::{schedule::VisitDateTime, NewSchedule, Status},
        infra::api,
        testing::{interest, MockApi},
        Command as _, Service,
    };

    fn schedule() -> NewSchedule {
        NewSchedule {
            visit_schedule: VisitDateTime::from_rfc3339("2025-06-01T07:30:00Z")
                .unwrap(),
            customer_id: 3.into(),
            employee_id: 5.into(),
            property_id: 7.into(),
        }
    }

    #[tokio::test]
    async fn sends_schedule_and_invalidates_cache() {
        let api = MockApi::default();
        let service = Service::new(&api);
        service
            .cache()
            .put(3.into(), vec![interest(1, 7, Status::Available)])
            .await;

        service.execute(CreateSchedule(schedule())).await.unwrap();

        assert_eq!(
            api.sent(),
            vec![
                br#"{"visit_schedule":"2025-06-01T07:30:00Z","customer_id":3,"employee_id":5,"property_id":7}"#
                    .to_vec(),
            ],
        );
        assert!(service.cache().is_stale(3.into()).await);
    }

    #[tokio::test]
    async fn keeps_cache_on_failure() {
        let api = MockApi::default();
        api.push_schedule(200, "{}");
        let service = Service::new(&api);
        service.cache().put(3.into(), vec![]).await;

        let err = service
            .execute(CreateSchedule(schedule()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            api::Error::Status { status: 200, .. },
        ));
        assert!(!service.cache().is_stale(3.into()).await);
    }
}
