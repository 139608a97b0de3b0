//! [`Query`] of a customer's [`Interest`]s.

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{customer, Interest},
    infra::{api, Api},
    Service,
};

use super::Query;

/// Queries the [`Interest`]s of a customer.
///
/// Served from the [`InterestCache`] while it holds a fresh entry.
///
/// [`InterestCache`]: crate::infra::InterestCache
#[derive(Clone, Copy, Debug)]
pub struct Interests {
    /// ID of the customer to query the [`Interest`]s of.
    pub customer_id: customer::Id,
}

impl Interests {
    /// Creates a new [`Interests`] [`Query`] of the provided customer.
    #[must_use]
    pub fn of(customer_id: customer::Id) -> Self {
        Self { customer_id }
    }
}

impl<A> Query<Interests> for Service<A>
where
    A: Api<
        Select<By<Vec<Interest>, customer::Id>>,
        Ok = Vec<Interest>,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Vec<Interest>;
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(customer_id = %query.customer_id))]
    async fn execute(&self, query: Interests) -> Result<Self::Ok, Self::Err> {
        let Interests { customer_id } = query;

        if let Some(interests) = self.cache().get(customer_id).await {
            log::debug!("served {} interests from cache", interests.len());
            return Ok(interests);
        }

        let interests = self
            .api()
            .execute(Select(By::new(customer_id)))
            .await
            .map_err(tracerr::wrap!())?;
        log::debug!("loaded {} interests", interests.len());

        self.cache().put(customer_id, interests.clone()).await;
        Ok(interests)
    }
}

#[cfg(test)]
mod spec {
    use super::Interests;
    use crate::{
        domain::Status,
        testing::{interest, MockApi},
        Query as _, Service,
    };

    #[tokio::test]
    async fn caches_loaded_interests() {
        let api = MockApi::default();
        api.push_interests(Ok(vec![interest(1, 7, Status::Available)]));
        let service = Service::new(&api);

        let first = service.execute(Interests::of(3.into())).await.unwrap();
        let second = service.execute(Interests::of(3.into())).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.interest_requests(), 1);
    }

    #[tokio::test]
    async fn reloads_stale_interests() {
        let api = MockApi::default();
        api.push_interests(Ok(vec![interest(1, 7, Status::Available)]));
        api.push_interests(Ok(vec![]));
        let service = Service::new(&api);

        _ = service.execute(Interests::of(3.into())).await.unwrap();
        assert!(service.cache().invalidate(3.into()).await);
        let reloaded = service.execute(Interests::of(3.into())).await.unwrap();

        assert!(reloaded.is_empty());
        assert_eq!(api.interest_requests(), 2);
    }

    #[tokio::test]
    async fn does_not_cache_failures() {
        let api = MockApi::default();
        api.push_interests(Err(500));
        api.push_interests(Ok(vec![]));
        let service = Service::new(&api);

        assert!(service.execute(Interests::of(3.into())).await.is_err());
        assert!(service.execute(Interests::of(3.into())).await.is_ok());
        assert_eq!(api.interest_requests(), 2);
    }
}
