//! In-memory [`Api`] for tests.

use std::{collections::VecDeque, sync::Mutex};

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{customer, property::Property, Interest, NewSchedule, Status},
    infra::{api, Api},
};

/// Scripted [`Api`] recording the requests it receives.
///
/// Responds with an empty list of interests and `201 Created` on every
/// schedule unless scripted otherwise. Meant to be borrowed by a [`Service`].
///
/// [`Service`]: crate::Service
#[derive(Debug, Default)]
pub(crate) struct MockApi {
    /// Scripted responses to interest requests, error ones by status only.
    interests: Mutex<VecDeque<Result<Vec<Interest>, u16>>>,

    /// Scripted statuses and bodies of schedule responses.
    schedules: Mutex<VecDeque<(u16, String)>>,

    /// Number of interest requests received.
    interest_requests: Mutex<usize>,

    /// Serialized bodies of schedule requests received.
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockApi {
    /// Scripts the next response to an interest request.
    pub(crate) fn push_interests(&self, resp: Result<Vec<Interest>, u16>) {
        self.interests.lock().unwrap().push_back(resp);
    }

    /// Scripts the next response to a schedule request.
    pub(crate) fn push_schedule(&self, status: u16, body: &str) {
        self.schedules
            .lock()
            .unwrap()
            .push_back((status, body.to_owned()));
    }

    /// Returns the number of interest requests received.
    pub(crate) fn interest_requests(&self) -> usize {
        *self.interest_requests.lock().unwrap()
    }

    /// Returns the serialized bodies of schedule requests received.
    pub(crate) fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

impl Api<Select<By<Vec<Interest>, customer::Id>>> for MockApi {
    type Ok = Vec<Interest>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Interest>, customer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        *self.interest_requests.lock().unwrap() += 1;
        let resp = self.interests.lock().unwrap().pop_front();
        match resp.unwrap_or(Ok(vec![])) {
            Ok(interests) => Ok(interests),
            Err(status) => Err(tracerr::new!(api::Error::Status {
                status,
                body: String::new(),
            })),
        }
    }
}

impl Api<Insert<NewSchedule>> for MockApi {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(schedule): Insert<NewSchedule>,
    ) -> Result<Self::Ok, Self::Err> {
        self.sent
            .lock()
            .unwrap()
            .push(serde_json::to_vec(&schedule).unwrap());
        let resp = self.schedules.lock().unwrap().pop_front();
        let (status, body) = resp.unwrap_or((201, String::new()));
        if status == 201 {
            Ok(())
        } else {
            Err(tracerr::new!(api::Error::Status { status, body }))
        }
    }
}

/// Creates an [`Interest`] of customer `3` in the provided property.
pub(crate) fn interest(id: u64, property: u64, status: Status) -> Interest {
    Interest {
        id: id.into(),
        customer_id: 3.into(),
        property: Property {
            id: property.into(),
            uid: format!("RS-{property:03}").as_str().into(),
            status,
        },
    }
}
