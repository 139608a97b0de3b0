//! REST [`Api`] implementation.

use std::{sync::Arc, time::Duration};

use common::operations::{By, Insert, Select};
use derive_more::Debug;
use reqwest::{RequestBuilder, StatusCode};
use secrecy::ExposeSecret as _;
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{customer, Interest, NewSchedule},
    infra::api::{self, Api, Credentials},
};

/// [`Rest`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the CRM REST API, e.g. `https://crm.example.com/api`.
    pub base_url: String,

    /// Timeout of a single request.
    ///
    /// [`None`] leaves the transport default in place.
    pub timeout: Option<Duration>,
}

/// REST client of the CRM server.
#[derive(Clone, Debug)]
pub struct Rest {
    /// Underlying HTTP client.
    #[debug(skip)]
    http: reqwest::Client,

    /// Base URL of the API, without a trailing slash.
    base_url: String,

    /// [`Credentials`] authorizing the requests.
    credentials: Arc<dyn Credentials>,
}

impl Rest {
    /// Creates a new [`Rest`] client with the provided [`Config`] and
    /// [`Credentials`].
    ///
    /// # Errors
    ///
    /// If failed to initialize the underlying HTTP client.
    pub fn new(
        conf: Config,
        credentials: Arc<dyn Credentials>,
    ) -> Result<Self, Traced<api::Error>> {
        let Config { base_url, timeout } = conf;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(tracerr::from_and_wrap!(=> api::Error))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            credentials,
        })
    }

    /// Returns the full URL of the provided endpoint `path`.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Sends the provided request with the [`Credentials`] attached,
    /// returning the response status and body.
    async fn send(
        &self,
        req: RequestBuilder,
    ) -> Result<(StatusCode, String), Traced<api::Error>> {
        let req = match self.credentials.bearer_token() {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        };

        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> api::Error))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(tracerr::from_and_wrap!(=> api::Error))?;
        log::debug!("CRM responded with `{status}`: {}", excerpt(&body));

        Ok((status, body))
    }
}

/// Shortens the response `body` for logging.
fn excerpt(body: &str) -> String {
    const MAX_CHARS: usize = 128;

    let mut out = body.chars().take(MAX_CHARS).collect::<String>();
    if body.chars().nth(MAX_CHARS).is_some() {
        out.push_str("...");
    }
    out
}

/// List of [`Interest`]s as returned by the server, either paginated or not.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InterestList {
    /// Plain list.
    Plain(Vec<Interest>),

    /// Single page of a paginated list.
    Paginated {
        /// [`Interest`]s on the page.
        results: Vec<Interest>,
    },
}

impl From<InterestList> for Vec<Interest> {
    fn from(list: InterestList) -> Self {
        match list {
            InterestList::Plain(items)
            | InterestList::Paginated { results: items } => items,
        }
    }
}

impl Api<Select<By<Vec<Interest>, customer::Id>>> for Rest {
    type Ok = Vec<Interest>;
    type Err = Traced<api::Error>;

    #[tracing::instrument(
        skip_all,
        fields(customer_id = %op.0.as_inner(), http.route = "interests/"),
    )]
    async fn execute(
        &self,
        op: Select<By<Vec<Interest>, customer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Select(by) = op;
        let customer_id = by.into_inner();

        let (status, body) = self
            .send(
                self.http
                    .get(self.endpoint("interests/"))
                    .query(&[("customer_id", customer_id)]),
            )
            .await
            .map_err(tracerr::wrap!())?;
        if !status.is_success() {
            return Err(tracerr::new!(api::Error::Status {
                status: status.as_u16(),
                body,
            }));
        }

        serde_json::from_str::<InterestList>(&body)
            .map(Into::into)
            .map_err(tracerr::from_and_wrap!(=> api::Error))
    }
}

impl Api<Insert<NewSchedule>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    #[tracing::instrument(
        skip_all,
        fields(customer_id = %op.0.customer_id, http.route = "schedules/"),
    )]
    async fn execute(
        &self,
        op: Insert<NewSchedule>,
    ) -> Result<Self::Ok, Self::Err> {
        let Insert(schedule) = op;
        let (status, body) = self
            .send(self.http.post(self.endpoint("schedules/")).json(&schedule))
            .await
            .map_err(tracerr::wrap!())?;

        // Only `201 Created` confirms the schedule.
        if status != StatusCode::CREATED {
            return Err(tracerr::new!(api::Error::Status {
                status: status.as_u16(),
                body,
            }));
        }
        Ok(())
    }
}
