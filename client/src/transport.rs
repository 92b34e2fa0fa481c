//! The HTTP round-trip, kept behind a trait so callers and tests can swap it.

use std::collections::BTreeMap;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::error::IpqsError;

pub type Headers = BTreeMap<String, String>;

/// Method, optional form body and headers of a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub method: Method,
    /// Form fields, sent as `multipart/form-data`.
    pub body: Option<Vec<(String, String)>>,
    pub headers: Headers,
}

/// Status code and buffered body of a completed call.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    status: u16,
    body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn text(self) -> String {
        self.body
    }

    pub fn json(self) -> Result<Value, IpqsError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Generic asynchronous HTTP fetch.
///
/// Failures to complete the round-trip are returned as `Err`; any HTTP status,
/// including errors, is a successful fetch.
pub trait Fetch: Send + Sync {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
        request: FetchRequest,
    ) -> BoxFuture<'a, Result<FetchResponse, IpqsError>>;
}

/// [`Fetch`] backed by a `reqwest::Client`.
#[derive(Clone, Default)]
pub struct ReqwestFetch {
    client: Client,
}

impl From<Client> for ReqwestFetch {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for ReqwestFetch {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
        request: FetchRequest,
    ) -> BoxFuture<'a, Result<FetchResponse, IpqsError>> {
        async move {
            let mut builder = self.client.request(request.method, url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(fields) = request.body {
                let form = fields
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value));
                builder = builder.multipart(form);
            }

            let response = builder.send().await.map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            Ok(FetchResponse::new(status, body))
        }
        .boxed()
    }
}
