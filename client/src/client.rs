use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::{Client, Method};
use serde::Serialize;

use crate::endpoints::account::CreditUsageEndpoint;
use crate::endpoints::averages::{AveragesEndpoint, AveragesParams};
use crate::endpoints::email::{EmailEndpoint, EmailParams};
use crate::endpoints::leaked::{LeakedEndpoint, LeakedParams};
use crate::endpoints::phone::{PhoneEndpoint, PhoneParams};
use crate::endpoints::postback::{PostbackEndpoint, PostbackParams, PostbackUpdateParams};
use crate::endpoints::proxy_detection::{ProxyDetectionEndpoint, ProxyDetectionParams};
use crate::endpoints::report::{ReportEndpoint, ReportParams};
use crate::endpoints::requests::{RequestListEndpoint, RequestListParams, RequestListUpdateParams};
use crate::endpoints::url::{UrlEndpoint, UrlParams};
use crate::endpoints::{Endpoint, PostEndpoint};
use crate::error::IpqsError;
use crate::params::BASE_URL;
use crate::request::{GetResultParams, get_result};
use crate::transport::{Fetch, ReqwestFetch};
use crate::types::{ApiResponse, ParamMap, Request};

/// Builder for one call to an IPQS endpoint family
///
/// Holds the private key and the request until [`get`](IpqsRequestBuilder::get)
/// or, for endpoints that accept it, [`post`](IpqsRequestBuilder::post) is
/// called. A builder can be sent more than once.
///
/// # Type Parameters
///
/// * `E` - The endpoint family, which fixes the parameter and response types
pub struct IpqsRequestBuilder<'a, E: Endpoint> {
    client: &'a IpqsClient,
    private_key: String,
    request: Request<E::Params, E::UpdateParams>,
    _endpoint: PhantomData<E>,
}

impl From<Client> for IpqsClient {
    fn from(value: Client) -> Self {
        Self {
            transport: Arc::new(ReqwestFetch::from(value)),
            base_url: None,
        }
    }
}

/// A client for interacting with the IPQualityScore API
///
/// Wraps a [`Fetch`] transport, a reqwest-backed one unless another is
/// injected with [`with_transport`](IpqsClient::with_transport). Can be created
/// using `IpqsClient::new()` or by converting a reqwest::Client using
/// `Into<IpqsClient>`.
#[derive(Clone)]
pub struct IpqsClient {
    transport: Arc<dyn Fetch>,
    pub base_url: Option<String>,
}

impl Default for IpqsClient {
    fn default() -> Self {
        Self {
            transport: Arc::new(ReqwestFetch::default()),
            base_url: None,
        }
    }
}

impl IpqsClient {
    /// Creates a new client against the public API with a default reqwest::Client.
    pub fn new() -> IpqsClient {
        IpqsClient::default()
    }

    /// Points every request at `base_url` instead of the public API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Fetch>) -> Self {
        self.transport = transport;
        self
    }

    /// Runs one request through the shared pipeline for endpoint `E`.
    ///
    /// Returns `None` for methods other than GET and POST. Parameters that do
    /// not serialize to a JSON object come back as a failure response.
    pub async fn send<E, P, U>(
        &self,
        method: Method,
        private_key: &str,
        request: &Request<P, U>,
    ) -> Option<ApiResponse>
    where
        E: Endpoint,
        P: Serialize,
        U: Serialize,
    {
        let request = match request.to_param_request() {
            Ok(request) => request,
            Err(err) => return Some(ApiResponse::from(err)),
        };
        let base_url = self.base_url.as_deref().unwrap_or(BASE_URL);
        get_result(
            self.transport.as_ref(),
            GetResultParams {
                method,
                private_key,
                params: &request,
                validate_fn: E::validate_params,
                url_fn: E::which_url,
                url_prop_name: E::URL_PROP_NAME,
                base_url,
            },
        )
        .await
    }

    fn builder<E: Endpoint>(
        &self,
        private_key: impl Into<String>,
        request: Request<E::Params, E::UpdateParams>,
    ) -> IpqsRequestBuilder<'_, E> {
        IpqsRequestBuilder {
            client: self,
            private_key: private_key.into(),
            request,
            _endpoint: PhantomData,
        }
    }

    /// IP reputation and proxy detection (`/{export}/ip`). GET and POST.
    pub fn proxy_detection(
        &self,
        private_key: impl Into<String>,
        request: Request<ProxyDetectionParams>,
    ) -> IpqsRequestBuilder<'_, ProxyDetectionEndpoint> {
        self.builder(private_key, request)
    }

    /// Proxy fraud score averages (`/{key}/proxy/average`). Always JSON.
    pub fn averages(
        &self,
        private_key: impl Into<String>,
        params: AveragesParams,
    ) -> IpqsRequestBuilder<'_, AveragesEndpoint> {
        self.builder(private_key, params.into_request())
    }

    /// Conversion postbacks (`/{export}/postback/{key}/`). GET only.
    pub fn postback(
        &self,
        private_key: impl Into<String>,
        request: Request<PostbackParams, PostbackUpdateParams>,
    ) -> IpqsRequestBuilder<'_, PostbackEndpoint> {
        self.builder(private_key, request)
    }

    /// Fraud reports (`/{export}/report/{key}`). GET only.
    pub fn report(
        &self,
        private_key: impl Into<String>,
        request: Request<ReportParams>,
    ) -> IpqsRequestBuilder<'_, ReportEndpoint> {
        self.builder(private_key, request)
    }

    /// Email validation (`/{export}/email/{key}/{email}`). GET and POST.
    pub fn email_validation(
        &self,
        private_key: impl Into<String>,
        request: Request<EmailParams>,
    ) -> IpqsRequestBuilder<'_, EmailEndpoint> {
        self.builder(private_key, request)
    }

    /// Phone validation (`/{export}/phone/{key}/{phone}`). GET and POST.
    pub fn phone_validation(
        &self,
        private_key: impl Into<String>,
        request: Request<PhoneParams>,
    ) -> IpqsRequestBuilder<'_, PhoneEndpoint> {
        self.builder(private_key, request)
    }

    /// Malicious URL scan (`/{export}/url/{key}/{url}`). GET and POST.
    pub fn url_validation(
        &self,
        private_key: impl Into<String>,
        request: Request<UrlParams>,
    ) -> IpqsRequestBuilder<'_, UrlEndpoint> {
        self.builder(private_key, request)
    }

    /// Past requests (`/{export}/requests/{key}/list`). GET and POST.
    pub fn request_lists(
        &self,
        private_key: impl Into<String>,
        request: Request<RequestListParams, RequestListUpdateParams>,
    ) -> IpqsRequestBuilder<'_, RequestListEndpoint> {
        self.builder(private_key, request)
    }

    /// Account credit usage (`/{export}/account/{key}`). Parameters are never sent.
    pub fn credit_usage(
        &self,
        private_key: impl Into<String>,
        request: Request<ParamMap>,
    ) -> IpqsRequestBuilder<'_, CreditUsageEndpoint> {
        self.builder(private_key, request)
    }

    /// Leaked credential lookup (`/{export}/leaked/{type}/{key}/{value}`).
    pub fn leaked_report(
        &self,
        private_key: impl Into<String>,
        request: Request<LeakedParams>,
    ) -> IpqsRequestBuilder<'_, LeakedEndpoint> {
        self.builder(private_key, request)
    }
}

impl<E: Endpoint> IpqsRequestBuilder<'_, E> {
    async fn dispatch(&self, method: Method) -> ApiResponse {
        self.client
            .send::<E, _, _>(method.clone(), &self.private_key, &self.request)
            .await
            .unwrap_or_else(|| ApiResponse::from(IpqsError::UnsupportedMethod(method)))
    }

    /// Sends the request as a GET with parameters in the query string.
    pub async fn get(&self) -> ApiResponse {
        self.dispatch(Method::GET).await
    }

    /// Sends a GET and decodes a successful JSON payload into the endpoint's response type.
    pub async fn get_and_parse(&self) -> Result<E::Response, IpqsError> {
        self.get().await.parse()
    }
}

impl<E: PostEndpoint> IpqsRequestBuilder<'_, E> {
    /// Sends the request as a POST with parameters in a multipart form body.
    pub async fn post(&self) -> ApiResponse {
        self.dispatch(Method::POST).await
    }

    pub async fn post_and_parse(&self) -> Result<E::Response, IpqsError> {
        self.post().await.parse()
    }
}
