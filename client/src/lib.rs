//! Client for the IPQualityScore fraud and risk scoring API.
//!
//! Each endpoint family is reached through a method on [`IpqsClient`] that
//! returns a request builder with `get` and, where the API allows it, `post`.
//! Calls resolve to an [`ApiResponse`]: the JSON payload, an XML envelope or a
//! failure envelope.

pub mod client;
pub mod dates;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use client::{IpqsClient, IpqsRequestBuilder};
pub use endpoints::account::{CreditUsageEndpoint, CreditUsageResponse};
pub use endpoints::averages::{AveragesEndpoint, AveragesParams, AveragesResponse};
pub use endpoints::email::{EmailEndpoint, EmailParams, EmailResponse};
pub use endpoints::leaked::{LeakedEndpoint, LeakedParams, LeakedResponse, LeakedType};
pub use endpoints::phone::{PhoneEndpoint, PhoneParams, PhoneResponse};
pub use endpoints::postback::{
    PostbackEndpoint, PostbackParams, PostbackResponse, PostbackUpdateParams,
};
pub use endpoints::proxy_detection::{
    ProxyDetectionEndpoint, ProxyDetectionParams, ProxyDetectionResponse,
};
pub use endpoints::report::{ReportEndpoint, ReportParams, ReportResponse};
pub use endpoints::requests::{
    RequestListEndpoint, RequestListParams, RequestListResponse, RequestListType,
    RequestListUpdateParams,
};
pub use endpoints::url::{UrlEndpoint, UrlParams, UrlValidationResponse};
pub use endpoints::{Endpoint, PostEndpoint};
pub use error::IpqsError;
pub use transport::{Fetch, FetchRequest, FetchResponse, ReqwestFetch};
pub use types::{ApiResponse, Config, ExportType, ParamMap, Request};
