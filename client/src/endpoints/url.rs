pub mod response_types;
pub use response_types::*;

use serde::{Deserialize, Serialize};

use crate::endpoints::endpoint::{Endpoint, PostEndpoint, has_value};
use crate::types::{ParamMap, Request};

pub const URL_PROP_NAME: &str = "url";
pub const MISSING_URL: &str = "The url parameter is required.";

/// Malicious URL scanning.
pub struct UrlEndpoint;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct UrlParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 0 to 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strictness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

impl UrlParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

impl Endpoint for UrlEndpoint {
    type Params = UrlParams;
    type UpdateParams = ParamMap;
    type Response = UrlValidationResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !has_value(request, "url") {
            errors.push(MISSING_URL.to_string());
        }
        errors
    }
}

impl PostEndpoint for UrlEndpoint {}
