pub mod response_types;
pub use response_types::*;

use serde::{Deserialize, Serialize};

use crate::endpoints::endpoint::{Endpoint, PostEndpoint, has_value};
use crate::types::{ParamMap, Request};

pub const URL_PROP_NAME: &str = "email";
pub const MISSING_EMAIL: &str = "The email parameter is required.";

/// Email validation.
pub struct EmailEndpoint;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct EmailParams {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_domain: Option<bool>,
    /// 0 to 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strictness: Option<u8>,
    /// 0 to 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_strictness: Option<u8>,
}

impl EmailParams {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

impl Endpoint for EmailEndpoint {
    type Params = EmailParams;
    type UpdateParams = ParamMap;
    type Response = EmailResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !has_value(request, "email") {
            errors.push(MISSING_EMAIL.to_string());
        }
        errors
    }
}

impl PostEndpoint for EmailEndpoint {}
