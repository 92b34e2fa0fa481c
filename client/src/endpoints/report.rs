use serde::{Deserialize, Serialize};

use crate::endpoints::endpoint::{Endpoint, PK_CONFIG_NOT_ALLOWED};
use crate::params::disallow_pk_configs;
use crate::types::{ParamMap, Request, SuccessFlag};

pub const URL_PROP_NAME: &str = "report";

/// Reports fraudulent activity back to the scoring service.
pub struct ReportEndpoint;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ReportParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ReportParams {
    pub fn ip(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportResponse {
    pub success: Option<SuccessFlag>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl Endpoint for ReportEndpoint {
    type Params = ReportParams;
    type UpdateParams = ParamMap;
    type Response = ReportResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !disallow_pk_configs(request) {
            errors.push(PK_CONFIG_NOT_ALLOWED.to_string());
        }
        errors
    }

    fn which_url(base_url: &str, private_key: &str, request: &Request, url_prop_name: &str) -> String {
        let export_type = request.config.export_type;
        format!("{base_url}/{export_type}/{url_prop_name}/{private_key}")
    }
}
