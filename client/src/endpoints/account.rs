use serde::{Deserialize, Serialize};

use crate::endpoints::endpoint::{Endpoint, PK_CONFIG_NOT_ALLOWED};
use crate::params::disallow_pk_configs;
use crate::types::{ParamMap, Request, SuccessFlag};

pub const URL_PROP_NAME: &str = "account";

/// Credit usage of the account owning the private key.
pub struct CreditUsageEndpoint;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreditUsageResponse {
    pub success: SuccessFlag,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub credits: Option<i64>,
    #[serde(default)]
    pub usage: Option<i64>,
    #[serde(default)]
    pub proxy_usage: Option<i64>,
    #[serde(default)]
    pub email_usage: Option<i64>,
    #[serde(default)]
    pub fingerprint_usage: Option<i64>,
}

impl Endpoint for CreditUsageEndpoint {
    type Params = ParamMap;
    type UpdateParams = ParamMap;
    type Response = CreditUsageResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !disallow_pk_configs(request) {
            errors.push(PK_CONFIG_NOT_ALLOWED.to_string());
        }
        errors
    }

    fn which_url(base_url: &str, private_key: &str, request: &Request, url_prop_name: &str) -> String {
        format!(
            "{base_url}/{}/{url_prop_name}/{private_key}",
            request.config.export_type
        )
    }
}
