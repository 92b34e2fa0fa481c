use serde::{Deserialize, Serialize};

use crate::dates::validate_dates;
use crate::endpoints::endpoint::{Endpoint, PK_CONFIG_NOT_ALLOWED};
use crate::params::disallow_pk_configs;
use crate::types::{Config, ParamMap, Request, SuccessFlag};

pub const URL_PROP_NAME: &str = "average";
pub const INCORRECT_DATE_PARAMETERS: &str =
    "The start_date and end_date parameters must be valid dates.";

/// Proxy fraud score averages, always requested as JSON.
pub struct AveragesEndpoint;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct AveragesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "transactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "subUserId", skip_serializing_if = "Option::is_none")]
    pub sub_user_id: Option<String>,
    #[serde(rename = "campaignID", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(rename = "subCampaignID", skip_serializing_if = "Option::is_none")]
    pub sub_campaign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gclid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "clickID", skip_serializing_if = "Option::is_none")]
    pub click_id: Option<String>,
    #[serde(rename = "conversionID", skip_serializing_if = "Option::is_none")]
    pub conversion_id: Option<String>,
}

impl AveragesParams {
    /// Wraps the parameters in a JSON request without private key placement flags.
    pub fn into_request(self) -> Request<AveragesParams> {
        Request::new(Config::json()).request_parameters(self)
    }
}

/// The averages payload has no fixed schema beyond `success`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AveragesResponse {
    #[serde(default)]
    pub success: Option<SuccessFlag>,
    #[serde(flatten)]
    pub fields: ParamMap,
}

impl Endpoint for AveragesEndpoint {
    type Params = AveragesParams;
    type UpdateParams = ParamMap;
    type Response = AveragesResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !validate_dates(request.request_parameters.as_ref(), &["start_date", "end_date"]) {
            errors.push(INCORRECT_DATE_PARAMETERS.to_string());
        }
        if !disallow_pk_configs(request) {
            errors.push(PK_CONFIG_NOT_ALLOWED.to_string());
        }
        errors
    }

    fn which_url(base_url: &str, private_key: &str, _request: &Request, _url_prop_name: &str) -> String {
        format!("{base_url}/{private_key}/proxy/average")
    }
}
