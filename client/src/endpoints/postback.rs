use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::dates::validate_dates;
use crate::endpoints::endpoint::{Endpoint, PK_CONFIG_NOT_ALLOWED, has_key};
use crate::params::disallow_pk_configs;
use crate::types::{Request, SuccessFlag};

pub const URL_PROP_NAME: &str = "postback";
pub const INCORRECT_REQUEST_PARAMETERS: &str = "You must use either request_id, or type, or both.";
pub const INCORRECT_DATE_PARAMETERS: &str = "Your update parameters contained invalid dates.";

/// Updates a previously scored request with conversion data.
pub struct PostbackEndpoint;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PostbackParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Fields accepted under `update[...]`. Identifiers may be strings or numbers.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PostbackUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(rename = "ClickDate", skip_serializing_if = "Option::is_none")]
    pub click_date: Option<String>,
    #[serde(rename = "ConversionDate", skip_serializing_if = "Option::is_none")]
    pub conversion_date: Option<String>,
    #[serde(rename = "ConversionStatus", skip_serializing_if = "Option::is_none")]
    pub conversion_status: Option<JsonValue>,
    #[serde(rename = "TransactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<JsonValue>,
    #[serde(rename = "UserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<JsonValue>,
    #[serde(rename = "subUserID", skip_serializing_if = "Option::is_none")]
    pub sub_user_id: Option<JsonValue>,
    #[serde(rename = "campaignID", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<JsonValue>,
    #[serde(rename = "subCampaignID", skip_serializing_if = "Option::is_none")]
    pub sub_campaign_id: Option<JsonValue>,
    #[serde(rename = "publisherID", skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gclid: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<JsonValue>,
    #[serde(rename = "clickID", skip_serializing_if = "Option::is_none")]
    pub click_id: Option<JsonValue>,
    #[serde(rename = "conversionID", skip_serializing_if = "Option::is_none")]
    pub conversion_id: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PostbackResponse {
    pub success: Option<SuccessFlag>,
    pub message: Option<String>,
    pub fraud_score: Option<f64>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "ISP")]
    pub isp: Option<String>,
    #[serde(rename = "ASN")]
    pub asn: Option<i64>,
    pub organization: Option<String>,
    pub is_crawler: Option<bool>,
    pub timezone: Option<String>,
    pub mobile: Option<bool>,
    pub host: Option<String>,
    pub proxy: Option<bool>,
    pub vpn: Option<bool>,
    pub tor: Option<bool>,
    pub active_vpn: Option<bool>,
    pub active_tor: Option<bool>,
    pub recent_abuse: Option<bool>,
    pub bot_status: Option<bool>,
    pub connection_type: Option<String>,
    pub abuse_velocity: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub request_id: Option<String>,
}

impl Endpoint for PostbackEndpoint {
    type Params = PostbackParams;
    type UpdateParams = PostbackUpdateParams;
    type Response = PostbackResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !(has_key(request, "request_id") || has_key(request, "type")) {
            errors.push(INCORRECT_REQUEST_PARAMETERS.to_string());
        }
        if !validate_dates(request.update_parameters.as_ref(), &["ConversionDate", "ClickDate"]) {
            errors.push(INCORRECT_DATE_PARAMETERS.to_string());
        }
        if !disallow_pk_configs(request) {
            errors.push(PK_CONFIG_NOT_ALLOWED.to_string());
        }
        errors
    }

    fn which_url(base_url: &str, private_key: &str, request: &Request, url_prop_name: &str) -> String {
        let export_type = request.config.export_type;
        format!("{base_url}/{export_type}/{url_prop_name}/{private_key}/")
    }
}
