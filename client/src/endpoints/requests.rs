use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::dates::validate_dates;
use crate::endpoints::endpoint::{Endpoint, PostEndpoint, has_value};
use crate::types::Request;

pub const URL_PROP_NAME: &str = "requests";
pub const MISSING_TYPE: &str = "The type parameter is required.";
pub const INCORRECT_DATE_PARAMETERS: &str =
    "The start_date and stop_date parameters must be valid dates.";

/// Lists previously scored requests. The URL always ends in `list`.
pub struct RequestListEndpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestListType {
    Proxy,
    Email,
    Phone,
    DeviceTracker,
    MobileTracker,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct RequestListParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RequestListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_fraud_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fraud_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl RequestListParams {
    pub fn new(kind: RequestListType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct RequestListUpdateParams {
    #[serde(rename = "transactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<JsonValue>,
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
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
pub struct RequestListResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub requests: Option<Vec<JsonValue>>,
    pub current_page: Option<u32>,
    pub total_pages: Option<u32>,
    pub request_count: Option<u64>,
    pub max_results_per_page: Option<u32>,
    pub total_requests: Option<u64>,
    pub request_id: Option<JsonValue>,
}

impl Endpoint for RequestListEndpoint {
    type Params = RequestListParams;
    type UpdateParams = RequestListUpdateParams;
    type Response = RequestListResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !has_value(request, "type") {
            errors.push(MISSING_TYPE.to_string());
        }
        if !validate_dates(request.request_parameters.as_ref(), &["start_date", "stop_date"]) {
            errors.push(INCORRECT_DATE_PARAMETERS.to_string());
        }
        errors
    }
}

impl PostEndpoint for RequestListEndpoint {}
