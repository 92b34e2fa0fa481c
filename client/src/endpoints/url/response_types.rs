use serde::{Deserialize, Serialize};

use crate::types::{DomainAge, SuccessFlag};

/// Response type for `GET|POST /{export}/url`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UrlValidationResponse {
    pub success: Option<SuccessFlag>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(rename = "unsafe")]
    pub is_unsafe: Option<bool>,
    pub domain: Option<String>,
    pub ip_address: Option<String>,
    pub country_code: Option<String>,
    pub language_code: Option<String>,
    pub server: Option<String>,
    pub content_type: Option<String>,
    pub risk_score: Option<f64>,
    pub status_code: Option<i64>,
    pub page_size: Option<i64>,
    pub domain_rank: Option<i64>,
    pub dns_valid: Option<bool>,
    pub suspicious: Option<bool>,
    pub phishing: Option<bool>,
    pub malware: Option<bool>,
    pub parking: Option<bool>,
    pub spamming: Option<bool>,
    pub adult: Option<bool>,
    pub category: Option<String>,
    pub domain_age: Option<DomainAge>,
    pub redirected: Option<bool>,
    pub request_id: Option<String>,
}
