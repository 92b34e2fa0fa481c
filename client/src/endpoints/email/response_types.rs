use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::types::{DomainAge, SuccessFlag};

/// Response type for `GET|POST /{export}/email`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailResponse {
    pub success: Option<SuccessFlag>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    pub valid: Option<bool>,
    pub disposable: Option<bool>,
    pub timed_out: Option<bool>,
    pub deliverability: Option<String>,
    pub catch_all: Option<bool>,
    pub leaked: Option<bool>,
    pub suspect: Option<bool>,
    pub smtp_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub first_name: Option<String>,
    pub common: Option<bool>,
    pub generic: Option<bool>,
    pub dns_valid: Option<bool>,
    pub honeypot: Option<bool>,
    pub spam_trap_score: Option<JsonValue>,
    pub recent_abuse: Option<bool>,
    pub fraud_score: Option<f64>,
    pub frequent_complainer: Option<bool>,
    pub suggested_domain: Option<String>,
    pub domain_velocity: Option<String>,
    pub user_activity: Option<String>,
    /// Shape depends on the account plan, kept as raw JSON.
    pub associated_names: Option<JsonValue>,
    pub associated_phone_numbers: Option<JsonValue>,
    pub first_seen: Option<FirstSeen>,
    pub domain_age: Option<DomainAge>,
    pub sanitized_email: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FirstSeen {
    pub human: Option<String>,
    pub timestamp: Option<i64>,
    pub iso: Option<String>,
}
