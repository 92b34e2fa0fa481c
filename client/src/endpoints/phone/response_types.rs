use serde::{Deserialize, Serialize};

use crate::types::{SuccessFlag, TransactionDetails};

/// Response type for `GET|POST /{export}/phone`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PhoneResponse {
    pub success: Option<SuccessFlag>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    pub formatted: Option<String>,
    pub local_format: Option<String>,
    pub valid: Option<bool>,
    pub fraud_score: Option<f64>,
    pub recent_abuse: Option<bool>,
    #[serde(rename = "VOIP")]
    pub voip: Option<bool>,
    pub prepaid: Option<bool>,
    pub risky: Option<bool>,
    pub active: Option<bool>,
    pub name: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub zip_code: Option<String>,
    pub dialing_code: Option<i64>,
    pub do_not_call: Option<bool>,
    pub leaked: Option<bool>,
    pub spammer: Option<bool>,
    pub active_status: Option<String>,
    pub user_activity: Option<String>,
    pub associated_email_addresses: Option<AssociatedEmailAddresses>,
    pub transaction_details: Option<TransactionDetails>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AssociatedEmailAddresses {
    pub status: Option<String>,
    pub emails: Option<Vec<String>>,
}
