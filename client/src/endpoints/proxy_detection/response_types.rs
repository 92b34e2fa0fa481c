use serde::{Deserialize, Serialize};

use crate::types::{SuccessFlag, TransactionDetails};

/// Response type for `GET|POST /{export}/ip`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyDetectionResponse {
    pub success: Option<SuccessFlag>,
    pub message: Option<String>,
    pub request_id: Option<String>,
    pub errors: Option<Vec<String>>,
    pub proxy: Option<bool>,
    pub host: Option<String>,
    #[serde(rename = "ISP")]
    pub isp: Option<String>,
    #[serde(rename = "Organization")]
    pub organization: Option<String>,
    #[serde(rename = "ASN")]
    pub asn: Option<i64>,
    pub country_code: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zip_code: Option<String>,
    pub is_crawler: Option<bool>,
    pub connection_type: Option<String>,
    pub recent_abuse: Option<bool>,
    pub abuse_velocity: Option<String>,
    pub bot_status: Option<bool>,
    pub vpn: Option<bool>,
    pub tor: Option<bool>,
    pub active_vpn: Option<bool>,
    pub active_tor: Option<bool>,
    pub mobile: Option<bool>,
    pub fraud_score: Option<f64>,
    pub operating_system: Option<String>,
    pub browser: Option<String>,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    pub transaction_details: Option<TransactionDetails>,
}
