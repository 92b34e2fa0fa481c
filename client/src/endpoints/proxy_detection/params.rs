use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ProxyDetectionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_language: Option<String>,
    /// 0 to 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strictness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighter_penalties: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_public_access_points: Option<bool>,
    /// 0 to 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_strictness: Option<u8>,
    #[serde(flatten)]
    pub transaction: TransactionScoringParams,
    #[serde(flatten)]
    pub phone: PhoneReputationParams,
}

impl ProxyDetectionParams {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            ..Self::default()
        }
    }
}

/// Billing, shipping and payment fields used for transaction scoring.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TransactionScoringParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_bin: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_expiration_month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_expiration_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_times: Option<u32>,
}

/// Country codes that help the phone reputation check read local numbers.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PhoneReputationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_phone_country_code: Option<String>,
}
