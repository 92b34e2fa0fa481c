pub mod response_types;
pub use response_types::*;

use serde::{Deserialize, Serialize};

use crate::endpoints::endpoint::{Endpoint, PostEndpoint, has_value};
use crate::types::{ParamMap, Request};

pub const URL_PROP_NAME: &str = "phone";
pub const MISSING_PHONE: &str = "The phone parameter is required.";

/// Phone number validation.
pub struct PhoneEndpoint;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PhoneParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 0 to 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strictness: Option<u8>,
    /// Country hint(s) for numbers without a dialing code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl PhoneParams {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::default()
        }
    }
}

impl Endpoint for PhoneEndpoint {
    type Params = PhoneParams;
    type UpdateParams = ParamMap;
    type Response = PhoneResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !has_value(request, "phone") {
            errors.push(MISSING_PHONE.to_string());
        }
        errors
    }
}

impl PostEndpoint for PhoneEndpoint {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BASE_URL;
    use crate::types::Config;
    use serde_json::json;

    fn untyped(params: PhoneParams) -> Request {
        Request::<PhoneParams>::new(Config::json())
            .request_parameters(params)
            .to_param_request()
            .unwrap()
    }

    #[test]
    fn test_validate_params() {
        assert!(PhoneEndpoint::validate_params(&untyped(PhoneParams::new("18001234567"))).is_empty());
        assert_eq!(
            PhoneEndpoint::validate_params(&untyped(PhoneParams::new(""))),
            vec![MISSING_PHONE.to_string()]
        );
        assert_eq!(
            PhoneEndpoint::validate_params(&untyped(PhoneParams {
                country: Some("US".to_string()),
                ..PhoneParams::default()
            })),
            vec![MISSING_PHONE.to_string()]
        );
    }

    #[test]
    fn test_which_url() {
        let request = untyped(PhoneParams {
            strictness: Some(1),
            ..PhoneParams::new("+1 800 123 4567")
        });
        assert_eq!(
            PhoneEndpoint::which_url(BASE_URL, "privateKey", &request, URL_PROP_NAME),
            "https://www.ipqualityscore.com/api/json/phone/privateKey/%2B1%20800%20123%204567"
        );
    }

    #[test]
    fn test_response() {
        let response: PhoneResponse = serde_json::from_value(json!({
            "success": true,
            "formatted": "+18001234567",
            "valid": true,
            "VOIP": null,
            "prepaid": false,
            "dialing_code": 1,
            "associated_email_addresses": {"status": "ok", "emails": ["a@b.c"]},
            "request_id": "xyz"
        }))
        .unwrap();
        assert_eq!(response.voip, None);
        assert_eq!(response.prepaid, Some(false));
        assert_eq!(response.dialing_code, Some(1));
        assert_eq!(
            response.associated_email_addresses.unwrap().emails,
            Some(vec!["a@b.c".to_string()])
        );
    }
}
