pub mod params;
pub mod response_types;
pub use params::*;
pub use response_types::*;

use crate::endpoints::endpoint::{Endpoint, PostEndpoint};
use crate::types::{ParamMap, Request};

pub const URL_PROP_NAME: &str = "ip";

/// IP reputation and proxy detection, optionally with transaction scoring.
pub struct ProxyDetectionEndpoint;

impl Endpoint for ProxyDetectionEndpoint {
    type Params = ProxyDetectionParams;
    type UpdateParams = ParamMap;
    type Response = ProxyDetectionResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(_request: &Request) -> Vec<String> {
        Vec::new()
    }
}

impl PostEndpoint for ProxyDetectionEndpoint {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BASE_URL;
    use crate::types::Config;
    use serde_json::json;

    fn untyped(config: Config, params: ProxyDetectionParams) -> Request {
        Request::<ProxyDetectionParams>::new(config)
            .request_parameters(params)
            .to_param_request()
            .unwrap()
    }

    #[test]
    fn test_always_valid() {
        assert!(ProxyDetectionEndpoint::validate_params(&Request::default()).is_empty());
        let request = untyped(
            Config::json().pk_as_get_or_post_param(true),
            ProxyDetectionParams::new("8.8.8.8"),
        );
        assert!(ProxyDetectionEndpoint::validate_params(&request).is_empty());
    }

    #[test]
    fn test_which_url_by_pk_mode() {
        let request = untyped(Config::json(), ProxyDetectionParams::new("8.8.8.8"));
        assert_eq!(
            ProxyDetectionEndpoint::which_url(BASE_URL, "privateKey", &request, URL_PROP_NAME),
            "https://www.ipqualityscore.com/api/json/ip/privateKey/8.8.8.8"
        );

        let request = untyped(
            Config::json().pk_as_get_or_post_param(true),
            ProxyDetectionParams::new("8.8.8.8"),
        );
        assert_eq!(
            ProxyDetectionEndpoint::which_url(BASE_URL, "privateKey", &request, URL_PROP_NAME),
            "https://www.ipqualityscore.com/api/json/ip"
        );
    }

    #[test]
    fn test_params_flatten_transaction_fields() {
        let params = ProxyDetectionParams {
            strictness: Some(1),
            transaction: TransactionScoringParams {
                billing_email: Some("a@b.c".to_string()),
                order_amount: Some(12.5),
                ..TransactionScoringParams::default()
            },
            phone: PhoneReputationParams {
                billing_phone_country_code: Some("1".to_string()),
                ..PhoneReputationParams::default()
            },
            ..ProxyDetectionParams::new("8.8.8.8")
        };
        let request = untyped(Config::json(), params);
        assert_eq!(
            serde_json::Value::Object(request.request_parameters.unwrap()),
            json!({
                "ip": "8.8.8.8",
                "strictness": 1,
                "billing_email": "a@b.c",
                "order_amount": 12.5,
                "billing_phone_country_code": "1"
            })
        );
    }

    #[test]
    fn test_response() {
        let response: ProxyDetectionResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Success",
            "fraud_score": 0,
            "ISP": "Google",
            "Organization": "Google",
            "ASN": 15169,
            "proxy": false,
            "latitude": 37.39,
            "transaction_details": {"risk_score": 12, "valid_billing_email": true},
            "request_id": "abc"
        }))
        .unwrap();
        assert_eq!(response.isp.as_deref(), Some("Google"));
        assert_eq!(response.asn, Some(15169));
        assert_eq!(
            response.transaction_details.unwrap().valid_billing_email,
            Some(true)
        );
    }
}
