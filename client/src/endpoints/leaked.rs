use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::endpoints::endpoint::{Endpoint, PK_CONFIG_NOT_ALLOWED, has_key};
use crate::params::{disallow_pk_configs, encode_uri_component, get_ip_address, param_to_string};
use crate::types::{ParamMap, Request, SuccessFlag};

pub const URL_PROP_NAME: &str = "leaked";
pub const INCORRECT_REQUEST_PARAMETERS: &str = "Both the type and value parameters are required.";

/// Leaked credential lookup.
pub struct LeakedEndpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeakedType {
    Email,
    Password,
    Username,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeakedParams {
    #[serde(rename = "type")]
    pub kind: LeakedType,
    pub value: String,
}

impl LeakedParams {
    pub fn new(kind: LeakedType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LeakedResponse {
    pub success: Option<SuccessFlag>,
    pub message: Option<String>,
    /// A single source name or a list of them.
    pub source: Option<JsonValue>,
    pub found: Option<bool>,
    pub request_id: Option<String>,
}

fn path_segment(request: &Request, name: &str) -> String {
    let raw = request
        .request_parameters
        .as_ref()
        .and_then(|params| params.get(name))
        .map(param_to_string);
    encode_uri_component(get_ip_address(raw.as_deref()))
}

impl Endpoint for LeakedEndpoint {
    type Params = LeakedParams;
    type UpdateParams = ParamMap;
    type Response = LeakedResponse;

    const URL_PROP_NAME: &'static str = URL_PROP_NAME;

    fn validate_params(request: &Request) -> Vec<String> {
        let mut errors = Vec::new();
        if !(has_key(request, "type") && has_key(request, "value")) {
            errors.push(INCORRECT_REQUEST_PARAMETERS.to_string());
        }
        if !disallow_pk_configs(request) {
            errors.push(PK_CONFIG_NOT_ALLOWED.to_string());
        }
        errors
    }

    /// The lookup type sits before the key and the looked-up value after it.
    fn which_url(base_url: &str, private_key: &str, request: &Request, url_prop_name: &str) -> String {
        let export_type = request.config.export_type;
        let kind = path_segment(request, "type");
        let value = path_segment(request, "value");
        format!("{base_url}/{export_type}/{url_prop_name}/{kind}/{private_key}/{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BASE_URL;
    use crate::types::Config;
    use serde_json::json;

    fn untyped(config: Config, params: LeakedParams) -> Request {
        Request::<LeakedParams>::new(config)
            .request_parameters(params)
            .to_param_request()
            .unwrap()
    }

    #[test]
    fn test_params_serialize_type_lowercase() {
        let request = untyped(Config::json(), LeakedParams::new(LeakedType::Username, "jdoe"));
        assert_eq!(
            JsonValue::Object(request.request_parameters.unwrap()),
            json!({"type": "username", "value": "jdoe"})
        );
    }

    #[test]
    fn test_validate_params() {
        let request = untyped(Config::json(), LeakedParams::new(LeakedType::Email, "value"));
        assert!(LeakedEndpoint::validate_params(&request).is_empty());

        let serde_json::Value::Object(params) = json!({"other_key": "value"}) else {
            unreachable!()
        };
        let request = Request::new(Config::json()).request_parameters(params);
        assert_eq!(
            LeakedEndpoint::validate_params(&request),
            vec![INCORRECT_REQUEST_PARAMETERS.to_string()]
        );
    }

    #[test]
    fn test_validate_only_needs_keys() {
        let serde_json::Value::Object(params) = json!({"type": "email", "value": ""}) else {
            unreachable!()
        };
        let request = Request::new(Config::json()).request_parameters(params);
        assert!(LeakedEndpoint::validate_params(&request).is_empty());
    }

    #[test]
    fn test_validate_pk_configs() {
        let request: Request = Request::new(Config::json().pk_as_get_or_post_param(true));
        assert_eq!(
            LeakedEndpoint::validate_params(&request),
            vec![
                INCORRECT_REQUEST_PARAMETERS.to_string(),
                PK_CONFIG_NOT_ALLOWED.to_string()
            ]
        );
    }

    #[test]
    fn test_which_url() {
        let request = untyped(Config::json(), LeakedParams::new(LeakedType::Email, "value"));
        assert_eq!(
            LeakedEndpoint::which_url(BASE_URL, "privateKey", &request, URL_PROP_NAME),
            "https://www.ipqualityscore.com/api/json/leaked/email/privateKey/value"
        );

        let request = untyped(Config::xml(), LeakedParams::new(LeakedType::Email, "foo@google.com"));
        assert_eq!(
            LeakedEndpoint::which_url(BASE_URL, "privateKey", &request, URL_PROP_NAME),
            "https://www.ipqualityscore.com/api/xml/leaked/email/privateKey/foo%40google.com"
        );
    }

    #[test]
    fn test_response_source_shapes() {
        let single: LeakedResponse =
            serde_json::from_str(r#"{"success":true,"found":true,"source":"breach"}"#).unwrap();
        assert_eq!(single.source, Some(json!("breach")));

        let many: LeakedResponse =
            serde_json::from_str(r#"{"success":"true","found":true,"source":["a","b"]}"#).unwrap();
        assert_eq!(many.source, Some(json!(["a", "b"])));
        assert!(many.success.unwrap().as_bool());
    }
}
