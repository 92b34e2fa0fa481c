use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::IpqsError;

/// Untyped request or update parameters, kept in insertion order.
pub type ParamMap = Map<String, Value>;

/// Response serialization format requested from the API.
///
/// Deserializing an unknown value falls back to [`ExportType::Json`] instead of
/// failing, so a malformed config never aborts a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExportType {
    #[default]
    Json,
    Xml,
}

impl ExportType {
    /// Clamps a raw export type to `json` or `xml`, defaulting to `json`.
    pub fn sanitize(value: &str) -> Self {
        match value {
            "xml" => ExportType::Xml,
            _ => ExportType::Json,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportType::Json => "json",
            ExportType::Xml => "xml",
        }
    }
}

impl From<String> for ExportType {
    fn from(value: String) -> Self {
        ExportType::sanitize(&value)
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call configuration shared by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub export_type: ExportType,
    /// Send the private key as a `key` request parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk_as_get_or_post_param: Option<bool>,
    /// Send the private key in the `IPQS-KEY` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk_as_header: Option<bool>,
}

impl Config {
    pub fn new(export_type: ExportType) -> Self {
        Self {
            export_type,
            ..Self::default()
        }
    }

    pub fn json() -> Self {
        Self::new(ExportType::Json)
    }

    pub fn xml() -> Self {
        Self::new(ExportType::Xml)
    }

    pub fn pk_as_get_or_post_param(mut self, enabled: bool) -> Self {
        self.pk_as_get_or_post_param = Some(enabled);
        self
    }

    pub fn pk_as_header(mut self, enabled: bool) -> Self {
        self.pk_as_header = Some(enabled);
        self
    }

    /// True when the private key travels outside the URL path.
    pub fn pk_out_of_path(&self) -> bool {
        self.pk_as_get_or_post_param.unwrap_or(false) || self.pk_as_header.unwrap_or(false)
    }
}

/// A single API call: config plus optional request and update parameters.
///
/// `P` and `U` are the typed parameter shapes of an endpoint. The request
/// pipeline itself works on the untyped `Request<ParamMap, ParamMap>`, which
/// every typed request converts into via [`Request::to_param_request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request<P = ParamMap, U = ParamMap> {
    pub config: Config,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_parameters: Option<P>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_parameters: Option<U>,
}

impl<P, U> Default for Request<P, U> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<P, U> Request<P, U> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            request_parameters: None,
            update_parameters: None,
        }
    }

    pub fn request_parameters(mut self, params: P) -> Self {
        self.request_parameters = Some(params);
        self
    }

    pub fn update_parameters(mut self, params: U) -> Self {
        self.update_parameters = Some(params);
        self
    }
}

impl<P: Serialize, U: Serialize> Request<P, U> {
    /// Converts typed parameters into ordered JSON maps, omitting unset fields.
    pub fn to_param_request(&self) -> Result<Request, IpqsError> {
        Ok(Request {
            config: self.config.clone(),
            request_parameters: to_param_map(self.request_parameters.as_ref())?,
            update_parameters: to_param_map(self.update_parameters.as_ref())?,
        })
    }
}

fn to_param_map<T: Serialize>(value: Option<&T>) -> Result<Option<ParamMap>, IpqsError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        other => Err(IpqsError::Api(format!(
            "parameters must serialize to an object, got {other}"
        ))),
    }
}

/// `{ "success": true, "xml": "..." }` envelope for XML exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlResponse {
    pub success: bool,
    pub xml: String,
}

/// `{ "success": false, "errorMessage": "..." }` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureResponse {
    pub success: bool,
    pub error_message: String,
}

/// Normalized result of a call.
///
/// Successful JSON payloads are passed through verbatim; typed views are
/// available through [`ApiResponse::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Xml(XmlResponse),
    Failure(FailureResponse),
    Json(Value),
}

impl ApiResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure(FailureResponse {
            success: false,
            error_message: message.into(),
        })
    }

    pub fn xml(xml: impl Into<String>) -> Self {
        ApiResponse::Xml(XmlResponse {
            success: true,
            xml: xml.into(),
        })
    }

    /// Reads the payload's own `success` flag for JSON passthroughs.
    pub fn is_success(&self) -> bool {
        match self {
            ApiResponse::Xml(_) => true,
            ApiResponse::Failure(_) => false,
            ApiResponse::Json(value) => value
                .get("success")
                .and_then(|flag| serde_json::from_value::<SuccessFlag>(flag.clone()).ok())
                .is_none_or(|flag| flag.as_bool()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResponse::Failure(failure) => Some(&failure.error_message),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Decodes a JSON passthrough into an endpoint response type.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T, IpqsError> {
        match self {
            ApiResponse::Json(value) => Ok(serde_json::from_value(value)?),
            ApiResponse::Xml(_) => Err(IpqsError::UnexpectedXml),
            ApiResponse::Failure(failure) => Err(IpqsError::Api(failure.error_message)),
        }
    }
}

impl From<IpqsError> for ApiResponse {
    fn from(err: IpqsError) -> Self {
        ApiResponse::failure(format!("Error: {}", err.message()))
    }
}

/// The API reports `success` either as a boolean or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuccessFlag {
    Bool(bool),
    Text(String),
}

impl SuccessFlag {
    pub fn as_bool(&self) -> bool {
        match self {
            SuccessFlag::Bool(flag) => *flag,
            SuccessFlag::Text(text) => text.eq_ignore_ascii_case("true"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainAge {
    #[serde(default)]
    pub human: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub iso: Option<String>,
}

/// Transaction scoring block returned by proxy detection and phone validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDetails {
    pub risk_score: Option<f64>,
    pub risk_factors: Option<Value>,
    pub valid_billing_address: Option<bool>,
    pub valid_shipping_address: Option<bool>,
    pub valid_billing_email: Option<bool>,
    pub valid_shipping_email: Option<bool>,
    pub leaked_billing_email: Option<bool>,
    pub leaked_shipping_email: Option<bool>,
    pub leaked_user_data: Option<bool>,
    pub user_activity: Option<String>,
    pub risky_billing_phone: Option<bool>,
    pub risky_shipping_phone: Option<bool>,
    pub valid_billing_phone: Option<bool>,
    pub valid_shipping_phone: Option<bool>,
    pub billing_phone_carrier: Option<String>,
    pub shipping_phone_carrier: Option<String>,
    pub billing_phone_line_type: Option<String>,
    pub shipping_phone_line_type: Option<String>,
    pub billing_phone_country: Option<String>,
    pub shipping_phone_country: Option<String>,
    pub billing_phone_country_code: Option<Value>,
    pub shipping_phone_country_code: Option<Value>,
    pub bin_country: Option<String>,
    pub bin_bank_name: Option<String>,
    pub bin_type: Option<String>,
    pub risky_username: Option<bool>,
    pub is_prepaid_card: Option<bool>,
    pub fraudulent_behavior: Option<bool>,
    pub phone_name_identity_match: Option<String>,
    pub phone_email_identity_match: Option<String>,
    pub phone_address_identity_match: Option<String>,
    pub email_name_identity_match: Option<String>,
    pub name_address_identity_match: Option<String>,
    pub address_email_identity_match: Option<String>,
}
