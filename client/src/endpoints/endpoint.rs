use serde::{Serialize, de::DeserializeOwned};

use crate::params;
use crate::types::Request;

pub const PK_CONFIG_NOT_ALLOWED: &str =
    "The config params `pkAsGetOrPostParam` and `pkAsHeader` aren't used for this endpoint.";

/// A trait representing an IPQS API endpoint family.
///
/// Implementors supply the per-endpoint configuration of the shared request
/// pipeline: the endpoint segment, a validator and, when the path shape
/// differs from the generic one, a URL builder.
pub trait Endpoint {
    /// Typed request parameters. Must serialize to a JSON object.
    type Params: Serialize;
    /// Typed update parameters, sent as `update[<field>]`.
    type UpdateParams: Serialize;
    /// Typed view of a successful JSON response.
    type Response: DeserializeOwned;

    /// Endpoint segment of the URL, also the parameter consumed into the path.
    const URL_PROP_NAME: &'static str;

    /// Returns human-readable validation errors; empty means valid.
    fn validate_params(request: &Request) -> Vec<String>;

    /// Returns the request URL.
    fn which_url(base_url: &str, private_key: &str, request: &Request, url_prop_name: &str) -> String {
        params::which_url(base_url, private_key, request, url_prop_name)
    }
}

/// Endpoints that also accept POST requests.
pub trait PostEndpoint: Endpoint {}

/// Reads a parameter as a non-empty string, the way the API treats presence.
pub(crate) fn has_value(request: &Request, name: &str) -> bool {
    request
        .request_parameters
        .as_ref()
        .and_then(|params| params.get(name))
        .is_some_and(|value| match value {
            serde_json::Value::Null | serde_json::Value::Bool(false) => false,
            serde_json::Value::String(text) => !text.is_empty(),
            serde_json::Value::Number(number) => number.as_f64() != Some(0.0),
            _ => true,
        })
}

/// True if the parameter key is present at all, whatever its value.
pub(crate) fn has_key(request: &Request, name: &str) -> bool {
    request
        .request_parameters
        .as_ref()
        .is_some_and(|params| params.contains_key(name))
}
