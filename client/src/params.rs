//! Parameter shaping shared by every endpoint: URL construction, private key
//! placement and query/form encoding.

use serde_json::Value;

use crate::transport::Headers;
use crate::types::{ExportType, ParamMap, Request};

pub const BASE_URL: &str = "https://www.ipqualityscore.com/api";
pub const PK_HEADER: &str = "IPQS-KEY";

/// Path segment used by the request list endpoint in place of a value.
const LIST_SEGMENT: &str = "list";

pub fn sanitize_export_type(export_type: &str) -> &'static str {
    ExportType::sanitize(export_type).as_str()
}

/// Returns a copy of `params` without `keys_to_remove`.
pub fn filter_object_by_keys(params: &ParamMap, keys_to_remove: &[&str]) -> ParamMap {
    params
        .iter()
        .filter(|(key, _)| !keys_to_remove.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Percent-encodes like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(value: &str) -> String {
    // urlencoding leaves only `-_.~` unescaped; URI components also keep `!'()*`.
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Stringifies a parameter value the way the API expects to receive it.
pub fn param_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(param_to_string).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// `key=value` pairs joined by `&`, values URI-component encoded, no leading `?`.
pub fn serialize_params(params: &ParamMap) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_uri_component(&param_to_string(value))))
        .collect::<Vec<_>>()
        .join("&")
}

/// True when neither private key placement flag is set.
pub fn disallow_pk_configs<P, U>(request: &Request<P, U>) -> bool {
    !request.config.pk_out_of_path()
}

pub fn get_ip_address(ip_address: Option<&str>) -> &str {
    ip_address.unwrap_or_default()
}

/// Builds the generic endpoint URL.
///
/// With the key out of the path the URL stops at the endpoint segment. The
/// `requests` endpoint ends in a fixed `list` segment; every other endpoint
/// ends in the encoded value of its `url_prop_name` parameter.
pub fn which_url(base_url: &str, private_key: &str, request: &Request, url_prop_name: &str) -> String {
    let export_type = request.config.export_type;
    if request.config.pk_out_of_path() {
        return format!("{base_url}/{export_type}/{url_prop_name}");
    }

    let value = if url_prop_name == "requests" {
        LIST_SEGMENT.to_string()
    } else {
        let raw = request
            .request_parameters
            .as_ref()
            .and_then(|params| params.get(url_prop_name))
            .map(param_to_string);
        encode_uri_component(get_ip_address(raw.as_deref()))
    };
    format!("{base_url}/{export_type}/{url_prop_name}/{private_key}/{value}")
}

/// Outgoing parameters for the active private key placement.
///
/// Out of the path, the key is added as `key` next to the untouched request
/// parameters. In the path, the `url_prop_name` value was already consumed by
/// the URL and is dropped.
pub fn update_params_to_optionally_add_pk(
    request: &Request,
    private_key: &str,
    url_prop_name: &str,
) -> ParamMap {
    let request_parameters = request.request_parameters.clone().unwrap_or_default();
    if request.config.pk_out_of_path() {
        let mut params = ParamMap::new();
        params.insert("key".to_string(), Value::String(private_key.to_string()));
        params.extend(request_parameters);
        params
    } else {
        filter_object_by_keys(&request_parameters, &[url_prop_name])
    }
}

pub fn get_pk_header<P, U>(request: &Request<P, U>, private_key: &str) -> Headers {
    let mut headers = Headers::new();
    if request.config.pk_as_header.unwrap_or(false) {
        headers.insert(PK_HEADER.to_string(), private_key.to_string());
    }
    headers
}

/// Namespaces update fields as `update[<key>]` with encoded values.
pub fn generate_update_post_params(update_parameters: &ParamMap) -> ParamMap {
    update_parameters
        .iter()
        .map(|(key, value)| {
            (
                format!("update[{key}]"),
                Value::String(encode_uri_component(&param_to_string(value))),
            )
        })
        .collect()
}
