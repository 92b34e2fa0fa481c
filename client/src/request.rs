//! Request pipeline shared by every endpoint.
//!
//! [`get_result`] validates a request, builds its URL, shapes its parameters
//! for the active private key placement and hands the result to the GET or
//! POST adapter. Every failure comes back as an [`ApiResponse::Failure`];
//! nothing here returns `Err` or retries.

use log::{debug, warn};
use reqwest::Method;

use crate::params::{
    generate_update_post_params, get_pk_header, param_to_string, serialize_params,
    update_params_to_optionally_add_pk,
};
use crate::transport::{Fetch, FetchRequest, Headers};
use crate::types::{ApiResponse, ExportType, ParamMap, Request};

pub const PRIVATE_KEY_MISSING: &str = "A private key is required for this request.";
pub const PRIVATE_KEY_OR_PARAMS_MISSING: &str =
    "A private key and request parameters are required for this request.";

/// Endpoints that never send request or update parameters.
const PARAMLESS_ENDPOINTS: &[&str] = &["account", "leaked"];

pub type ValidateFn = fn(&Request) -> Vec<String>;
pub type UrlFn = fn(&str, &str, &Request, &str) -> String;

/// Fully resolved input of the transport adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub private_key: String,
    pub export_type: ExportType,
    pub params: Option<ParamMap>,
    pub headers: Option<Headers>,
}

/// Everything [`get_result`] needs for one call of one endpoint.
pub struct GetResultParams<'a> {
    pub method: Method,
    pub private_key: &'a str,
    pub params: &'a Request,
    pub validate_fn: ValidateFn,
    pub url_fn: UrlFn,
    pub url_prop_name: &'a str,
    pub base_url: &'a str,
}

/// Runs validation, URL building and parameter shaping, then dispatches.
///
/// Returns `None` when `method` is neither GET nor POST. Validation failures
/// return before any URL is built or any fetch is made.
pub async fn get_result(transport: &dyn Fetch, params: GetResultParams<'_>) -> Option<ApiResponse> {
    let GetResultParams {
        method,
        private_key,
        params: request,
        validate_fn,
        url_fn,
        url_prop_name,
        base_url,
    } = params;

    let errors = validate_fn(request);
    if !errors.is_empty() {
        let message = errors.join(" ");
        debug!("{url_prop_name} request rejected: {message}");
        return Some(ApiResponse::failure(message));
    }

    let url = url_fn(base_url, private_key, request, url_prop_name);
    let mut outgoing = ParamMap::new();
    if !PARAMLESS_ENDPOINTS.contains(&url_prop_name) {
        outgoing = update_params_to_optionally_add_pk(request, private_key, url_prop_name);
        if let Some(update_parameters) = &request.update_parameters {
            outgoing.extend(generate_update_post_params(update_parameters));
        }
    }
    let headers = get_pk_header(request, private_key);

    let api_request = ApiRequest {
        url,
        private_key: private_key.to_string(),
        export_type: request.config.export_type,
        params: Some(outgoing),
        headers: Some(headers),
    };
    match method {
        Method::POST => Some(post_api_result(transport, api_request).await),
        Method::GET => Some(get_api_result(transport, api_request).await),
        other => {
            debug!("{url_prop_name} request not sent: unsupported method {other}");
            None
        }
    }
}

/// Sends `params` as a form body. Both the key and the params are required.
pub async fn post_api_result(transport: &dyn Fetch, config: ApiRequest) -> ApiResponse {
    let ApiRequest {
        url,
        private_key,
        export_type,
        params,
        headers,
    } = config;
    let params = match params {
        Some(params) if !private_key.is_empty() => params,
        _ => return ApiResponse::failure(PRIVATE_KEY_OR_PARAMS_MISSING),
    };

    let body = params
        .iter()
        .map(|(key, value)| (key.clone(), param_to_string(value)))
        .collect();
    let request = FetchRequest {
        method: Method::POST,
        body: Some(body),
        headers: headers.unwrap_or_default(),
    };
    fetch_request(transport, &url, &private_key, export_type, request).await
}

/// Sends `params` as the query string. Only the key is required.
pub async fn get_api_result(transport: &dyn Fetch, config: ApiRequest) -> ApiResponse {
    let ApiRequest {
        url,
        private_key,
        export_type,
        params,
        headers,
    } = config;
    if private_key.is_empty() {
        return ApiResponse::failure(PRIVATE_KEY_MISSING);
    }

    let full_url = format!("{url}?{}", serialize_params(&params.unwrap_or_default()));
    let request = FetchRequest {
        method: Method::GET,
        body: None,
        headers: headers.unwrap_or_default(),
    };
    fetch_request(transport, &full_url, &private_key, export_type, request).await
}

async fn fetch_request(
    transport: &dyn Fetch,
    url: &str,
    private_key: &str,
    export_type: ExportType,
    request: FetchRequest,
) -> ApiResponse {
    debug!("{} {} ({export_type})", request.method, redact(url, private_key));

    let response = match transport.fetch(url, request).await {
        Ok(response) => response,
        Err(err) => {
            let message = redact(&err.message(), private_key);
            warn!("request to {} failed: {message}", redact(url, private_key));
            return ApiResponse::failure(format!("Error: {message}"));
        }
    };

    let status = response.status();
    if status != 200 {
        warn!("request to {} returned status {status}", redact(url, private_key));
        return ApiResponse::failure(response.text());
    }

    match export_type {
        ExportType::Json => response
            .json()
            .map(ApiResponse::Json)
            .unwrap_or_else(ApiResponse::from),
        ExportType::Xml => ApiResponse::xml(response.text()),
    }
}

fn redact(url: &str, private_key: &str) -> String {
    if private_key.is_empty() {
        url.to_string()
    } else {
        url.replace(private_key, "***")
    }
}
