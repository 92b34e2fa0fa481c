use reqwest::Method;
use thiserror::Error;

/// A custom error type for the IPQS API client.
///
/// Remote, validation and transport failures reach callers as
/// [`ApiResponse::Failure`](crate::ApiResponse) values. This type covers the
/// internal fallible steps and typed decoding of those responses.
#[derive(Error, Debug)]
pub enum IpqsError {
    /// An error occurred while making a request.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    /// An error occurred while serializing or deserializing data.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// An error returned by the API or by client-side validation.
    #[error("api error: {0}")]
    Api(String),
    /// A typed JSON payload was requested but the call used the XML export type.
    #[error("response was exported as xml")]
    UnexpectedXml,
    /// The orchestrator only dispatches GET and POST.
    #[error("unsupported request method: {0}")]
    UnsupportedMethod(Method),
}

impl IpqsError {
    /// The underlying message without the category prefix of `Display`.
    pub fn message(&self) -> String {
        match self {
            IpqsError::Request(err) => err.to_string(),
            IpqsError::Serde(err) => err.to_string(),
            IpqsError::Api(message) => message.clone(),
            IpqsError::UnexpectedXml | IpqsError::UnsupportedMethod(_) => self.to_string(),
        }
    }
}
