use thiserror::Error;

/// Upper bound on how much of a response body is kept inside an error.
pub(crate) const MAX_ERROR_BODY_CHARS: usize = 2000;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum XqError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured base URL or request target could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The endpoint requires a Xueqiu cookie and none is configured.
    #[error("{0}")]
    Auth(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status} for {method} {url}{}", suffix(.body))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The upper-cased HTTP method.
        method: String,
        /// The URL that returned the error.
        url: String,
        /// The leading part of the response body, if any.
        body: Option<String>,
    },

    /// The response body was not valid JSON.
    #[error("Failed to decode JSON for {method} {url}: {message}{}", suffix(.body))]
    Decode {
        /// The upper-cased HTTP method.
        method: String,
        /// The URL that was requested.
        url: String,
        /// The parser's message.
        message: String,
        /// The leading part of the response body, if any.
        body: Option<String>,
    },

    /// The JSON envelope reported an upstream error.
    #[error("Xueqiu API error {code} for {method} {url}{}", suffix(.description))]
    Api {
        /// `error_code` (or `code`) from the envelope.
        code: i64,
        /// `error_description` (or `message`) from the envelope.
        description: Option<String>,
        /// The upper-cased HTTP method.
        method: String,
        /// The URL that was requested.
        url: String,
        /// The full payload as returned by the server.
        payload: Box<serde_json::Value>,
    },

    /// The JSON was valid but did not fit the requested model.
    #[error("Data format unexpected for {url}: {message}")]
    Model {
        /// The URL that was requested.
        url: String,
        /// The deserializer's message.
        message: String,
    },
}

fn suffix(extra: &Option<String>) -> String {
    match extra.as_deref() {
        Some(s) if !s.is_empty() => format!(": {s}"),
        _ => String::new(),
    }
}

impl XqError {
    /// The HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            XqError::Status { status, .. } => Some(*status),
            XqError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The upstream API error code, if this is an envelope error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            XqError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether a fresh attempt could plausibly succeed (429, 5xx, transport or decode errors).
    pub fn is_retryable(&self) -> bool {
        match self {
            XqError::Http(_) | XqError::Decode { .. } => true,
            XqError::Status { status, .. } => super::client::retry::is_retryable_status(*status),
            _ => false,
        }
    }
}

pub(crate) fn truncate_body(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(MAX_ERROR_BODY_CHARS).collect())
}
