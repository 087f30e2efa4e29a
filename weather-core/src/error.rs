use reqwest::StatusCode;
use thiserror::Error;

/// Which upstream endpoint a call was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Geocoding,
    Forecast,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of an outbound call to the upstream provider.
///
/// Missing fields in a successful response are not errors; they project to `None`.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{endpoint} request timed out")]
    Timeout { endpoint: Endpoint },

    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
        body: String,
    },

    #[error("failed to parse {endpoint} response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// Classify a reqwest error raised while sending or reading a response.
    pub(crate) fn from_reqwest(endpoint: Endpoint, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            UpstreamError::Timeout { endpoint }
        } else {
            UpstreamError::Transport { endpoint, source }
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            UpstreamError::Timeout { endpoint }
            | UpstreamError::Transport { endpoint, .. }
            | UpstreamError::Status { endpoint, .. }
            | UpstreamError::Decode { endpoint, .. } => *endpoint,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Timeout { .. })
    }
}

/// Shorten an upstream body for error messages, respecting char boundaries.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
