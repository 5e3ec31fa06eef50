use thiserror::Error;

/// Errors surfaced by the lexical-processing client.
///
/// Every variant that came out of a round trip carries the endpoint URL it
/// was talking to, so callers can log the failure without re-deriving state.
/// The client never retries on its own; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server address (or the HTTP client configuration built from it)
    /// was rejected at construction time. Not retryable with the same input.
    #[error("bad client configuration: {0}")]
    Config(String),

    /// The request field mapping could not be serialized. A map of strings
    /// always serializes, so hitting this indicates a caller-side bug rather
    /// than a recoverable condition.
    #[error("could not encode lexical request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network-level failure (connection refused, reset, timeout) while
    /// sending the request or reading the response body.
    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-200 status. The body is kept verbatim;
    /// remote error payloads are opaque diagnostics, never JSON-parsed.
    #[error("{url} returned status {status}, body: '{body}'")]
    RemoteStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// 200 response whose body did not parse as the expected shape. The raw
    /// body is carried because a malformed success reply is still actionable
    /// debugging information.
    #[error("could not decode response from {url}, body: '{body}': {source}")]
    Decode {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Status code of a [`ClientError::RemoteStatus`], if that is what this is.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            ClientError::RemoteStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
