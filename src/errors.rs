use crate::version::ApiVersion;

/// All error types that can occur when converting colors or talking to a bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The HTTP request to the bridge failed or returned a non-success status.
    #[error("http {action} error: {reason}")]
    Http { action: String, reason: String },

    /// The bridge did not answer within the configured timeout.
    #[error("request {endpoint} timed out")]
    Timeout { endpoint: String },

    /// The bridge answered with an error entry.
    #[error("bridge error {kind} at {address}: {description}")]
    Bridge {
        kind: u16,
        address: String,
        description: String,
    },

    /// The bridge reply did not have the expected shape.
    #[error("unexpected bridge response: {0}")]
    UnexpectedResponse(String),

    /// Attempted to send a [`crate::LightState`] with no attributes set.
    #[error("invalid light state; no attributes set")]
    NoAttribute,

    /// A hex color string could not be split into three 2-digit channels.
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: String },

    /// The bridge reported an API version that could not be parsed.
    #[error("invalid api version string: {0}")]
    InvalidApiVersion(String),

    /// The bridge runs an API version older than the one required.
    #[error("bridge api version {actual} is older than required {required}")]
    UnsupportedApiVersion {
        required: ApiVersion,
        actual: ApiVersion,
    },
}

impl Error {
    /// Create a new http error
    pub fn http(action: &str, reason: impl std::fmt::Display) -> Self {
        Error::Http {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a new invalid color format error
    pub fn invalid_color(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidColorFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout(endpoint: &str) -> Self {
        Error::Timeout {
            endpoint: endpoint.to_string(),
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
