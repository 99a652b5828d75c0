use serde::{Deserialize, Serialize};

/// Unified error type for all people data source operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): service rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential backoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is automatically retried.
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// This is a transient error and is automatically retried.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The service rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the service.
        retry_after: Option<u64>,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The service rejected a value sent in the request (HTTP 400).
    InvalidParameter {
        /// Name of the rejected parameter or field.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The addressed resource does not exist (HTTP 404 on a non-lookup request).
    NotFound {
        /// Resource path that was requested.
        resource: String,
    },

    /// Failed to parse the service response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unexpected HTTP status from the service.
    Unknown {
        /// HTTP status code, if one was received.
        status: Option<u16>,
        /// Raw response text.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this is expected behavior (rejected input, missing resource), used for log levels.
    ///
    /// `warn` when `true`, `error` when `false`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::NotFound { .. }
        )
    }

    /// Whether the request may succeed when sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid value for '{param}': {detail}")
            }
            Self::NotFound { resource } => write!(f, "Resource '{resource}' not found"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::Unknown {
                status: Some(status),
                raw_message,
            } => write!(f, "Unexpected response (HTTP {status}): {raw_message}"),
            Self::Unknown {
                status: None,
                raw_message,
            } => write!(f, "Unexpected response: {raw_message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_rate_limited_with_retry_after() {
        let e = ProviderError::RateLimited {
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Rate limited (retry after 5s)");
    }

    #[test]
    fn display_invalid_parameter() {
        let e = ProviderError::InvalidParameter {
            param: "Age".to_string(),
            detail: "must be a number".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid value for 'Age': must be a number");
    }

    #[test]
    fn display_unknown_with_status() {
        let e = ProviderError::Unknown {
            status: Some(500),
            raw_message: "boom".to_string(),
        };
        assert_eq!(e.to_string(), "Unexpected response (HTTP 500): boom");
    }

    #[test]
    fn expected_errors() {
        assert!(
            ProviderError::NotFound {
                resource: "people('x')".to_string()
            }
            .is_expected()
        );
        assert!(
            !ProviderError::ParseError {
                detail: "eof".to_string()
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_uses_code_tag() {
        let e = ProviderError::Timeout {
            detail: "30s".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["detail"], "30s");
    }
}
