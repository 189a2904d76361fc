use thiserror::Error;

/// Shown for transport failures where there is nothing more useful to say.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Status used for failures that never produced an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u64 = 0;

/// Failure of a backend call.
///
/// `status` is the HTTP status code, or `0` when the request never got a
/// response (network failure, timeout, unreadable body). `message` is the
/// backend's human-readable detail when one was sent.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::new(
            TRANSPORT_FAILURE_STATUS,
            format!("Failed to send request: {}", cause),
        )
    }

    pub fn timeout(timeout_ms: u32) -> Self {
        Self::new(
            TRANSPORT_FAILURE_STATUS,
            format!("Request timed out after {} ms", timeout_ms),
        )
    }

    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::new(
            TRANSPORT_FAILURE_STATUS,
            format!("Failed to parse response: {}", cause),
        )
    }

    pub fn is_transport(&self) -> bool {
        self.status == TRANSPORT_FAILURE_STATUS
    }

    /// 401 or 403: the stored token is no longer accepted.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Text suitable for an inline error message.
    pub fn user_message(&self) -> String {
        if self.is_transport() || self.message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }
}

/// Problems with the compiled-in client configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A `CLARA_*` variable held a value that could not be used.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_use_generic_message() {
        let err = ApiError::network("connection refused");
        assert!(err.is_transport());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));

        let err = ApiError::timeout(10_000);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn backend_detail_is_surfaced_verbatim() {
        let err = ApiError::new(422, "Threshold must be between 0.1 and 1.0");
        assert_eq!(err.user_message(), "Threshold must be between 0.1 and 1.0");
        assert!(!err.is_auth_rejection());
        assert!(ApiError::new(403, "Forbidden").is_auth_rejection());
    }
}
