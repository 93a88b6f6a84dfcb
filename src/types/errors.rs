use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read response: {0}")]
    ResponseRead(String),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Injected Vulcand API client cannot be null")]
    NotConfigured,
}

impl ApiError {
    /// True when the API could not be reached or the exchange broke off.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::ConnectionFailed(_) | ApiError::InvalidRequest(_) | ApiError::ResponseRead(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_are_not_transport_errors() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_not_configured_message() {
        assert_eq!(
            ApiError::NotConfigured.to_string(),
            "Injected Vulcand API client cannot be null"
        );
        assert!(!ApiError::NotConfigured.is_transport());
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        assert!(ApiError::ConnectionFailed("refused".into()).is_transport());
        assert!(ApiError::ResponseRead("eof".into()).is_transport());
    }
}
