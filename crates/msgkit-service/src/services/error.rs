//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use msgkit_common::AppError;
use msgkit_core::DomainError;

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Start-up failure (config, logging)
    #[error(transparent)]
    App(#[from] AppError),

    /// Request DTO failed validation
    #[error("Validation error: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),
}

impl ServiceError {
    /// Check if the caller caused this error
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_not_found() || e.is_validation() || e.is_conflict(),
            Self::App(e) => e.is_client_error(),
            Self::InvalidRequest(_) => true,
        }
    }

    /// Get the error code for reports
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::InvalidRequest(_) => "VALIDATION_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use msgkit_core::ReactionId;
    use validator::Validate;

    use crate::dto::ToggleReactionRequest;

    #[test]
    fn test_invalid_request_error() {
        let err = ServiceError::from(ToggleReactionRequest::new("", "u1").validate().unwrap_err());
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().starts_with("Validation error: "));
    }

    #[test]
    fn test_domain_error_passthrough() {
        let err = ServiceError::from(DomainError::ReactionNotFound(ReactionId::new("r9")));
        assert_eq!(err.error_code(), "UNKNOWN_REACTION");
        assert_eq!(err.to_string(), "Reaction not found: r9");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_app_error_passthrough() {
        let app = AppError::from(msgkit_common::TracingError::AlreadyInitialized);
        let err = ServiceError::from(app);
        assert_eq!(err.error_code(), "TELEMETRY_ERROR");
        assert!(!err.is_client_error());
    }
}
