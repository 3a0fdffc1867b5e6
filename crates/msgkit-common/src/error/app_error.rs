//! Application error types
//!
//! What start-up and the domain layer can fail with, under one type.

use msgkit_core::DomainError;

use crate::config::ConfigError;
use crate::telemetry::TracingError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TracingError),
}

impl AppError {
    /// Get error code for reports
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR",
            Self::Telemetry(_) => "TELEMETRY_ERROR",
        }
    }

    /// Check if the caller caused this error (bad input rather than a fault)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_not_found() || e.is_validation() || e.is_conflict(),
            Self::Config(_) | Self::Telemetry(_) => false,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
