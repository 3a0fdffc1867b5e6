//! # msgkit-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, AttachmentConfig, ConfigError, Environment, LinkConfig, MentionConfig,
    ReactionConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
