//! Process start-up: configuration first, then logging

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::telemetry::{try_init_tracing_with_config, TracingConfig};

/// Load configuration from the environment and install the tracing
/// subscriber for its `APP_ENV`.
///
/// # Errors
/// Fails on bad configuration, or when a subscriber is already installed.
pub fn init() -> AppResult<AppConfig> {
    finish(AppConfig::from_env()?)
}

/// [`init`] over an arbitrary key lookup instead of the process environment
pub fn init_with_lookup<F>(lookup: F) -> AppResult<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    finish(AppConfig::from_lookup(lookup)?)
}

fn finish(config: AppConfig) -> AppResult<AppConfig> {
    try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env))?;
    tracing::info!(app = %config.app.name, env = ?config.app.env, "Configuration loaded");
    Ok(config)
}
