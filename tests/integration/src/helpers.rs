//! Test helpers for integration tests
//!
//! Provides configuration and context builders that mirror how an embedding
//! application wires the services together.

use std::collections::HashMap;

use anyhow::Result;
use msgkit_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use msgkit_core::Roster;
use msgkit_service::ServiceContext;

use crate::fixtures::team_roster;

/// Initialize test logging once; repeated calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing_with_config(&TracingConfig::development());
}

/// Load a config from `KEY=value` pairs instead of the process environment
pub fn config_from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Ok(AppConfig::from_lookup(|key| vars.get(key).cloned())?)
}

/// Context over the team roster with the given overrides
pub fn test_context(pairs: &[(&str, &str)]) -> Result<ServiceContext> {
    test_context_with_roster(pairs, team_roster())
}

/// Context over a custom roster with the given overrides
pub fn test_context_with_roster(pairs: &[(&str, &str)], roster: Roster) -> Result<ServiceContext> {
    init_test_tracing();
    let config = config_from_pairs(pairs)?;
    Ok(ServiceContext::builder().config(config).roster(roster).build())
}
