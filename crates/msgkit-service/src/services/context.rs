//! Service context - dependency container for services
//!
//! Holds the configuration, the mention roster and the blob reader used for
//! inline attachment previews.

use std::sync::Arc;

use msgkit_common::AppConfig;
use msgkit_core::{BlobReader, Roster};

use super::error::ServiceResult;
use crate::store::FsBlobReader;

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    config: Arc<AppConfig>,
    roster: Arc<Roster>,
    blob_reader: Arc<dyn BlobReader>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(config: Arc<AppConfig>, roster: Arc<Roster>, blob_reader: Arc<dyn BlobReader>) -> Self {
        Self {
            config,
            roster,
            blob_reader,
        }
    }

    /// Start-up path: load configuration from the environment, install
    /// logging, and read attachments from the filesystem.
    pub fn from_env(roster: Roster) -> ServiceResult<Self> {
        let config = msgkit_common::bootstrap::init()?;
        Ok(Self::builder().config(config).roster(roster).build())
    }

    /// [`ServiceContext::from_env`] over an arbitrary key lookup
    pub fn from_lookup<F>(roster: Roster, lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = msgkit_common::bootstrap::init_with_lookup(lookup)?;
        Ok(Self::builder().config(config).roster(roster).build())
    }

    /// Create a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Application configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Users available for mention resolution
    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Source of attachment bytes
    #[inline]
    pub fn blob_reader(&self) -> &dyn BlobReader {
        self.blob_reader.as_ref()
    }

    /// Replace the roster, keeping everything else
    #[must_use]
    pub fn with_roster(&self, roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
            ..self.clone()
        }
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    config: Option<Arc<AppConfig>>,
    roster: Option<Arc<Roster>>,
    blob_reader: Option<Arc<dyn BlobReader>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            roster: None,
            blob_reader: None,
        }
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(Arc::new(roster));
        self
    }

    pub fn blob_reader(mut self, reader: Arc<dyn BlobReader>) -> Self {
        self.blob_reader = Some(reader);
        self
    }

    /// Build the ServiceContext
    ///
    /// Missing pieces fall back to the default config, an empty roster and
    /// the filesystem blob reader.
    pub fn build(self) -> ServiceContext {
        ServiceContext::new(
            self.config.unwrap_or_default(),
            self.roster.unwrap_or_default(),
            self.blob_reader.unwrap_or_else(|| Arc::new(FsBlobReader)),
        )
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
