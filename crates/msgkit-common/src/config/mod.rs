//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AttachmentConfig, ConfigError, Environment, LinkConfig, MentionConfig,
    ReactionConfig,
};
