//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).
//! Every field has a default, so an empty environment yields a usable config.

use msgkit_core::MentionPrecedence;
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    #[validate(nested)]
    pub reactions: ReactionConfig,
    #[serde(default)]
    #[validate(nested)]
    pub mentions: MentionConfig,
    #[serde(default)]
    #[validate(nested)]
    pub links: LinkConfig,
    #[serde(default)]
    #[validate(nested)]
    pub attachments: AttachmentConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(format!("unknown environment: {s}")),
        }
    }
}

/// Reaction picker configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactionConfig {
    /// Emoji offered in the quick-reaction bar, in display order
    #[serde(default = "default_quick_reactions")]
    #[validate(length(min = 1, max = 32, message = "quick reactions must list 1-32 emoji"))]
    pub quick_reactions: Vec<String>,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            quick_reactions: default_quick_reactions(),
        }
    }
}

/// Mention parsing and suggestion configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MentionConfig {
    #[serde(default)]
    pub precedence: MentionPrecedence,
    #[serde(default = "default_max_suggestions")]
    #[validate(range(min = 1, max = 50, message = "max suggestions must be 1-50"))]
    pub max_suggestions: usize,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            precedence: MentionPrecedence::default(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// Link preview configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LinkConfig {
    #[serde(default = "default_max_previews")]
    #[validate(range(max = 20, message = "max previews must be 0-20"))]
    pub max_previews: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            max_previews: default_max_previews(),
        }
    }
}

/// Attachment preview configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachmentConfig {
    /// Largest file read into an inline data URL
    #[serde(default = "default_max_inline_preview_bytes")]
    #[validate(range(min = 1, message = "inline preview limit must be positive"))]
    pub max_inline_preview_bytes: u64,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            max_inline_preview_bytes: default_max_inline_preview_bytes(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "msgkit".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_quick_reactions() -> Vec<String> {
    ["👍", "❤️", "😂", "😮", "😢", "🙏"]
        .iter()
        .map(|e| (*e).to_string())
        .collect()
}

fn default_max_suggestions() -> usize {
    5
}

fn default_max_previews() -> usize {
    3
}

fn default_max_inline_preview_bytes() -> u64 {
    5 * 1024 * 1024
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparseable or out-of-range value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_var(&lookup, "APP_ENV")?.unwrap_or_default(),
            },
            reactions: ReactionConfig {
                quick_reactions: lookup("MSGKIT_QUICK_REACTIONS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|e| !e.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_else(default_quick_reactions),
            },
            mentions: MentionConfig {
                precedence: parse_var(&lookup, "MSGKIT_MENTION_PRECEDENCE")?.unwrap_or_default(),
                max_suggestions: parse_var(&lookup, "MSGKIT_MAX_SUGGESTIONS")?
                    .unwrap_or_else(default_max_suggestions),
            },
            links: LinkConfig {
                max_previews: parse_var(&lookup, "MSGKIT_MAX_LINK_PREVIEWS")?
                    .unwrap_or_else(default_max_previews),
            },
            attachments: AttachmentConfig {
                max_inline_preview_bytes: parse_var(&lookup, "MSGKIT_MAX_INLINE_PREVIEW_BYTES")?
                    .unwrap_or_else(default_max_inline_preview_bytes),
            },
        };

        config.validate()?;
        Ok(config)
    }
}

/// Parse an optional variable; unset or blank is `None`, garbage is an error
fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue(key, e.to_string())),
        _ => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Configuration out of range: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
