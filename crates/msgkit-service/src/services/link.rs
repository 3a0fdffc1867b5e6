//! Link service
//!
//! Finds URLs in message text and synthesizes previews locally from the
//! hostname. Nothing is fetched over the network.

use msgkit_core::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{instrument, warn};
use url::Url;

use crate::dto::LinkPreview;

use super::context::ServiceContext;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("url regex pattern is valid"));

/// URLs in `text`, de-duplicated in first-seen order
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for m in URL_RE.find_iter(text) {
        let url = m.as_str();
        if !urls.iter().any(|u| u == url) {
            urls.push(url.to_string());
        }
    }
    urls
}

/// Build a pseudo-preview for one URL
pub fn build_preview(raw: &str) -> Result<LinkPreview, DomainError> {
    let parsed = Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{raw}: {e}")))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(DomainError::UnsupportedScheme(scheme.to_string()));
    }

    let hostname = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| DomainError::MissingHost(raw.to_string()))?
        .to_string();

    let title = hostname
        .strip_prefix("www.")
        .unwrap_or(&hostname)
        .to_string();

    let path = parsed.path().trim_end_matches('/');
    let display_url = format!("{hostname}{path}");
    let favicon_url = format!("{scheme}://{hostname}/favicon.ico");

    Ok(LinkPreview {
        url: raw.to_string(),
        hostname,
        title,
        display_url,
        favicon_url,
    })
}

/// Preview lifecycle: `Loading` until resolved, then `Success` or `Error`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LinkPreviewState {
    Loading { url: String },
    Success(LinkPreview),
    Error { url: String, reason: String },
}

impl LinkPreviewState {
    /// Initial state for a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self::Loading { url: url.into() }
    }

    /// URL this preview is for
    pub fn url(&self) -> &str {
        match self {
            Self::Loading { url } | Self::Error { url, .. } => url,
            Self::Success(preview) => &preview.url,
        }
    }

    /// Resolve a loading preview; terminal states are returned unchanged
    #[must_use]
    pub fn resolve(self) -> Self {
        let Self::Loading { url } = self else {
            return self;
        };
        match build_preview(&url) {
            Ok(preview) => Self::Success(preview),
            Err(e) => {
                warn!(url = %url, error = %e, "Link preview unavailable, rendering plain link");
                Self::Error {
                    reason: e.to_string(),
                    url,
                }
            }
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading { .. })
    }

    /// Preview data when resolved successfully
    pub fn preview(&self) -> Option<&LinkPreview> {
        match self {
            Self::Success(preview) => Some(preview),
            _ => None,
        }
    }
}

/// Link service
pub struct LinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LinkService<'a> {
    /// Create a new LinkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolved previews for the first `links.max_previews` URLs in `text`
    #[instrument(skip(self, text))]
    pub fn previews(&self, text: &str) -> Vec<LinkPreviewState> {
        extract_urls(text)
            .into_iter()
            .take(self.ctx.config().links.max_previews)
            .map(|url| LinkPreviewState::new(url).resolve())
            .collect()
    }
}
