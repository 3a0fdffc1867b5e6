//! Attachment service
//!
//! Renders uploaded file descriptors: size labels, icon fallback and the
//! inline image preview lifecycle.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use msgkit_core::{Attachment, AttachmentKind, BlobReader, DomainError, RepoResult};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Human-readable size with base 1024: `"512 B"`, `"1.5 KB"`, `"2.0 MB"`
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    // Compare what will be printed, so 1023.96 KB reads as 1.0 MB
    while (value * 10.0).round() / 10.0 >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Inline image preview lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ImagePreview {
    Loading { url: String },
    Loaded { url: String },
    Failed,
}

impl ImagePreview {
    /// Initial state: images with a URL start loading, everything else has
    /// no preview
    pub fn for_attachment(attachment: &Attachment) -> Self {
        match attachment.url() {
            Some(url) if attachment.is_image() => Self::Loading { url: url.to_string() },
            _ => Self::Failed,
        }
    }

    /// Image finished loading
    #[must_use]
    pub fn on_load(self) -> Self {
        match self {
            Self::Loading { url } => Self::Loaded { url },
            other => other,
        }
    }

    /// Image failed to load
    #[must_use]
    pub fn on_error(self) -> Self {
        Self::Failed
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// One attachment as shown in a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentView {
    pub file_name: String,
    pub size_label: String,
    pub kind: AttachmentKind,
    pub preview: ImagePreview,
}

impl AttachmentView {
    pub fn new(attachment: &Attachment) -> Self {
        Self {
            file_name: attachment.file_name.clone(),
            size_label: format_file_size(attachment.file_size),
            kind: attachment.kind(),
            preview: ImagePreview::for_attachment(attachment),
        }
    }

    /// Record that the image could not be displayed
    pub fn on_image_error(&mut self) {
        if let ImagePreview::Loading { url } | ImagePreview::Loaded { url } = &self.preview {
            warn!(file = %self.file_name, url = %url, "Image preview failed, showing file icon");
        }
        self.preview = self.preview.clone().on_error();
    }

    /// Record that the image loaded
    pub fn on_image_load(&mut self) {
        self.preview = self.preview.clone().on_load();
    }

    /// Icon to draw instead of the image, if any
    pub fn icon(&self) -> Option<&'static str> {
        self.preview.is_failed().then_some(self.kind.icon())
    }
}

/// Read a blob and encode it as a `data:` URL.
///
/// Files larger than `max_bytes` are rejected before reading.
pub async fn read_data_url(
    reader: &dyn BlobReader,
    location: &str,
    mime: &str,
    max_bytes: u64,
) -> RepoResult<String> {
    let size = reader.size(location).await?;
    if size > max_bytes {
        return Err(DomainError::AttachmentTooLarge { size, max: max_bytes });
    }
    let bytes = reader.read(location).await?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Attachment service
pub struct AttachmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttachmentService<'a> {
    /// Create a new AttachmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// View model for a list of attachments
    pub fn views(&self, attachments: &[Attachment]) -> Vec<AttachmentView> {
        attachments.iter().map(AttachmentView::new).collect()
    }

    /// Inline preview for a local file.
    ///
    /// Unreadable or oversized files give `None`; the caller shows the icon.
    #[instrument(skip(self))]
    pub async fn load_data_url(&self, location: &str, mime: &str) -> Option<String> {
        let max = self.ctx.config().attachments.max_inline_preview_bytes;
        match read_data_url(self.ctx.blob_reader(), location, mime, max).await {
            Ok(url) => {
                debug!(len = url.len(), "Inline preview ready");
                Some(url)
            }
            Err(e) => {
                warn!(error = %e, "Inline preview skipped");
                None
            }
        }
    }
}
