//! Attachment entity - a file descriptor from the upload service

use serde::{Deserialize, Serialize};

/// File descriptor as returned by the upload service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    #[serde(default)]
    pub metadata: AttachmentMetadata,
}

/// Extra data attached by the upload service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Broad file category used to pick a renderer or icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Video,
    Audio,
    Pdf,
    Archive,
    Document,
    Other,
}

impl AttachmentKind {
    /// Icon name shown when no inline preview is available
    pub fn icon(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "music",
            Self::Pdf => "file-text",
            Self::Archive => "archive",
            Self::Document => "file-text",
            Self::Other => "file",
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        let kind = if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else if mime == "application/pdf" {
            Self::Pdf
        } else if ["zip", "x-rar", "x-7z", "gzip", "x-tar"]
            .iter()
            .any(|a| mime.contains(a))
        {
            Self::Archive
        } else if mime.starts_with("text/")
            || mime.contains("msword")
            || mime.contains("officedocument")
            || mime.contains("opendocument")
        {
            Self::Document
        } else {
            return None;
        };
        Some(kind)
    }

    fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" | "heic" => Self::Image,
            "mp4" | "mov" | "webm" | "mkv" | "avi" => Self::Video,
            "mp3" | "wav" | "ogg" | "m4a" | "flac" => Self::Audio,
            "pdf" => Self::Pdf,
            "zip" | "rar" | "7z" | "gz" | "tar" => Self::Archive,
            "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "txt" | "csv" | "odt" => {
                Self::Document
            }
            _ => Self::Other,
        }
    }
}

impl Attachment {
    /// Create a new Attachment
    pub fn new(file_name: impl Into<String>, file_size: u64, file_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_size,
            file_type: file_type.into(),
            metadata: AttachmentMetadata::default(),
        }
    }

    /// Set the download URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.metadata.url = Some(url.into());
        self
    }

    /// Download URL, if the upload service provided one
    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.metadata.url.as_deref()
    }

    /// Lowercased file extension without the dot
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// File category from MIME type, falling back to the extension
    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from_mime(&self.file_type).unwrap_or_else(|| {
            self.extension()
                .map_or(AttachmentKind::Other, |ext| AttachmentKind::from_extension(&ext))
        })
    }

    /// Check if attachment is an image
    pub fn is_image(&self) -> bool {
        self.kind() == AttachmentKind::Image
    }

    /// Check if attachment is a video
    pub fn is_video(&self) -> bool {
        self.kind() == AttachmentKind::Video
    }
}
