//! Filesystem blob reader for local attachment previews

use async_trait::async_trait;
use msgkit_core::{BlobReader, DomainError, RepoResult};

/// Reads attachment bytes from local paths with `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsBlobReader;

fn unavailable(location: &str, err: &std::io::Error) -> DomainError {
    DomainError::AttachmentUnavailable(format!("{location}: {err}"))
}

#[async_trait]
impl BlobReader for FsBlobReader {
    async fn size(&self, location: &str) -> RepoResult<u64> {
        let meta = tokio::fs::metadata(location)
            .await
            .map_err(|e| unavailable(location, &e))?;
        if !meta.is_file() {
            return Err(DomainError::AttachmentUnavailable(format!("{location}: not a file")));
        }
        Ok(meta.len())
    }

    async fn read(&self, location: &str) -> RepoResult<Vec<u8>> {
        tokio::fs::read(location)
            .await
            .map_err(|e| unavailable(location, &e))
    }
}
