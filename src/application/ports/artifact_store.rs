use std::io;

use async_trait::async_trait;

use crate::domain::ArtifactKind;

/// Durable store for rendered article artifacts, keyed by slug and kind.
/// The output directory is the only durable state in the system.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes the artifact and returns the path it was stored under.
    async fn save(
        &self,
        slug: &str,
        kind: ArtifactKind,
        content: &str,
    ) -> Result<String, ArtifactStoreError>;

    async fn fetch(&self, slug: &str, kind: ArtifactKind) -> Result<String, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
}
