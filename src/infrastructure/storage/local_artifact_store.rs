use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::ArtifactKind;

/// Filesystem-backed artifact store rooted at the configured output
/// directory.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ArtifactStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    fn file_name(slug: &str, kind: ArtifactKind) -> String {
        format!("{}.{}", slug, kind.file_extension())
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn save(
        &self,
        slug: &str,
        kind: ArtifactKind,
        content: &str,
    ) -> Result<String, ArtifactStoreError> {
        let name = Self::file_name(slug, kind);
        let store_path = StorePath::from(name.as_str());
        self.inner
            .put(&store_path, PutPayload::from(Bytes::from(content.to_string())))
            .await
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;
        Ok(self.base_path.join(&name).display().to_string())
    }

    async fn fetch(&self, slug: &str, kind: ArtifactKind) -> Result<String, ArtifactStoreError> {
        let name = Self::file_name(slug, kind);
        let store_path = StorePath::from(name.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| ArtifactStoreError::NotFound(e.to_string()))?;
        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArtifactStoreError::ReadFailed(e.to_string()))?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| ArtifactStoreError::ReadFailed(e.to_string()))
    }
}
