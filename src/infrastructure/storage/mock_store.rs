use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::ArtifactKind;

/// In-memory artifact store for tests and scaffold runs.
#[derive(Default)]
pub struct MockArtifactStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MockArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(slug: &str, kind: ArtifactKind) -> String {
        format!("{}.{}", slug, kind.file_extension())
    }
}

#[async_trait::async_trait]
impl ArtifactStore for MockArtifactStore {
    async fn save(
        &self,
        slug: &str,
        kind: ArtifactKind,
        content: &str,
    ) -> Result<String, ArtifactStoreError> {
        let key = Self::key(slug, kind);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), content.to_string());
        Ok(key)
    }

    async fn fetch(&self, slug: &str, kind: ArtifactKind) -> Result<String, ArtifactStoreError> {
        let key = Self::key(slug, kind);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or(ArtifactStoreError::NotFound(key))
    }
}
