use scriptorium::application::ports::{ArtifactStore, ArtifactStoreError};
use scriptorium::domain::ArtifactKind;
use scriptorium::infrastructure::storage::LocalArtifactStore;

#[tokio::test]
async fn given_saved_artifact_when_fetched_then_content_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();

    let path = store
        .save("rust-article", ArtifactKind::Markdown, "# Rust Article\n")
        .await
        .unwrap();
    assert!(path.ends_with("rust-article.md"));

    let content = store
        .fetch("rust-article", ArtifactKind::Markdown)
        .await
        .unwrap();
    assert_eq!(content, "# Rust Article\n");
}

#[tokio::test]
async fn given_both_kinds_when_saved_then_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();

    store
        .save("slug", ArtifactKind::Markdown, "markdown body")
        .await
        .unwrap();
    store
        .save("slug", ArtifactKind::Html, "<html></html>")
        .await
        .unwrap();

    assert_eq!(
        store.fetch("slug", ArtifactKind::Markdown).await.unwrap(),
        "markdown body"
    );
    assert_eq!(
        store.fetch("slug", ArtifactKind::Html).await.unwrap(),
        "<html></html>"
    );
}

#[tokio::test]
async fn given_missing_artifact_when_fetched_then_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();

    let result = store.fetch("missing", ArtifactKind::Html).await;
    assert!(matches!(result, Err(ArtifactStoreError::NotFound(_))));
}
