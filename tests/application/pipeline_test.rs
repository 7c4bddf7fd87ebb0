use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use scriptorium::application::ports::{
    GenerationClient, GenerationError, TaskRegistry,
};
use scriptorium::application::services::{ContentConfig, ContentPipeline, PipelineTiming};
use scriptorium::domain::{ArtifactKind, TaskRecord, TaskStatus, STAGE_COUNT};
use scriptorium::infrastructure::persistence::InMemoryTaskRegistry;
use scriptorium::infrastructure::storage::MockArtifactStore;

struct CannedGenerationClient;

#[async_trait]
impl GenerationClient for CannedGenerationClient {
    async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, GenerationError> {
        Ok("# Mock Article\n\nIntro text.\n\n## Overview\n\nGenerated body.\n".to_string())
    }
}

struct FailingGenerationClient;

#[async_trait]
impl GenerationClient for FailingGenerationClient {
    async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, GenerationError> {
        Err(GenerationError::ApiRequestFailed("injected fault".to_string()))
    }
}

struct EmptyGenerationClient;

#[async_trait]
impl GenerationClient for EmptyGenerationClient {
    async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, GenerationError> {
        Ok("   \n".to_string())
    }
}

struct StallingGenerationClient;

#[async_trait]
impl GenerationClient for StallingGenerationClient {
    async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, GenerationError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("too late".to_string())
    }
}

fn timing() -> PipelineTiming {
    PipelineTiming {
        stage_timeout: Duration::from_millis(100),
        inter_stage_delay: Duration::ZERO,
    }
}

async fn run_pipeline<G>(client: G, topic: &str) -> (Arc<dyn TaskRegistry>, Arc<MockArtifactStore>, scriptorium::domain::TaskRecord)
where
    G: GenerationClient + 'static,
{
    let registry: Arc<dyn TaskRegistry> = Arc::new(InMemoryTaskRegistry::new());
    let store = Arc::new(MockArtifactStore::new());
    let pipeline = ContentPipeline::new(
        Arc::new(client),
        Arc::clone(&store),
        Arc::clone(&registry),
        timing(),
    );

    let record = TaskRecord::new(topic.to_string());
    let id = record.id;
    registry.create(&record).await.unwrap();

    pipeline.run(id, topic.to_string(), ContentConfig::default()).await;

    let record = registry.get(id).await.unwrap().unwrap();
    (registry, store, record)
}

#[tokio::test]
async fn given_healthy_generation_when_pipeline_runs_then_task_completes_clean() {
    let (_, _, record) = run_pipeline(CannedGenerationClient, "Rust Testing").await;

    assert_eq!(record.status, TaskStatus::Completed);
    assert_eq!(record.progress, 100);
    assert_eq!(record.current_step, STAGE_COUNT);
    assert!(!record.degraded);
    assert_eq!(record.step_results.len(), STAGE_COUNT);

    let article = record.final_result.expect("completed task has a result");
    assert!(record.error.is_none());
    assert_eq!(article.article_title, "Mock Article");
    assert!(article.word_count > 0);
    assert!(article.html_file_path.is_some());
    assert!(article.markdown_file_path.is_some());
}

#[tokio::test]
async fn given_healthy_generation_when_pipeline_runs_then_artifacts_are_persisted() {
    let (_, store, record) = run_pipeline(CannedGenerationClient, "Rust Testing").await;
    use scriptorium::application::ports::ArtifactStore;

    let slug = record.final_result.unwrap().article_url_slug;
    let markdown = store.fetch(&slug, ArtifactKind::Markdown).await.unwrap();
    let html = store.fetch(&slug, ArtifactKind::Html).await.unwrap();
    assert!(markdown.contains("Mock Article"));
    assert!(html.contains("Mock Article"));
}

#[tokio::test]
async fn given_every_call_failing_when_pipeline_runs_then_task_still_completes() {
    let (_, _, record) = run_pipeline(FailingGenerationClient, "Quantum Computing").await;

    assert_eq!(record.status, TaskStatus::Completed);
    assert!(record.degraded);
    assert!(record.error.is_none());

    let article = record.final_result.expect("fallback still yields a result");
    assert!(article.degraded);
    assert!(article.article_title.contains("Quantum Computing"));
    assert!(article.word_count > 0);
    assert!(article.markdown_content.contains("Quantum Computing"));
    assert!(!article.markdown_content.contains("undefined"));
}

#[tokio::test]
async fn given_every_call_failing_when_pipeline_runs_then_only_external_stages_degrade() {
    let (_, _, record) = run_pipeline(FailingGenerationClient, "Quantum Computing").await;

    // Input processing is local and never degrades.
    assert!(!record.step_results[&0].degraded);
    for step in 1..STAGE_COUNT {
        assert!(record.step_results[&step].degraded, "step {} not degraded", step);
        assert!(record.step_results[&step].content.contains("Quantum Computing"));
    }
}

#[tokio::test]
async fn given_empty_responses_when_pipeline_runs_then_fallback_substitutes() {
    let (_, _, record) = run_pipeline(EmptyGenerationClient, "Observability").await;

    assert_eq!(record.status, TaskStatus::Completed);
    assert!(record.degraded);
    let article = record.final_result.unwrap();
    assert!(article.markdown_content.contains("Observability"));
}

#[tokio::test]
async fn given_stalling_generation_when_deadline_exceeded_then_fallback_substitutes() {
    let (_, _, record) = run_pipeline(StallingGenerationClient, "Streaming").await;

    assert_eq!(record.status, TaskStatus::Completed);
    assert!(record.degraded);
    assert!(record
        .final_result
        .unwrap()
        .markdown_content
        .contains("Streaming"));
}

#[tokio::test]
async fn given_cancelled_task_when_pipeline_starts_then_no_stage_executes() {
    let registry: Arc<dyn TaskRegistry> = Arc::new(InMemoryTaskRegistry::new());
    let store = Arc::new(MockArtifactStore::new());
    let pipeline = ContentPipeline::new(
        Arc::new(CannedGenerationClient),
        Arc::clone(&store),
        Arc::clone(&registry),
        timing(),
    );

    let record = TaskRecord::new("Cancelled Topic".to_string());
    let id = record.id;
    registry.create(&record).await.unwrap();
    registry.cancel(id).await.unwrap();

    pipeline
        .run(id, "Cancelled Topic".to_string(), ContentConfig::default())
        .await;

    let record = registry.get(id).await.unwrap().unwrap();
    assert_eq!(record.status, TaskStatus::Cancelled);
    assert!(record.step_results.is_empty());
    assert!(record.final_result.is_none());
    assert!(record.error.is_none());
    assert_eq!(record.current_operation, "Cancelled by user");
}
