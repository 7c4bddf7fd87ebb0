use async_trait::async_trait;

use crate::domain::{PublishedArticle, StageOutput, TaskId, TaskRecord, TaskSummary};

/// Shared store of task records, the point of truth for progress polling.
///
/// All mutations are visible to subsequent `get` calls from any caller. Once
/// a record reaches a terminal status every further mutation is rejected with
/// [`RegistryError::TerminalState`]. Contents are in-memory only and lost on
/// restart.
#[async_trait]
pub trait TaskRegistry: Send + Sync {
    async fn create(&self, record: &TaskRecord) -> Result<(), RegistryError>;

    async fn get(&self, id: TaskId) -> Result<Option<TaskRecord>, RegistryError>;

    async fn list(&self) -> Result<Vec<TaskSummary>, RegistryError>;

    /// Marks the record Running at the given step with the stage's start
    /// checkpoint and operation text.
    async fn begin_stage(
        &self,
        id: TaskId,
        step: usize,
        progress: u8,
        operation: &str,
    ) -> Result<(), RegistryError>;

    /// Stores a stage's output and advances progress to its completion
    /// checkpoint. Step results are append-only.
    async fn complete_stage(
        &self,
        id: TaskId,
        step: usize,
        progress: u8,
        output: StageOutput,
    ) -> Result<(), RegistryError>;

    /// Terminal transition to Completed with the assembled article.
    async fn complete(
        &self,
        id: TaskId,
        article: PublishedArticle,
        operation: &str,
    ) -> Result<(), RegistryError>;

    /// Terminal transition to Failed with a descriptive error.
    async fn fail(&self, id: TaskId, error: &str) -> Result<(), RegistryError>;

    /// Terminal transition to Cancelled. Observed by the pipeline at the
    /// next stage boundary.
    async fn cancel(&self, id: TaskId) -> Result<(), RegistryError>;

    /// Drops all records. Teardown and test hook.
    async fn clear(&self) -> Result<(), RegistryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("task is terminal: {0}")]
    TerminalState(String),
    #[error("task already exists: {0}")]
    Conflict(String),
}
