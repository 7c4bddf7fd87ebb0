use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::application::ports::{RegistryError, TaskRegistry};
use crate::domain::{
    PublishedArticle, StageOutput, TaskId, TaskRecord, TaskStatus, TaskSummary, STAGE_COUNT,
};

/// Single shared mutable store for task records, guarded by one coarse lock.
/// Constructed once at process start and injected everywhere as
/// `Arc<dyn TaskRegistry>`; contents are lost on restart by design.
pub struct InMemoryTaskRegistry {
    records: RwLock<HashMap<TaskId, TaskRecord>>,
}

impl InMemoryTaskRegistry {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<TaskId, TaskRecord>> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TaskId, TaskRecord>> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `mutate` to a live record. Unknown ids and frozen (terminal)
    /// records are rejected before the mutation runs.
    fn mutate_live(
        &self,
        id: TaskId,
        mutate: impl FnOnce(&mut TaskRecord),
    ) -> Result<(), RegistryError> {
        let mut records = self.write();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        if record.is_terminal() {
            return Err(RegistryError::TerminalState(id.to_string()));
        }
        mutate(record);
        record.updated_at = chrono::Utc::now();
        Ok(())
    }
}

impl Default for InMemoryTaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRegistry for InMemoryTaskRegistry {
    async fn create(&self, record: &TaskRecord) -> Result<(), RegistryError> {
        let mut records = self.write();
        if records.contains_key(&record.id) {
            return Err(RegistryError::Conflict(record.id.to_string()));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn get(&self, id: TaskId) -> Result<Option<TaskRecord>, RegistryError> {
        Ok(self.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<TaskSummary>, RegistryError> {
        let records = self.read();
        let mut summaries: Vec<TaskSummary> = records.values().map(TaskSummary::from).collect();
        summaries.sort_by_key(|s| s.started_at);
        Ok(summaries)
    }

    async fn begin_stage(
        &self,
        id: TaskId,
        step: usize,
        progress: u8,
        operation: &str,
    ) -> Result<(), RegistryError> {
        self.mutate_live(id, |record| {
            record.status = TaskStatus::Running;
            record.current_step = step;
            record.progress = record.progress.max(progress);
            record.current_operation = operation.to_string();
        })
    }

    async fn complete_stage(
        &self,
        id: TaskId,
        step: usize,
        progress: u8,
        output: StageOutput,
    ) -> Result<(), RegistryError> {
        self.mutate_live(id, |record| {
            record.degraded |= output.degraded;
            record.step_results.insert(step, output);
            record.progress = record.progress.max(progress);
        })
    }

    async fn complete(
        &self,
        id: TaskId,
        article: PublishedArticle,
        operation: &str,
    ) -> Result<(), RegistryError> {
        self.mutate_live(id, |record| {
            record.status = TaskStatus::Completed;
            record.progress = 100;
            record.current_step = STAGE_COUNT;
            record.current_operation = operation.to_string();
            record.degraded |= article.degraded;
            record.final_result = Some(article);
        })
    }

    async fn fail(&self, id: TaskId, error: &str) -> Result<(), RegistryError> {
        self.mutate_live(id, |record| {
            record.status = TaskStatus::Failed;
            record.current_operation = "Failed".to_string();
            record.error = Some(error.to_string());
        })
    }

    async fn cancel(&self, id: TaskId) -> Result<(), RegistryError> {
        self.mutate_live(id, |record| {
            record.status = TaskStatus::Cancelled;
            record.current_operation = "Cancelled by user".to_string();
        })
    }

    async fn clear(&self) -> Result<(), RegistryError> {
        self.write().clear();
        Ok(())
    }
}
