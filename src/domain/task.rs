use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{PublishedArticle, StageOutput, TaskId, TaskStatus};

/// Mutable per-task state tracked by the registry. Mutation happens only
/// through the registry, which freezes the record once its status is
/// terminal.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: TaskId,
    pub topic: String,
    pub status: TaskStatus,
    pub progress: u8,
    pub current_step: usize,
    pub current_operation: String,
    pub step_results: BTreeMap<usize, StageOutput>,
    pub final_result: Option<PublishedArticle>,
    pub error: Option<String>,
    pub degraded: bool,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    pub fn new(topic: String) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            topic,
            status: TaskStatus::Pending,
            progress: 0,
            current_step: 0,
            current_operation: "Queued".to_string(),
            step_results: BTreeMap::new(),
            final_result: None,
            error: None,
            degraded: false,
            started_at: now,
            updated_at: now,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Condensed view of a record for task enumeration.
#[derive(Debug, Clone)]
pub struct TaskSummary {
    pub id: TaskId,
    pub topic: String,
    pub status: TaskStatus,
    pub progress: u8,
    pub current_operation: String,
    pub started_at: DateTime<Utc>,
}

impl From<&TaskRecord> for TaskSummary {
    fn from(record: &TaskRecord) -> Self {
        Self {
            id: record.id,
            topic: record.topic.clone(),
            status: record.status,
            progress: record.progress,
            current_operation: record.current_operation.clone(),
            started_at: record.started_at,
        }
    }
}
