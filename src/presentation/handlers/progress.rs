use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::ArtifactStore;
use crate::domain::{PublishedArticle, StageOutput, TaskId, TaskRecord};
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

/// Full snapshot of one task record.
#[derive(Serialize)]
pub struct TaskStatusResponse {
    pub task_id: String,
    pub status: String,
    pub progress: u8,
    pub current_step: usize,
    pub current_operation: String,
    pub step_results: BTreeMap<usize, StageOutput>,
    pub final_result: Option<PublishedArticle>,
    pub error: Option<String>,
    pub degraded: bool,
    pub started_at: String,
    pub updated_at: String,
}

impl From<TaskRecord> for TaskStatusResponse {
    fn from(record: TaskRecord) -> Self {
        Self {
            task_id: record.id.to_string(),
            status: record.status.as_str().to_string(),
            progress: record.progress,
            current_step: record.current_step,
            current_operation: record.current_operation,
            step_results: record.step_results,
            final_result: record.final_result,
            error: record.error,
            degraded: record.degraded,
            started_at: record.started_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn progress_handler<A>(
    State(state): State<AppState<A>>,
    Path(task_id): Path<String>,
) -> impl IntoResponse
where
    A: ArtifactStore + 'static,
{
    let uuid = match Uuid::parse_str(&task_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid task ID: {}", task_id),
                }),
            )
                .into_response();
        }
    };

    match state.registry.get(TaskId::from_uuid(uuid)).await {
        Ok(Some(record)) => {
            (StatusCode::OK, Json(TaskStatusResponse::from(record))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Task not found: {}", task_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch task status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch task: {}", e),
                }),
            )
                .into_response()
        }
    }
}
