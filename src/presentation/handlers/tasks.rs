use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{ArtifactStore, RegistryError};
use crate::domain::{TaskId, TaskSummary};
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TaskSummaryResponse {
    pub task_id: String,
    pub topic: String,
    pub status: String,
    pub progress: u8,
    pub current_operation: String,
    pub started_at: String,
}

impl From<TaskSummary> for TaskSummaryResponse {
    fn from(summary: TaskSummary) -> Self {
        Self {
            task_id: summary.id.to_string(),
            topic: summary.topic,
            status: summary.status.as_str().to_string(),
            progress: summary.progress,
            current_operation: summary.current_operation,
            started_at: summary.started_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskSummaryResponse>,
}

#[derive(Serialize)]
pub struct CancelResponse {
    pub task_id: String,
    pub message: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_tasks_handler<A>(State(state): State<AppState<A>>) -> impl IntoResponse
where
    A: ArtifactStore + 'static,
{
    match state.registry.list().await {
        Ok(summaries) => (
            StatusCode::OK,
            Json(TaskListResponse {
                tasks: summaries
                    .into_iter()
                    .map(TaskSummaryResponse::from)
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list tasks");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list tasks: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn cancel_task_handler<A>(
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

    match state.registry.cancel(TaskId::from_uuid(uuid)).await {
        Ok(()) => {
            tracing::info!(task_id = %task_id, "Task cancelled");
            (
                StatusCode::OK,
                Json(CancelResponse {
                    task_id,
                    message: "Task cancelled".to_string(),
                }),
            )
                .into_response()
        }
        Err(RegistryError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Task not found: {}", task_id),
            }),
        )
            .into_response(),
        Err(RegistryError::TerminalState(_)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("Task already finished: {}", task_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to cancel task");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to cancel task: {}", e),
                }),
            )
                .into_response()
        }
    }
}
