use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::application::ports::ArtifactStore;
use crate::domain::{ArtifactKind, TaskId, TaskStatus};
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn download_handler<A>(
    State(state): State<AppState<A>>,
    Path((task_id, kind)): Path<(String, String)>,
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

    let kind: ArtifactKind = match kind.parse() {
        Ok(k) => k,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: e }),
            )
                .into_response();
        }
    };

    let record = match state.registry.get(TaskId::from_uuid(uuid)).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Task not found: {}", task_id),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch task for download");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch task: {}", e),
                }),
            )
                .into_response();
        }
    };

    let article = match (&record.status, &record.final_result) {
        (TaskStatus::Completed, Some(article)) => article,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Task not completed or no result available".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state
        .artifact_store
        .fetch(&article.article_url_slug, kind)
        .await
    {
        Ok(content) => {
            let filename = format!("{}.{}", article.article_url_slug, kind.file_extension());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, kind.media_type().to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                content,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, kind = %kind, "Requested artifact unavailable");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Artifact not available: {}", kind),
                }),
            )
                .into_response()
        }
    }
}
