use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::ArtifactStore;
use crate::application::services::{ContentConfig, PipelineMessage};
use crate::domain::TaskRecord;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct CreateContentRequest {
    pub topic: String,
    pub config: ContentConfig,
}

#[derive(Serialize)]
pub struct CreateContentResponse {
    pub task_id: String,
    pub message: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn create_content_handler<A>(
    State(state): State<AppState<A>>,
    Json(request): Json<CreateContentRequest>,
) -> impl IntoResponse
where
    A: ArtifactStore + 'static,
{
    let topic = request.topic.trim().to_string();
    if topic.is_empty() {
        tracing::warn!("Create request with empty topic");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Topic must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    if let Err(e) = request.config.validate() {
        tracing::warn!(error = %e, "Create request with invalid config");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid config: {}", e),
            }),
        )
            .into_response();
    }

    let record = TaskRecord::new(topic.clone());
    let task_id = record.id;

    if let Err(e) = state.registry.create(&record).await {
        tracing::error!(error = %e, "Failed to create task record");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to create task: {}", e),
            }),
        )
            .into_response();
    }

    let msg = PipelineMessage {
        task_id,
        topic: topic.clone(),
        config: request.config,
    };

    if let Err(e) = state.pipeline_sender.send(msg).await {
        tracing::error!(error = %e, "Failed to enqueue pipeline job");
        // The record would otherwise sit Pending forever.
        if let Err(fail_err) = state.registry.fail(task_id, "Pipeline worker unavailable").await {
            tracing::error!(error = %fail_err, "Failed to mark unscheduled task as failed");
        }
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Pipeline queue full or worker unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(task_id = %task_id, topic = %topic, "Content creation task enqueued");

    (
        StatusCode::ACCEPTED,
        Json(CreateContentResponse {
            task_id: task_id.to_string(),
            message: "Content creation started".to_string(),
        }),
    )
        .into_response()
}
