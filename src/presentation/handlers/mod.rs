mod create;
mod download;
mod health;
mod progress;
mod tasks;

use serde::Serialize;

pub use create::{create_content_handler, CreateContentRequest, CreateContentResponse};
pub use download::download_handler;
pub use health::health_handler;
pub use progress::{progress_handler, TaskStatusResponse};
pub use tasks::{cancel_task_handler, list_tasks_handler, TaskListResponse, TaskSummaryResponse};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
