use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::ArtifactStore;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    cancel_task_handler, create_content_handler, download_handler, health_handler,
    list_tasks_handler, progress_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<A>(state: AppState<A>) -> Router
where
    A: ArtifactStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/content/create", post(create_content_handler::<A>))
        .route("/api/progress/{task_id}", get(progress_handler::<A>))
        .route("/api/tasks", get(list_tasks_handler::<A>))
        .route("/api/tasks/{task_id}", delete(cancel_task_handler::<A>))
        .route(
            "/api/download/{task_id}/{kind}",
            get(download_handler::<A>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
