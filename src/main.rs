use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use scriptorium::application::ports::TaskRegistry;
use scriptorium::application::services::{ContentPipeline, PipelineTiming, PipelineWorker};
use scriptorium::infrastructure::llm::OpenAiGenerationClient;
use scriptorium::infrastructure::observability::{init_tracing, TracingConfig};
use scriptorium::infrastructure::persistence::InMemoryTaskRegistry;
use scriptorium::infrastructure::storage::LocalArtifactStore;
use scriptorium::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            level: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    let registry: Arc<dyn TaskRegistry> = Arc::new(InMemoryTaskRegistry::new());
    let artifact_store = Arc::new(LocalArtifactStore::new(PathBuf::from(
        &settings.storage.output_directory,
    ))?);

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No generation API key configured; every stage will use fallback content");
    }
    let generation_client = Arc::new(OpenAiGenerationClient::new(
        settings.llm.base_url.clone(),
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.max_tokens,
        settings.llm.temperature,
        Duration::from_secs(settings.llm.request_timeout_secs),
    )?);

    let pipeline = Arc::new(ContentPipeline::new(
        generation_client,
        Arc::clone(&artifact_store),
        Arc::clone(&registry),
        PipelineTiming {
            stage_timeout: Duration::from_secs(settings.pipeline.stage_timeout_secs),
            inter_stage_delay: Duration::from_millis(settings.pipeline.inter_stage_delay_ms),
        },
    ));

    let (pipeline_sender, pipeline_receiver) = mpsc::channel(settings.pipeline.queue_capacity);
    let worker = PipelineWorker::new(pipeline_receiver, pipeline);
    tokio::spawn(worker.run());

    let state = AppState {
        registry: Arc::clone(&registry),
        artifact_store,
        pipeline_sender,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    registry.clear().await.map_err(anyhow::Error::from)?;
    tracing::info!("Registry cleared, shutting down");

    Ok(())
}
