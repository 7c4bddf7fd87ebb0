use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::{ArtifactStore, GenerationClient};
use crate::application::services::{ContentConfig, ContentPipeline};
use crate::domain::TaskId;

pub struct PipelineMessage {
    pub task_id: TaskId,
    pub topic: String,
    pub config: ContentConfig,
}

/// Receives submitted tasks and spawns one independent pipeline execution
/// per message. The registry entry is the only channel back to the
/// submitting side.
pub struct PipelineWorker<G, A> {
    receiver: mpsc::Receiver<PipelineMessage>,
    pipeline: Arc<ContentPipeline<G, A>>,
}

impl<G, A> PipelineWorker<G, A>
where
    G: GenerationClient + 'static,
    A: ArtifactStore + 'static,
{
    pub fn new(receiver: mpsc::Receiver<PipelineMessage>, pipeline: Arc<ContentPipeline<G, A>>) -> Self {
        Self { receiver, pipeline }
    }

    pub async fn run(mut self) {
        tracing::info!("Pipeline worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "pipeline_job",
                task_id = %msg.task_id,
                topic = %msg.topic,
            );
            let pipeline = Arc::clone(&self.pipeline);
            tokio::spawn(
                async move {
                    pipeline.run(msg.task_id, msg.topic, msg.config).await;
                }
                .instrument(span),
            );
        }
        tracing::info!("Pipeline worker stopped: channel closed");
    }
}
