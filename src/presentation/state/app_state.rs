use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{ArtifactStore, TaskRegistry};
use crate::application::services::PipelineMessage;

pub struct AppState<A>
where
    A: ArtifactStore,
{
    pub registry: Arc<dyn TaskRegistry>,
    pub artifact_store: Arc<A>,
    pub pipeline_sender: mpsc::Sender<PipelineMessage>,
}

impl<A> Clone for AppState<A>
where
    A: ArtifactStore,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            artifact_store: Arc::clone(&self.artifact_store),
            pipeline_sender: self.pipeline_sender.clone(),
        }
    }
}
