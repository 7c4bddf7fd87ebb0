mod artifact_store;
mod generation_client;
mod task_registry;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use generation_client::{GenerationClient, GenerationError};
pub use task_registry::{RegistryError, TaskRegistry};
