pub mod assembler;
mod content_config;
mod fallback;
mod pipeline;
mod worker;

pub use content_config::{ConfigValidationError, ContentConfig};
pub use fallback::{fallback_content, FallbackIntent};
pub use pipeline::{ContentPipeline, PipelineError, PipelineTiming};
pub use worker::{PipelineMessage, PipelineWorker};
