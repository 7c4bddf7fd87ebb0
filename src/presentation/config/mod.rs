mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LlmSettings, LoggingSettings, PipelineSettings, ServerSettings, Settings, StorageSettings,
};
