use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub pipeline: PipelineSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub stage_timeout_secs: u64,
    pub inter_stage_delay_ms: u64,
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub output_directory: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Settings {
    /// Hydrates settings from environment variables, with defaults suitable
    /// for local development.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 8000),
            },
            llm: LlmSettings {
                base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
                api_key: env_or("OPENAI_API_KEY", ""),
                model: env_or("OPENAI_MODEL", "gpt-4o-mini"),
                max_tokens: env_parse("OPENAI_MAX_TOKENS", 2000),
                temperature: env_parse("OPENAI_TEMPERATURE", 0.7),
                request_timeout_secs: env_parse("OPENAI_TIMEOUT_SECS", 25),
            },
            pipeline: PipelineSettings {
                stage_timeout_secs: env_parse("PIPELINE_STAGE_TIMEOUT_SECS", 30),
                inter_stage_delay_ms: env_parse("PIPELINE_STAGE_DELAY_MS", 0),
                queue_capacity: env_parse("PIPELINE_QUEUE_CAPACITY", 64),
            },
            storage: StorageSettings {
                output_directory: env_or("OUTPUT_DIRECTORY", "output"),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "info"),
                enable_json: env_or("LOG_FORMAT", "text").to_lowercase() == "json",
            },
        }
    }
}
