use serde::Deserialize;

/// Per-task generation options, validated at the submission boundary before
/// the pipeline starts. Every recognized option carries a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub target_audience: String,
    pub content_type: String,
    pub content_length: String,
    pub tone: String,
    pub include_technical_details: bool,
    pub generate_real_images: bool,
    pub max_word_count: usize,
    pub include_toc: bool,
    pub include_references: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            target_audience: "general".to_string(),
            content_type: "article".to_string(),
            content_length: "medium".to_string(),
            tone: "professional".to_string(),
            include_technical_details: false,
            generate_real_images: false,
            max_word_count: 2000,
            include_toc: true,
            include_references: true,
        }
    }
}

impl ContentConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_word_count == 0 {
            return Err(ConfigValidationError::InvalidOption(
                "max_word_count must be greater than zero".to_string(),
            ));
        }
        if self.target_audience.trim().is_empty() {
            return Err(ConfigValidationError::InvalidOption(
                "target_audience must not be empty".to_string(),
            ));
        }
        if self.tone.trim().is_empty() {
            return Err(ConfigValidationError::InvalidOption(
                "tone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
