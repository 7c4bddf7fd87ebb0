use std::fmt;

use serde::Serialize;

/// Number of pipeline stages. `TaskRecord::current_step` equal to this value
/// is the completion sentinel.
pub const STAGE_COUNT: usize = 5;

/// One step of the fixed five-step content pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    InputProcessing,
    Research,
    Structuring,
    VisualDesign,
    Publishing,
}

impl Stage {
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::InputProcessing,
        Stage::Research,
        Stage::Structuring,
        Stage::VisualDesign,
        Stage::Publishing,
    ];

    pub fn index(self) -> usize {
        match self {
            Stage::InputProcessing => 0,
            Stage::Research => 1,
            Stage::Structuring => 2,
            Stage::VisualDesign => 3,
            Stage::Publishing => 4,
        }
    }

    /// Progress checkpoint written when the stage begins.
    pub fn start_checkpoint(self) -> u8 {
        match self {
            Stage::InputProcessing => 10,
            Stage::Research => 25,
            Stage::Structuring => 50,
            Stage::VisualDesign => 75,
            Stage::Publishing => 90,
        }
    }

    /// Progress checkpoint written when the stage's output is stored.
    pub fn completion_checkpoint(self) -> u8 {
        match self {
            Stage::InputProcessing => 20,
            Stage::Research => 45,
            Stage::Structuring => 70,
            Stage::VisualDesign => 85,
            Stage::Publishing => 100,
        }
    }

    pub fn operation(self) -> &'static str {
        match self {
            Stage::InputProcessing => "Processing user input...",
            Stage::Research => "Conducting research...",
            Stage::Structuring => "Creating structured content...",
            Stage::VisualDesign => "Designing visual content...",
            Stage::Publishing => "Publishing article...",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::InputProcessing => "input_processing",
            Stage::Research => "research",
            Stage::Structuring => "structuring",
            Stage::VisualDesign => "visual_design",
            Stage::Publishing => "publishing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
