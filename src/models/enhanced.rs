use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::string_util::TextStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Creation,
    Explanation,
    Improvement,
    Analysis,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Expert,
    Professional,
    General,
    Beginner,
}

/// Planned section of the response the enhanced prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Introduction,
    MainContent,
    StepByStepProcess,
    Examples,
    Conclusion,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Creation => write!(f, "creation"),
            Intent::Explanation => write!(f, "explanation"),
            Intent::Improvement => write!(f, "improvement"),
            Intent::Analysis => write!(f, "analysis"),
            Intent::General => write!(f, "general"),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Expert => write!(f, "expert"),
            Audience::Professional => write!(f, "professional"),
            Audience::General => write!(f, "general"),
            Audience::Beginner => write!(f, "beginner"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub intent: Intent,
    pub audience: Audience,
    pub structure: Vec<Section>,
    pub enhancements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPrompt {
    pub content: String,

    pub tags: Vec<String>,

    /// Heuristic quality score, 0-100
    pub score: u8,

    pub debug_info: DebugInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_output: Option<String>,
}

impl EnhancedPrompt {
    pub fn word_count(&self) -> usize {
        self.content.space_separated_count()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
