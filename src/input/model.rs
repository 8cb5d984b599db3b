use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::enhance_error::EnhanceError,
    input::options::{Constraint, DetailLevel, OutputType, Tone},
};

/// The user's selections for one enhancement request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptData {
    /// Free-text idea, e.g. "Design a landing page for a SaaS product"
    pub input: String,

    pub output_type: OutputType,

    pub tone: Tone,

    pub detail: DetailLevel,

    /// Selected constraints in selection order, without duplicates
    #[serde(default, deserialize_with = "dedup_constraints")]
    pub constraints: Vec<Constraint>,
}

/// Keeps the first occurrence of each constraint, preserving order.
fn dedup_constraints<'de, D>(deserializer: D) -> Result<Vec<Constraint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Constraint>::deserialize(deserializer)?;
    let mut constraints = Vec::with_capacity(raw.len());
    for constraint in raw {
        if !constraints.contains(&constraint) {
            constraints.push(constraint);
        }
    }
    Ok(constraints)
}

impl PromptData {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        if !self.has(constraint) {
            self.constraints.push(constraint);
        }
        self
    }

    pub fn has(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }

    /// Removes the constraint when selected, otherwise appends it.
    pub fn toggle_constraint(&mut self, constraint: Constraint) {
        if let Some(pos) = self.constraints.iter().position(|c| *c == constraint) {
            self.constraints.remove(pos);
        } else {
            self.constraints.push(constraint);
        }
    }

    pub fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    pub fn validate(&self, max_chars: usize) -> Result<(), EnhanceError> {
        if self.is_blank() {
            return Err(EnhanceError::Validation("Input cannot be empty".to_string()));
        }

        if self.input_len() > max_chars {
            return Err(EnhanceError::Validation(format!(
                "Input exceeds maximum length of {} characters",
                max_chars
            )));
        }

        Ok(())
    }
}
