pub mod model;
pub mod options;

pub use model::PromptData;
pub use options::{Constraint, DetailLevel, OutputType, Tone};
