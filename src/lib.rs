pub mod analysis;
pub mod error;
pub mod input;
pub mod models;
pub mod prompt;
pub mod service;
pub mod session;
pub mod shared;
pub mod utils;

pub use error::{Error, Result};
pub use input::{Constraint, DetailLevel, OutputType, PromptData, Tone};
pub use models::EnhancedPrompt;
pub use service::{LocalEnhancer, PromptEnhancer, enhance_prompt};
pub use session::Session;
pub use shared::EnhancerConfig;
