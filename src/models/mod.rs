pub mod enhanced;

pub use enhanced::{Audience, DebugInfo, EnhancedPrompt, Intent, Section};
