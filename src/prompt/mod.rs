pub mod builder;
pub mod templates;

pub use builder::build_enhanced_prompt;
