pub mod enhancer;

pub use enhancer::{LocalEnhancer, PromptEnhancer, enhance_prompt};
