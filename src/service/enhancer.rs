use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    analysis::{build_debug_info, calculate_quality_score, generate_tags},
    error::Result,
    input::PromptData,
    models::EnhancedPrompt,
    prompt::{build_enhanced_prompt, templates},
    shared::EnhancerConfig,
};

/// Turns a set of selections into an enhanced prompt.
#[async_trait]
pub trait PromptEnhancer: Send + Sync {
    async fn enhance(&self, data: &PromptData) -> Result<EnhancedPrompt>;

    fn name(&self) -> &str;
}

/// Template-based enhancer that runs entirely in-process, after an optional
/// simulated delay.
#[derive(Debug, Clone, Default)]
pub struct LocalEnhancer {
    config: EnhancerConfig,
}

impl LocalEnhancer {
    pub fn new(config: EnhancerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    /// Builds the result without validation or delay.
    pub fn compose(data: &PromptData) -> EnhancedPrompt {
        EnhancedPrompt {
            content: build_enhanced_prompt(data),
            tags: generate_tags(data),
            score: calculate_quality_score(data),
            debug_info: build_debug_info(data),
            preview_output: Some(templates::preview(data.output_type).to_string()),
        }
    }
}

#[async_trait]
impl PromptEnhancer for LocalEnhancer {
    async fn enhance(&self, data: &PromptData) -> Result<EnhancedPrompt> {
        data.validate(self.config.max_input_chars)?;

        info!(
            "Enhancing prompt: type={} tone={} detail={} constraints={}",
            data.output_type,
            data.tone,
            data.detail,
            data.constraints.len()
        );

        let delay = self.config.simulated_delay();
        if !delay.is_zero() {
            debug!("Simulating enhancement latency of {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        let enhanced = Self::compose(data);
        debug!(
            "Detected intent={} audience={}",
            enhanced.debug_info.intent, enhanced.debug_info.audience
        );
        info!(
            "Prompt enhanced: score={} tags={}",
            enhanced.score,
            enhanced.tags.join(",")
        );

        Ok(enhanced)
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Enhances with the default configuration, including its simulated delay.
pub async fn enhance_prompt(data: &PromptData) -> Result<EnhancedPrompt> {
    LocalEnhancer::default().enhance(data).await
}
