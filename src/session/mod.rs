use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::{
    error::{Result, enhance_error::EnhanceError},
    input::{Constraint, PromptData},
    models::EnhancedPrompt,
    service::{LocalEnhancer, PromptEnhancer},
    shared::{EnhancerConfig, config::DEFAULT_EXPORT_FILE_NAME},
};

/// One completed enhancement.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub request: PromptData,
    pub result: EnhancedPrompt,
}

/// Working state of a single editing session: the current selections and the
/// most recent result.
pub struct Session {
    enhancer: Arc<dyn PromptEnhancer>,
    pub data: PromptData,
    last: Option<SessionEntry>,
    is_loading: bool,
    dev_view: bool,
    export_file_name: String,
}

impl Session {
    pub fn new(enhancer: Arc<dyn PromptEnhancer>) -> Self {
        Self {
            enhancer,
            data: PromptData::default(),
            last: None,
            is_loading: false,
            dev_view: false,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    pub fn with_config(config: EnhancerConfig) -> Self {
        let export_file_name = config.export_file_name.clone();
        Self {
            export_file_name,
            ..Self::new(Arc::new(LocalEnhancer::new(config)))
        }
    }

    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.data.input = input.into();
    }

    pub fn toggle_constraint(&mut self, constraint: Constraint) {
        self.data.toggle_constraint(constraint);
    }

    pub fn toggle_dev_view(&mut self) -> bool {
        self.dev_view = !self.dev_view;
        self.dev_view
    }

    pub fn dev_view(&self) -> bool {
        self.dev_view
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last(&self) -> Option<&SessionEntry> {
        self.last.as_ref()
    }

    /// Runs the enhancer on the current selections. A blank input is a no-op
    /// and yields `Ok(None)`; the previous result is kept.
    pub async fn enhance(&mut self) -> Result<Option<&SessionEntry>> {
        if self.data.is_blank() {
            debug!("Session: blank input, nothing to enhance");
            return Ok(None);
        }

        self.is_loading = true;
        let outcome = self.enhancer.enhance(&self.data).await;
        self.is_loading = false;

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                error!("Error enhancing prompt with {}: {}", self.enhancer.name(), e);
                return Err(e);
            }
        };

        let entry = SessionEntry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            request: self.data.clone(),
            result,
        };
        info!("Session: stored enhancement {}", entry.id.simple());

        Ok(Some(&*self.last.insert(entry)))
    }

    /// Re-runs the enhancer with the current selections.
    pub async fn refine(&mut self) -> Result<Option<&SessionEntry>> {
        self.enhance().await
    }

    /// Writes the last enhanced prompt's text to `path`.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let entry = self.last.as_ref().ok_or(EnhanceError::NothingToExport)?;
        std::fs::write(path.as_ref(), &entry.result.content)?;
        info!("Exported enhanced prompt to {}", path.as_ref().display());
        Ok(())
    }

    /// Writes the last enhanced prompt into `dir` under the configured export
    /// file name and returns the written path.
    pub fn export_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.export_file_name);
        self.export(&path)?;
        Ok(path)
    }
}
