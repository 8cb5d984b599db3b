#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unknown {kind}: {value}")]
    InvalidOption { kind: &'static str, value: String },

    #[error("no enhanced prompt to export")]
    NothingToExport,
}

impl EnhanceError {
    pub fn invalid_option(kind: &'static str, value: &str) -> Self {
        Self::InvalidOption {
            kind,
            value: value.to_string(),
        }
    }
}
