use std::{env, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "enhanced-prompt.txt";

pub const ENV_DELAY_MS: &str = "PROMPTCRAFTER_DELAY_MS";
pub const ENV_LOG: &str = "PROMPTCRAFTER_LOG";

/// Enhancer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    /// Artificial latency before a result is produced
    pub simulated_delay_ms: u64,
    pub max_input_chars: usize,
    pub log_level: String,
    pub export_file_name: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            log_level: "info".to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EnhancerConfig {
    /// Config with no simulated latency, used by tests and `--delay-ms 0`.
    pub fn instant() -> Self {
        Self {
            simulated_delay_ms: 0,
            ..Default::default()
        }
    }

    /// Loads a JSON config file; missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = env::var(ENV_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.simulated_delay_ms = ms,
                Err(e) => warn!("ignoring {}={:?}: {}", ENV_DELAY_MS, raw, e),
            }
        }
        if let Ok(level) = env::var(ENV_LOG) {
            if !level.trim().is_empty() {
                self.log_level = level.trim().to_lowercase();
            }
        }
        self
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EnhancerConfig::default();
        assert_eq!(config.simulated_delay(), Duration::from_secs(2));
        assert_eq!(config.max_input_chars, 10_000);
        assert_eq!(config.export_file_name, "enhanced-prompt.txt");
        assert_eq!(EnhancerConfig::instant().simulated_delay_ms, 0);
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"simulated_delay_ms": 50, "log_level": "debug"}}"#).unwrap();

        let config = EnhancerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.simulated_delay_ms, 50);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_input_chars, DEFAULT_MAX_INPUT_CHARS);
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            EnhancerConfig::from_file(file.path()),
            Err(crate::error::Error::SerdeJsonError(_))
        ));
    }
}
