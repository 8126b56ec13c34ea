//! Loader settings and their YAML form

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};

/// What to do with a continuation line (`#citation`, `#index`, `#%`)
/// that has no record to apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log, record in the report, keep reading
    #[default]
    Skip,
    /// Stop the load with an error
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoaderConfig {
    /// Stop before starting record `max_records + 1`. `None` reads everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<usize>,

    /// Emit a progress event every N started records (0 = off)
    pub progress_interval: usize,

    pub on_malformed: MalformedPolicy,
}

impl LoaderConfig {
    pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;
    const MAX_PROGRESS_INTERVAL: usize = 100_000_000;

    pub fn max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn on_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_records == Some(0) {
            return Err(ConfigError::Range {
                field: "max_records".to_string(),
                value: "0".to_string(),
                hint: "Omit the field to load every record.".to_string(),
            });
        }
        if self.progress_interval > Self::MAX_PROGRESS_INTERVAL {
            return Err(ConfigError::Range {
                field: "progress_interval".to_string(),
                value: self.progress_interval.to_string(),
                hint: format!("Use 0 to disable, or at most {}.", Self::MAX_PROGRESS_INTERVAL),
            });
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_records: None,
            progress_interval: Self::DEFAULT_PROGRESS_INTERVAL,
            on_malformed: MalformedPolicy::Skip,
        }
    }
}
