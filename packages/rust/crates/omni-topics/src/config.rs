//! Validation config - load validator settings from a YAML file.

use crate::error::TopicsError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default minimum trimmed content length.
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 50;

/// Settings for [`run_validation`](crate::run_validation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Run the checks at all. When false the report is empty and `skipped`.
    pub enabled: bool,
    /// Trimmed content shorter than this (in characters) is `empty_content`.
    pub min_content_chars: usize,
    /// Report non-blank titles whose derived key is empty as `missing_title`.
    pub flag_empty_keys: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
            flag_empty_keys: true,
        }
    }
}

impl ValidationConfig {
    /// Config with every check switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default().with_enabled(false)
    }

    /// Set `enabled`.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the content threshold.
    #[must_use]
    pub fn with_min_content_chars(mut self, min_content_chars: usize) -> Self {
        self.min_content_chars = min_content_chars;
        self
    }

    /// Set `flag_empty_keys`.
    #[must_use]
    pub fn with_flag_empty_keys(mut self, flag_empty_keys: bool) -> Self {
        self.flag_empty_keys = flag_empty_keys;
        self
    }

    /// Parse a YAML document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TopicsError::Parse`] when the YAML is malformed.
    pub fn from_yaml_str(content: &str) -> Result<Self, TopicsError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TopicsError::parse("<inline>", &e))
    }

    /// Load configuration from a YAML file.
    ///
    /// A leading `~` expands to the home directory. A missing, unreadable
    /// or malformed file logs a warning and yields the defaults.
    #[must_use]
    pub fn load(path: &str) -> Self {
        let path = expand_home(path);

        if !path.exists() {
            log::warn!("Validation config not found: {}", path.display());
            return Self::default();
        }

        match Self::try_load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Falling back to default validation config: {e}");
                Self::default()
            }
        }
    }

    /// Load configuration from a YAML file, surfacing failures.
    ///
    /// # Errors
    ///
    /// Returns [`TopicsError::Io`] when the file cannot be read and
    /// [`TopicsError::Parse`] when its content is not valid config YAML.
    pub fn try_load(path: &Path) -> Result<Self, TopicsError> {
        let content = std::fs::read_to_string(path).map_err(|source| TopicsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| TopicsError::parse(path.display().to_string(), &e))
    }
}

pub(crate) fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~')
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped.trim_start_matches('/'));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert!(config.enabled);
        assert_eq!(config.min_content_chars, 50);
        assert!(config.flag_empty_keys);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ValidationConfig::from_yaml_str("enabled: false\n").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.min_content_chars, DEFAULT_MIN_CONTENT_CHARS);
        assert!(config.flag_empty_keys);
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = ValidationConfig::from_yaml_str("min_content_chars: [oops").unwrap_err();
        assert!(matches!(err, TopicsError::Parse { .. }));
    }

    #[test]
    fn test_plain_path_is_untouched() {
        assert_eq!(
            expand_home("conf/topics.yaml"),
            PathBuf::from("conf/topics.yaml")
        );
    }
}
