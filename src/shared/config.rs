use crate::shared::error::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_METRIC_KEY_PREFIX: &str = "raspberrypi";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub metric_key_prefix: String,
    /// Handed to the agent side untouched; no metric here is differential.
    pub tempfile: Option<PathBuf>,
    /// Explicit tool location. Looked up on `PATH` when unset.
    pub vcgencmd: Option<PathBuf>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            metric_key_prefix: DEFAULT_METRIC_KEY_PREFIX.to_string(),
            tempfile: None,
            vcgencmd: None,
        }
    }
}

impl PluginConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Reading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // serde_yaml rejects an empty document.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Prefix under which every metric key and graph is published.
    pub fn metric_key_prefix(&self) -> &str {
        if self.metric_key_prefix.is_empty() {
            DEFAULT_METRIC_KEY_PREFIX
        } else {
            &self.metric_key_prefix
        }
    }

    pub fn with_overrides(
        mut self,
        metric_key_prefix: Option<String>,
        tempfile: Option<PathBuf>,
        vcgencmd: Option<PathBuf>,
    ) -> Self {
        if let Some(prefix) = metric_key_prefix {
            self.metric_key_prefix = prefix;
        }
        if tempfile.is_some() {
            self.tempfile = tempfile;
        }
        if vcgencmd.is_some() {
            self.vcgencmd = vcgencmd;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = PluginConfig::default();
        assert_eq!(config.metric_key_prefix(), "raspberrypi");
        assert!(config.tempfile.is_none());
        assert!(config.vcgencmd.is_none());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = PluginConfig::from_yaml("tempfile: /tmp/rpi.state\n").unwrap();
        assert_eq!(config.metric_key_prefix(), "raspberrypi");
        assert_eq!(config.tempfile, Some(PathBuf::from("/tmp/rpi.state")));
    }

    #[test]
    fn empty_prefix_falls_back_to_default() {
        let config = PluginConfig::from_yaml("metric_key_prefix: \"\"\n").unwrap();
        assert_eq!(config.metric_key_prefix(), DEFAULT_METRIC_KEY_PREFIX);
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = PluginConfig::from_yaml("metric_key_prefix: pi4\nvcgencmd: /opt/vc/bin/vcgencmd\n")
            .unwrap()
            .with_overrides(Some("lab".to_string()), None, None);
        assert_eq!(config.metric_key_prefix(), "lab");
        assert_eq!(config.vcgencmd, Some(PathBuf::from("/opt/vc/bin/vcgencmd")));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "metric_key_prefix: garage").unwrap();
        let config = PluginConfig::load(file.path()).unwrap();
        assert_eq!(config.metric_key_prefix(), "garage");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "metric_key_prefix: [unterminated").unwrap();
        assert!(matches!(
            PluginConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            PluginConfig::load(Path::new("/nonexistent/rpimetrics.yaml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
