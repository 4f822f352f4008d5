use thiserror::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Collection failed: {0}")]
    Collection(#[from] CollectionError),

    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Reporting failed: {0}")]
    Report(#[from] ReportError),
}

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Failed to execute {command}: {source}")]
    Execution {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    ExitStatus {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("vcgencmd not found: {0}")]
    ToolNotFound(#[from] which::Error),

    #[error("Failed to parse {category} output: {raw:?}")]
    Parse {
        category: &'static str,
        raw: String,
    },

    #[error("Failed to resolve hostname: {0}")]
    Hostname(#[source] io::Error),

    #[error("Metric validation failed: {0}")]
    Validation(String),
}

impl CollectionError {
    pub fn parse(category: &'static str, raw: impl Into<String>) -> Self {
        CollectionError::Parse {
            category,
            raw: raw.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize graph definitions: {0}")]
    Serialize(#[from] serde_json::Error),
}
