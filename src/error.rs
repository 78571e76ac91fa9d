use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Could not find bundled rules at {}", path.display())]
    MissingBundledRules { path: PathBuf },

    #[error("No rules were copied. Installation failed.")]
    NoRulesCopied,

    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    #[error("Failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl PluginError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PluginError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts the whole installation
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PluginError::ConfigParse { .. })
    }
}

pub type Result<T> = std::result::Result<T, PluginError>;
