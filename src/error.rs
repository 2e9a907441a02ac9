use thiserror::Error;

/// Errors raised while building or rendering a chart configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported value type at '{path}': {kind}")]
    UnsupportedValueType { path: String, kind: String },

    #[error("Value at '{path}' contains the reserved raw-code delimiter")]
    DelimiterCollision { path: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn unsupported(path: impl Into<String>, kind: impl Into<String>) -> Self {
        ConfigError::UnsupportedValueType {
            path: path.into(),
            kind: kind.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
