//! Error types for the request boundary and configuration loading.
//!
//! The search core itself is infallible; these only cover input that arrives
//! from outside the engine.

use std::path::PathBuf;

/// Errors raised while decoding a move request.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("board must have 8 rows, got {0}")]
    RowCount(usize),

    #[error("board row {row} must have 8 cells, got {len}")]
    ColumnCount { row: usize, len: usize },

    #[error("unrecognized cell token {token:?} at ({row}, {col})")]
    CellToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("unrecognized color token {0:?}")]
    ColorToken(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_display() {
        let err = ProtocolError::CellToken {
            row: 2,
            col: 5,
            token: "red".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized cell token \"red\" at (2, 5)");

        let err = ProtocolError::ColumnCount { row: 3, len: 7 };
        assert_eq!(err.to_string(), "board row 3 must have 8 cells, got 7");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("node_budget must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: node_budget must be > 0"
        );
    }
}
