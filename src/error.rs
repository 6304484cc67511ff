//! Error types for the fallible edges of the game: the save file and the
//! optional config file. The simulation itself never fails.

use std::path::PathBuf;

/// Save file errors
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    /// IO error
    #[error("save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid save record
    #[error("save file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error
    #[error("could not encode save record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value parsed but makes no sense for the game
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
