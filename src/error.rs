use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeGuardError {
    #[error("Invalid quantifier: {spec:?}")]
    InvalidQuantity { spec: String },

    #[error("Assertion identifier must be a non-empty label")]
    MissingIdentifier,

    #[error("Assertion identifier {0:?} is reserved for extra-item warnings")]
    ReservedIdentifier(String),

    #[error("Invalid regular expression: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to scan directory: {path}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Script error: {0}")]
    Script(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TreeGuardError {
    /// Short category name used when printing errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidQuantity { .. }
            | Self::MissingIdentifier
            | Self::ReservedIdentifier(_)
            | Self::InvalidRegex { .. } => "Usage",
            Self::NotADirectory(_) | Self::Scan { .. } => "Scan",
            Self::Script(_) | Self::TomlParse(_) => "Script",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) | Self::Csv(_) => "Output",
        }
    }

    /// Errors caused by a mistake in the validation script rather than by the data.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity { .. }
                | Self::MissingIdentifier
                | Self::ReservedIdentifier(_)
                | Self::InvalidRegex { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TreeGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
