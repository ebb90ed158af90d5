//! Error types for the showcase
//!
//! Library errors use thiserror so callers get readable messages and a proper
//! source chain. Validation of a submission is not an error here: a rejected
//! draft is an ordinary `SubmissionOutcome`.

use thiserror::Error;

/// Top-level error type
#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading the fixed catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Catalog has no projects")]
    NoProjects,

    #[error("Catalog field '{field}' must not be empty")]
    EmptyVocabulary { field: &'static str },

    #[error("Duplicate entry '{value}' in {field}")]
    DuplicateEntry { field: &'static str, value: String },
}

/// Errors raised while reading server configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert_into_showcase_error() {
        let err: ShowcaseError = CatalogError::NoProjects.into();
        assert_eq!(err.to_string(), "Catalog error: Catalog has no projects");

        let err: ShowcaseError = ConfigError::InvalidNumber {
            var: "SHOWCASE_MAX_UPLOAD_MB",
            value: "0".into(),
        }
        .into();
        assert!(matches!(err, ShowcaseError::Config(_)));
    }
}
