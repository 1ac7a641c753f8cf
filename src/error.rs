use thiserror::Error;

/// Custom error types for kodama
#[derive(Debug, Error)]
pub enum KodamaError {
    #[error("Unknown direction: {0}\n\nExpected one of: {names}", names = crate::direction::direction_names().join(", "))]
    UnknownDirection(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
