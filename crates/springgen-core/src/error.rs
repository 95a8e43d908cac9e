//! Error handling for the springgen library.
//!
//! Classifying and rendering parameters cannot fail. Errors only come from the
//! loading surfaces: configuration files, parameter descriptions and fixture
//! files. This module defines the `Error` type for those, along with a
//! convenient `Result` type alias.
//!
//! # Examples
//!
//! ```
//! use springgen_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::invalid_type("missing package"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for springgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for springgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A data type description that cannot be turned into a Java type
    #[error("Invalid data type: {0}")]
    InvalidType(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid data type error
    pub fn invalid_type<S: Into<String>>(msg: S) -> Self {
        Self::InvalidType(msg.into())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
