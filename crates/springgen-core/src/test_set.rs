//! Integration fixture descriptions.
//!
//! A test set names a fixture directory holding an OpenAPI description, the
//! list of processor inputs and the list of expected generated files:
//!
//! ```text
//! <base>/<name>/inputs.yaml
//! <base>/<name>/inputs/openapi30.yaml
//! <base>/<name>/generated.yaml
//! <base>/<name>/generated/api/Api.java
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// OpenAPI 3.0 description file name
pub const API_30: &str = "openapi30.yaml";

/// OpenAPI 3.1 description file name
pub const API_31: &str = "openapi31.yaml";

/// Header of generated files in fixtures, it replaces the timestamped header.
pub const TEST_HEADER: &str = "\n/*\n * DO NOT MODIFY - this class was auto generated by openapi-processor-spring\n *\n * test\n * time\n * https://docs.openapiprocessor.io/spring \n */\n\n";

/// The OpenAPI parser a fixture runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParserType {
    Internal,
    Swagger,
    OpenApi4j,
}

impl ParserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserType::Internal => "INTERNAL",
            ParserType::Swagger => "SWAGGER",
            ParserType::OpenApi4j => "OPENAPI4J",
        }
    }
}

impl fmt::Display for ParserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserType {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "INTERNAL" => Ok(ParserType::Internal),
            "SWAGGER" => Ok(ParserType::Swagger),
            "OPENAPI4J" => Ok(ParserType::OpenApi4j),
            other => Err(Error::config(format!("unknown parser '{}'", other))),
        }
    }
}

/// Input or expected generated files of a fixture
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileList {
    /// Paths relative to the fixture directory
    #[serde(default)]
    pub items: Vec<String>,
}

/// A fixture run with a given parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSet {
    pub name: String,
    pub processor: String,
    pub parser: ParserType,
    pub openapi: String,
    pub inputs: String,
    pub generated: String,
}

/// Create a test set for the spring processor with the default file names
pub fn test_set<S: Into<String>>(name: S, parser: ParserType) -> TestSet {
    TestSet {
        name: name.into(),
        processor: "spring".to_string(),
        parser,
        openapi: "openapi.yaml".to_string(),
        inputs: "inputs.yaml".to_string(),
        generated: "generated.yaml".to_string(),
    }
}

impl TestSet {
    pub fn with_openapi<S: Into<String>>(mut self, openapi: S) -> Self {
        self.openapi = openapi.into();
        self
    }

    pub fn with_inputs<S: Into<String>>(mut self, inputs: S) -> Self {
        self.inputs = inputs.into();
        self
    }

    pub fn with_generated<S: Into<String>>(mut self, generated: S) -> Self {
        self.generated = generated.into();
        self
    }

    /// Fixture directory below `base`
    pub fn root(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    /// Path of the OpenAPI description
    pub fn openapi_path(&self, base: &Path) -> PathBuf {
        self.root(base).join("inputs").join(&self.openapi)
    }

    /// Load the list of processor inputs
    pub async fn load_inputs(&self, base: &Path) -> crate::Result<FileList> {
        self.load_file_list(base, &self.inputs).await
    }

    /// Load the list of expected generated files
    pub async fn load_generated(&self, base: &Path) -> crate::Result<FileList> {
        self.load_file_list(base, &self.generated).await
    }

    async fn load_file_list(&self, base: &Path, file: &str) -> crate::Result<FileList> {
        let path = self.root(base).join(file);
        let content = fs::read_to_string(&path).await.map_err(|e| {
            Error::config(format!(
                "Failed to read file list at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Read one fixture file
    pub async fn read_file(&self, base: &Path, item: &str) -> crate::Result<String> {
        let content = fs::read_to_string(self.root(base).join(item)).await?;
        Ok(content)
    }
}

impl fmt::Display for TestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.name, self.parser, self.openapi)
    }
}

/// Remove a leading block comment from a generated source file.
pub fn strip_header(source: &str) -> &str {
    let trimmed = source.trim_start();
    if !trimmed.starts_with("/*") {
        return source;
    }

    // the closing marker must not share the `*` of the opening one
    match trimmed[2..].find("*/") {
        Some(end) => trimmed[end + 4..].trim_start(),
        None => source,
    }
}
