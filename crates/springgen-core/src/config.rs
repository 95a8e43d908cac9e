//! Configuration for rendering query parameters.
//!
//! The configuration can be loaded from a YAML or TOML file, or created
//! programmatically.
//!
//! # Examples
//!
//! ```no_run
//! use springgen_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> springgen_core::Result<()> {
//! // Create a config programmatically
//! let mut config = Config::default();
//! config.map_types.push("io.vavr.collection.HashMap".to_string());
//!
//! // Or load it from a file
//! let config = Config::from_file("springgen.yaml").await?;
//! let classifier = config.classifier()?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::classifier::{AnnotationClassifier, MapTypes, JAVA_MAP, SPRING_MULTI_VALUE_MAP};
use crate::writer::ParameterWriter;

// External imports (alphabetized)
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_value::Value as SerdeValue;
use tokio::fs;

/// Configuration for query parameter rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fully qualified mapped types that bind the whole query string
    #[serde(default = "default_map_types", deserialize_with = "deserialize_type_names")]
    pub map_types: Vec<String>,

    /// Whether deprecated parameters get a `@Deprecated` annotation
    #[serde(default = "default_mark_deprecated")]
    pub mark_deprecated: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_types: default_map_types(),
            mark_deprecated: default_mark_deprecated(),
        }
    }
}

impl Config {
    /// Load configuration from a file, TOML for `.toml` files and YAML otherwise
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path).await?;

        let config: Config = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration to a file, TOML for `.toml` files and YAML otherwise
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// Build the annotation classifier for the configured map types
    pub fn classifier(&self) -> crate::Result<AnnotationClassifier> {
        if let Some(blank) = self.map_types.iter().find(|t| t.trim().is_empty()) {
            return Err(format!("map type '{}' is blank", blank).into());
        }
        Ok(AnnotationClassifier::new(MapTypes::new(
            self.map_types.iter().cloned(),
        )))
    }

    pub fn writer(&self) -> ParameterWriter {
        ParameterWriter::new(self.mark_deprecated)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn default_map_types() -> Vec<String> {
    vec![JAVA_MAP.to_string(), SPRING_MULTI_VALUE_MAP.to_string()]
}

fn default_mark_deprecated() -> bool {
    true
}

/// Accept either a single type name or a list of type names
fn deserialize_type_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SerdeValue::deserialize(deserializer)?;

    match value {
        SerdeValue::String(s) => Ok(vec![s]),
        SerdeValue::Seq(seq) => {
            let mut result = Vec::new();
            for item in seq {
                if let SerdeValue::String(s) = item {
                    result.push(s);
                } else {
                    return Err(serde::de::Error::custom(
                        "Expected string or array of strings",
                    ));
                }
            }
            Ok(result)
        }
        _ => Err(serde::de::Error::custom(
            "Expected string or array of strings",
        )),
    }
}
