//! YAML description of the query parameters to render.
//!
//! ```yaml
//! parameters:
//!   - name: props
//!     type:
//!       kind: mapped
//!       type: java.util.Map
//!       generics: [java.lang.String, java.lang.String]
//!   - name: page
//!     required: true
//!     type:
//!       kind: simple
//!       type: Integer
//! ```

// Internal imports (std, crate)
use std::path::Path;
use std::str::FromStr;

use crate::classifier::AnnotationClassifier;
use crate::datatypes::{DataType, MappedDataType, ObjectDataType, SimpleDataType};
use crate::parameters::QueryParameter;
use crate::Error;

// External imports (alphabetized)
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// A list of query parameter descriptions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

/// Description of a single query parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Name of the parameter in the query string
    pub name: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub description: Option<String>,

    /// Resolved data type of the parameter
    #[serde(rename = "type")]
    pub data_type: TypeSpec,
}

/// Description of a parameter data type, tagged by `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeSpec {
    Simple {
        #[serde(rename = "type")]
        type_name: String,
    },
    Mapped {
        #[serde(rename = "type")]
        type_name: String,
        #[serde(default)]
        generics: Vec<String>,
        /// true if the mapping replaced a non-object schema
        #[serde(default)]
        simple: bool,
    },
    Object {
        name: String,
        package: String,
    },
}

impl TryFrom<&TypeSpec> for DataType {
    type Error = Error;

    fn try_from(spec: &TypeSpec) -> crate::Result<Self> {
        Ok(match spec {
            TypeSpec::Simple { type_name } => SimpleDataType::new(type_name)?.into(),
            TypeSpec::Mapped {
                type_name,
                generics,
                simple,
            } => MappedDataType::new(type_name.as_str(), generics.clone(), *simple)?.into(),
            TypeSpec::Object { name, package } => {
                ObjectDataType::new(name.as_str(), package.as_str())?.into()
            }
        })
    }
}

impl FromStr for ParameterSet {
    type Err = Error;

    fn from_str(content: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl ParameterSet {
    /// Load a parameter set from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        debug!("loading query parameters from {}", path.display());
        let content = fs::read_to_string(path).await?;
        content.parse()
    }

    /// Build the query parameters, classifying each one with `classifier`.
    pub fn into_parameters(
        self,
        classifier: &AnnotationClassifier,
    ) -> crate::Result<Vec<QueryParameter>> {
        self.parameters
            .into_iter()
            .map(|spec| {
                let data_type = DataType::try_from(&spec.data_type).map_err(|e| {
                    Error::invalid_type(format!("parameter '{}': {}", spec.name, e))
                })?;
                Ok(QueryParameter::new(spec.name, data_type, classifier)
                    .as_required(spec.required)
                    .as_deprecated(spec.deprecated)
                    .with_description(spec.description))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::Parameter;
    use tempfile::tempdir;

    const PARAMETERS: &str = r#"
parameters:
  - name: props
    type:
      kind: object
      name: Props
      package: generated.model
  - name: props
    description: all query parameters
    type:
      kind: mapped
      type: org.springframework.util.MultiValueMap
      generics: [java.lang.String, java.lang.String]
  - name: page
    required: true
    deprecated: true
    type:
      kind: simple
      type: Integer
"#;

    #[test]
    fn test_parse_parameters() -> crate::Result<()> {
        let set: ParameterSet = PARAMETERS.parse()?;
        assert_eq!(set.parameters.len(), 3);

        let params = set.into_parameters(&AnnotationClassifier::default())?;
        assert!(!params[0].with_annotation());
        assert!(params[1].with_annotation());
        assert!(!params[1].with_parameters());
        assert_eq!(params[1].description(), Some("all query parameters"));
        assert_eq!(
            params[1].data_type().name(),
            "MultiValueMap<String, String>"
        );
        assert!(params[2].required());
        assert!(params[2].deprecated());
        assert!(params[2].with_parameters());
        Ok(())
    }

    #[test]
    fn test_invalid_type_names_the_parameter() {
        let set: ParameterSet = r#"
parameters:
  - name: broken
    type:
      kind: mapped
      type: Map
"#
        .parse()
        .unwrap();

        let err = set
            .into_parameters(&AnnotationClassifier::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidType(_)));
        assert!(err.to_string().contains("broken"));

        let set: ParameterSet = r#"
parameters:
  - name: pojo
    type:
      kind: object
      name: "not a type"
      package: ""
"#
        .parse()
        .unwrap();

        let err = set
            .into_parameters(&AnnotationClassifier::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidType(_)));
        assert!(err.to_string().contains("pojo"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: crate::Result<ParameterSet> = r#"
parameters:
  - name: x
    type:
      kind: array
"#
        .parse();
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[tokio::test]
    async fn test_from_file() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("parameters.yaml");
        tokio::fs::write(&path, PARAMETERS).await?;

        let set = ParameterSet::from_file(&path).await?;
        assert_eq!(set.parameters.len(), 3);
        Ok(())
    }
}
