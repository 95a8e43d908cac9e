//! Java source text for query parameters of generated Spring interfaces.
//!
//! # Examples
//!
//! ```
//! use springgen_core::classifier::AnnotationClassifier;
//! use springgen_core::datatypes::SimpleDataType;
//! use springgen_core::parameters::QueryParameter;
//! use springgen_core::writer::ParameterWriter;
//!
//! let classifier = AnnotationClassifier::default();
//! let param = QueryParameter::new(
//!     "page-size",
//!     SimpleDataType::new("Integer").unwrap().into(),
//!     &classifier,
//! );
//!
//! let writer = ParameterWriter::default();
//! assert_eq!(
//!     writer.write(&param),
//!     "@RequestParam(name = \"page-size\", required = false) Integer pageSize"
//! );
//! ```

use std::collections::BTreeSet;

use crate::parameters::Parameter;
use crate::utils::{escape_java_string, to_java_identifier};

/// Fully qualified name of Spring's `@RequestParam`
pub const REQUEST_PARAM: &str = "org.springframework.web.bind.annotation.RequestParam";

const JAVA_LANG: &str = "java.lang.";

/// Writes a parameter the way it appears in a generated endpoint method.
#[derive(Clone, Debug)]
pub struct ParameterWriter {
    mark_deprecated: bool,
}

impl Default for ParameterWriter {
    fn default() -> Self {
        Self {
            mark_deprecated: true,
        }
    }
}

impl ParameterWriter {
    pub fn new(mark_deprecated: bool) -> Self {
        Self { mark_deprecated }
    }

    /// Render the parameter, e.g. `@RequestParam(name = "foo") String foo`.
    pub fn write<P: Parameter>(&self, parameter: &P) -> String {
        let mut source = String::new();

        if self.mark_deprecated && parameter.deprecated() {
            source.push_str("@Deprecated ");
        }

        if parameter.with_annotation() {
            source.push_str(&self.annotation(parameter));
            source.push(' ');
        }

        source.push_str(&parameter.data_type().name());
        source.push(' ');
        source.push_str(&to_java_identifier(parameter.name()));
        source
    }

    /// Imports needed by the rendered parameter, sorted.
    pub fn imports<P: Parameter>(&self, parameter: &P) -> BTreeSet<String> {
        let mut imports: BTreeSet<String> = parameter
            .data_type()
            .imports()
            .into_iter()
            .filter(|import| !import.starts_with(JAVA_LANG))
            .collect();

        if parameter.with_annotation() {
            imports.insert(REQUEST_PARAM.to_string());
        }
        imports
    }

    fn annotation<P: Parameter>(&self, parameter: &P) -> String {
        if !parameter.with_parameters() {
            return "@RequestParam".to_string();
        }

        let mut arguments = vec![format!(
            "name = \"{}\"",
            escape_java_string(parameter.name())
        )];
        if !parameter.required() {
            arguments.push("required = false".to_string());
        }
        format!("@RequestParam({})", arguments.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::AnnotationClassifier;
    use crate::datatypes::{DataType, MappedDataType, ObjectDataType, SimpleDataType};
    use crate::parameters::QueryParameter;

    fn string_map(map_type: &str) -> DataType {
        MappedDataType::new(
            map_type,
            vec!["java.lang.String".into(), "java.lang.String".into()],
            false,
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_required_simple_parameter() {
        let classifier = AnnotationClassifier::default();
        let param = QueryParameter::new(
            "foo",
            SimpleDataType::new("String").unwrap().into(),
            &classifier,
        )
        .as_required(true);

        let writer = ParameterWriter::default();
        assert_eq!(writer.write(&param), "@RequestParam(name = \"foo\") String foo");
        assert_eq!(
            writer.imports(&param).into_iter().collect::<Vec<_>>(),
            vec![REQUEST_PARAM.to_string()]
        );
    }

    #[test]
    fn test_object_parameter_has_no_annotation() {
        let classifier = AnnotationClassifier::default();
        let param = QueryParameter::new(
            "props",
            ObjectDataType::new("Props", "generated.model").unwrap().into(),
            &classifier,
        );

        let writer = ParameterWriter::default();
        assert_eq!(writer.write(&param), "Props props");
        assert_eq!(
            writer.imports(&param).into_iter().collect::<Vec<_>>(),
            vec!["generated.model.Props".to_string()]
        );
    }

    #[test]
    fn test_map_parameter_has_bare_annotation() {
        let classifier = AnnotationClassifier::default();
        let param = QueryParameter::new("props", string_map("java.util.Map"), &classifier);

        let writer = ParameterWriter::default();
        assert_eq!(
            writer.write(&param),
            "@RequestParam Map<String, String> props"
        );
        assert_eq!(
            writer.imports(&param).into_iter().collect::<Vec<_>>(),
            vec!["java.util.Map".to_string(), REQUEST_PARAM.to_string()]
        );
    }

    #[test]
    fn test_mapped_object_schema_is_written_plain() {
        let classifier = AnnotationClassifier::default();
        let data_type = MappedDataType::new("com.example.Filter", vec![], false)
            .unwrap()
            .into();
        let param = QueryParameter::new("filter", data_type, &classifier);

        assert_eq!(ParameterWriter::default().write(&param), "Filter filter");
    }

    #[test]
    fn test_name_is_escaped_in_annotation() {
        let classifier = AnnotationClassifier::default();
        let param = QueryParameter::new(
            r#"filter["a"]"#,
            SimpleDataType::new("String").unwrap().into(),
            &classifier,
        );

        assert_eq!(
            ParameterWriter::default().write(&param),
            r#"@RequestParam(name = "filter[\"a\"]", required = false) String filterA"#
        );
    }

    #[test]
    fn test_reserved_underscore_name() {
        let classifier = AnnotationClassifier::default();
        let param = QueryParameter::new(
            "_",
            SimpleDataType::new("String").unwrap().into(),
            &classifier,
        )
        .as_required(true);

        assert_eq!(
            ParameterWriter::default().write(&param),
            r#"@RequestParam(name = "_") String __"#
        );
    }

    #[test]
    fn test_deprecated_parameter() {
        let classifier = AnnotationClassifier::default();
        let param = QueryParameter::new(
            "old",
            SimpleDataType::new("String").unwrap().into(),
            &classifier,
        )
        .as_deprecated(true);

        assert_eq!(
            ParameterWriter::default().write(&param),
            "@Deprecated @RequestParam(name = \"old\", required = false) String old"
        );
        assert_eq!(
            ParameterWriter::new(false).write(&param),
            "@RequestParam(name = \"old\", required = false) String old"
        );
    }
}
