//! Generated method parameters.

use log::debug;

use crate::classifier::AnnotationClassifier;
use crate::datatypes::DataType;

/// A parameter of a generated endpoint method.
pub trait Parameter {
    /// Name of the parameter as defined in the OpenAPI description
    fn name(&self) -> &str;

    /// Resolved Java type of the parameter
    fn data_type(&self) -> &DataType;

    fn required(&self) -> bool;

    fn deprecated(&self) -> bool;

    fn description(&self) -> Option<&str>;

    /// Controls if the parameter gets a binding annotation.
    fn with_annotation(&self) -> bool {
        true
    }

    /// Controls if the binding annotation carries any arguments.
    fn with_parameters(&self) -> bool {
        true
    }
}

/// OpenAPI query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParameter {
    name: String,
    data_type: DataType,
    required: bool,
    deprecated: bool,
    description: Option<String>,
    with_annotation: bool,
    with_parameters: bool,
}

impl QueryParameter {
    /// Create an optional, non deprecated query parameter. The annotation
    /// decisions are taken once, here, using `classifier`.
    pub fn new<S: Into<String>>(
        name: S,
        data_type: DataType,
        classifier: &AnnotationClassifier,
    ) -> Self {
        let name = name.into();
        let with_annotation = classifier.should_annotate(&data_type);
        let with_parameters = classifier.should_annotate_with_parameters(&data_type);
        debug!(
            "query parameter '{}' ({}): annotation={}, parameters={}",
            name, data_type, with_annotation, with_parameters
        );

        Self {
            name,
            data_type,
            required: false,
            deprecated: false,
            description: None,
            with_annotation,
            with_parameters,
        }
    }

    pub fn as_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn as_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        self.description = description.map(Into::into);
        self
    }
}

impl Parameter for QueryParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn data_type(&self) -> &DataType {
        &self.data_type
    }

    fn required(&self) -> bool {
        self.required
    }

    fn deprecated(&self) -> bool {
        self.deprecated
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn with_annotation(&self) -> bool {
        self.with_annotation
    }

    fn with_parameters(&self) -> bool {
        self.with_parameters
    }
}
