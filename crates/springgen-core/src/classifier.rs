//! Decides how a query parameter is annotated with `@RequestParam`.
//!
//! Spring binds pojo parameters implicitly from the query string, so they must
//! not carry an annotation. Maps must always be annotated, but without a
//! parameter name because the whole query string is bound. Everything else
//! binds a single named value and gets a full `@RequestParam(name = ...)`.

use crate::datatypes::DataType;

/// Fully qualified name of `java.util.Map`
pub const JAVA_MAP: &str = "java.util.Map";

/// Fully qualified name of Spring's `MultiValueMap`
pub const SPRING_MULTI_VALUE_MAP: &str = "org.springframework.util.MultiValueMap";

/// The set of mapped types that are treated as maps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapTypes {
    names: Vec<String>,
}

impl MapTypes {
    /// Create a set from the given fully qualified type names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut types = Self { names: Vec::new() };
        for name in names {
            types = types.with(name);
        }
        types
    }

    /// Add another map type to the set.
    pub fn with<S: Into<String>>(mut self, name: S) -> Self {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for MapTypes {
    fn default() -> Self {
        Self::new([JAVA_MAP, SPRING_MULTI_VALUE_MAP])
    }
}

/// Annotation rules for query parameters, bound to a set of map types.
#[derive(Clone, Debug, Default)]
pub struct AnnotationClassifier {
    map_types: MapTypes,
}

impl AnnotationClassifier {
    pub fn new(map_types: MapTypes) -> Self {
        Self { map_types }
    }

    pub fn map_types(&self) -> &MapTypes {
        &self.map_types
    }

    /// True if the data type is mapped to one of the known map types.
    pub fn is_map_like_mapped(&self, data_type: &DataType) -> bool {
        match data_type {
            DataType::Mapped(mapped) => self.map_types.contains(mapped.qualified_name()),
            DataType::Simple(_) | DataType::Object(_) => false,
        }
    }

    /// Controls if a parameter gets a `@RequestParam` annotation.
    pub fn should_annotate(&self, data_type: &DataType) -> bool {
        if self.is_map_like_mapped(data_type) {
            return true;
        }

        match data_type {
            DataType::Object(_) => false,
            // annotated only if the mapping replaced a simple schema
            DataType::Mapped(mapped) => mapped.simple_data_type(),
            DataType::Simple(_) => true,
        }
    }

    /// Controls if a `@RequestParam` annotation carries any arguments.
    pub fn should_annotate_with_parameters(&self, data_type: &DataType) -> bool {
        if self.is_map_like_mapped(data_type) {
            return false;
        }

        match data_type {
            DataType::Object(_) => false,
            DataType::Mapped(_) | DataType::Simple(_) => true,
        }
    }
}
