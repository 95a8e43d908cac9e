//! Java data types a generated query parameter can resolve to.
//!
//! The set is closed: a parameter is either a plain [`SimpleDataType`], a
//! [`MappedDataType`] supplied by a type mapping, or an [`ObjectDataType`]
//! generated from an object schema.

// Internal imports (std, crate)
use std::fmt;

use crate::{Error, Result};

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;

static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .expect("qualified name pattern is valid")
});

/// The resolved Java type of a parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataType {
    /// A plain type such as `String`, `Integer` or `LocalDate`
    Simple(SimpleDataType),
    /// An externally supplied type chosen by a type mapping
    Mapped(MappedDataType),
    /// A generated pojo
    Object(ObjectDataType),
}

impl DataType {
    /// Java source name of the type, including generic arguments
    pub fn name(&self) -> String {
        match self {
            DataType::Simple(t) => t.name().to_string(),
            DataType::Mapped(t) => t.name(),
            DataType::Object(t) => t.name().to_string(),
        }
    }

    /// Fully qualified names the generated code has to import
    pub fn imports(&self) -> Vec<String> {
        match self {
            DataType::Simple(t) => t.import().map(String::from).into_iter().collect(),
            DataType::Mapped(t) => t.imports(),
            DataType::Object(t) => vec![t.qualified_name()],
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<SimpleDataType> for DataType {
    fn from(t: SimpleDataType) -> Self {
        DataType::Simple(t)
    }
}

impl From<MappedDataType> for DataType {
    fn from(t: MappedDataType) -> Self {
        DataType::Mapped(t)
    }
}

impl From<ObjectDataType> for DataType {
    fn from(t: ObjectDataType) -> Self {
        DataType::Object(t)
    }
}

/// A plain type. `java.lang` types carry no import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleDataType {
    name: String,
    import: Option<String>,
}

impl SimpleDataType {
    /// Create a simple type from either a bare name (`String`) or a fully
    /// qualified one (`java.time.LocalDate`).
    pub fn new(type_name: &str) -> Result<Self> {
        let (package, name) = split_qualified(type_name)?;
        Ok(Self {
            name: name.to_string(),
            import: package.map(|_| type_name.to_string()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn import(&self) -> Option<&str> {
        self.import.as_deref()
    }
}

/// A type supplied by a type mapping instead of being generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedDataType {
    qualified_name: String,
    generics: Vec<String>,
    simple_data_type: bool,
}

impl MappedDataType {
    /// Create a mapped type.
    ///
    /// `qualified_name` must carry a package, e.g. `java.util.Map`. Each entry of
    /// `generics` is the fully qualified name of a generic argument.
    /// `simple_data_type` records whether the mapping replaced a non-object schema.
    pub fn new<S: Into<String>>(
        qualified_name: S,
        generics: Vec<String>,
        simple_data_type: bool,
    ) -> Result<Self> {
        let qualified_name = qualified_name.into();
        if split_qualified(&qualified_name)?.0.is_none() {
            return Err(Error::invalid_type(format!(
                "mapped type '{}' has no package",
                qualified_name
            )));
        }
        for generic in &generics {
            split_qualified(generic)?;
        }

        Ok(Self {
            qualified_name,
            generics,
            simple_data_type,
        })
    }

    /// Java source name, e.g. `Map<String, String>`
    pub fn name(&self) -> String {
        let name = simple_name(&self.qualified_name);
        if self.generics.is_empty() {
            return name.to_string();
        }

        let args = self
            .generics
            .iter()
            .map(|g| simple_name(g))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}<{}>", name, args)
    }

    /// Imports of the mapped type. Never empty, the first entry is the mapped
    /// type itself followed by its generic arguments.
    pub fn imports(&self) -> Vec<String> {
        std::iter::once(self.qualified_name.clone())
            .chain(self.generics.iter().cloned())
            .collect()
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn simple_data_type(&self) -> bool {
        self.simple_data_type
    }
}

/// A pojo generated from an object schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectDataType {
    name: String,
    package: String,
}

impl ObjectDataType {
    /// Create a pojo type from its simple name and its package.
    pub fn new<N: Into<String>, P: Into<String>>(name: N, package: P) -> Result<Self> {
        let name = name.into();
        let package = package.into();
        if split_qualified(&name)?.0.is_some() {
            return Err(Error::invalid_type(format!(
                "object type name '{}' must not carry a package",
                name
            )));
        }
        split_qualified(&package)?;

        Ok(Self { name, package })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }
}

/// Split `a.b.C` into `(Some("a.b"), "C")` and `C` into `(None, "C")`.
fn split_qualified(type_name: &str) -> Result<(Option<&str>, &str)> {
    if !QUALIFIED_NAME.is_match(type_name) {
        return Err(Error::invalid_type(format!(
            "'{}' is not a valid Java type name",
            type_name
        )));
    }

    Ok(match type_name.rsplit_once('.') {
        Some((package, name)) => (Some(package), name),
        None => (None, type_name),
    })
}

fn simple_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}
