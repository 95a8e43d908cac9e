//! springgen Core Library
//!
//! This library decides how query parameters of generated Spring interfaces
//! are annotated with `@RequestParam`, and renders them as Java source text.

pub mod classifier;
pub mod config;
pub mod datatypes;
pub mod error;
pub mod input;
pub mod parameters;
pub mod test_set;
pub mod utils;
pub mod writer;

pub use crate::{
    classifier::{AnnotationClassifier, MapTypes},
    config::Config,
    datatypes::{DataType, MappedDataType, ObjectDataType, SimpleDataType},
    error::{Error, Result},
    input::ParameterSet,
    parameters::{Parameter, QueryParameter},
    writer::ParameterWriter,
};
