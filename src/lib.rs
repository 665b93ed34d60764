#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// Required by the `__introspection_*` tracing macros.
#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

#[doc(hidden)]
#[macro_use]
pub mod macros;
pub mod ast;
pub mod error;
pub mod introspection;
pub mod schema;
pub mod types;
mod value;

#[cfg(test)]
mod tests;

pub use crate::{
    ast::{FromInputValue, InputValue, InputValueError, Type},
    error::{FieldError, FieldResult, SchemaError},
    introspection::IntrospectionFormat,
    schema::{
        builder::SchemaBuilder,
        implementers::ImplementationIndex,
        meta,
        model::{Introspected, SchemaType, TypeType},
        registry::Registry,
    },
    types::{
        base::{Arguments, TypeKind},
        name::{Name, NameParseError},
    },
    value::{DefaultScalarValue, Value},
};
