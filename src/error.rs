//! Errors raised while building or introspecting a schema.

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error, From};

use crate::{ast::InputValueError, types::name::NameParseError};

/// Error aborting the construction of a schema.
///
/// These indicate a misconfigured schema or a broken internal invariant, never
/// bad user input, so a schema is never produced in their presence.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum SchemaError {
    /// A type name was registered twice.
    #[display("Type \"{_0}\" is registered more than once")]
    #[from(ignore)]
    DuplicateType(#[error(not(source))] ArcStr),

    /// A type name is not a valid GraphQL name.
    #[display("{_0}")]
    InvalidName(NameParseError),

    /// A type was referenced, but never registered before the schema was
    /// closed.
    #[display("Type \"{_0}\" is still a placeholder type")]
    #[from(ignore)]
    UnresolvedType(#[error(not(source))] ArcStr),

    /// The named root operation type is not registered.
    #[display("Root type \"{_0}\" not found")]
    #[from(ignore)]
    RootTypeNotFound(#[error(not(source))] ArcStr),

    /// The named root operation type is not an object type.
    #[display("Root type \"{_0}\" is not an object")]
    #[from(ignore)]
    RootTypeNotObject(#[error(not(source))] ArcStr),

    /// A type graph node outside of the known type kinds reached the
    /// classifier.
    #[display("Can't take type kind of {_0}")]
    #[from(ignore)]
    UnclassifiableType(#[error(not(source))] String),
}

/// Error resolving an introspection field.
///
/// Requesting a capability a type doesn't have (e.g. `fields` of a scalar) is
/// not an error and resolves to `null` instead. These errors only signal a
/// misuse of the resolution entry points.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum FieldError {
    /// The meta-type has no field with this name.
    #[display("Unknown field \"{field}\" on type \"{type_name}\"")]
    #[from(ignore)]
    UnknownField {
        /// Name of the meta-type.
        type_name: ArcStr,
        /// Name of the requested field.
        field: String,
    },

    /// The field exists, but isn't resolved by the introspection system.
    #[display("Field \"{field}\" on type \"{type_name}\" has no introspection resolver")]
    #[from(ignore)]
    NoResolver {
        /// Name of the type.
        type_name: ArcStr,
        /// Name of the field.
        field: ArcStr,
    },

    /// The resolver was handed a source node it doesn't resolve.
    #[display("Field \"{field}\" can't be resolved on {source_kind}")]
    #[from(ignore)]
    UnexpectedSource {
        /// Name of the resolved field.
        field: &'static str,
        /// Description of the node passed in.
        source_kind: &'static str,
    },

    /// An argument couldn't be converted into the expected type.
    #[display("Invalid value for argument \"{name}\": {error}")]
    #[from(ignore)]
    InvalidArgument {
        /// Name of the argument.
        name: String,
        /// Conversion failure.
        error: InputValueError,
    },

    /// The schema's internal invariants are broken.
    #[display("{_0}")]
    Schema(SchemaError),
}

/// Result of resolving an introspection field.
pub type FieldResult<T> = Result<T, FieldError>;
