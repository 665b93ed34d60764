//! Type kinds and field arguments.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    ast::{FromInputValue, InputValue},
    error::FieldError,
    schema::meta::Argument,
};

/// GraphQL type kind
///
/// The GraphQL specification defines a number of type kinds - the meta type
/// of a type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    /// ## Scalar types
    ///
    /// Scalar types appear as the leaf nodes of GraphQL queries. Strings,
    /// numbers, and booleans are the built in types, and while it's possible
    /// to define your own, it's relatively uncommon.
    Scalar,

    /// ## Object types
    ///
    /// The most common type to be implemented by users. Objects have fields
    /// and can implement interfaces.
    Object,

    /// ## Interface types
    ///
    /// Interface types are used to represent overlapping fields between
    /// multiple types, and can be queried for their concrete type.
    Interface,

    /// ## Union types
    ///
    /// Unions are similar to interfaces but can not contain any fields on
    /// their own.
    Union,

    /// ## Enum types
    ///
    /// Like scalars, enum types appear as the leaf nodes of GraphQL queries.
    Enum,

    /// ## Input objects
    ///
    /// Represents complex values provided in queries _into_ the system.
    InputObject,

    /// ## List types
    ///
    /// Represent lists of other types.
    List,

    /// ## Non-null types
    ///
    /// In GraphQL, nullable types are the default. By putting a `!` after a
    /// type, it becomes non-nullable.
    NonNull,
}

impl TypeKind {
    /// Every kind, in the order `__TypeKind` declares its values.
    pub const ALL: [Self; 8] = [
        Self::Scalar,
        Self::Object,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::InputObject,
        Self::List,
        Self::NonNull,
    ];

    /// Name of this kind as a `__TypeKind` enum value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
        }
    }

    /// Fixed description of this kind as a `__TypeKind` enum value.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Scalar => "Indicates this type is a scalar.",
            Self::Object => {
                "Indicates this type is an object. `fields` and `interfaces` are valid fields."
            }
            Self::Interface => {
                "Indicates this type is an interface. `fields` and `possibleTypes` are valid fields."
            }
            Self::Union => "Indicates this type is a union. `possibleTypes` is a valid field.",
            Self::Enum => "Indicates this type is an enum. `enumValues` is a valid field.",
            Self::InputObject => {
                "Indicates this type is an input object. `inputFields` is a valid field."
            }
            Self::List => "Indicates this type is a list. `ofType` is a valid field.",
            Self::NonNull => "Indicates this type is a non-null. `ofType` is a valid field.",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field argument container
///
/// Built from the arguments supplied by the executing side and the argument
/// metadata of the resolved field. Missing or `null` arguments are replaced by
/// their declared default values, so resolvers never see an omitted argument
/// that has a default.
#[derive(Debug)]
pub struct Arguments<'a> {
    args: Option<IndexMap<&'a str, InputValue>>,
}

impl<'a> Arguments<'a> {
    #[doc(hidden)]
    pub fn new(
        mut args: Option<IndexMap<&'a str, InputValue>>,
        meta_args: &'a Option<Vec<Argument>>,
    ) -> Self {
        if meta_args.is_some() && args.is_none() {
            args = Some(IndexMap::new());
        }

        if let (Some(args), Some(meta_args)) = (&mut args, meta_args) {
            for arg in meta_args {
                let arg_name = arg.name.as_str();
                if args.get(arg_name).is_none_or(InputValue::is_null) {
                    if let Some(val) = arg.default_value.as_ref() {
                        args.insert(arg_name, val.clone());
                    }
                }
            }
        }

        Self { args }
    }

    /// Gets an argument by the given `name` and converts it into the desired
    /// type.
    ///
    /// If the argument is found, or a default argument has been provided, the
    /// given [`InputValue`] will be converted into the type `T`.
    ///
    /// Returns [`None`] if an argument with such `name` is not present.
    ///
    /// # Errors
    ///
    /// If the [`FromInputValue`] conversion fails.
    pub fn get<T>(&self, name: &str) -> Result<Option<T>, FieldError>
    where
        T: FromInputValue,
    {
        self.args
            .as_ref()
            .and_then(|args| args.get(name))
            .map(InputValue::convert)
            .transpose()
            .map_err(|e| FieldError::InvalidArgument {
                name: name.into(),
                error: e,
            })
    }
}
