//! Closed schema and the type graph it exposes.

use std::fmt;

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    ast::Type,
    error::SchemaError,
    schema::{
        implementers::ImplementationIndex,
        meta::{Argument, EnumValue, Field, MetaType},
    },
    types::{base::TypeKind, name::Name},
};

/// Metadata for a closed schema
///
/// Produced by [`SchemaBuilder::finish()`](crate::SchemaBuilder::finish), once
/// every referenced type has been registered. It can't be modified afterwards
/// and is safe to share between any number of concurrent introspections.
#[derive(Debug)]
pub struct SchemaType {
    pub(crate) description: Option<ArcStr>,
    pub(crate) types: IndexMap<Name, MetaType>,
    pub(crate) query_type_name: ArcStr,
    pub(crate) mutation_type_name: Option<ArcStr>,
    pub(crate) subscription_type_name: Option<ArcStr>,
    pub(crate) root_fields: Vec<Field>,
    pub(crate) implementers: ImplementationIndex,
}

static_assertions::assert_impl_all!(SchemaType: Send, Sync);

/// A node of the type graph: a named type, or a list or non-null wrapper
/// around another node.
///
/// Wrappers have no name and are never registered, they only exist as views
/// over the type references of fields and arguments.
#[derive(Clone, Debug)]
pub enum TypeType<'a> {
    /// Named type registered in the schema.
    Concrete(&'a MetaType),
    /// Non-null wrapper.
    ///
    /// Nodes built by [`SchemaType::make_type()`] never wrap another
    /// [`TypeType::NonNull`] here. Hand-built nodes are not checked.
    NonNull(Box<TypeType<'a>>),
    /// List wrapper.
    List(Box<TypeType<'a>>),
}

/// A node introspection fields are resolved on.
#[derive(Clone, Debug)]
pub enum Introspected<'a> {
    /// Root query value of the host. Only `__schema` and `__type` are resolved
    /// on it.
    Root,
    /// `__Schema`
    Schema(&'a SchemaType),
    /// `__Type`
    Type(TypeType<'a>),
    /// `__Field`
    Field(&'a Field),
    /// `__InputValue`
    InputValue(&'a Argument),
    /// `__EnumValue`
    EnumValue(&'a EnumValue),
}

impl SchemaType {
    /// Description of the schema, if any.
    pub fn description(&self) -> Option<&ArcStr> {
        self.description.as_ref()
    }

    /// Looks up a named type.
    pub fn type_by_name(&self, name: &str) -> Option<TypeType<'_>> {
        self.types.get(name).map(TypeType::Concrete)
    }

    /// Looks up the metadata of a named type.
    pub fn concrete_type_by_name(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }

    /// Root query type.
    ///
    /// Its presence is checked when the schema is closed, so this can only be
    /// [`None`] for a schema assembled by hand.
    pub fn query_type(&self) -> Option<TypeType<'_>> {
        self.type_by_name(&self.query_type_name)
    }

    /// Root mutation type, if the schema has one.
    pub fn mutation_type(&self) -> Option<TypeType<'_>> {
        self.mutation_type_name
            .as_ref()
            .and_then(|name| self.type_by_name(name))
    }

    /// Root subscription type, if the schema has one.
    pub fn subscription_type(&self) -> Option<TypeType<'_>> {
        self.subscription_type_name
            .as_ref()
            .and_then(|name| self.type_by_name(name))
    }

    /// All named types, in registration order.
    pub fn type_list(&self) -> Vec<TypeType<'_>> {
        self.types.values().map(TypeType::Concrete).collect()
    }

    /// Metadata of all named types, in registration order.
    pub fn concrete_type_list(&self) -> Vec<&MetaType> {
        self.types.values().collect()
    }

    /// Builds the type graph node a type literal refers to.
    ///
    /// Returns [`None`] if the literal names an unregistered type, which a
    /// closed schema rules out for every literal it holds.
    pub fn make_type(&self, t: &Type) -> Option<TypeType<'_>> {
        Some(match t {
            Type::NonNullNamed(n) => TypeType::NonNull(Box::new(self.type_by_name(n)?)),
            Type::NonNullList(inner) => {
                TypeType::NonNull(Box::new(TypeType::List(Box::new(self.make_type(inner)?))))
            }
            Type::Named(n) => self.type_by_name(n)?,
            Type::List(inner) => TypeType::List(Box::new(self.make_type(inner)?)),
        })
    }

    /// Index of the object types implementing each interface.
    pub fn implementers(&self) -> &ImplementationIndex {
        &self.implementers
    }

    /// Looks up a root-level introspection field (`__schema` or `__type`).
    pub(crate) fn root_field(&self, name: &str) -> Option<&Field> {
        self.root_fields.iter().find(|f| f.name == name)
    }

    /// Checks the invariants of a closed schema.
    pub(crate) fn check_closed(&self) -> Result<(), SchemaError> {
        for meta in self.types.values() {
            if let MetaType::Placeholder(p) = meta {
                return Err(SchemaError::UnresolvedType(p.of_type.innermost_name().clone()));
            }
        }

        let roots = [Some(&self.query_type_name)]
            .into_iter()
            .chain([
                self.mutation_type_name.as_ref(),
                self.subscription_type_name.as_ref(),
            ])
            .flatten();
        for name in roots {
            match self.types.get(name.as_str()) {
                None => return Err(SchemaError::RootTypeNotFound(name.clone())),
                Some(MetaType::Object(_)) => {}
                Some(_) => return Err(SchemaError::RootTypeNotObject(name.clone())),
            }
        }

        Ok(())
    }
}

impl<'a> TypeType<'a> {
    /// Classifies this node into one of the eight [`TypeKind`]s.
    ///
    /// # Errors
    ///
    /// If the node wraps a placeholder, which means the schema was not
    /// properly closed.
    pub fn kind(&self) -> Result<TypeKind, SchemaError> {
        match *self {
            Self::Concrete(t) => t.type_kind(),
            Self::List(_) => Ok(TypeKind::List),
            Self::NonNull(_) => Ok(TypeKind::NonNull),
        }
    }

    /// Name of the node, if it's a named type.
    pub fn name(&self) -> Option<&'a ArcStr> {
        self.to_concrete().and_then(MetaType::name)
    }

    /// Description of the node, if it's a described named type.
    pub fn description(&self) -> Option<&'a ArcStr> {
        self.to_concrete().and_then(MetaType::description)
    }

    /// Wrapped node of a list or non-null wrapper.
    pub fn of_type(&self) -> Option<&TypeType<'a>> {
        match self {
            Self::Concrete(_) => None,
            Self::List(l) | Self::NonNull(l) => Some(l),
        }
    }

    /// Metadata of a named type.
    #[inline]
    pub fn to_concrete(&self) -> Option<&'a MetaType> {
        match *self {
            Self::Concrete(t) => Some(t),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// Metadata of the named type at the bottom of the wrappers.
    #[inline]
    pub fn innermost_concrete(&self) -> &'a MetaType {
        match *self {
            Self::Concrete(t) => t,
            Self::NonNull(ref n) | Self::List(ref n) => n.innermost_concrete(),
        }
    }
}

impl fmt::Display for TypeType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete(t) => match t.name() {
                Some(name) => f.write_str(name),
                None => write!(f, "{t}"),
            },
            Self::List(i) => write!(f, "[{i}]"),
            Self::NonNull(i) => write!(f, "{i}!"),
        }
    }
}

impl<'a> Introspected<'a> {
    /// Name of the meta-type whose fields resolve on this node.
    pub fn meta_type_name<'s>(&self, schema: &'s SchemaType) -> &'s str {
        match self {
            Self::Root => &schema.query_type_name,
            Self::Schema(_) => "__Schema",
            Self::Type(_) => "__Type",
            Self::Field(_) => "__Field",
            Self::InputValue(_) => "__InputValue",
            Self::EnumValue(_) => "__EnumValue",
        }
    }

    /// Short description of the node, used in errors.
    pub(crate) fn source_kind(&self) -> &'static str {
        match self {
            Self::Root => "the root value",
            Self::Schema(_) => "a schema",
            Self::Type(_) => "a type",
            Self::Field(_) => "a field",
            Self::InputValue(_) => "an input value",
            Self::EnumValue(_) => "an enum value",
        }
    }

    /// View the underlying type graph node, if present.
    pub fn as_type(&self) -> Option<&TypeType<'a>> {
        match self {
            Self::Type(t) => Some(t),
            _ => None,
        }
    }
}

impl<'a> From<TypeType<'a>> for Introspected<'a> {
    fn from(t: TypeType<'a>) -> Self {
        Self::Type(t)
    }
}

impl<'a> From<&'a MetaType> for Introspected<'a> {
    fn from(t: &'a MetaType) -> Self {
        Self::Type(TypeType::Concrete(t))
    }
}

impl<'a> From<&'a Field> for Introspected<'a> {
    fn from(f: &'a Field) -> Self {
        Self::Field(f)
    }
}

impl<'a> From<&'a Argument> for Introspected<'a> {
    fn from(a: &'a Argument) -> Self {
        Self::InputValue(a)
    }
}

impl<'a> From<&'a EnumValue> for Introspected<'a> {
    fn from(v: &'a EnumValue) -> Self {
        Self::EnumValue(v)
    }
}

impl<'a> From<&'a SchemaType> for Introspected<'a> {
    fn from(s: &'a SchemaType) -> Self {
        Self::Schema(s)
    }
}
