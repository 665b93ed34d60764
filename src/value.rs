//! Values produced by introspection resolvers.

use std::fmt;

use arcstr::ArcStr;
use serde::Serialize;

use crate::{schema::model::Introspected, types::base::TypeKind};

/// The scalar values an introspection argument or default value can carry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultScalarValue {
    /// `Int` value.
    Int(i32),
    /// `Float` value.
    Float(f64),
    /// `String` value.
    String(String),
    /// `Boolean` value.
    Boolean(bool),
}

impl DefaultScalarValue {
    /// Returns the inner string, if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Int(_) | Self::Float(_) | Self::Boolean(_) => None,
        }
    }
}

impl From<i32> for DefaultScalarValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for DefaultScalarValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for DefaultScalarValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for DefaultScalarValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for DefaultScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<&ArcStr> for DefaultScalarValue {
    fn from(s: &ArcStr) -> Self {
        Self::String(s.as_str().into())
    }
}

impl fmt::Display for DefaultScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Result of resolving a single introspection field.
///
/// Composite results are handed back as [`Introspected`] nodes, so the
/// executing side decides which of their fields to resolve next.
#[derive(Clone, Debug)]
pub enum Value<'a> {
    /// `null`, also used when a type lacks the requested capability.
    Null,
    /// A leaf scalar.
    Scalar(DefaultScalarValue),
    /// A `__TypeKind` value.
    Kind(TypeKind),
    /// A meta-object to continue resolution on.
    Node(Introspected<'a>),
    /// A list of values.
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    /// Construct a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a scalar value.
    pub fn scalar<T>(v: T) -> Self
    where
        DefaultScalarValue: From<T>,
    {
        Self::Scalar(v.into())
    }

    /// Construct a nullable string value.
    pub fn string<T>(v: Option<T>) -> Self
    where
        DefaultScalarValue: From<T>,
    {
        v.map_or(Self::Null, Self::scalar)
    }

    /// Construct a list of nodes.
    pub fn nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Introspected<'a>>,
    {
        Self::List(nodes.into_iter().map(|n| Self::Node(n.into())).collect())
    }

    /// Does this value represent `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// View the underlying node, if present.
    pub fn as_node(&self) -> Option<&Introspected<'a>> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    /// View the underlying list, if present.
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// View the underlying string, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => s.as_str(),
            _ => None,
        }
    }
}

impl<'a, T: Into<Introspected<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, |n| Self::Node(n.into()))
    }
}
