//! Type literals and input values, as they appear in field definitions.

use std::fmt::{self, Write as _};

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

use crate::value::DefaultScalarValue;

/// A type literal referring to a named type by name.
///
/// This enum carries no semantic information and might refer to types that do
/// not exist yet. References are resolved against the registry when the schema
/// is closed, which is what allows types to mention themselves.
///
/// A non-null wrapper can only wrap a named type or a list, so `T!!` is not
/// representable.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Type {
    /// A nullable named type, e.g. `String`
    Named(ArcStr),
    /// A nullable list type, e.g. `[String]`
    ///
    /// The list itself is what's nullable, the containing type might be non-null.
    List(Box<Type>),
    /// A non-null named type, e.g. `String!`
    NonNullNamed(ArcStr),
    /// A non-null list type, e.g. `[String]!`.
    ///
    /// The list itself is what's non-null, the containing type might be null.
    NonNullList(Box<Type>),
}

impl Type {
    /// Get the name of a named type.
    ///
    /// Only applies to named types; lists will return `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => Some(n),
            Self::List(_) | Self::NonNullList(_) => None,
        }
    }

    /// Get the innermost name by unpacking lists
    ///
    /// All type literals contain exactly one named type.
    pub fn innermost_name(&self) -> &ArcStr {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => n,
            Self::List(l) | Self::NonNullList(l) => l.innermost_name(),
        }
    }

    /// Determines if a type only can represent non-null values.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNullNamed(_) | Self::NonNullList(_))
    }

    /// Wraps this [`Type`] into a nullable list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Makes this [`Type`] non-null.
    ///
    /// Already non-null types are returned as is.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::Named(n) => Self::NonNullNamed(n),
            Self::List(l) => Self::NonNullList(l),
            t @ (Self::NonNullNamed(_) | Self::NonNullList(_)) => t,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::NonNullNamed(n) => write!(f, "{n}!"),
            Self::List(t) => write!(f, "[{t}]"),
            Self::NonNullList(t) => write!(f, "[{t}]!"),
        }
    }
}

/// A JSON-like value passed as a field argument or declared as the default
/// value of an argument.
#[derive(Clone, Debug, PartialEq)]
pub enum InputValue {
    /// `null`
    Null,
    /// A scalar literal.
    Scalar(DefaultScalarValue),
    /// An enum literal, e.g. `SCALAR`.
    Enum(String),
    /// A list literal.
    List(Vec<InputValue>),
    /// An object literal, keeping its key order.
    Object(Vec<(String, InputValue)>),
}

impl InputValue {
    /// Construct a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a scalar value
    pub fn scalar<T>(v: T) -> Self
    where
        DefaultScalarValue: From<T>,
    {
        Self::Scalar(v.into())
    }

    /// Construct an enum value.
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Does the value represent a `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Shorthand form of invoking [`FromInputValue::from_input_value()`].
    pub fn convert<T: FromInputValue>(&self) -> Result<T, InputValueError> {
        T::from_input_value(self)
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(DefaultScalarValue::String(s)) => write_string_literal(f, s),
            // Debug keeps the fraction, so `1.0` doesn't read as an `Int`.
            Self::Scalar(DefaultScalarValue::Float(n)) => write!(f, "{n:?}"),
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    write!(f, "{item}")?;
                    if i < v.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Self::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    write!(f, "{k}: {v}")?;
                    if i < o.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

/// Writes `s` as a quoted GraphQL string literal.
fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000c}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}

impl From<i32> for InputValue {
    fn from(i: i32) -> Self {
        Self::scalar(i)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl<T> From<Option<T>> for InputValue
where
    Self: From<T>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Error of converting an [`InputValue`] into a Rust value.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Expected `{expected}`, found: {found}")]
pub struct InputValueError {
    expected: &'static str,
    found: String,
}

impl InputValueError {
    fn new(expected: &'static str, found: &InputValue) -> Self {
        Self {
            expected,
            found: found.to_string(),
        }
    }
}

/// Parses an [`InputValue`] into a Rust value.
///
/// Only the handful of types the introspection arguments need are covered.
pub trait FromInputValue: Sized {
    /// Performs the conversion.
    fn from_input_value(v: &InputValue) -> Result<Self, InputValueError>;
}

impl FromInputValue for bool {
    fn from_input_value(v: &InputValue) -> Result<Self, InputValueError> {
        match v {
            InputValue::Scalar(DefaultScalarValue::Boolean(b)) => Ok(*b),
            v => Err(InputValueError::new("Boolean", v)),
        }
    }
}

impl FromInputValue for String {
    fn from_input_value(v: &InputValue) -> Result<Self, InputValueError> {
        match v {
            InputValue::Scalar(DefaultScalarValue::String(s)) => Ok(s.to_string()),
            v => Err(InputValueError::new("String", v)),
        }
    }
}

impl<T: FromInputValue> FromInputValue for Option<T> {
    fn from_input_value(v: &InputValue) -> Result<Self, InputValueError> {
        match v {
            InputValue::Null => Ok(None),
            v => v.convert().map(Some),
        }
    }
}
