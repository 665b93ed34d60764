//! Validated GraphQL names.

use std::{borrow::Borrow, str::FromStr};

use arcstr::ArcStr;
use derive_more::with_trait::{Deref, Display, Error};

/// A validated GraphQL name, as used for registered types.
#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Name(ArcStr);

impl Name {
    /// Checks whether `input` matches `/^[_a-zA-Z][_a-zA-Z0-9]*$/`.
    pub fn is_valid(input: &str) -> bool {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Returns the underlying shared string.
    pub fn as_arcstr(&self) -> &ArcStr {
        &self.0
    }
}

/// Error of parsing an invalid [`Name`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"{_0}\" does not")]
pub struct NameParseError(#[error(not(source))] ArcStr);

impl FromStr for Name {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(ArcStr::from(s))
    }
}

impl TryFrom<ArcStr> for Name {
    type Error = NameParseError;

    fn try_from(s: ArcStr) -> Result<Self, Self::Error> {
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(NameParseError(s))
        }
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}
