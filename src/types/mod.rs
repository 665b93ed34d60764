//! Type kinds, names, arguments and built-in scalars.

pub mod base;
pub mod name;
pub(crate) mod scalars;
