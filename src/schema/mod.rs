//! Schema representation: type metadata, the registry of the open phase and
//! the closed [`SchemaType`](model::SchemaType).

pub mod builder;
pub mod implementers;
pub mod meta;
pub mod model;
pub mod registry;
mod schema;
