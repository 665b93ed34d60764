#[macro_use]
pub mod tracing;
