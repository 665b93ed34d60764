//! Library tests and fixtures

mod fixtures;
mod snapshot_tests;
