//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repository behaves like the real store and suits most
//! service and HTTP tests. Tests that need to inject failures use `mockall`
//! locally instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
