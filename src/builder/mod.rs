//! Builder API for ergonomic fare machine construction.
//!
//! Provides a fluent builder and the `fares!` macro for declaring fare
//! tables with minimal boilerplate while keeping validation in one place.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FareMachineBuilder;
