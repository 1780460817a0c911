//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! movie catalog test suite.
//!
//! # Modules
//!
//! - `fixtures`: The seeded catalog and the extra actors used by write tests
//! - `builders`: Builder patterns for test data construction
//! - `database`: In-memory database setup
//! - `assertions`: Assertion helpers for catalog entities
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
