//! Integration test utilities for the Proddy notifications backend
//!
//! In-memory port implementations, a seeded workspace fixture, and helpers
//! for driving the REST API end to end.

pub mod fixtures;
pub mod helpers;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::*;
