//! Entity to model mappers
//!
//! `From<Model> for Entity` for plain rows, `TryFrom` where a column holds an
//! enum that the database cannot constrain on its own.

mod directory;
mod message;
mod mention;

pub use message::MessageColumns;
