//! Axum extractors for request handling
//!
//! Custom extractors for authentication, ids in paths, query strings and
//! validated JSON bodies.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::IdPath;
pub use query::QueryParams;
pub use validated::{OptionalValidatedJson, ValidatedJson};
