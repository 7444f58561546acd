//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod direct;
pub mod health;
pub mod mentions;
pub mod messages;
