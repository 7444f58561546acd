//! Value objects - immutable types that represent domain concepts

mod message_body;
mod snowflake;

pub use message_body::{BodyFormat, DeltaOp, MessageBody, RichText};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
