//! # proddy-service
//!
//! Application layer: message ingestion, mention creation and the read-state
//! inboxes, plus the DTOs the API serializes.

pub mod dto;
pub mod services;

pub use services::{
    DirectMessageService, MembershipService, MentionError, MentionOutcome, MentionService,
    MessageService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
