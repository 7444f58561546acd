//! Test fixtures and data generators
//!
//! A seeded workspace with two members who share a channel, a direct
//! conversation and a card board, plus a user who belongs nowhere.

use std::sync::Arc;

use proddy_core::{Card, Channel, Conversation, Member, Message, MessageBody, Snowflake, User};
use proddy_service::services::DEFAULT_DIRECT_MESSAGE_PREVIEW_LIMIT;
use proddy_service::ServiceContext;

use crate::memory::{MemoryStore, RecordingScheduler};

pub const WORKSPACE_ID: Snowflake = Snowflake::new(100);
pub const OTHER_WORKSPACE_ID: Snowflake = Snowflake::new(900);

pub const ALICE_USER_ID: Snowflake = Snowflake::new(1);
pub const BOB_USER_ID: Snowflake = Snowflake::new(2);
pub const OUTSIDER_USER_ID: Snowflake = Snowflake::new(3);

pub const ALICE_MEMBER_ID: Snowflake = Snowflake::new(201);
pub const BOB_MEMBER_ID: Snowflake = Snowflake::new(202);
/// Outsider's membership in the other workspace
pub const OUTSIDER_MEMBER_ID: Snowflake = Snowflake::new(903);

pub const GENERAL_CHANNEL_ID: Snowflake = Snowflake::new(300);
pub const FOREIGN_CHANNEL_ID: Snowflake = Snowflake::new(901);
pub const CONVERSATION_ID: Snowflake = Snowflake::new(400);
pub const CARD_ID: Snowflake = Snowflake::new(500);

/// A user and their membership in the seeded workspace
#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub member: Member,
}

impl Profile {
    pub fn user_id(&self) -> Snowflake {
        self.user.id
    }

    pub fn member_id(&self) -> Snowflake {
        self.member.id
    }
}

/// Everything a test needs: store, recorder and the context built over them
pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub scheduler: Arc<RecordingScheduler>,
    pub alice: Profile,
    pub bob: Profile,
    pub general: Channel,
    pub conversation: Conversation,
    pub card: Card,
}

impl Fixture {
    /// Seed the standard workspace
    pub async fn seed() -> Self {
        let store = MemoryStore::new();
        let scheduler = RecordingScheduler::new();

        let alice = Profile {
            user: User::new(ALICE_USER_ID, "Alice").with_image("https://cdn.proddy.dev/alice.png"),
            member: Member::new(ALICE_MEMBER_ID, WORKSPACE_ID, ALICE_USER_ID),
        };
        let bob = Profile {
            user: User::new(BOB_USER_ID, "Bob"),
            member: Member::new(BOB_MEMBER_ID, WORKSPACE_ID, BOB_USER_ID),
        };
        let outsider = User::new(OUTSIDER_USER_ID, "Olga");

        for profile in [&alice, &bob] {
            store.insert_user(profile.user.clone()).await;
            store.insert_member(profile.member.clone()).await;
        }
        store.insert_user(outsider).await;
        store
            .insert_member(Member::new(OUTSIDER_MEMBER_ID, OTHER_WORKSPACE_ID, OUTSIDER_USER_ID))
            .await;

        let general = Channel::new(GENERAL_CHANNEL_ID, WORKSPACE_ID, "general");
        let conversation =
            Conversation::new(CONVERSATION_ID, WORKSPACE_ID, ALICE_MEMBER_ID, BOB_MEMBER_ID);
        let card = Card::new(CARD_ID, WORKSPACE_ID, GENERAL_CHANNEL_ID, "Ship the beta");

        store.insert_channel(general.clone()).await;
        store
            .insert_channel(Channel::new(FOREIGN_CHANNEL_ID, OTHER_WORKSPACE_ID, "elsewhere"))
            .await;
        store.insert_conversation(conversation.clone()).await;
        store.insert_card(card.clone()).await;

        Self {
            store,
            scheduler,
            alice,
            bob,
            general,
            conversation,
            card,
        }
    }

    /// Service context over the in-memory store and the recording scheduler
    pub fn context(&self) -> ServiceContext {
        self.context_with_preview_limit(DEFAULT_DIRECT_MESSAGE_PREVIEW_LIMIT)
    }

    pub fn context_with_preview_limit(&self, limit: u32) -> ServiceContext {
        let store = Arc::clone(&self.store);
        ServiceContext::builder()
            .member_repo(store.clone())
            .channel_repo(store.clone())
            .conversation_repo(store.clone())
            .card_repo(store.clone())
            .message_repo(store.clone())
            .mention_repo(store.clone())
            .direct_read_repo(store)
            .scheduler(self.scheduler.clone())
            .direct_message_preview_limit(limit)
            .build()
            .expect("fixture context is complete")
    }

    /// Store a direct message from `sender` without going through the service
    pub async fn seed_direct_message(&self, id: i64, sender: &Profile, body: &str) -> Message {
        let message = Message::new(
            Snowflake::new(id),
            WORKSPACE_ID,
            sender.member_id(),
            MessageBody::plain(body),
        )
        .in_conversation(self.conversation.id);
        self.store.insert_message(message.clone()).await;
        message
    }
}
