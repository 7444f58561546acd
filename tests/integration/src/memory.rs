//! In-memory implementations of the repository and scheduler ports
//!
//! One `MemoryStore` backs every repository trait so a test can seed rows and
//! inspect what the services wrote. The recording scheduler keeps every job
//! it was handed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use proddy_core::{
    Card, CardRepository, Channel, ChannelRepository, Conversation, ConversationRepository,
    DirectRead, DirectReadRepository, DomainError, Member, MemberRepository, Mention,
    MentionRepository, Message, MessageRepository, NotificationJob, NotificationScheduler,
    RepoResult, Snowflake, User,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    users: HashMap<Snowflake, User>,
    members: HashMap<Snowflake, Member>,
    channels: HashMap<Snowflake, Channel>,
    conversations: HashMap<Snowflake, Conversation>,
    cards: HashMap<Snowflake, Card>,
    messages: HashMap<Snowflake, Message>,
    mentions: HashMap<Snowflake, Mention>,
    direct_reads: Vec<DirectRead>,
}

/// Shared in-memory tables
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    fail_mention_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    pub async fn insert_user(&self, user: User) {
        self.tables.write().await.users.insert(user.id, user);
    }

    pub async fn insert_member(&self, member: Member) {
        self.tables.write().await.members.insert(member.id, member);
    }

    pub async fn insert_channel(&self, channel: Channel) {
        self.tables.write().await.channels.insert(channel.id, channel);
    }

    pub async fn insert_conversation(&self, conversation: Conversation) {
        self.tables
            .write()
            .await
            .conversations
            .insert(conversation.id, conversation);
    }

    pub async fn insert_card(&self, card: Card) {
        self.tables.write().await.cards.insert(card.id, card);
    }

    pub async fn insert_message(&self, message: Message) {
        self.tables.write().await.messages.insert(message.id, message);
    }

    pub async fn remove_card(&self, card_id: Snowflake) {
        self.tables.write().await.cards.remove(&card_id);
    }

    /// Make every subsequent mention insert fail with a database error
    pub fn fail_mention_writes(&self) {
        self.fail_mention_writes.store(true, Ordering::SeqCst);
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub async fn message(&self, id: Snowflake) -> Option<Message> {
        self.tables.read().await.messages.get(&id).cloned()
    }

    pub async fn mentions(&self) -> Vec<Mention> {
        self.tables.read().await.mentions.values().cloned().collect()
    }

    pub async fn mentions_for_message(&self, message_id: Snowflake) -> Vec<Mention> {
        self.tables
            .read()
            .await
            .mentions
            .values()
            .filter(|m| m.message_id == Some(message_id))
            .cloned()
            .collect()
    }

    pub async fn direct_reads_for(&self, message_id: Snowflake, member_id: Snowflake) -> usize {
        self.tables
            .read()
            .await
            .direct_reads
            .iter()
            .filter(|r| r.message_id == message_id && r.member_id == member_id)
            .count()
    }
}

/// Newest first, id breaks ties
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<chrono::Utc>, Snowflake)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

// ============================================================================
// Repository ports
// ============================================================================

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>> {
        Ok(self.tables.read().await.members.get(&id).cloned())
    }

    async fn find_by_workspace_and_user(
        &self,
        workspace_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Member>> {
        Ok(self
            .tables
            .read()
            .await
            .members
            .values()
            .find(|m| m.workspace_id == workspace_id && m.user_id == user_id)
            .cloned())
    }

    async fn find_with_users(&self, workspace_id: Snowflake) -> RepoResult<Vec<(Member, User)>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<(Member, User)> = tables
            .members
            .values()
            .filter(|m| m.workspace_id == workspace_id)
            .filter_map(|m| tables.users.get(&m.user_id).map(|u| (m.clone(), u.clone())))
            .collect();
        rows.sort_by_key(|(m, _)| m.id);
        Ok(rows)
    }
}

#[async_trait]
impl ChannelRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>> {
        Ok(self.tables.read().await.channels.get(&id).cloned())
    }
}

#[async_trait]
impl ConversationRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Conversation>> {
        Ok(self.tables.read().await.conversations.get(&id).cloned())
    }

    async fn find_by_member(
        &self,
        workspace_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<Conversation>> {
        Ok(self
            .tables
            .read()
            .await
            .conversations
            .values()
            .filter(|c| c.workspace_id == workspace_id && c.includes(member_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CardRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Card>> {
        Ok(self.tables.read().await.cards.get(&id).cloned())
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        Ok(self.tables.read().await.messages.get(&id).cloned())
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        let mut tables = self.tables.write().await;
        if tables.messages.contains_key(&message.id) {
            return Err(DomainError::DuplicateRecord(format!("message {}", message.id)));
        }
        tables.messages.insert(message.id, message.clone());
        Ok(())
    }

    async fn update(&self, message: &Message) -> RepoResult<()> {
        let mut tables = self.tables.write().await;
        match tables.messages.get_mut(&message.id) {
            Some(stored) => {
                stored.body = message.body.clone();
                stored.updated_at = message.updated_at;
                Ok(())
            }
            None => Err(DomainError::MessageNotFound(message.id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.tables.write().await.messages.remove(&id);
        Ok(())
    }

    async fn find_recent_in_conversation(
        &self,
        conversation_id: Snowflake,
        member_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Message>> {
        let mut messages: Vec<Message> = self
            .tables
            .read()
            .await
            .messages
            .values()
            .filter(|m| m.conversation_id == Some(conversation_id) && m.member_id == member_id)
            .cloned()
            .collect();
        newest_first(&mut messages, |m| (m.created_at, m.id));
        messages.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(messages)
    }

    async fn find_ids_in_conversation(
        &self,
        conversation_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<Snowflake>> {
        Ok(self
            .tables
            .read()
            .await
            .messages
            .values()
            .filter(|m| m.conversation_id == Some(conversation_id) && m.member_id == member_id)
            .map(|m| m.id)
            .collect())
    }
}

#[async_trait]
impl MentionRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Mention>> {
        Ok(self.tables.read().await.mentions.get(&id).cloned())
    }

    async fn create(&self, mention: &Mention) -> RepoResult<()> {
        if self.fail_mention_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mentions table is read-only".to_string()));
        }
        self.tables
            .write()
            .await
            .mentions
            .insert(mention.id, mention.clone());
        Ok(())
    }

    async fn find_for_member(
        &self,
        workspace_id: Snowflake,
        member_id: Snowflake,
        unread_only: bool,
    ) -> RepoResult<Vec<Mention>> {
        let mut mentions: Vec<Mention> = self
            .tables
            .read()
            .await
            .mentions
            .values()
            .filter(|m| m.workspace_id == workspace_id && m.is_addressed_to(member_id))
            .filter(|m| !unread_only || !m.read)
            .cloned()
            .collect();
        newest_first(&mut mentions, |m| (m.created_at, m.id));
        Ok(mentions)
    }

    async fn set_read(&self, id: Snowflake, read: bool) -> RepoResult<()> {
        match self.tables.write().await.mentions.get_mut(&id) {
            Some(mention) => {
                mention.read = read;
                Ok(())
            }
            None => Err(DomainError::MentionNotFound(id)),
        }
    }

    async fn mark_all_read(&self, workspace_id: Snowflake, member_id: Snowflake) -> RepoResult<u64> {
        let mut count = 0;
        for mention in self.tables.write().await.mentions.values_mut() {
            if mention.workspace_id == workspace_id && mention.is_addressed_to(member_id) && !mention.read {
                mention.read = true;
                count += 1;
            }
        }
        Ok(count)
    }
}

#[async_trait]
impl DirectReadRepository for MemoryStore {
    async fn exists(&self, message_id: Snowflake, member_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .direct_reads
            .iter()
            .any(|r| r.message_id == message_id && r.member_id == member_id))
    }

    async fn create(&self, read: &DirectRead) -> RepoResult<bool> {
        let mut tables = self.tables.write().await;
        let duplicate = tables
            .direct_reads
            .iter()
            .any(|r| r.message_id == read.message_id && r.member_id == read.member_id);
        if duplicate {
            return Ok(false);
        }
        tables.direct_reads.push(read.clone());
        Ok(true)
    }
}

// ============================================================================
// Schedulers
// ============================================================================

/// Keeps every job it is handed
#[derive(Default)]
pub struct RecordingScheduler {
    jobs: RwLock<Vec<NotificationJob>>,
}

impl RecordingScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn jobs(&self) -> Vec<NotificationJob> {
        self.jobs.read().await.clone()
    }

    pub async fn kinds(&self) -> Vec<&'static str> {
        self.jobs.read().await.iter().map(NotificationJob::kind).collect()
    }
}

#[async_trait]
impl NotificationScheduler for RecordingScheduler {
    async fn schedule(&self, job: NotificationJob) -> RepoResult<()> {
        self.jobs.write().await.push(job);
        Ok(())
    }
}

/// Rejects every job, like a queue whose backend is down
#[derive(Default)]
pub struct FailingScheduler;

#[async_trait]
impl NotificationScheduler for FailingScheduler {
    async fn schedule(&self, _job: NotificationJob) -> RepoResult<()> {
        Err(DomainError::SchedulerError("queue unavailable".to_string()))
    }
}
