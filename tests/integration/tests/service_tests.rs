//! Service-level tests over in-memory repositories
//!
//! Run with: cargo test -p integration-tests --test service_tests

use std::sync::Arc;

use integration_tests::{
    FailingScheduler, Fixture, FOREIGN_CHANNEL_ID, OUTSIDER_MEMBER_ID, OUTSIDER_USER_ID,
    WORKSPACE_ID,
};
use proddy_core::{
    extract_mentions, DomainError, Member, MemberRepository, MemberRoster, MessageBody,
    NotificationJob, Snowflake, User,
};
use proddy_service::dto::{AssignCardRequest, CreateMessageRequest, SourceKind, UpdateMessageRequest};
use proddy_service::{
    DirectMessageService, MentionService, MessageService, ServiceContext, ServiceError,
};

const PING_BOB_DELTA: &str = r#"{"ops":[{"insert":"ping "},{"insert":"@Bob","attributes":{"mention":{"userId":"u2","name":"Bob"}}}]}"#;

fn channel_message(fixture: &Fixture, body: &str) -> CreateMessageRequest {
    CreateMessageRequest {
        body: body.to_string(),
        format: None,
        workspace_id: WORKSPACE_ID,
        channel_id: Some(fixture.general.id),
        conversation_id: None,
        parent_message_id: None,
        image: None,
        calendar_event: None,
    }
}

fn direct_message(fixture: &Fixture, body: &str) -> CreateMessageRequest {
    CreateMessageRequest {
        channel_id: None,
        conversation_id: Some(fixture.conversation.id),
        ..channel_message(fixture, body)
    }
}

fn domain_error(err: &ServiceError) -> &DomainError {
    err.as_domain()
        .unwrap_or_else(|| panic!("expected a domain error, got {err:?}"))
}

fn id(raw: &str) -> Snowflake {
    Snowflake::parse(raw).expect("response ids are snowflakes")
}

// ============================================================================
// Mention extraction
// ============================================================================

#[tokio::test]
async fn test_marker_for_known_member_creates_mention() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let body = format!(
        r#"<p>hey <span data-member-id="{}">Bob</span> and <span data-member-id="777">ghost</span></p>"#,
        fixture.bob.member_id()
    );

    let message = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), channel_message(&fixture, &body))
        .await
        .unwrap();

    let mentions = fixture.store.mentions_for_message(id(&message.id)).await;
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].mentioned_member_id, fixture.bob.member_id());
    assert_eq!(mentions[0].mentioner_member_id, fixture.alice.member_id());
}

#[tokio::test]
async fn test_name_match_for_plain_and_delta_bodies() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let service = MessageService::new(&ctx);

    let plain = service
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "thanks @Bob!"))
        .await
        .unwrap();
    let delta = service
        .create_message(fixture.alice.user_id(), channel_message(&fixture, PING_BOB_DELTA))
        .await
        .unwrap();

    for message in [plain, delta] {
        let mentions = fixture.store.mentions_for_message(id(&message.id)).await;
        assert_eq!(mentions.len(), 1, "body {}", message.body);
        assert!(mentions[0].is_addressed_to(fixture.bob.member_id()));
    }
}

#[tokio::test]
async fn test_extraction_is_idempotent() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let profiles = ctx.member_repo().find_with_users(WORKSPACE_ID).await.unwrap();
    let roster: MemberRoster = profiles.iter().collect();
    let body = MessageBody::classify("@Alice and @Bob, see above");

    let first = extract_mentions(&body, &roster);
    let second = extract_mentions(&body, &roster);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn test_substring_name_match_is_preserved() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    // "@Bobby" contains "@Bob"
    let message = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "cc @Bobby"))
        .await
        .unwrap();

    let mentions = fixture.store.mentions_for_message(id(&message.id)).await;
    assert_eq!(mentions.len(), 1);
    assert!(mentions[0].is_addressed_to(fixture.bob.member_id()));
}

#[tokio::test]
async fn test_direct_messages_never_create_mentions() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let body = format!(
        r#"@Bob <span data-member-id="{}">Bob</span>"#,
        fixture.bob.member_id()
    );

    let message = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), direct_message(&fixture, &body))
        .await
        .unwrap();

    assert!(fixture.store.mentions_for_message(id(&message.id)).await.is_empty());
    assert_eq!(fixture.scheduler.kinds().await, vec!["direct_message"]);
}

#[tokio::test]
async fn test_mentions_are_not_re_extracted_on_update() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let service = MessageService::new(&ctx);

    let message = service
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "no one yet"))
        .await
        .unwrap();
    let updated = service
        .update_message(
            fixture.alice.user_id(),
            id(&message.id),
            UpdateMessageRequest {
                body: "now @Bob".to_string(),
                format: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.body, "now @Bob");
    assert!(updated.updated_at.is_some());
    assert!(fixture.store.mentions().await.is_empty());
}

// ============================================================================
// Message ingestion side effects
// ============================================================================

#[tokio::test]
async fn test_channel_mention_schedules_mention_job() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "@Bob look"))
        .await
        .unwrap();

    let jobs = fixture.scheduler.jobs().await;
    assert_eq!(jobs.len(), 1);
    let NotificationJob::Mention(job) = &jobs[0] else {
        panic!("expected a mention job, got {:?}", jobs[0]);
    };
    assert_eq!(job.mentioned_member_id, fixture.bob.member_id());
    assert_eq!(job.channel_id, Some(fixture.general.id));
}

#[tokio::test]
async fn test_thread_reply_schedules_job_and_reports_thread_source() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let service = MessageService::new(&ctx);

    let parent = service
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "release notes"))
        .await
        .unwrap();
    let reply = CreateMessageRequest {
        parent_message_id: Some(id(&parent.id)),
        ..channel_message(&fixture, "@Bob can you review?")
    };
    service
        .create_message(fixture.alice.user_id(), reply)
        .await
        .unwrap();

    assert_eq!(fixture.scheduler.kinds().await, vec!["thread_reply", "mention"]);

    let items = MentionService::new(&ctx)
        .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, false)
        .await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source.kind, SourceKind::Thread);
    assert_eq!(items[0].source.id, parent.id);
    assert_eq!(items[0].source.name, "Thread");
}

#[tokio::test]
async fn test_thread_reply_inherits_parent_conversation() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let parent = fixture.seed_direct_message(70, &fixture.bob, "lunch?").await;

    let reply = CreateMessageRequest {
        channel_id: None,
        conversation_id: None,
        parent_message_id: Some(parent.id),
        ..channel_message(&fixture, "sure @Bob")
    };
    let message = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), reply)
        .await
        .unwrap();

    assert_eq!(message.conversation_id, Some(fixture.conversation.id.to_string()));
    assert!(fixture.store.mentions().await.is_empty());
    assert_eq!(fixture.scheduler.kinds().await, vec!["thread_reply", "direct_message"]);
}

#[tokio::test]
async fn test_mention_failure_does_not_fail_message_creation() {
    let fixture = Fixture::seed().await;
    fixture.store.fail_mention_writes();
    let ctx = fixture.context();

    let message = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "@Bob hi"))
        .await
        .unwrap();

    assert!(fixture.store.message(id(&message.id)).await.is_some());
    assert!(fixture.store.mentions().await.is_empty());
}

#[tokio::test]
async fn test_scheduler_failure_does_not_fail_message_creation() {
    let fixture = Fixture::seed().await;
    let store = Arc::clone(&fixture.store);
    let ctx = ServiceContext::builder()
        .member_repo(store.clone())
        .channel_repo(store.clone())
        .conversation_repo(store.clone())
        .card_repo(store.clone())
        .message_repo(store.clone())
        .mention_repo(store.clone())
        .direct_read_repo(store)
        .scheduler(Arc::new(FailingScheduler))
        .build()
        .unwrap();

    let message = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "@Bob hi"))
        .await
        .unwrap();

    assert_eq!(fixture.store.mentions_for_message(id(&message.id)).await.len(), 1);
}

#[tokio::test]
async fn test_create_message_rejects_non_member() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    let err = MessageService::new(&ctx)
        .create_message(OUTSIDER_USER_ID, channel_message(&fixture, "hello"))
        .await
        .unwrap_err();

    assert!(matches!(domain_error(&err), DomainError::Unauthorized));
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_create_message_rejects_foreign_channel() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let request = CreateMessageRequest {
        channel_id: Some(FOREIGN_CHANNEL_ID),
        ..channel_message(&fixture, "hello")
    };

    let err = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), request)
        .await
        .unwrap_err();

    assert!(matches!(
        domain_error(&err),
        DomainError::ChannelOutsideWorkspace(channel) if *channel == FOREIGN_CHANNEL_ID
    ));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_create_message_rejects_missing_parent() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let request = CreateMessageRequest {
        channel_id: None,
        parent_message_id: Some(Snowflake::new(424_242)),
        ..channel_message(&fixture, "orphan")
    };

    let err = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), request)
        .await
        .unwrap_err();

    assert!(matches!(domain_error(&err), DomainError::ParentMessageNotFound(_)));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_only_author_can_edit_or_delete() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let service = MessageService::new(&ctx);

    let message = service
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "mine"))
        .await
        .unwrap();
    let message_id = id(&message.id);

    let err = service
        .delete_message(fixture.bob.user_id(), message_id)
        .await
        .unwrap_err();
    assert!(matches!(domain_error(&err), DomainError::NotMessageAuthor));

    service
        .delete_message(fixture.alice.user_id(), message_id)
        .await
        .unwrap();
    assert!(fixture.store.message(message_id).await.is_none());
}

// ============================================================================
// Mention inbox
// ============================================================================

#[tokio::test]
async fn test_delta_channel_mention_lists_as_unread_channel_item() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    let message = MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), channel_message(&fixture, PING_BOB_DELTA))
        .await
        .unwrap();
    assert_eq!(message.format.as_str(), "rich_text");

    let items = MentionService::new(&ctx)
        .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, true)
        .await;

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert!(!item.read);
    assert_eq!(item.message_id.as_deref(), Some(message.id.as_str()));
    assert_eq!(item.text, "ping @Bob");
    assert_eq!(item.source.kind, SourceKind::Channel);
    assert_eq!(item.source.name, "general");
    assert_eq!(item.author.name, "Alice");
    assert_eq!(item.author.image.as_deref(), Some("https://cdn.proddy.dev/alice.png"));
}

#[tokio::test]
async fn test_mentions_of_deleted_messages_drop_out() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let service = MessageService::new(&ctx);

    let message = service
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "@Bob"))
        .await
        .unwrap();
    service
        .delete_message(fixture.alice.user_id(), id(&message.id))
        .await
        .unwrap();

    let items = MentionService::new(&ctx)
        .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, false)
        .await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_mark_all_mentions_read_empties_unread_listing() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let messages = MessageService::new(&ctx);
    for body in ["@Bob one", "@Bob two", "@Bob three"] {
        messages
            .create_message(fixture.alice.user_id(), channel_message(&fixture, body))
            .await
            .unwrap();
    }

    let mentions = MentionService::new(&ctx);
    let response = mentions
        .mark_all_read(fixture.bob.user_id(), WORKSPACE_ID)
        .await
        .unwrap();
    assert_eq!(response.count, 3);

    let unread = mentions
        .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, true)
        .await;
    assert!(unread.is_empty());

    let all = mentions
        .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, false)
        .await;
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|item| item.read));
}

#[tokio::test]
async fn test_mark_mention_read_toggles_and_checks_owner() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    MessageService::new(&ctx)
        .create_message(fixture.alice.user_id(), channel_message(&fixture, "@Bob ping"))
        .await
        .unwrap();
    let mention_id = fixture.store.mentions().await[0].id;
    let service = MentionService::new(&ctx);

    let err = service
        .mark_read(fixture.alice.user_id(), mention_id, None)
        .await
        .unwrap_err();
    assert!(matches!(domain_error(&err), DomainError::NotMentionOwner));

    let read = service
        .mark_read(fixture.bob.user_id(), mention_id, None)
        .await
        .unwrap();
    assert!(read.read);

    let unread = service
        .mark_read(fixture.bob.user_id(), mention_id, Some(false))
        .await
        .unwrap();
    assert!(!unread.read);
    assert_eq!(
        service
            .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, true)
            .await
            .len(),
        1
    );

    let err = service
        .mark_read(fixture.bob.user_id(), Snowflake::new(13), None)
        .await
        .unwrap_err();
    assert!(matches!(domain_error(&err), DomainError::MentionNotFound(_)));
}

#[tokio::test]
async fn test_listing_for_non_member_is_empty() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    let mentions = MentionService::new(&ctx)
        .list_for_user(OUTSIDER_USER_ID, WORKSPACE_ID, false)
        .await;
    let direct = DirectMessageService::new(&ctx)
        .list_for_user(OUTSIDER_USER_ID, WORKSPACE_ID, false)
        .await;

    assert!(mentions.is_empty());
    assert!(direct.is_empty());
}

// ============================================================================
// Card assignment mentions
// ============================================================================

#[tokio::test]
async fn test_card_assignment_skips_assigner_and_outsiders() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    let response = MentionService::new(&ctx)
        .create_card_assignment_mentions(
            fixture.alice.user_id(),
            fixture.card.id,
            AssignCardRequest {
                assignee_member_ids: vec![
                    fixture.bob.member_id(),
                    fixture.bob.member_id(),
                    fixture.alice.member_id(),
                    OUTSIDER_MEMBER_ID,
                ],
            },
        )
        .await
        .unwrap();

    assert_eq!(response.count, 1);
    let mentions = fixture.store.mentions().await;
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].card_id, Some(fixture.card.id));
    assert!(mentions[0].is_addressed_to(fixture.bob.member_id()));
    assert_eq!(fixture.scheduler.kinds().await, vec!["mention"]);

    let items = MentionService::new(&ctx)
        .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, false)
        .await;
    assert_eq!(items[0].text, "Assigned you to Ship the beta");
    assert_eq!(items[0].source.kind, SourceKind::Card);
    assert_eq!(items[0].source.name, "general");
}

#[tokio::test]
async fn test_deleted_card_mention_still_lists() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let service = MentionService::new(&ctx);

    service
        .create_card_assignment_mentions(
            fixture.alice.user_id(),
            fixture.card.id,
            AssignCardRequest {
                assignee_member_ids: vec![fixture.bob.member_id()],
            },
        )
        .await
        .unwrap();
    fixture.store.remove_card(fixture.card.id).await;

    let items = service
        .list_for_user(fixture.bob.user_id(), WORKSPACE_ID, false)
        .await;

    assert_eq!(items.len(), 1);
    assert!(items[0].text.ends_with("(deleted)"));
    assert_eq!(items[0].source.name, "Board");
    assert_eq!(items[0].card_id, Some(fixture.card.id.to_string()));
}

#[tokio::test]
async fn test_card_assignment_by_outsider_is_rejected() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    let err = MentionService::new(&ctx)
        .create_card_assignment_mentions(
            OUTSIDER_USER_ID,
            fixture.card.id,
            AssignCardRequest {
                assignee_member_ids: vec![fixture.bob.member_id()],
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(domain_error(&err), DomainError::Unauthorized));
    assert!(fixture.store.mentions().await.is_empty());
}

// ============================================================================
// Direct message read state
// ============================================================================

#[tokio::test]
async fn test_direct_message_read_flow() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();

    let message = MessageService::new(&ctx)
        .create_message(
            fixture.bob.user_id(),
            direct_message(&fixture, "hi @Alice please check"),
        )
        .await
        .unwrap();
    let message_id = id(&message.id);
    let direct = DirectMessageService::new(&ctx);

    let before = direct
        .list_for_user(fixture.alice.user_id(), WORKSPACE_ID, false)
        .await;
    assert_eq!(before.len(), 1);
    assert!(!before[0].read);
    assert_eq!(before[0].text, "hi @Alice please check");
    assert_eq!(before[0].author.name, "Bob");
    assert_eq!(before[0].source.kind, SourceKind::Direct);
    assert_eq!(before[0].source.id, fixture.conversation.id.to_string());

    direct
        .mark_read(fixture.alice.user_id(), message_id)
        .await
        .unwrap();

    let after = direct
        .list_for_user(fixture.alice.user_id(), WORKSPACE_ID, false)
        .await;
    assert!(after[0].read);
    assert!(fixture.store.mentions_for_message(message_id).await.is_empty());
}

#[tokio::test]
async fn test_mark_direct_message_read_is_idempotent() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let message = fixture.seed_direct_message(50, &fixture.bob, "ping").await;
    let direct = DirectMessageService::new(&ctx);

    direct
        .mark_read(fixture.alice.user_id(), message.id)
        .await
        .unwrap();
    direct
        .mark_read(fixture.alice.user_id(), message.id)
        .await
        .unwrap();

    assert_eq!(
        fixture
            .store
            .direct_reads_for(message.id, fixture.alice.member_id())
            .await,
        1
    );
}

#[tokio::test]
async fn test_unread_count_matches_unread_listing() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let first = fixture.seed_direct_message(51, &fixture.bob, "one").await;
    fixture.seed_direct_message(52, &fixture.bob, "two").await;
    fixture.seed_direct_message(53, &fixture.bob, "three").await;
    // Alice's own messages are never in her inbox
    fixture.seed_direct_message(54, &fixture.alice, "reply").await;

    let direct = DirectMessageService::new(&ctx);
    direct
        .mark_read(fixture.alice.user_id(), first.id)
        .await
        .unwrap();

    let unread = direct
        .list_for_user(fixture.alice.user_id(), WORKSPACE_ID, true)
        .await;
    let count = direct
        .unread_count(fixture.alice.user_id(), WORKSPACE_ID)
        .await;

    assert_eq!(unread.len(), 2);
    assert_eq!(count.total, unread.len());
    assert_eq!(count.direct, unread.len());
}

#[tokio::test]
async fn test_mark_all_direct_messages_read_counts_new_receipts() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let first = fixture.seed_direct_message(61, &fixture.bob, "one").await;
    fixture.seed_direct_message(62, &fixture.bob, "two").await;

    let direct = DirectMessageService::new(&ctx);
    direct
        .mark_read(fixture.alice.user_id(), first.id)
        .await
        .unwrap();

    let response = direct
        .mark_all_read(fixture.alice.user_id(), WORKSPACE_ID)
        .await
        .unwrap();
    assert_eq!(response.count, 1);

    let count = direct
        .unread_count(fixture.alice.user_id(), WORKSPACE_ID)
        .await;
    assert_eq!(count.total, 0);
}

#[tokio::test]
async fn test_direct_listing_respects_preview_limit() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context_with_preview_limit(2);
    for n in 0..4 {
        fixture
            .seed_direct_message(80 + n, &fixture.bob, &format!("message {n}"))
            .await;
    }

    let items = DirectMessageService::new(&ctx)
        .list_for_user(fixture.alice.user_id(), WORKSPACE_ID, false)
        .await;

    assert_eq!(items.len(), 2);
    let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, vec!["message 3", "message 2"]);
}

#[tokio::test]
async fn test_mark_read_in_other_workspace_is_rejected() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let message = fixture.seed_direct_message(90, &fixture.bob, "private").await;

    let err = DirectMessageService::new(&ctx)
        .mark_read(OUTSIDER_USER_ID, message.id)
        .await
        .unwrap_err();

    assert!(matches!(domain_error(&err), DomainError::Unauthorized));
}

#[tokio::test]
async fn test_mark_read_rejects_channel_messages() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let message = MessageService::new(&ctx)
        .create_message(fixture.bob.user_id(), channel_message(&fixture, "standup in 5"))
        .await
        .unwrap();
    let message_id = id(&message.id);

    let err = DirectMessageService::new(&ctx)
        .mark_read(fixture.alice.user_id(), message_id)
        .await
        .unwrap_err();

    assert!(matches!(domain_error(&err), DomainError::NotDirectMessage(m) if *m == message_id));
    assert_eq!(err.status_code(), 400);
    assert_eq!(
        fixture
            .store
            .direct_reads_for(message_id, fixture.alice.member_id())
            .await,
        0
    );
}

#[tokio::test]
async fn test_mark_read_requires_conversation_participant() {
    let fixture = Fixture::seed().await;
    let ctx = fixture.context();
    let carol = Member::new(Snowflake::new(204), WORKSPACE_ID, Snowflake::new(4));
    fixture.store.insert_user(User::new(carol.user_id, "Carol")).await;
    fixture.store.insert_member(carol.clone()).await;
    let message = fixture.seed_direct_message(91, &fixture.bob, "just us").await;

    let err = DirectMessageService::new(&ctx)
        .mark_read(carol.user_id, message.id)
        .await
        .unwrap_err();

    assert!(matches!(domain_error(&err), DomainError::NotConversationParticipant));
    assert_eq!(err.status_code(), 403);
    assert_eq!(fixture.store.direct_reads_for(message.id, carol.id).await, 0);
}
