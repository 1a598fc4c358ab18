use serenity::all::ChannelType;

use crate::model::ticket::{
    filter_ticket_channels, into_chronological, AuthorKind, ChannelRecord, TicketMessage,
};

const CATEGORY_ID: u64 = 500;

fn record(id: u64, name: &str, parent_id: Option<u64>, kind: ChannelType) -> ChannelRecord {
    ChannelRecord {
        id,
        name: name.to_string(),
        parent_id,
        kind,
    }
}

/// Tests the listing keeps only text channels under the ticket category.
///
/// The fixture mixes matching channels with a wrong-category channel, a
/// voice channel inside the category, and an uncategorized channel.
///
/// Expected: only the two matching text channels, in upstream order
#[test]
fn keeps_only_text_channels_in_category() {
    let channels = vec![
        record(1, "ticket-alice", Some(CATEGORY_ID), ChannelType::Text),
        record(2, "general", Some(900), ChannelType::Text),
        record(3, "ticket-voice", Some(CATEGORY_ID), ChannelType::Voice),
        record(4, "lobby", None, ChannelType::Text),
        record(5, "ticket-bob", Some(CATEGORY_ID), ChannelType::Text),
    ];

    let tickets = filter_ticket_channels(channels, CATEGORY_ID);

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].id, 1);
    assert_eq!(tickets[0].name, "ticket-alice");
    assert_eq!(tickets[1].id, 5);
    assert_eq!(tickets[1].name, "ticket-bob");
}

/// Tests an empty channel list yields an empty ticket list.
///
/// Expected: empty vec
#[test]
fn empty_channel_list_yields_no_tickets() {
    let tickets = filter_ticket_channels(Vec::new(), CATEGORY_ID);

    assert!(tickets.is_empty());
}

/// Tests ticket channel DTO conversion renders the id as a string.
///
/// Snowflakes exceed JavaScript's safe integer range, so the API carries
/// them as strings.
///
/// Expected: stringified id
#[test]
fn ticket_channel_dto_stringifies_id() {
    let tickets = filter_ticket_channels(
        vec![record(
            1136715502,
            "ticket-alice",
            Some(CATEGORY_ID),
            ChannelType::Text,
        )],
        CATEGORY_ID,
    );

    let dto = tickets.into_iter().next().unwrap().into_dto();
    assert_eq!(dto.id, "1136715502");
}

fn message(id: u64, author: &str, kind: AuthorKind) -> TicketMessage {
    TicketMessage {
        id,
        author: author.to_string(),
        author_kind: kind,
        content: format!("message {}", id),
        timestamp: "2025-01-01T00:00:00Z".to_string(),
    }
}

/// Tests newest-first upstream ordering is reversed for display.
///
/// Expected: oldest message first
#[test]
fn messages_are_reordered_chronologically() {
    let newest_first = vec![
        message(3, "alice", AuthorKind::User),
        message(2, "support", AuthorKind::Bot),
        message(1, "alice", AuthorKind::User),
    ];

    let ordered = into_chronological(newest_first);

    let ids: Vec<u64> = ordered.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// Tests message DTO conversion maps the author kind to its wire string.
///
/// Expected: authorType "bot" for bot authors, "user" otherwise
#[test]
fn message_dto_maps_author_kind() {
    let bot = message(1, "support", AuthorKind::Bot).into_dto();
    let user = message(2, "alice", AuthorKind::User).into_dto();

    assert_eq!(bot.author_type, "bot");
    assert_eq!(user.author_type, "user");
}
