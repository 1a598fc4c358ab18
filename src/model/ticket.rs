//! Ticket channel and message domain models.
//!
//! Serenity's REST types are converted to small records at the service
//! boundary so filtering and ordering stay testable against fixtures without
//! a live Discord connection.

use serenity::all::{ChannelType, GuildChannel, Message};

use crate::model::api::{TicketChannelDto, TicketMessageDto};

/// Author kind attached to a ticket message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorKind {
    User,
    Bot,
}

impl AuthorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// Guild channel reduced to the fields the ticket listing inspects.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRecord {
    pub id: u64,
    pub name: String,
    pub parent_id: Option<u64>,
    pub kind: ChannelType,
}

impl From<&GuildChannel> for ChannelRecord {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            parent_id: channel.parent_id.map(|id| id.get()),
            kind: channel.kind,
        }
    }
}

/// Ticket channel summary exposed to the admin inbox.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketChannel {
    pub id: u64,
    pub name: String,
}

impl TicketChannel {
    pub fn into_dto(self) -> TicketChannelDto {
        TicketChannelDto {
            id: self.id.to_string(),
            name: self.name,
        }
    }
}

/// Keeps the text channels parented to the ticket category, in upstream
/// order.
pub fn filter_ticket_channels(channels: Vec<ChannelRecord>, category_id: u64) -> Vec<TicketChannel> {
    channels
        .into_iter()
        .filter(|channel| {
            channel.kind == ChannelType::Text && channel.parent_id == Some(category_id)
        })
        .map(|channel| TicketChannel {
            id: channel.id,
            name: channel.name,
        })
        .collect()
}

/// Single message in a ticket channel.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketMessage {
    pub id: u64,
    pub author: String,
    pub author_kind: AuthorKind,
    pub content: String,
    pub timestamp: String,
}

impl TicketMessage {
    /// Reduces a REST message to the fields the inbox displays.
    ///
    /// The author display name prefers the global display name over the
    /// account username, matching the panel's identity derivation.
    pub fn from_message(message: &Message) -> Self {
        let author = message
            .author
            .global_name
            .clone()
            .unwrap_or_else(|| message.author.name.clone());

        let author_kind = if message.author.bot {
            AuthorKind::Bot
        } else {
            AuthorKind::User
        };

        Self {
            id: message.id.get(),
            author,
            author_kind,
            content: message.content.clone(),
            timestamp: message.timestamp.to_string(),
        }
    }

    pub fn into_dto(self) -> TicketMessageDto {
        TicketMessageDto {
            id: self.id.to_string(),
            author: self.author,
            author_type: self.author_kind.as_str().to_string(),
            content: self.content,
            timestamp: self.timestamp,
        }
    }
}

/// Discord returns messages newest-first; the inbox renders oldest-first.
pub fn into_chronological(mut messages: Vec<TicketMessage>) -> Vec<TicketMessage> {
    messages.reverse();
    messages
}
