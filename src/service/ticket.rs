//! Ticket bridge: admin-facing proxy over the Discord REST API.
//!
//! Every operation re-fetches from Discord through the bot credential;
//! nothing is cached between calls. Traffic here is operator-driven, so the
//! extra round trips are an accepted cost for never serving stale tickets.

use serenity::all::{ChannelId, CreateMessage, GuildId};
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::AppError,
    model::ticket::{
        filter_ticket_channels, into_chronological, ChannelRecord, TicketChannel, TicketMessage,
    },
};

/// Discord caps message content at 2000 characters; staying under it leaves
/// room for upstream-added decorations.
pub(crate) const MAX_MESSAGE_CONTENT_LEN: usize = 1900;

/// Number of recent messages fetched per ticket read.
const MESSAGE_FETCH_LIMIT: u8 = 50;

pub struct TicketService<'a> {
    http: &'a Arc<Http>,
}

impl<'a> TicketService<'a> {
    pub fn new(http: &'a Arc<Http>) -> Self {
        Self { http }
    }

    /// Lists the ticket channels of a guild.
    ///
    /// Fetches all guild channels and keeps the text channels parented to
    /// the ticket category.
    pub async fn list(
        &self,
        guild_id: u64,
        category_id: u64,
    ) -> Result<Vec<TicketChannel>, AppError> {
        let guild_id = require_snowflake(guild_id, "guild")?;
        let category_id = require_snowflake(category_id, "category")?;

        let channels = self.http.get_channels(GuildId::new(guild_id)).await?;

        let records: Vec<ChannelRecord> = channels.iter().map(ChannelRecord::from).collect();

        Ok(filter_ticket_channels(records, category_id))
    }

    /// Reads the most recent messages of a ticket channel in chronological
    /// order.
    pub async fn read(&self, channel_id: u64) -> Result<Vec<TicketMessage>, AppError> {
        let channel_id = require_snowflake(channel_id, "channel")?;

        let messages = self
            .http
            .get_messages(ChannelId::new(channel_id), None, Some(MESSAGE_FETCH_LIMIT))
            .await?;

        let ticket_messages = messages.iter().map(TicketMessage::from_message).collect();

        Ok(into_chronological(ticket_messages))
    }

    /// Posts a message into a ticket channel as the bot identity.
    ///
    /// Content is validated and truncated before any upstream call.
    pub async fn send(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        let channel_id = require_snowflake(channel_id, "channel")?;
        let content = prepare_content(content)?;

        ChannelId::new(channel_id)
            .send_message(self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}

/// Rejects the zero id a path or query parameter can carry.
///
/// Discord snowflakes are non-zero; serenity's id constructors panic on
/// zero, so the check has to happen before any id is built.
fn require_snowflake(id: u64, kind: &str) -> Result<u64, AppError> {
    if id == 0 {
        return Err(AppError::BadRequest(format!("invalid {} id", kind)));
    }

    Ok(id)
}

/// Validates and bounds outbound message content.
///
/// Whitespace-only content is rejected; anything longer than the maximum is
/// truncated to exactly that many characters.
pub(crate) fn prepare_content(content: &str) -> Result<String, AppError> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("message content is empty".to_string()));
    }

    Ok(trimmed.chars().take(MAX_MESSAGE_CONTENT_LEN).collect())
}
