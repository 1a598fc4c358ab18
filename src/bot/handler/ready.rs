//! Ready event handler for bot initialization.
//!
//! Fires once per gateway connection after authentication. Used to log the
//! connected bot user, set its activity, and register the guild command
//! that posts the ticket panel.

use serenity::all::{ActivityData, Context, CreateCommand, GuildId, Permissions, Ready};

use crate::bot::handler::TICKET_PANEL_COMMAND;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the `ticketpanel` command in the configured guild, restricted
/// to administrators. Without a configured guild the command is skipped and
/// only the ticket button remains active.
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: Option<u64>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Here to help")));

    let Some(guild_id) = guild_id else {
        tracing::warn!("No guild configured, skipping ticketpanel command registration");
        return;
    };

    let command = CreateCommand::new(TICKET_PANEL_COMMAND)
        .description("Post the support ticket panel in this channel")
        .default_member_permissions(Permissions::ADMINISTRATOR);

    if let Err(e) = GuildId::new(guild_id)
        .set_commands(&ctx.http, vec![command])
        .await
    {
        tracing::error!("Failed to register ticketpanel command: {:?}", e);
    }
}
