use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

/// Custom id carried by the ticket panel button.
pub const OPEN_TICKET_BUTTON_ID: &str = "open_ticket";

/// Name of the admin command that posts the ticket panel message.
pub const TICKET_PANEL_COMMAND: &str = "ticketpanel";

/// Discord bot event handler
pub struct Handler {
    /// Category the per-user ticket channels are created under.
    pub ticket_category_id: Option<u64>,
    /// Guild the `ticketpanel` command is registered in.
    pub guild_id: Option<u64>,
}

impl Handler {
    pub fn new(ticket_category_id: Option<u64>, guild_id: Option<u64>) -> Self {
        Self {
            ticket_category_id,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id).await;
    }

    /// Called for slash commands and component interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(ctx, interaction, self.ticket_category_id).await;
    }
}
