//! Interaction handlers for the ticket panel command and button.

use serenity::all::{
    ButtonStyle, ChannelId, ChannelType, CommandInteraction, ComponentInteraction, Context,
    CreateActionRow, CreateButton, CreateChannel, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, GuildId, Interaction, PermissionOverwrite,
    PermissionOverwriteType, Permissions, RoleId,
};

use crate::bot::handler::{OPEN_TICKET_BUTTON_ID, TICKET_PANEL_COMMAND};
use crate::error::AppError;

pub async fn handle_interaction(
    ctx: Context,
    interaction: Interaction,
    ticket_category_id: Option<u64>,
) {
    match interaction {
        Interaction::Command(command) if command.data.name == TICKET_PANEL_COMMAND => {
            if let Err(e) = post_ticket_panel(&ctx, &command).await {
                tracing::error!("Failed to post ticket panel: {}", e);
            }
        }
        Interaction::Component(component) if component.data.custom_id == OPEN_TICKET_BUTTON_ID => {
            if let Err(e) = open_ticket(&ctx, &component, ticket_category_id).await {
                tracing::error!("Failed to open ticket: {}", e);
            }
        }
        _ => {}
    }
}

/// Posts the support message carrying the ticket button into the invoking
/// channel.
async fn post_ticket_panel(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let button = CreateButton::new(OPEN_TICKET_BUTTON_ID)
        .label("Open a ticket")
        .style(ButtonStyle::Primary);

    let panel = CreateMessage::new()
        .content("Need help? Open a private ticket and our team will get back to you.")
        .components(vec![CreateActionRow::Buttons(vec![button])]);

    command.channel_id.send_message(&ctx.http, panel).await?;

    command
        .create_response(
            &ctx.http,
            ephemeral_reply("Ticket panel posted."),
        )
        .await?;

    Ok(())
}

/// Creates a private ticket channel for the pressing user.
///
/// The channel is visible only to the user and the bot; pressing the button
/// again while a ticket is open points at the existing channel instead of
/// creating a second one.
async fn open_ticket(
    ctx: &Context,
    component: &ComponentInteraction,
    ticket_category_id: Option<u64>,
) -> Result<(), AppError> {
    let Some(guild_id) = component.guild_id else {
        component
            .create_response(
                &ctx.http,
                ephemeral_reply("Tickets can only be opened from a server."),
            )
            .await?;
        return Ok(());
    };

    let Some(category_id) = ticket_category_id else {
        tracing::warn!("Ticket button pressed but no ticket category is configured");
        component
            .create_response(
                &ctx.http,
                ephemeral_reply("Tickets are not set up yet, please try again later."),
            )
            .await?;
        return Ok(());
    };

    let channel_name = ticket_channel_name(&component.user.name);

    if let Some(existing) = find_existing_ticket(ctx, guild_id, category_id, &channel_name).await? {
        component
            .create_response(
                &ctx.http,
                ephemeral_reply(&format!("You already have an open ticket: <#{}>", existing)),
            )
            .await?;
        return Ok(());
    }

    let channel = create_ticket_channel(ctx, guild_id, category_id, &channel_name, component).await?;

    tracing::info!(
        "Created ticket channel {} for user {}",
        channel,
        component.user.id
    );

    channel
        .send_message(
            &ctx.http,
            CreateMessage::new().content(format!(
                "<@{}> welcome! Describe your issue here and our team will reply shortly.",
                component.user.id
            )),
        )
        .await?;

    component
        .create_response(
            &ctx.http,
            ephemeral_reply(&format!("Your ticket has been created: <#{}>", channel)),
        )
        .await?;

    Ok(())
}

async fn find_existing_ticket(
    ctx: &Context,
    guild_id: GuildId,
    category_id: u64,
    channel_name: &str,
) -> Result<Option<ChannelId>, AppError> {
    let channels = ctx.http.get_channels(guild_id).await?;

    Ok(channels
        .iter()
        .find(|channel| {
            channel.parent_id.map(|id| id.get()) == Some(category_id)
                && channel.name == channel_name
        })
        .map(|channel| channel.id))
}

async fn create_ticket_channel(
    ctx: &Context,
    guild_id: GuildId,
    category_id: u64,
    channel_name: &str,
    component: &ComponentInteraction,
) -> Result<ChannelId, AppError> {
    let bot_id = ctx.cache.current_user().id;
    let member_allow =
        Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::READ_MESSAGE_HISTORY;

    // The @everyone role shares the guild's id.
    let overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        PermissionOverwrite {
            allow: member_allow,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(component.user.id),
        },
        PermissionOverwrite {
            allow: member_allow,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(bot_id),
        },
    ];

    let builder = CreateChannel::new(channel_name)
        .kind(ChannelType::Text)
        .category(ChannelId::new(category_id))
        .permissions(overwrites);

    let channel = guild_id.create_channel(&ctx.http, builder).await?;

    Ok(channel.id)
}

/// Derives the ticket channel name from a username.
///
/// Channel names only allow lowercase alphanumerics and dashes.
pub(crate) fn ticket_channel_name(username: &str) -> String {
    let slug: String = username
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    format!("ticket-{}", slug)
}

fn ephemeral_reply(content: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

#[cfg(test)]
mod test {
    use super::ticket_channel_name;

    /// Tests usernames are slugified into valid channel names.
    ///
    /// Expected: lowercase, non-alphanumerics replaced with dashes
    #[test]
    fn channel_name_is_slugified() {
        assert_eq!(ticket_channel_name("Nelly"), "ticket-nelly");
        assert_eq!(ticket_channel_name("nelly.b"), "ticket-nelly-b");
        assert_eq!(ticket_channel_name("nelly_b 2"), "ticket-nelly-b-2");
    }
}
