use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::api::{OkDto, SendMessageDto, TicketListDto, TicketMessagesDto},
    service::ticket::TicketService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct TicketListParams {
    /// Guild to list tickets for; falls back to the configured guild.
    #[serde(rename = "guildId")]
    pub guild_id: Option<u64>,
}

/// Lists the ticket channels under the configured category.
pub async fn list_tickets(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TicketListParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    let Some(guild_id) = params.guild_id.or(state.config.guild_id) else {
        return Err(AppError::BadRequest("missing guild id".to_string()));
    };

    let Some(category_id) = state.config.ticket_category_id else {
        return Err(AppError::BadRequest(
            "ticket category is not configured".to_string(),
        ));
    };

    let tickets = TicketService::new(&state.discord_http)
        .list(guild_id, category_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TicketListDto {
            tickets: tickets.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}

/// Returns a ticket channel's recent messages in chronological order.
pub async fn get_ticket_messages(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    let messages = TicketService::new(&state.discord_http)
        .read(channel_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TicketMessagesDto {
            messages: messages.into_iter().map(|m| m.into_dto()).collect(),
        }),
    ))
}

/// Posts a reply into a ticket channel as the bot identity.
pub async fn send_ticket_message(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<u64>,
    Json(body): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    TicketService::new(&state.discord_http)
        .send(channel_id, &body.content)
        .await?;

    Ok((StatusCode::OK, Json(OkDto::ok())))
}
