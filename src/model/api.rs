//! Wire-format DTOs for the JSON API surface.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct OkDto {
    pub ok: bool,
}

impl OkDto {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Authenticated end-user identity as returned by `GET /api/me`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
}

#[derive(Serialize, Deserialize)]
pub struct MeDto {
    pub user: UserDto,
}

/// Ticket channel summary as returned by `GET /api/admin/tickets`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TicketChannelDto {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct TicketListDto {
    pub tickets: Vec<TicketChannelDto>,
}

/// Single ticket message as returned by `GET /api/admin/tickets/{channelId}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessageDto {
    pub id: String,
    pub author: String,
    pub author_type: String,
    pub content: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize)]
pub struct TicketMessagesDto {
    pub messages: Vec<TicketMessageDto>,
}

/// Request body for `POST /admin/auth/login`.
#[derive(Deserialize)]
pub struct AdminLoginDto {
    pub password: String,
}

/// Request body for `POST /api/admin/tickets/{channelId}/send`.
#[derive(Deserialize)]
pub struct SendMessageDto {
    pub content: String,
}
