use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{
        admin::{admin_login, admin_logout, get_admin},
        auth::{callback, get_user, login, logout},
        pages::{admin_page, index, panel},
        ticket::{get_ticket_messages, list_tickets, send_ticket_message},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/panel.html", get(panel))
        .route("/admin.html", get(admin_page))
        .route("/auth/discord", get(login))
        .route("/auth/discord/callback", get(callback))
        .route("/auth/logout", post(logout))
        .route("/api/me", get(get_user))
        .route("/admin/auth/login", post(admin_login))
        .route("/admin/auth/logout", post(admin_logout))
        .route("/api/admin/me", get(get_admin))
        .route("/api/admin/tickets", get(list_tickets))
        .route("/api/admin/tickets/{channel_id}", get(get_ticket_messages))
        .route(
            "/api/admin/tickets/{channel_id}/send",
            post(send_ticket_message),
        )
}
