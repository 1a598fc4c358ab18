use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// OAuth callback arrived without an authorization code.
    ///
    /// Discord always includes `code` on a successful authorization, so a
    /// missing code means the redirect did not come from a completed
    /// consent screen. Results in a 400 Bad Request response.
    #[error("OAuth callback is missing the authorization code")]
    MissingAuthorizationCode,

    /// OAuth callback arrived with no pending handshake in the session.
    ///
    /// Either the flow was never started from this browser or the handshake
    /// was already consumed. Results in a 400 Bad Request response.
    #[error("No pending OAuth handshake in session")]
    MissingHandshake,

    /// The `state` in the OAuth callback does not match the pending
    /// handshake's state, indicating a forged or stale callback.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to OAuth state mismatch")]
    StateMismatch,

    /// A route requiring a logged-in user was called without one.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// An admin-only route was called without the admin session flag.
    #[error("No admin flag in session")]
    AdminNotInSession,

    /// Submitted admin credential matched none of the configured secrets.
    #[error("Invalid admin credential")]
    InvalidAdminCredential,
}

/// Converts authentication errors into HTTP responses.
///
/// The OAuth handshake failures answer the browser directly mid-redirect, so
/// they return plain text rather than JSON. Session and credential failures
/// belong to the JSON APIs and answer 401 with an error body. Client-facing
/// messages stay generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            Self::MissingAuthorizationCode | Self::MissingHandshake | Self::StateMismatch => {
                tracing::warn!("OAuth callback rejected: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
                    .into_response()
            }
            Self::UserNotInSession | Self::AdminNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidAdminCredential => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "invalid credentials".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
