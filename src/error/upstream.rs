use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to Discord's OAuth and REST endpoints.
///
/// Upstream response bodies may carry detail that should not reach the
/// browser, so every variant logs server-side and answers with a generic
/// 500 and a short opaque reason.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Token endpoint rejected the authorization code exchange.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),

    /// Identity endpoint answered with a non-success status.
    #[error("Profile fetch failed with status {status}: {body}")]
    ProfileFetch { status: u16, body: String },

    /// Identity endpoint answered 200 but the body is missing required
    /// fields or is not the documented shape.
    #[error("Failed to decode profile response: {0}")]
    ProfileDecode(String),

    /// Transport-level failure (connect, timeout, TLS) from the HTTP client.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Discord REST call through the bot credential failed.
    ///
    /// Boxed due to the large size of `serenity::Error`.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("Upstream error: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "upstream request failed".to_string(),
            }),
        )
            .into_response()
    }
}
