use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, HandshakeSession},
    },
    model::{api::OkDto, auth::OAuthHandshake},
    service::oauth::DiscordAuthService,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Both fields are optional at the type level so their absence maps to the
/// flow's own error handling instead of a generic extractor rejection.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Authorization code from Discord for the token exchange.
    pub code: Option<String>,
    /// State token to be validated against the pending handshake.
    pub state: Option<String>,
}

/// Starts the OAuth flow: stores a fresh handshake and redirects to Discord.
///
/// Any handshake still pending from an earlier start is silently replaced.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    let (url, handshake) = auth_service.login_url();

    HandshakeSession::new(&session).set(&handshake).await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the OAuth flow and establishes the user session.
///
/// The pending handshake is consumed before the state check so a failed or
/// replayed callback always has to restart the flow from the beginning.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(code) = params.code else {
        return Err(AuthError::MissingAuthorizationCode.into());
    };

    let handshake = take_matching_handshake(&session, params.state.as_deref()).await?;

    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);
    let identity = auth_service.callback(code, handshake.verifier).await?;

    tracing::info!("User {} logged in", identity.id);

    AuthSession::new(&session).set_identity(&identity).await?;

    Ok(Redirect::temporary(&state.config.post_login_redirect))
}

/// Consumes the pending handshake and checks the presented state against it.
///
/// The handshake is taken before the comparison, so a mismatched callback
/// burns it and any retry has to restart the flow.
pub(crate) async fn take_matching_handshake(
    session: &Session,
    presented_state: Option<&str>,
) -> Result<OAuthHandshake, AppError> {
    let Some(handshake) = HandshakeSession::new(session).take().await? else {
        return Err(AuthError::MissingHandshake.into());
    };

    if presented_state != Some(handshake.state.as_str()) {
        return Err(AuthError::StateMismatch.into());
    }

    Ok(handshake)
}

/// Logs the user out by destroying the entire session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(OkDto::ok())))
}

/// Returns the authenticated user's identity, or 401.
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require_user().await?;

    Ok((StatusCode::OK, Json(identity.into_me_dto())))
}
