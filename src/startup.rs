use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::Key, service::SignedCookie, Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Upstream calls have no retry policy; the timeout bounds how long a
/// request can hang on Discord before surfacing as an upstream error.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

const SESSION_TTL_DAYS: i64 = 7;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Builds the HTTP client used for the token exchange and profile fetch.
///
/// Redirects are disabled to keep the client from following attacker
/// controlled locations, and an explicit timeout bounds every upstream call.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord's authorization and token endpoints.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid authorization endpoint: {}", e)))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid token endpoint: {}", e)))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|e| {
        ConfigError::InvalidEnvVar("DISCORD_REDIRECT_URL".to_string(), e.to_string())
    })?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Builds the cookie-backed session layer over the in-memory store.
///
/// Cookies are signed with the configured session secret; the secure flag
/// follows the environment so local development works over plain HTTP.
pub fn setup_session_layer(
    config: &Config,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, AppError> {
    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvVar("SESSION_SECRET".to_string(), e.to_string())
    })?;

    let layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookies)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(SESSION_TTL_DAYS)))
        .with_signed(key);

    Ok(layer)
}

/// Builds the CORS layer when an allowed origin is configured.
///
/// Credentials are allowed so the session cookie travels with cross-origin
/// panel requests.
pub fn setup_cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = &config.allowed_origin else {
        return Ok(None);
    };

    let origin = origin.parse::<HeaderValue>().map_err(|e| {
        ConfigError::InvalidEnvVar("ALLOWED_ORIGIN".to_string(), e.to_string())
    })?;

    let layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Some(layer))
}
