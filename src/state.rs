//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned (cheaply, all fields are
//! reference-counted or pooled) for each request through Axum's state
//! extraction.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use serenity::http::Http;
use std::sync::Arc;

use crate::config::Config;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<Config>,

    /// HTTP client for external API requests.
    ///
    /// Configured with redirects disabled and an explicit timeout; used for
    /// the OAuth token exchange and profile fetch.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Discord HTTP client bound to the bot credential.
    ///
    /// Used by the ticket bridge for channel and message operations; the
    /// same client is shared with the gateway bot task.
    pub discord_http: Arc<Http>,
}

impl AppState {
    pub fn new(
        config: Config,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
            oauth_client,
            discord_http,
        }
    }
}
