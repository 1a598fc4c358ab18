use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POST_LOGIN_REDIRECT: &str = "/panel.html";

/// Cookie signing keys require at least 64 bytes of key material.
const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub session_secret: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub admin_secret: String,
    pub admin_secret_secondary: Option<String>,

    pub ticket_category_id: Option<u64>,
    pub guild_id: Option<u64>,

    pub post_login_redirect: String,
    pub allowed_origin: Option<String>,
    pub port: u16,
    pub secure_cookies: bool,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = require_env("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar(
                "SESSION_SECRET".to_string(),
                format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
            )
            .into());
        }

        Ok(Self {
            session_secret,
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            discord_bot_token: require_env("DISCORD_BOT_TOKEN")?,
            admin_secret: require_env("ADMIN_SECRET")?,
            admin_secret_secondary: optional_env("ADMIN_SECRET_SECONDARY"),
            ticket_category_id: optional_env_u64("TICKET_CATEGORY_ID")?,
            guild_id: optional_env_u64("DISCORD_GUILD_ID")?,
            post_login_redirect: optional_env("POST_LOGIN_REDIRECT")
                .unwrap_or_else(|| DEFAULT_POST_LOGIN_REDIRECT.to_string()),
            allowed_origin: optional_env("ALLOWED_ORIGIN"),
            port: optional_env_parsed("PORT")?.unwrap_or(DEFAULT_PORT),
            secure_cookies: optional_env("APP_ENV").as_deref() == Some("production"),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn optional_env_u64(name: &str) -> Result<Option<u64>, AppError> {
    optional_env_parsed::<u64>(name)
}

fn optional_env_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    let Some(value) = optional_env(name) else {
        return Ok(None);
    };

    let parsed = value.parse::<T>().map_err(|_| {
        ConfigError::InvalidEnvVar(name.to_string(), format!("could not parse '{}'", value))
    })?;

    Ok(Some(parsed))
}
