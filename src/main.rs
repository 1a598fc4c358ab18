mod bot;
mod config;
mod controller;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::net::{Ipv4Addr, SocketAddr};

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    // Configuration errors are fatal: serving with broken auth is worse
    // than not serving at all.
    if let Err(e) = run().await {
        tracing::error!("Fatal startup error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let session_layer = startup::setup_session_layer(&config)?;
    let cors_layer = startup::setup_cors_layer(&config)?;

    tracing::info!("Starting server");

    // Initialize the Discord bot and extract its HTTP client for the
    // ticket bridge before handing the gateway client to its own task.
    let (bot_client, discord_http) = bot::start::init_bot(&config).await?;

    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let port = config.port;
    let mut app = router::router()
        .with_state(AppState::new(config, http_client, oauth_client, discord_http))
        .layer(session_layer);

    if let Some(cors) = cors_layer {
        app = app.layer(cors);
    }

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
