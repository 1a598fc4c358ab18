//! Static HTML entry points.
//!
//! Pages are compiled into the binary; the panel is the only one with a
//! server-side gate, redirecting unauthenticated browsers into the OAuth
//! flow.

use axum::response::{Html, IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::{error::AppError, middleware::session::AuthSession};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const PANEL_HTML: &str = include_str!("../../static/panel.html");
const ADMIN_HTML: &str = include_str!("../../static/admin.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serves the client panel, or sends the browser to Discord login first.
pub async fn panel(session: Session) -> Result<Response, AppError> {
    if !AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::temporary("/auth/discord").into_response());
    }

    Ok(Html(PANEL_HTML).into_response())
}

/// Serves the admin inbox shell; the page itself performs the credential
/// login against the admin API.
pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_HTML)
}
