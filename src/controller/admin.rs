use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{
        auth::{AuthGuard, Permission},
        session::AdminSession,
    },
    model::api::{AdminLoginDto, OkDto},
    service::admin::AdminAuthService,
    state::AppState,
};

/// Validates the submitted admin credential and sets the admin flag.
///
/// A failed check returns 401 and leaves the session untouched.
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminAuthService::new(&state.config).verify(&body.password)?;

    AdminSession::new(&session).grant().await?;

    tracing::info!("Admin session granted");

    Ok((StatusCode::OK, Json(OkDto::ok())))
}

/// Clears the admin flag, leaving any user identity in place.
pub async fn admin_logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    AdminSession::new(&session).revoke().await?;

    Ok((StatusCode::OK, Json(OkDto::ok())))
}

/// Reports whether this session holds the admin flag.
pub async fn get_admin(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    Ok((StatusCode::OK, Json(OkDto::ok())))
}
