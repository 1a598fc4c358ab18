use super::test_session;
use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::{AdminSession, AuthSession},
    },
    model::identity::{DiscordProfile, UserIdentity},
};

fn identity() -> UserIdentity {
    UserIdentity::from_profile(DiscordProfile {
        id: "80351110224678912".to_string(),
        username: "nelly".to_string(),
        global_name: Some("Nelly".to_string()),
        avatar: None,
    })
}

/// Tests the guard denies user routes for an empty session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_user_permission_without_identity() -> Result<(), AppError> {
    let session = test_session();

    let result = AuthGuard::new(&session).require(&[Permission::User]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests the guard grants user routes once an identity is in session.
///
/// Expected: Ok(()) and require_user returns the stored identity
#[tokio::test]
async fn grants_user_permission_with_identity() -> Result<(), AppError> {
    let session = test_session();
    AuthSession::new(&session).set_identity(&identity()).await?;

    let guard = AuthGuard::new(&session);
    guard.require(&[Permission::User]).await?;

    let user = guard.require_user().await?;
    assert_eq!(user.username, "nelly");

    Ok(())
}

/// Tests the guard denies admin routes when only a user identity exists.
///
/// The admin flag and user identity are independent; logging in as a user
/// must not open the admin inbox.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn user_identity_does_not_imply_admin() -> Result<(), AppError> {
    let session = test_session();
    AuthSession::new(&session).set_identity(&identity()).await?;

    let result = AuthGuard::new(&session).require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}

/// Tests the guard grants admin routes once the flag is set, without any
/// user identity present.
///
/// Expected: Ok(())
#[tokio::test]
async fn admin_flag_does_not_require_identity() -> Result<(), AppError> {
    let session = test_session();
    AdminSession::new(&session).grant().await?;

    AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    Ok(())
}

/// Tests revoking the admin flag closes admin routes again.
///
/// Expected: Err(AuthError::AdminNotInSession) after revoke
#[tokio::test]
async fn revoked_admin_flag_denies_access() -> Result<(), AppError> {
    let session = test_session();
    let admin = AdminSession::new(&session);
    admin.grant().await?;
    admin.revoke().await?;

    let result = AuthGuard::new(&session).require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}
