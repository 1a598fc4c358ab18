use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::{AdminSession, AuthSession},
    model::identity::UserIdentity,
};

pub enum Permission {
    User,
    Admin,
}

/// Session-backed guard applied at the top of protected handlers.
///
/// Fails closed: any permission that cannot be proven from the session
/// denies the request with 401.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::User => {
                    if !AuthSession::new(self.session).is_authenticated().await? {
                        return Err(AuthError::UserNotInSession.into());
                    }
                }
                Permission::Admin => {
                    if !AdminSession::new(self.session).is_admin().await? {
                        return Err(AuthError::AdminNotInSession.into());
                    }
                }
            }
        }

        Ok(())
    }

    /// Requires a logged-in user and returns their identity.
    pub async fn require_user(&self) -> Result<UserIdentity, AppError> {
        AuthSession::new(self.session)
            .get_identity()
            .await?
            .ok_or_else(|| AuthError::UserNotInSession.into())
    }
}
