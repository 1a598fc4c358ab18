//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to one concern, preventing key typos and centralizing
//! session-related logic:
//! - `AuthSession` - the authenticated end-user identity
//! - `HandshakeSession` - the single pending OAuth handshake
//! - `AdminSession` - the admin flag set by the credential check
//!
//! The admin flag and the user identity are deliberately independent: a
//! browser session may hold either, both, or neither.

use tower_sessions::Session;

use crate::{
    error::AppError,
    model::{
        auth::{AdminGrant, OAuthHandshake},
        identity::UserIdentity,
    },
};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_HANDSHAKE: &str = "auth:handshake";
const SESSION_ADMIN_GRANT: &str = "admin:grant";

/// Authentication session management for end users.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the identity after a successful OAuth callback.
    pub async fn set_identity(&self, identity: &UserIdentity) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, identity).await?;
        Ok(())
    }

    /// Retrieves the identity of the currently authenticated user.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_identity(&self) -> Result<Option<UserIdentity>, AppError> {
        let identity = self.session.get::<UserIdentity>(SESSION_AUTH_USER).await?;
        Ok(identity)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_identity().await?.is_some())
    }

    /// Destroys the session and its cookie.
    ///
    /// Used during logout to remove the identity along with any pending
    /// handshake or admin flag tied to this browser.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// Pending OAuth handshake management.
///
/// A session holds at most one handshake; setting a new one overwrites any
/// flow still in progress.
pub struct HandshakeSession<'a> {
    session: &'a Session,
}

impl<'a> HandshakeSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set(&self, handshake: &OAuthHandshake) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_HANDSHAKE, handshake)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the pending handshake.
    ///
    /// The handshake is removed before any validation so each one can be
    /// consumed at most once; a replayed callback finds nothing pending.
    ///
    /// # Returns
    /// - `Ok(Some(handshake))` - A handshake was pending and is now consumed
    /// - `Ok(None)` - No handshake pending
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take(&self) -> Result<Option<OAuthHandshake>, AppError> {
        let handshake = self.session.remove(SESSION_AUTH_HANDSHAKE).await?;
        Ok(handshake)
    }
}

/// Admin flag session management.
pub struct AdminSession<'a> {
    session: &'a Session,
}

impl<'a> AdminSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as admin after a successful credential check.
    pub async fn grant(&self) -> Result<(), AppError> {
        self.session
            .insert(SESSION_ADMIN_GRANT, AdminGrant::now())
            .await?;
        Ok(())
    }

    pub async fn is_admin(&self) -> Result<bool, AppError> {
        let grant = self.session.get::<AdminGrant>(SESSION_ADMIN_GRANT).await?;
        Ok(grant.is_some())
    }

    /// Removes the admin flag, leaving any user identity untouched.
    pub async fn revoke(&self) -> Result<(), AppError> {
        self.session
            .remove::<AdminGrant>(SESSION_ADMIN_GRANT)
            .await?;
        Ok(())
    }
}
