//! Session-held authentication state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single pending OAuth handshake for a browser session.
///
/// Created when the login redirect is built and consumed exactly once by the
/// callback. Starting a new flow overwrites any handshake still pending.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OAuthHandshake {
    /// Opaque CSRF state token carried through the authorization redirect.
    pub state: String,
    /// PKCE code verifier paired with the challenge sent to Discord.
    pub verifier: String,
    /// When the handshake was issued.
    pub created_at: DateTime<Utc>,
}

/// Marker stored in session after a successful admin credential check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminGrant {
    pub granted_at: DateTime<Utc>,
}

impl AdminGrant {
    pub fn now() -> Self {
        Self {
            granted_at: Utc::now(),
        }
    }
}
