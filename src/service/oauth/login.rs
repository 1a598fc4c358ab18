use chrono::Utc;
use oauth2::{CsrfToken, PkceCodeChallenge, Scope};
use url::Url;

use crate::{model::auth::OAuthHandshake, service::oauth::DiscordAuthService};

impl<'a> DiscordAuthService<'a> {
    /// Builds the authorization redirect and the handshake to store for it.
    ///
    /// Generates a fresh random state token and PKCE verifier per call; the
    /// SHA-256 challenge travels in the URL while the verifier stays
    /// server-side until the token exchange.
    pub fn login_url(&self) -> (Url, OAuthHandshake) {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        let handshake = OAuthHandshake {
            state: csrf_state.secret().clone(),
            verifier: pkce_verifier.secret().clone(),
            created_at: Utc::now(),
        };

        (authorize_url, handshake)
    }
}
