use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, PkceCodeVerifier,
    StandardTokenResponse, TokenResponse,
};

use crate::{
    error::{upstream::UpstreamError, AppError},
    model::identity::{DiscordProfile, UserIdentity},
    service::oauth::DiscordAuthService,
};

const DISCORD_USER_PROFILE_URL: &str = "https://discord.com/api/users/@me";

impl<'a> DiscordAuthService<'a> {
    /// Exchanges the callback's authorization code and resolves the identity.
    ///
    /// The caller has already validated the state and consumed the
    /// handshake; this takes the verifier that was paired with it.
    pub async fn callback(
        &self,
        authorization_code: String,
        pkce_verifier: String,
    ) -> Result<UserIdentity, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(self.http_client)
            .await
            .map_err(|e| UpstreamError::TokenExchange(e.to_string()))?;

        let profile = self.fetch_discord_profile(&token).await?;

        Ok(UserIdentity::from_profile(profile))
    }

    /// Retrieves the Discord profile using the provided access token.
    async fn fetch_discord_profile(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordProfile, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(DISCORD_USER_PROFILE_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::ProfileFetch {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let profile = serde_json::from_str::<DiscordProfile>(&body)
            .map_err(|e| UpstreamError::ProfileDecode(e.to_string()))?;

        Ok(profile)
    }
}
