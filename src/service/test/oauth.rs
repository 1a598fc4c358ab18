use std::collections::HashSet;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::{service::oauth::DiscordAuthService, state::OAuth2Client};

fn test_oauth_client() -> OAuth2Client {
    BasicClient::new(ClientId::new("1234567890".to_string()))
        .set_client_secret(ClientSecret::new("client-secret".to_string()))
        .set_auth_uri(AuthUrl::new("https://discord.com/oauth2/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new("https://discord.com/api/oauth2/token".to_string()).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("http://localhost:8080/auth/discord/callback".to_string()).unwrap(),
        )
}

/// Tests generated state tokens are distinct across many starts.
///
/// The state is the callback's only tie back to this browser's flow, so
/// collisions would let one flow's callback complete another's.
///
/// Expected: 1000 starts produce 1000 distinct states and verifiers
#[test]
fn state_tokens_are_unique_across_starts() {
    let http_client = reqwest::Client::new();
    let oauth_client = test_oauth_client();
    let service = DiscordAuthService::new(&http_client, &oauth_client);

    let mut states = HashSet::new();
    let mut verifiers = HashSet::new();

    for _ in 0..1000 {
        let (_, handshake) = service.login_url();
        states.insert(handshake.state);
        verifiers.insert(handshake.verifier);
    }

    assert_eq!(states.len(), 1000);
    assert_eq!(verifiers.len(), 1000);
}

/// Tests the authorization URL carries the documented query parameters.
///
/// Expected: client_id, redirect_uri, identify scope, state matching the
/// handshake, and an S256 PKCE challenge
#[test]
fn authorize_url_carries_expected_parameters() {
    let http_client = reqwest::Client::new();
    let oauth_client = test_oauth_client();
    let service = DiscordAuthService::new(&http_client, &oauth_client);

    let (url, handshake) = service.login_url();

    let params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };

    assert_eq!(url.host_str(), Some("discord.com"));
    assert_eq!(get("client_id").as_deref(), Some("1234567890"));
    assert_eq!(
        get("redirect_uri").as_deref(),
        Some("http://localhost:8080/auth/discord/callback")
    );
    assert_eq!(get("scope").as_deref(), Some("identify"));
    assert_eq!(get("response_type").as_deref(), Some("code"));
    assert_eq!(get("state").as_deref(), Some(handshake.state.as_str()));
    assert_eq!(get("code_challenge_method").as_deref(), Some("S256"));

    // The challenge travels in the URL; the verifier must not.
    let challenge = get("code_challenge").expect("challenge missing");
    assert_ne!(challenge, handshake.verifier);
}
