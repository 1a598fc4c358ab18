//! Discord OAuth2 flow: building the authorization redirect and resolving
//! the callback into a session identity.

mod callback;
mod login;

use crate::state::OAuth2Client;

pub struct DiscordAuthService<'a> {
    pub(crate) http_client: &'a reqwest::Client,
    pub(crate) oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }
}
