//! End-user identity derived from the Discord profile endpoint.
//!
//! Upstream JSON is parsed into an explicit `DiscordProfile` type so missing
//! required fields fail loudly at the boundary instead of producing empty
//! values downstream.

use serde::{Deserialize, Serialize};

use crate::model::api::{MeDto, UserDto};

/// Fallback avatar for profiles without an uploaded avatar.
pub const DEFAULT_AVATAR_URL: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

const AVATAR_CDN_BASE: &str = "https://cdn.discordapp.com/avatars";

/// Profile shape returned by Discord's `/users/@me` endpoint, reduced to the
/// fields the panel uses.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordProfile {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

/// Authenticated end-user identity held in session for the panel.
///
/// Immutable once set: the profile is never re-fetched, so the identity
/// reflects the moment of login until logout or session expiry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
}

impl UserIdentity {
    /// Derives the session identity from a fetched profile.
    ///
    /// The display name prefers Discord's global display name over the
    /// account username when present.
    pub fn from_profile(profile: DiscordProfile) -> Self {
        let avatar_url = avatar_url(&profile.id, profile.avatar.as_deref());
        let display_name = profile
            .global_name
            .unwrap_or_else(|| profile.username.clone());

        Self {
            id: profile.id,
            username: profile.username,
            display_name,
            avatar_url,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
        }
    }

    pub fn into_me_dto(self) -> MeDto {
        MeDto {
            user: self.into_dto(),
        }
    }
}

/// Builds the CDN avatar URL for a user.
///
/// Animated avatars are prefixed `a_` by Discord and served as `gif`; all
/// others are `png`. Users without an avatar get the fixed default.
pub fn avatar_url(user_id: &str, avatar: Option<&str>) -> String {
    match avatar {
        None => DEFAULT_AVATAR_URL.to_string(),
        Some(hash) => {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!("{}/{}/{}.{}", AVATAR_CDN_BASE, user_id, hash, ext)
        }
    }
}
