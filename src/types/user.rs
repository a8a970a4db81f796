//! Users and guild members.

use serde::{Deserialize, Serialize};

use crate::types::{
    guild::Permissions,
    id::{marker::RoleMarker, marker::UserMarker, Id},
};

/// A Discord user.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: Id<UserMarker>,
    pub username: String,
    /// `"0"` for accounts migrated to the unique-username system.
    pub discriminator: Option<String>,
    /// Display name, if the user set one.
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Returns the CDN URL for the user's avatar, or `None` if no avatar is set.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png",
                self.id, hash
            )
        })
    }

    /// `Username#Discriminator` or just `Username` for the new username system.
    pub fn tag(&self) -> String {
        match self.discriminator.as_deref() {
            Some("0") | None => self.username.clone(),
            Some(disc) => format!("{}#{}", self.username, disc),
        }
    }

    /// The mention string for this user, e.g. `<@123>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// A user's guild-specific state.
///
/// Used both for [`Interaction::member`] (where `user` is present) and for
/// resolved member maps in command data (where the user object is delivered
/// separately and `user` is `None`).
///
/// [`Interaction::member`]: crate::types::application::interaction::Interaction::member
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GuildMember {
    pub user: Option<User>,
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<Id<RoleMarker>>,
    pub joined_at: Option<String>,
    /// Total permissions of the member in the invoking channel, computed
    /// server-side. Only present in interaction payloads.
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
}

impl GuildMember {
    /// The member's display name: nickname, then global name, then username.
    pub fn display_name(&self) -> Option<&str> {
        self.nick
            .as_deref()
            .or_else(|| self.user.as_ref()?.global_name.as_deref())
            .or_else(|| Some(self.user.as_ref()?.username.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::User;

    fn user(discriminator: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": "789",
            "username": "alice",
            "discriminator": discriminator,
            "global_name": null,
            "avatar": null,
        }))
        .unwrap()
    }

    #[test]
    fn tag_with_discriminator() {
        assert_eq!(user("0001").tag(), "alice#0001");
    }

    #[test]
    fn tag_new_username_system() {
        assert_eq!(user("0").tag(), "alice");
    }

    #[test]
    fn avatar_url_none_without_hash() {
        assert!(user("0").avatar_url().is_none());
    }

    #[test]
    fn avatar_url_uses_cdn() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "789",
            "username": "alice",
            "discriminator": "0",
            "global_name": null,
            "avatar": "1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d",
        }))
        .unwrap();

        let url = user.avatar_url().unwrap();
        assert!(url.starts_with("https://cdn.discordapp.com/avatars/789/"));
        assert!(url.ends_with(".png"));
    }

    #[test]
    fn display_name_prefers_nick() {
        use super::GuildMember;

        let member: GuildMember = serde_json::from_value(serde_json::json!({
            "user": {
                "id": "789",
                "username": "alice",
                "discriminator": "0",
                "global_name": "Alice A.",
                "avatar": null,
            },
            "nick": "mod-alice",
        }))
        .unwrap();

        assert_eq!(member.display_name(), Some("mod-alice"));
    }
}
