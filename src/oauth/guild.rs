//! Guilds as seen through an OAuth2 token.
//!
//! The `/users/@me/guilds` endpoint returns partial guild objects scoped to
//! the authorizing user: besides the identity fields it carries the user's
//! `owner` flag and their computed permission mask in that guild.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    guild::Permissions,
    id::{marker::GuildMarker, Id},
};

/// A guild the authorizing user is a member of.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OAuth2Guild {
    pub id: Id<GuildMarker>,
    pub name: String,
    /// Icon hash, if the guild has an icon.
    pub icon: Option<String>,
    /// Whether the authorizing user owns the guild.
    #[serde(default)]
    pub owner: bool,
    /// Permissions of the authorizing user in the guild, as computed by
    /// Discord.
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl OAuth2Guild {
    /// Returns the CDN URL for the guild's icon, or `None` if no icon is set.
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|hash| {
            format!("https://cdn.discordapp.com/icons/{}/{}.jpg", self.id, hash)
        })
    }

    /// The instant the guild was created, derived from its snowflake.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.id.created_at()
    }

    /// Whether the authorizing user holds every permission in `perms`.
    ///
    /// The guild owner implicitly holds every permission.
    pub fn has_permission(&self, perms: Permissions) -> bool {
        self.owner || self.permissions.contains(perms)
    }
}

#[cfg(test)]
mod tests {
    use super::OAuth2Guild;
    use crate::types::guild::Permissions;

    fn guild(owner: bool, permissions: &str) -> OAuth2Guild {
        serde_json::from_value(serde_json::json!({
            "id": "81384788765712384",
            "name": "Discord API",
            "icon": "05c4dbfc9df36b2bb09d3e77cb82e5e1",
            "owner": owner,
            "permissions": permissions,
            "features": ["COMMUNITY", "NEWS"],
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_from_token_exchange_payload() {
        let guild = guild(false, "104189632");

        assert_eq!(guild.name, "Discord API");
        assert_eq!(guild.id.get(), 81_384_788_765_712_384);
        assert_eq!(guild.features, ["COMMUNITY", "NEWS"]);
    }

    #[test]
    fn icon_url_present() {
        let guild = guild(false, "0");

        assert_eq!(
            guild.icon_url().unwrap(),
            "https://cdn.discordapp.com/icons/81384788765712384/05c4dbfc9df36b2bb09d3e77cb82e5e1.jpg"
        );
    }

    #[test]
    fn icon_url_none_without_hash() {
        let guild: OAuth2Guild = serde_json::from_value(serde_json::json!({
            "id": "81384788765712384",
            "name": "iconless",
            "icon": null,
        }))
        .unwrap();

        assert!(guild.icon_url().is_none());
    }

    #[test]
    fn has_permission_requires_every_bit() {
        let mask = (Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS).bits();
        let guild = guild(false, &mask.to_string());

        assert!(guild.has_permission(Permissions::KICK_MEMBERS));
        assert!(guild.has_permission(Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS));
        assert!(!guild.has_permission(
            Permissions::KICK_MEMBERS | Permissions::MANAGE_GUILD
        ));
    }

    #[test]
    fn owner_bypasses_permission_checks() {
        let guild = guild(true, "0");

        assert!(guild.has_permission(Permissions::ADMINISTRATOR));
        assert!(guild.has_permission(Permissions::all()));
    }

    #[test]
    fn created_at_from_snowflake() {
        let guild = guild(false, "0");

        // 81384788765712384 >> 22 + discord epoch = 2015-08-13T01:42:23Z-ish.
        assert_eq!(
            guild.created_at().unwrap().timestamp_millis(),
            (81_384_788_765_712_384u64 >> 22) as i64 + 1_420_070_400_000
        );
    }
}
