//! Guild-scoped types: roles and permission bitmasks.

pub mod permissions;

pub use self::permissions::Permissions;

use serde::{Deserialize, Serialize};

use crate::types::id::{marker::RoleMarker, Id};

/// A guild role, as delivered in interaction resolved data.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Role {
    pub id: Id<RoleMarker>,
    pub name: String,
    /// RGB color as a packed integer; zero means no color.
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub permissions: Permissions,
    /// Whether the role is pinned in the member list sidebar.
    #[serde(default)]
    pub hoist: bool,
    /// Whether the role is controlled by an integration and cannot be
    /// assigned by hand.
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub mentionable: bool,
}

impl Role {
    /// The mention string for this role, e.g. `<@&123>`.
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Permissions, Role};

    #[test]
    fn deserializes_from_api_payload() {
        let role: Role = serde_json::from_value(serde_json::json!({
            "id": "41771983423143936",
            "name": "moderators",
            "color": 3447003,
            "hoist": true,
            "position": 1,
            "permissions": "66321471",
            "managed": false,
            "mentionable": false,
        }))
        .unwrap();

        assert_eq!(role.name, "moderators");
        assert!(role.permissions.contains(Permissions::KICK_MEMBERS));
        assert_eq!(role.mention(), "<@&41771983423143936>");
    }

    #[test]
    fn missing_optional_fields_default() {
        let role: Role = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "everyone",
        }))
        .unwrap();

        assert_eq!(role.permissions, Permissions::empty());
        assert!(!role.hoist);
    }
}
