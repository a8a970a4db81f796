//! Channel types as seen through interaction payloads.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::types::{
    guild::Permissions,
    id::{marker::ChannelMarker, Id},
};

/// Kind of a channel, as an integer on the wire.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ChannelType {
    GuildText = 0,
    Dm = 1,
    GuildVoice = 2,
    GroupDm = 3,
    GuildCategory = 4,
    GuildAnnouncement = 5,
    AnnouncementThread = 10,
    PublicThread = 11,
    PrivateThread = 12,
    GuildStageVoice = 13,
    GuildDirectory = 14,
    GuildForum = 15,
    GuildMedia = 16,
}

impl ChannelType {
    /// Whether messages can be sent in channels of this type.
    pub const fn is_text_based(self) -> bool {
        matches!(
            self,
            Self::GuildText
                | Self::Dm
                | Self::GroupDm
                | Self::GuildAnnouncement
                | Self::AnnouncementThread
                | Self::PublicThread
                | Self::PrivateThread
                | Self::GuildVoice
                | Self::GuildStageVoice
        )
    }

    /// Whether channels of this type are threads.
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }
}

/// The partial channel object delivered in interaction resolved data.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PartialChannel {
    pub id: Id<ChannelMarker>,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    pub name: Option<String>,
    /// Permissions of the invoking member in this channel, computed
    /// server-side.
    pub permissions: Option<Permissions>,
    pub parent_id: Option<Id<ChannelMarker>>,
}

impl PartialChannel {
    /// The mention string for this channel, e.g. `<#123>`.
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelType, PartialChannel};

    #[test]
    fn kind_is_an_integer_on_the_wire() {
        let channel: PartialChannel = serde_json::from_value(serde_json::json!({
            "id": "12345",
            "type": 5,
            "name": "announcements",
            "permissions": "2048",
            "parent_id": null,
        }))
        .unwrap();

        assert_eq!(channel.kind, ChannelType::GuildAnnouncement);
        assert_eq!(channel.mention(), "<#12345>");
    }

    #[test]
    fn text_based_classification() {
        assert!(ChannelType::GuildText.is_text_based());
        assert!(ChannelType::PublicThread.is_text_based());
        assert!(!ChannelType::GuildCategory.is_text_based());
        assert!(!ChannelType::GuildForum.is_text_based());
    }

    #[test]
    fn thread_classification() {
        assert!(ChannelType::PrivateThread.is_thread());
        assert!(!ChannelType::GuildText.is_thread());
    }
}
