//! Guild permission bitmask.
//!
//! Discord encodes a permission set as a u64 bitmask, transmitted in JSON as
//! a stringified integer (older payloads used a bare number; both are
//! accepted here). Unknown future bits are dropped on deserialization rather
//! than failing the payload.

use bitflags::bitflags;
use serde::{
    de::{Deserializer, Error as DeError, Visitor},
    ser::Serializer,
    Deserialize, Serialize,
};
use std::fmt::{Formatter, Result as FmtResult};

bitflags! {
    /// Set of permissions held in a guild or channel.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Permissions: u64 {
        const CREATE_INVITE = 1;
        const KICK_MEMBERS = 1 << 1;
        const BAN_MEMBERS = 1 << 2;
        const ADMINISTRATOR = 1 << 3;
        const MANAGE_CHANNELS = 1 << 4;
        const MANAGE_GUILD = 1 << 5;
        const ADD_REACTIONS = 1 << 6;
        const VIEW_AUDIT_LOG = 1 << 7;
        const PRIORITY_SPEAKER = 1 << 8;
        const STREAM = 1 << 9;
        const VIEW_CHANNEL = 1 << 10;
        const SEND_MESSAGES = 1 << 11;
        const SEND_TTS_MESSAGES = 1 << 12;
        const MANAGE_MESSAGES = 1 << 13;
        const EMBED_LINKS = 1 << 14;
        const ATTACH_FILES = 1 << 15;
        const READ_MESSAGE_HISTORY = 1 << 16;
        const MENTION_EVERYONE = 1 << 17;
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        const VIEW_GUILD_INSIGHTS = 1 << 19;
        const CONNECT = 1 << 20;
        const SPEAK = 1 << 21;
        const MUTE_MEMBERS = 1 << 22;
        const DEAFEN_MEMBERS = 1 << 23;
        const MOVE_MEMBERS = 1 << 24;
        const USE_VAD = 1 << 25;
        const CHANGE_NICKNAME = 1 << 26;
        const MANAGE_NICKNAMES = 1 << 27;
        const MANAGE_ROLES = 1 << 28;
        const MANAGE_WEBHOOKS = 1 << 29;
        const MANAGE_GUILD_EXPRESSIONS = 1 << 30;
        const USE_APPLICATION_COMMANDS = 1 << 31;
        const REQUEST_TO_SPEAK = 1 << 32;
        const MANAGE_EVENTS = 1 << 33;
        const MANAGE_THREADS = 1 << 34;
        const CREATE_PUBLIC_THREADS = 1 << 35;
        const CREATE_PRIVATE_THREADS = 1 << 36;
        const USE_EXTERNAL_STICKERS = 1 << 37;
        const SEND_MESSAGES_IN_THREADS = 1 << 38;
        const USE_EMBEDDED_ACTIVITIES = 1 << 39;
        const MODERATE_MEMBERS = 1 << 40;
        const VIEW_CREATOR_MONETIZATION_ANALYTICS = 1 << 41;
        const USE_SOUNDBOARD = 1 << 42;
        const CREATE_GUILD_EXPRESSIONS = 1 << 43;
        const CREATE_EVENTS = 1 << 44;
        const USE_EXTERNAL_SOUNDS = 1 << 45;
        const SEND_VOICE_MESSAGES = 1 << 46;
        const SEND_POLLS = 1 << 49;
        const USE_EXTERNAL_APPS = 1 << 50;
    }
}

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.bits())
    }
}

struct PermissionsVisitor;

impl<'de> Visitor<'de> for PermissionsVisitor {
    type Value = Permissions;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a permission bitmask, as an integer or a string")
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Permissions::from_bits_truncate(value))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        let bits = value.parse().map_err(|_| {
            let unexpected = serde::de::Unexpected::Str(value);

            E::invalid_value(unexpected, &"an integer string")
        })?;

        Ok(Permissions::from_bits_truncate(bits))
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PermissionsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::Permissions;
    use serde_test::Token;

    #[test]
    fn serializes_as_decimal_string() {
        let perms = Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS;

        serde_test::assert_tokens(&perms, &[Token::Str("6")]);
    }

    #[test]
    fn deserializes_from_integer() {
        let perms: Permissions = serde_json::from_str("8").unwrap();

        assert_eq!(perms, Permissions::ADMINISTRATOR);
    }

    #[test]
    fn unknown_bits_are_dropped() {
        // Bit 63 is unassigned; only the known low bits should survive.
        let raw = (1u64 << 63) | Permissions::SEND_MESSAGES.bits();
        let perms: Permissions = serde_json::from_str(&format!("\"{raw}\"")).unwrap();

        assert_eq!(perms, Permissions::SEND_MESSAGES);
    }

    #[test]
    fn contains_requires_all_bits() {
        let perms = Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS;

        assert!(perms.contains(Permissions::KICK_MEMBERS));
        assert!(!perms.contains(Permissions::KICK_MEMBERS | Permissions::ADMINISTRATOR));
    }
}
