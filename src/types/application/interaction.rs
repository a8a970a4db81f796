//! Interaction payloads received when a command is invoked.
//!
//! Option values arrive as a polymorphic `{name, type, value, options,
//! focused}` envelope; [`CommandDataOption`] deserializes that into the
//! typed [`CommandOptionValue`] enum so callers never see a raw
//! `serde_json::Value` and "option absent" is always distinct from "option
//! present with an empty value".

use serde::{
    de::{Deserializer, Error as DeError},
    ser::{SerializeStruct, Serializer},
    Deserialize, Serialize,
};
use std::collections::HashMap;

use crate::types::{
    application::command::{CommandOptionType, CommandType},
    channel::PartialChannel,
    guild::Role,
    id::{
        marker::{
            ApplicationMarker, AttachmentMarker, ChannelMarker, CommandMarker, GenericMarker,
            GuildMarker, InteractionMarker, RoleMarker, UserMarker,
        },
        Id,
    },
    locale::Locale,
    user::{GuildMember, User},
};

/// Kind of an interaction, as an integer on the wire.
#[derive(Clone, Copy, Debug, serde_repr::Deserialize_repr, Eq, PartialEq, serde_repr::Serialize_repr)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutocomplete = 4,
    ModalSubmit = 5,
}

/// Top-level interaction received via INTERACTION_CREATE or an interactions
/// webhook.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Interaction {
    pub id: Id<InteractionMarker>,
    pub application_id: Id<ApplicationMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub data: Option<CommandData>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub channel_id: Option<Id<ChannelMarker>>,
    /// The invoking member, when the interaction comes from a guild.
    pub member: Option<GuildMember>,
    /// The invoking user, when the interaction comes from a DM.
    pub user: Option<User>,
    pub token: String,
    /// Selected locale of the invoking user. Absent on PING.
    pub locale: Option<Locale>,
    /// Preferred locale of the guild, when invoked in a guild.
    pub guild_locale: Option<Locale>,
}

impl Interaction {
    /// The user who triggered the interaction.
    ///
    /// In a guild context, the user is nested inside `member`. In a DM, the
    /// user is at the top level. This helper checks both.
    pub fn author(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref())
    }

    /// Whether the interaction was invoked in a guild.
    pub fn is_from_guild(&self) -> bool {
        self.guild_id.is_some()
    }
}

/// Payload of an APPLICATION_COMMAND (or autocomplete) interaction.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommandData {
    pub id: Option<Id<CommandMarker>>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: CommandType,
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
    pub resolved: Option<ResolvedData>,
}

/// Full objects for the IDs referenced by option values.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResolvedData {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub users: HashMap<Id<UserMarker>, User>,
    /// Resolved members lack the nested `user` field; look the user up in
    /// [`Self::users`] under the same ID.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub members: HashMap<Id<UserMarker>, GuildMember>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<Id<RoleMarker>, Role>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub channels: HashMap<Id<ChannelMarker>, PartialChannel>,
}

/// One option supplied by the invoking user.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandDataOption {
    pub name: String,
    pub value: CommandOptionValue,
}

/// Typed value of a supplied option.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOptionValue {
    Attachment(Id<AttachmentMarker>),
    Boolean(bool),
    Channel(Id<ChannelMarker>),
    /// The partially-typed value of the option currently being
    /// autocompleted, along with the option's declared type.
    Focused(String, CommandOptionType),
    Integer(i64),
    Mentionable(Id<GenericMarker>),
    Number(f64),
    Role(Id<RoleMarker>),
    String(String),
    SubCommand(Vec<CommandDataOption>),
    SubCommandGroup(Vec<CommandDataOption>),
    User(Id<UserMarker>),
}

impl CommandOptionValue {
    /// The declared type of this option.
    pub const fn kind(&self) -> CommandOptionType {
        match self {
            Self::Attachment(_) => CommandOptionType::Attachment,
            Self::Boolean(_) => CommandOptionType::Boolean,
            Self::Channel(_) => CommandOptionType::Channel,
            Self::Focused(_, kind) => *kind,
            Self::Integer(_) => CommandOptionType::Integer,
            Self::Mentionable(_) => CommandOptionType::Mentionable,
            Self::Number(_) => CommandOptionType::Number,
            Self::Role(_) => CommandOptionType::Role,
            Self::String(_) => CommandOptionType::String,
            Self::SubCommand(_) => CommandOptionType::SubCommand,
            Self::SubCommandGroup(_) => CommandOptionType::SubCommandGroup,
            Self::User(_) => CommandOptionType::User,
        }
    }
}

// The wire shape of an option. `value`'s JSON type depends on `type`, so
// deserialization goes through this envelope and then converts.
#[derive(Deserialize)]
struct OptionEnvelope {
    name: String,
    #[serde(rename = "type")]
    kind: CommandOptionType,
    value: Option<serde_json::Value>,
    #[serde(default)]
    options: Vec<CommandDataOption>,
    #[serde(default)]
    focused: bool,
}

fn typed<'de, D, T>(value: Option<serde_json::Value>) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = value.ok_or_else(|| DeError::missing_field("value"))?;

    serde_json::from_value(value).map_err(DeError::custom)
}

impl<'de> Deserialize<'de> for CommandDataOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = OptionEnvelope::deserialize(deserializer)?;

        let value = if raw.focused {
            // Autocomplete sends whatever the user has typed so far; even
            // integer options may carry a non-numeric partial string.
            let value = raw.value.ok_or_else(|| DeError::missing_field("value"))?;
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };

            CommandOptionValue::Focused(text, raw.kind)
        } else {
            match raw.kind {
                CommandOptionType::SubCommand => CommandOptionValue::SubCommand(raw.options),
                CommandOptionType::SubCommandGroup => {
                    CommandOptionValue::SubCommandGroup(raw.options)
                }
                CommandOptionType::String => {
                    CommandOptionValue::String(typed::<D, _>(raw.value)?)
                }
                CommandOptionType::Integer => {
                    CommandOptionValue::Integer(typed::<D, _>(raw.value)?)
                }
                CommandOptionType::Boolean => {
                    CommandOptionValue::Boolean(typed::<D, _>(raw.value)?)
                }
                CommandOptionType::Number => {
                    CommandOptionValue::Number(typed::<D, _>(raw.value)?)
                }
                CommandOptionType::User => CommandOptionValue::User(typed::<D, _>(raw.value)?),
                CommandOptionType::Channel => {
                    CommandOptionValue::Channel(typed::<D, _>(raw.value)?)
                }
                CommandOptionType::Role => CommandOptionValue::Role(typed::<D, _>(raw.value)?),
                CommandOptionType::Mentionable => {
                    CommandOptionValue::Mentionable(typed::<D, _>(raw.value)?)
                }
                CommandOptionType::Attachment => {
                    CommandOptionValue::Attachment(typed::<D, _>(raw.value)?)
                }
            }
        };

        Ok(Self {
            name: raw.name,
            value,
        })
    }
}

impl Serialize for CommandDataOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_count = 3 + usize::from(matches!(self.value, CommandOptionValue::Focused(..)));
        let mut state = serializer.serialize_struct("CommandDataOption", field_count)?;

        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", &self.value.kind())?;

        match &self.value {
            CommandOptionValue::Attachment(id) => state.serialize_field("value", id)?,
            CommandOptionValue::Boolean(b) => state.serialize_field("value", b)?,
            CommandOptionValue::Channel(id) => state.serialize_field("value", id)?,
            CommandOptionValue::Focused(text, _) => {
                state.serialize_field("value", text)?;
                state.serialize_field("focused", &true)?;
            }
            CommandOptionValue::Integer(i) => state.serialize_field("value", i)?,
            CommandOptionValue::Mentionable(id) => state.serialize_field("value", id)?,
            CommandOptionValue::Number(n) => state.serialize_field("value", n)?,
            CommandOptionValue::Role(id) => state.serialize_field("value", id)?,
            CommandOptionValue::String(s) => state.serialize_field("value", s)?,
            CommandOptionValue::SubCommand(options)
            | CommandOptionValue::SubCommandGroup(options) => {
                state.serialize_field("options", options)?
            }
            CommandOptionValue::User(id) => state.serialize_field("value", id)?,
        }

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandData, CommandOptionValue, Interaction, InteractionType};
    use crate::types::{application::command::CommandOptionType, locale::Locale};

    fn command_interaction() -> serde_json::Value {
        serde_json::json!({
            "id": "846462639134605312",
            "application_id": "700000000000000000",
            "type": 2,
            "token": "UNIQUE_TOKEN",
            "guild_id": "290926798626357999",
            "channel_id": "645027906669510667",
            "locale": "fr",
            "guild_locale": "en-US",
            "member": {
                "user": {
                    "id": "53908232506183680",
                    "username": "mason",
                    "discriminator": "0",
                    "global_name": null,
                    "avatar": null,
                },
                "nick": null,
                "roles": ["290926798626357999"],
                "joined_at": "2015-04-26T06:26:56.936000+00:00",
                "permissions": "2147483647",
            },
            "data": {
                "id": "771825006014889984",
                "name": "ban",
                "type": 1,
                "options": [
                    {"name": "target", "type": 6, "value": "53908232506183681"},
                    {"name": "reason", "type": 3, "value": "spam"},
                    {"name": "days", "type": 4, "value": 7},
                ],
                "resolved": {
                    "users": {
                        "53908232506183681": {
                            "id": "53908232506183681",
                            "username": "spammer",
                            "discriminator": "0",
                            "global_name": null,
                            "avatar": null,
                        },
                    },
                },
            },
        })
    }

    #[test]
    fn deserializes_command_interaction() {
        let interaction: Interaction = serde_json::from_value(command_interaction()).unwrap();

        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
        assert_eq!(interaction.locale, Some(Locale::French));
        assert!(interaction.is_from_guild());
        assert_eq!(interaction.author().unwrap().username, "mason");

        let data = interaction.data.unwrap();
        assert_eq!(data.name, "ban");
        assert_eq!(data.options.len(), 3);
        assert_eq!(
            data.options[1].value,
            CommandOptionValue::String("spam".to_owned())
        );
        assert_eq!(data.options[2].value, CommandOptionValue::Integer(7));

        let resolved = data.resolved.unwrap();
        assert_eq!(resolved.users.len(), 1);
    }

    #[test]
    fn deserializes_nested_subcommand_options() {
        let data: CommandData = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "settings",
            "type": 1,
            "options": [{
                "name": "notifications",
                "type": 2,
                "options": [{
                    "name": "set",
                    "type": 1,
                    "options": [
                        {"name": "enabled", "type": 5, "value": true},
                    ],
                }],
            }],
        }))
        .unwrap();

        let CommandOptionValue::SubCommandGroup(group) = &data.options[0].value else {
            panic!("expected subcommand group");
        };
        let CommandOptionValue::SubCommand(sub) = &group[0].value else {
            panic!("expected subcommand");
        };
        assert_eq!(sub[0].value, CommandOptionValue::Boolean(true));
    }

    #[test]
    fn focused_option_keeps_raw_text() {
        let data: CommandData = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "mute",
            "type": 1,
            "options": [
                {"name": "username", "type": 3, "value": "ney", "focused": true},
            ],
        }))
        .unwrap();

        assert_eq!(
            data.options[0].value,
            CommandOptionValue::Focused("ney".to_owned(), CommandOptionType::String)
        );
    }

    #[test]
    fn option_roundtrips_through_serde() {
        let json = serde_json::json!({
            "name": "target",
            "type": 6,
            "value": "53908232506183681",
        });

        let option: super::CommandDataOption = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(option.value.kind(), CommandOptionType::User);

        let back = serde_json::to_value(&option).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn scalar_type_mismatch_is_an_error() {
        let result: Result<CommandData, _> = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "ban",
            "type": 1,
            "options": [
                {"name": "days", "type": 4, "value": "not-a-number"},
            ],
        }));

        assert!(result.is_err());
    }
}
