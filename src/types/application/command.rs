//! Application command registration payloads.
//!
//! These are the bodies sent to the command-registration endpoints. The
//! localization maps (`name_localizations` / `description_localizations`)
//! accept per-locale strings keyed by [`Locale`] — the natural consumer of
//! [`Translator::build_locale_map`].
//!
//! [`Translator::build_locale_map`]: crate::translate::Translator::build_locale_map

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;

use crate::types::{
    id::{marker::CommandMarker, Id},
    locale::Locale,
};

/// Kind of an application command.
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandType {
    /// A slash command, invoked by typing `/name`.
    #[default]
    ChatInput = 1,
    /// Invoked from the context menu of a user.
    User = 2,
    /// Invoked from the context menu of a message.
    Message = 3,
}

/// Kind of a command option.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

/// An application command registration payload.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Command {
    /// Assigned by Discord; absent when registering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<CommandMarker>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<Locale, String>>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<HashMap<Locale, String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[serde(rename = "type", default)]
    pub kind: CommandType,
}

/// An option declared on a command at registration time.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<Locale, String>>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<HashMap<Locale, String>>,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<CommandOptionChoice>,
}

/// A fixed choice for a string, integer, or number option.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommandOptionChoice {
    pub name: String,
    pub value: serde_json::Value,
}

/// Ergonomic builder for [`Command`].
///
/// # Examples
///
/// ```
/// use discord_utils::types::application::command::{CommandBuilder, CommandOptionType};
///
/// let cmd = CommandBuilder::chat_input("roll", "Roll a dice")
///     .simple_option(CommandOptionType::Integer, "sides", "Number of sides", false)
///     .build();
///
/// assert_eq!(cmd.name, "roll");
/// assert_eq!(cmd.options.len(), 1);
/// ```
pub struct CommandBuilder {
    inner: Command,
}

impl CommandBuilder {
    /// Start building a CHAT_INPUT (slash) command.
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            inner: Command {
                id: None,
                name: name.into(),
                name_localizations: None,
                description: description.into(),
                description_localizations: None,
                options: Vec::new(),
                kind: CommandType::ChatInput,
            },
        }
    }

    /// Add an option with no choices or localizations.
    pub fn simple_option(
        mut self,
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.inner.options.push(CommandOption {
            name: name.into(),
            name_localizations: None,
            description: description.into(),
            description_localizations: None,
            kind,
            required,
            choices: Vec::new(),
        });
        self
    }

    /// Add a fully-specified option.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.inner.options.push(option);
        self
    }

    /// Set per-locale names for the command.
    pub fn name_localizations(mut self, localizations: HashMap<Locale, String>) -> Self {
        self.inner.name_localizations = Some(localizations);
        self
    }

    /// Set per-locale descriptions for the command.
    pub fn description_localizations(mut self, localizations: HashMap<Locale, String>) -> Self {
        self.inner.description_localizations = Some(localizations);
        self
    }

    pub fn build(self) -> Command {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandBuilder, CommandOptionType};
    use crate::types::locale::Locale;
    use std::collections::HashMap;

    #[test]
    fn builder_produces_registration_payload() {
        let cmd = CommandBuilder::chat_input("ping", "Check bot latency").build();
        let json = serde_json::to_value(&cmd).unwrap();

        assert_eq!(json["name"], "ping");
        assert_eq!(json["type"], 1);
        // Empty/absent fields must not be serialized at all.
        assert!(json.get("id").is_none());
        assert!(json.get("options").is_none());
        assert!(json.get("description_localizations").is_none());
    }

    #[test]
    fn localization_maps_are_keyed_by_tag() {
        let mut descriptions = HashMap::new();
        descriptions.insert(Locale::French, "Lancer un dé".to_owned());

        let cmd = CommandBuilder::chat_input("roll", "Roll a dice")
            .simple_option(CommandOptionType::Integer, "sides", "Number of sides", false)
            .description_localizations(descriptions)
            .build();
        let json = serde_json::to_value(&cmd).unwrap();

        assert_eq!(json["description_localizations"]["fr"], "Lancer un dé");
        assert_eq!(json["options"][0]["type"], 4);
        assert_eq!(json["options"][0]["required"], false);
    }
}
