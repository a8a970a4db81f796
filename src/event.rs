//! A received slash-command invocation with typed option access.
//!
//! [`SlashCommandEvent`] wraps an application-command [`Interaction`] and
//! resolves option values against the payload's resolved data, so command
//! code asks for "the user supplied as `target`" instead of walking raw
//! option lists. Accessors return `Option` — an absent option is always
//! distinguishable from any supplied value.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::translate::{TranslateError, Translator};
use crate::types::{
    application::interaction::{
        CommandData, CommandDataOption, CommandOptionValue, Interaction, InteractionType,
    },
    channel::PartialChannel,
    guild::Role,
    locale::Locale,
    user::{GuildMember, User},
};

/// An application-command interaction, validated and unwrapped.
///
/// Build one with `TryFrom<Interaction>`; the conversion fails for pings,
/// component interactions, and modal submits.
#[derive(Clone, Debug)]
pub struct SlashCommandEvent {
    interaction: Interaction,
    data: CommandData,
}

impl SlashCommandEvent {
    /// The underlying interaction. Its `data` field has been moved into
    /// [`Self::data`].
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The command payload: name, supplied options, resolved objects.
    pub fn data(&self) -> &CommandData {
        &self.data
    }

    /// Name of the invoked command.
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// The user who invoked the command.
    pub fn author(&self) -> Option<&User> {
        self.interaction.author()
    }

    /// Whether the command was invoked in a guild.
    pub fn is_from_guild(&self) -> bool {
        self.interaction.is_from_guild()
    }

    /// Selected locale of the invoking user.
    pub fn user_locale(&self) -> Locale {
        self.interaction.locale.unwrap_or_default()
    }

    /// Preferred locale of the guild the command ran in, if any.
    pub fn guild_locale(&self) -> Option<Locale> {
        self.interaction.guild_locale
    }

    /// Translate `key` for the invoking user's locale.
    ///
    /// Shorthand for `translator.translate(event.user_locale(), key)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the translator's default-locale table was never
    /// registered.
    pub fn translate<'t>(
        &self,
        translator: &'t Translator,
        key: &str,
    ) -> Result<&'t str, TranslateError> {
        translator.translate(self.user_locale(), key)
    }

    // -----------------------------------------------------------------------
    // Option lookup
    // -----------------------------------------------------------------------

    /// Find the value of the option named `name`, descending through
    /// subcommand and subcommand-group nesting.
    pub fn option(&self, name: &str) -> Option<&CommandOptionValue> {
        find_option(&self.data.options, name)
    }

    /// Whether the invoking user supplied the option named `name`.
    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    /// The option currently being autocompleted, if this is an autocomplete
    /// interaction.
    pub fn focused(&self) -> Option<&CommandDataOption> {
        find_focused(&self.data.options)
    }

    // -----------------------------------------------------------------------
    // Typed accessors
    // -----------------------------------------------------------------------

    /// The option named `name`, as a string.
    pub fn opt_string(&self, name: &str) -> Option<&str> {
        match self.option(name)? {
            CommandOptionValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// The option named `name`, as a boolean.
    pub fn opt_boolean(&self, name: &str) -> Option<bool> {
        match self.option(name)? {
            CommandOptionValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The option named `name`, as an integer.
    pub fn opt_integer(&self, name: &str) -> Option<i64> {
        match self.option(name)? {
            CommandOptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The option named `name`, as a floating-point number.
    pub fn opt_number(&self, name: &str) -> Option<f64> {
        match self.option(name)? {
            CommandOptionValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The user supplied for the option named `name`.
    pub fn opt_user(&self, name: &str) -> Option<&User> {
        match self.option(name)? {
            CommandOptionValue::User(id) => self.data.resolved.as_ref()?.users.get(id),
            _ => None,
        }
    }

    /// The guild member supplied for the option named `name`.
    ///
    /// Always `None` when the command was not invoked in a guild.
    pub fn opt_member(&self, name: &str) -> Option<&GuildMember> {
        if !self.is_from_guild() {
            return None;
        }

        match self.option(name)? {
            CommandOptionValue::User(id) => self.data.resolved.as_ref()?.members.get(id),
            _ => None,
        }
    }

    /// The role supplied for the option named `name`.
    ///
    /// Always `None` when the command was not invoked in a guild.
    pub fn opt_role(&self, name: &str) -> Option<&Role> {
        if !self.is_from_guild() {
            return None;
        }

        match self.option(name)? {
            CommandOptionValue::Role(id) => self.data.resolved.as_ref()?.roles.get(id),
            _ => None,
        }
    }

    /// The guild channel supplied for the option named `name`.
    ///
    /// Always `None` when the command was not invoked in a guild.
    pub fn opt_channel(&self, name: &str) -> Option<&PartialChannel> {
        if !self.is_from_guild() {
            return None;
        }

        match self.option(name)? {
            CommandOptionValue::Channel(id) => self.data.resolved.as_ref()?.channels.get(id),
            _ => None,
        }
    }

    /// The channel supplied for the option named `name`, if messages can be
    /// sent in it.
    pub fn opt_message_channel(&self, name: &str) -> Option<&PartialChannel> {
        match self.option(name)? {
            CommandOptionValue::Channel(id) => {
                let channel = self.data.resolved.as_ref()?.channels.get(id)?;

                channel.kind.is_text_based().then_some(channel)
            }
            _ => None,
        }
    }

    /// The user or role supplied for the option named `name`.
    ///
    /// Mentionable options carry an untyped ID; user and role options are
    /// accepted here too since both are mentionable.
    pub fn opt_mentionable(&self, name: &str) -> Option<Mentionable<'_>> {
        let resolved = self.data.resolved.as_ref()?;

        match self.option(name)? {
            CommandOptionValue::Mentionable(id) => resolved
                .users
                .get(&id.cast())
                .map(Mentionable::User)
                .or_else(|| resolved.roles.get(&id.cast()).map(Mentionable::Role)),
            CommandOptionValue::User(id) => resolved.users.get(id).map(Mentionable::User),
            CommandOptionValue::Role(id) => resolved.roles.get(id).map(Mentionable::Role),
            _ => None,
        }
    }
}

fn find_option<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a CommandOptionValue> {
    for option in options {
        match &option.value {
            CommandOptionValue::SubCommand(nested)
            | CommandOptionValue::SubCommandGroup(nested) => {
                if let Some(value) = find_option(nested, name) {
                    return Some(value);
                }
            }
            value if option.name == name => return Some(value),
            _ => {}
        }
    }

    None
}

fn find_focused(options: &[CommandDataOption]) -> Option<&CommandDataOption> {
    for option in options {
        match &option.value {
            CommandOptionValue::SubCommand(nested)
            | CommandOptionValue::SubCommandGroup(nested) => {
                if let Some(found) = find_focused(nested) {
                    return Some(found);
                }
            }
            CommandOptionValue::Focused(..) => return Some(option),
            _ => {}
        }
    }

    None
}

/// A resolved mentionable option: either a user or a role.
#[derive(Clone, Copy, Debug)]
pub enum Mentionable<'a> {
    User(&'a User),
    Role(&'a Role),
}

impl Mentionable<'_> {
    /// The mention string, e.g. `<@123>` or `<@&456>`.
    pub fn mention(&self) -> String {
        match self {
            Self::User(user) => user.mention(),
            Self::Role(role) => role.mention(),
        }
    }
}

impl TryFrom<Interaction> for SlashCommandEvent {
    type Error = FromInteractionError;

    fn try_from(mut interaction: Interaction) -> Result<Self, Self::Error> {
        if !matches!(
            interaction.kind,
            InteractionType::ApplicationCommand | InteractionType::ApplicationCommandAutocomplete
        ) {
            return Err(FromInteractionError {
                kind: FromInteractionErrorType::WrongKind(interaction.kind),
            });
        }

        let data = interaction.data.take().ok_or(FromInteractionError {
            kind: FromInteractionErrorType::MissingData,
        })?;

        Ok(Self { interaction, data })
    }
}

/// Reason an [`Interaction`] couldn't be converted to a
/// [`SlashCommandEvent`].
#[derive(Debug)]
pub struct FromInteractionError {
    kind: FromInteractionErrorType,
}

impl FromInteractionError {
    /// Immutable reference to the type of error that occurred.
    pub const fn kind(&self) -> &FromInteractionErrorType {
        &self.kind
    }
}

impl Display for FromInteractionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            FromInteractionErrorType::WrongKind(kind) => {
                write!(f, "interaction is not a command invocation: {kind:?}")
            }
            FromInteractionErrorType::MissingData => {
                f.write_str("interaction carries no command data")
            }
        }
    }
}

impl Error for FromInteractionError {}

/// Type of [`FromInteractionError`] that occurred.
#[derive(Debug)]
pub enum FromInteractionErrorType {
    /// The interaction is a ping, component, or modal interaction.
    WrongKind(InteractionType),
    /// The interaction claims to be a command but has no `data` field.
    MissingData,
}
