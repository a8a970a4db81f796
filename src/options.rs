//! Deprecated free-function accessors for slash-command options.
//!
//! These predate [`SlashCommandEvent`] growing its own typed accessors and
//! survive only so existing bots keep compiling. New code should call the
//! event methods directly:
//!
//! ```
//! # use discord_utils::event::SlashCommandEvent;
//! # fn run(event: &SlashCommandEvent) {
//! // get the "reason" option as a string, None if not supplied
//! let reason = event.opt_string("reason");
//! // the supplied user, or the command author if they did not provide one
//! let target = event.opt_user("target").or_else(|| event.author());
//! # }
//! ```
//!
//! The scalar helpers here keep the original null-coalescing defaults: a
//! missing `bool` option reads as `false`, a missing integer as `0`, a
//! missing number as `0.0`.

use crate::event::{Mentionable, SlashCommandEvent};
use crate::types::{
    channel::PartialChannel,
    guild::Role,
    user::{GuildMember, User},
};

/// Gets the option named `key` as a string, or `None` if it wasn't supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_string instead")]
pub fn opt_string<'a>(event: &'a SlashCommandEvent, key: &str) -> Option<&'a str> {
    event.opt_string(key)
}

/// Gets the option named `key` as a string, or `default` if it wasn't
/// supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_string instead")]
pub fn opt_string_or<'a>(event: &'a SlashCommandEvent, key: &str, default: &'a str) -> &'a str {
    event.opt_string(key).unwrap_or(default)
}

/// Gets the option named `key` as a boolean, or `false` if it wasn't
/// supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_boolean instead")]
pub fn opt_boolean(event: &SlashCommandEvent, key: &str) -> bool {
    event.opt_boolean(key).unwrap_or(false)
}

/// Gets the option named `key` as a boolean, or `default` if it wasn't
/// supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_boolean instead")]
pub fn opt_boolean_or(event: &SlashCommandEvent, key: &str, default: bool) -> bool {
    event.opt_boolean(key).unwrap_or(default)
}

/// Gets the option named `key` as an integer, or `0` if it wasn't supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_integer instead")]
pub fn opt_long(event: &SlashCommandEvent, key: &str) -> i64 {
    event.opt_integer(key).unwrap_or(0)
}

/// Gets the option named `key` as an integer, or `default` if it wasn't
/// supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_integer instead")]
pub fn opt_long_or(event: &SlashCommandEvent, key: &str, default: i64) -> i64 {
    event.opt_integer(key).unwrap_or(default)
}

/// Gets the option named `key` as a number, or `0.0` if it wasn't supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_number instead")]
pub fn opt_double(event: &SlashCommandEvent, key: &str) -> f64 {
    event.opt_number(key).unwrap_or(0.0)
}

/// Gets the option named `key` as a number, or `default` if it wasn't
/// supplied.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_number instead")]
pub fn opt_double_or(event: &SlashCommandEvent, key: &str, default: f64) -> f64 {
    event.opt_number(key).unwrap_or(default)
}

/// Gets the user supplied for the option named `key`.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_user instead")]
pub fn opt_user<'a>(event: &'a SlashCommandEvent, key: &str) -> Option<&'a User> {
    event.opt_user(key)
}

/// Gets the guild member supplied for the option named `key`.
///
/// This will **always** return `None` when the command was not invoked in a
/// guild.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_member instead")]
pub fn opt_member<'a>(event: &'a SlashCommandEvent, key: &str) -> Option<&'a GuildMember> {
    event.opt_member(key)
}

/// Gets the role supplied for the option named `key`.
///
/// This will **always** return `None` when the command was not invoked in a
/// guild.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_role instead")]
pub fn opt_role<'a>(event: &'a SlashCommandEvent, key: &str) -> Option<&'a Role> {
    event.opt_role(key)
}

/// Gets the guild channel supplied for the option named `key`.
///
/// This will **always** return `None` when the command was not invoked in a
/// guild.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::opt_channel instead")]
pub fn opt_guild_channel<'a>(event: &'a SlashCommandEvent, key: &str) -> Option<&'a PartialChannel> {
    event.opt_channel(key)
}

/// Gets the message channel supplied for the option named `key`.
#[deprecated(
    since = "2.0.0",
    note = "use SlashCommandEvent::opt_message_channel instead"
)]
pub fn opt_message_channel<'a>(
    event: &'a SlashCommandEvent,
    key: &str,
) -> Option<&'a PartialChannel> {
    event.opt_message_channel(key)
}

/// Gets the user or role supplied for the option named `key`.
#[deprecated(
    since = "2.0.0",
    note = "use SlashCommandEvent::opt_mentionable instead"
)]
pub fn opt_mentionable<'a>(event: &'a SlashCommandEvent, key: &str) -> Option<Mentionable<'a>> {
    event.opt_mentionable(key)
}

/// Whether the invoking user supplied the option named `key`.
#[deprecated(since = "2.0.0", note = "use SlashCommandEvent::has_option instead")]
pub fn has_option(event: &SlashCommandEvent, key: &str) -> bool {
    event.has_option(key)
}
