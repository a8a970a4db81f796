//! Helper utilities for Discord bots.
//!
//! This crate does no I/O of its own. It provides the glue that bot and
//! OAuth2 code keeps reinventing:
//!
//! - [`event::SlashCommandEvent`] — typed, resolved access to slash-command
//!   options (`opt_string`, `opt_user`, …), plus the deprecated free-function
//!   equivalents in [`options`];
//! - [`translate::Translator`] — per-locale string tables with a
//!   default-locale fallback chain and command-localization map building;
//! - [`oauth::OAuth2Guild`] — the guild objects returned by an OAuth2 token
//!   exchange, with permission-bit decoding;
//! - [`types`] — the small set of Discord API types the above operate on.

pub mod event;
pub mod oauth;
pub mod options;
pub mod translate;
pub mod types;

pub use event::{Mentionable, SlashCommandEvent};
pub use oauth::OAuth2Guild;
pub use translate::{TranslateError, TranslationTable, Translator, NO_TRANSLATION};
pub use types::{Interaction, Locale, Permissions};
