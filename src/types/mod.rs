//! Typed representations of the Discord API objects this crate's helpers
//! operate on.
//!
//! The surface is deliberately small: interaction payloads and the resources
//! their options can reference, plus the registration types that consume
//! localization maps. Everything mirrors the Discord API docs so payloads
//! deserialize without touching `serde_json::Value` outside this module.

/// Application commands and interactions.
pub mod application;

/// Channel kinds and the partial channels resolved for options.
pub mod channel;

/// Roles and permission bitmasks.
pub mod guild;

/// Type-safe IDs with marker types.
pub mod id;

/// Locales advertised by the Discord client.
pub mod locale;

/// Users and guild members.
pub mod user;

// ===========================================================================
// Convenience re-exports
// ===========================================================================
// The rest of the crate (and most consumers) use these names directly.

// ---- IDs ------------------------------------------------------------------
pub use self::id::marker::{
    ApplicationMarker, AttachmentMarker, ChannelMarker, CommandMarker, GenericMarker, GuildMarker,
    InteractionMarker, RoleMarker, UserMarker,
};
pub use self::id::Id;

// ---- Locale ---------------------------------------------------------------
pub use self::locale::Locale;

// ---- Users / guilds -------------------------------------------------------
pub use self::guild::{Permissions, Role};
pub use self::user::{GuildMember, User};

// ---- Channels -------------------------------------------------------------
pub use self::channel::{ChannelType, PartialChannel};

// ---- Interactions ---------------------------------------------------------
pub use self::application::interaction::{
    CommandData, CommandDataOption, CommandOptionValue, Interaction, InteractionType, ResolvedData,
};

// ---- Command registration -------------------------------------------------
pub use self::application::command::{
    Command, CommandBuilder, CommandOption, CommandOptionChoice, CommandOptionType, CommandType,
};
