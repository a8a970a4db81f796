//! Markers for the resource types an ID can refer to.
//!
//! Markers themselves perform no logical action, and are only used to
//! ensure that IDs of incorrect types aren't used. If IDs were only 64-bit
//! integers then a role's ID may be erroneously used in the place of where
//! a user's ID is required; by using markers it can be ensured that only an
//! ID with a [`RoleMarker`] can be used where a role's ID is required.

/// Marker for application IDs.
///
/// Types such as [`Interaction::application_id`] use this ID marker.
///
/// [`Interaction::application_id`]: crate::types::application::interaction::Interaction::application_id
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// Marker for attachment IDs.
///
/// Attachment-type command options resolve to this ID marker.
#[derive(Debug)]
#[non_exhaustive]
pub struct AttachmentMarker;

/// Marker for channel IDs.
///
/// Types such as [`PartialChannel`] use this ID marker.
///
/// [`PartialChannel`]: crate::types::channel::PartialChannel
#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Marker for command IDs.
///
/// Types such as [`Command`] use this ID marker.
///
/// [`Command`]: crate::types::application::command::Command
#[derive(Debug)]
#[non_exhaustive]
pub struct CommandMarker;

/// Marker for generic IDs.
///
/// Mentionable command options use this ID marker, since the target may be
/// either a user or a role.
#[derive(Debug)]
#[non_exhaustive]
pub struct GenericMarker;

/// Marker for guild IDs.
///
/// Types such as [`OAuth2Guild`] use this ID marker.
///
/// [`OAuth2Guild`]: crate::oauth::OAuth2Guild
#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

/// Marker for interaction IDs.
///
/// Types such as [`Interaction`] use this ID marker.
///
/// [`Interaction`]: crate::types::application::interaction::Interaction
#[derive(Debug)]
#[non_exhaustive]
pub struct InteractionMarker;

/// Marker for role IDs.
///
/// Types such as [`Role`] use this ID marker.
///
/// [`Role`]: crate::types::guild::Role
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Marker for user IDs.
///
/// Types such as [`User`] use this ID marker.
///
/// [`User`]: crate::types::user::User
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;
