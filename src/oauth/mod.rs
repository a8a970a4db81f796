//! Types for data obtained through an OAuth2 token exchange.

pub mod guild;

pub use self::guild::OAuth2Guild;
