//! Type-safe snowflake IDs.
//!
//! Discord identifies every resource with a 64-bit snowflake, transmitted in
//! JSON as a string (and, in a few older payloads, as a bare integer). If IDs
//! were plain `u64`s then a role ID could silently be passed where a user ID
//! is expected; [`Id<T>`] attaches a zero-sized marker type so the compiler
//! rejects that.
//!
//! The upper 42 bits of a snowflake encode a millisecond timestamp relative
//! to the Discord epoch, which [`Id::timestamp_ms`] and [`Id::created_at`]
//! expose.

pub mod marker;

use chrono::{DateTime, TimeZone, Utc};
use serde::{
    de::{Deserializer, Error as DeError, Visitor},
    ser::Serializer,
    Deserialize, Serialize,
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::NonZeroU64,
    str::FromStr,
};

/// First second of 2015, in unix milliseconds. All snowflake timestamps are
/// offsets from this instant.
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// ID of a resource, tagged with a marker from [`marker`].
///
/// IDs are never zero, which lets `Option<Id<T>>` stay eight bytes wide.
pub struct Id<T> {
    value: NonZeroU64,
    phantom: PhantomData<fn(T) -> T>,
}

impl<T> Id<T> {
    /// Create an ID from a non-zero integer.
    ///
    /// # Panics
    ///
    /// Panics if the value is zero. Use [`Id::new_checked`] for untrusted
    /// input.
    #[track_caller]
    pub const fn new(value: u64) -> Self {
        match Self::new_checked(value) {
            Some(id) => id,
            None => panic!("id must be non-zero"),
        }
    }

    /// Create an ID, returning `None` if the value is zero.
    pub const fn new_checked(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(value) => Some(Self {
                value,
                phantom: PhantomData,
            }),
            None => None,
        }
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.value.get()
    }

    /// Re-tag this ID with a different marker.
    ///
    /// Useful when a payload carries a generic ID that context proves to be
    /// a specific resource, e.g. a mentionable option that resolved to a
    /// user.
    pub const fn cast<New>(self) -> Id<New> {
        Id {
            value: self.value,
            phantom: PhantomData,
        }
    }

    /// Unix-millisecond timestamp encoded in the snowflake.
    pub const fn timestamp_ms(self) -> u64 {
        (self.value.get() >> 22) + DISCORD_EPOCH_MS
    }

    /// The instant this resource was created, derived from the snowflake.
    pub fn created_at(self) -> Option<DateTime<Utc>> {
        let ms = self.timestamp_ms();

        Utc.timestamp_millis_opt(ms as i64).single()
    }
}

// Manual trait impls so that `T` does not need to implement anything itself.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Eq for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Id(")?;
        Display::fmt(&self.value, f)?;

        f.write_str(")")
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

impl<T> FromStr for Id<T> {
    type Err = <NonZeroU64 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = NonZeroU64::from_str(s)?;

        Ok(Self {
            value,
            phantom: PhantomData,
        })
    }
}

impl<T> From<NonZeroU64> for Id<T> {
    fn from(value: NonZeroU64) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }
}

struct IdVisitor<T> {
    phantom: PhantomData<fn(T) -> T>,
}

impl<'de, T> Visitor<'de> for IdVisitor<T> {
    type Value = Id<T>;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a discord snowflake")
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        Id::new_checked(value).ok_or_else(|| E::custom("invalid value, expected non-zero"))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(|_| {
            let unexpected = serde::de::Unexpected::Str(value);

            E::invalid_value(unexpected, &"a non-zero integer string")
        })
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdVisitor {
            phantom: PhantomData,
        })
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Snowflakes always go back out as strings, matching what the API
        // sends and avoiding precision loss in javascript consumers.
        serializer.collect_str(&self.value)
    }
}
