//! Locales advertised by the Discord client.
//!
//! Interactions carry the invoking user's locale (and, in guilds, the
//! guild's preferred locale); command registration payloads accept per-locale
//! name and description maps keyed by these tags. The enum is `Copy + Hash`
//! so it can key registries and localization maps directly.
//!
//! Tags Discord introduces after this crate was published deserialize to
//! [`Locale::Unknown`] rather than failing the whole payload.

use serde::{
    de::{Deserializer, Error as DeError, Visitor},
    ser::Serializer,
    Deserialize, Serialize,
};
use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// A language/region combination supported by the Discord client.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[non_exhaustive]
pub enum Locale {
    Bulgarian,
    ChineseChina,
    ChineseTaiwan,
    Croatian,
    Czech,
    Danish,
    Dutch,
    EnglishUk,
    #[default]
    EnglishUs,
    Finnish,
    French,
    German,
    Greek,
    Hindi,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Lithuanian,
    Norwegian,
    Polish,
    PortugueseBrazilian,
    Romanian,
    Russian,
    Spanish,
    SpanishLatam,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
    /// A locale tag this crate doesn't know about.
    Unknown,
}

impl Locale {
    /// The IETF-style language tag Discord uses on the wire.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bulgarian => "bg",
            Self::ChineseChina => "zh-CN",
            Self::ChineseTaiwan => "zh-TW",
            Self::Croatian => "hr",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::EnglishUk => "en-GB",
            Self::EnglishUs => "en-US",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::German => "de",
            Self::Greek => "el",
            Self::Hindi => "hi",
            Self::Hungarian => "hu",
            Self::Indonesian => "id",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Lithuanian => "lt",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::PortugueseBrazilian => "pt-BR",
            Self::Romanian => "ro",
            Self::Russian => "ru",
            Self::Spanish => "es-ES",
            Self::SpanishLatam => "es-419",
            Self::Swedish => "sv-SE",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Ukrainian => "uk",
            Self::Vietnamese => "vi",
            Self::Unknown => "unknown",
        }
    }

    /// Look a locale up by its wire tag. Unrecognized tags map to
    /// [`Locale::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bg" => Self::Bulgarian,
            "zh-CN" => Self::ChineseChina,
            "zh-TW" => Self::ChineseTaiwan,
            "hr" => Self::Croatian,
            "cs" => Self::Czech,
            "da" => Self::Danish,
            "nl" => Self::Dutch,
            "en-GB" => Self::EnglishUk,
            "en-US" => Self::EnglishUs,
            "fi" => Self::Finnish,
            "fr" => Self::French,
            "de" => Self::German,
            "el" => Self::Greek,
            "hi" => Self::Hindi,
            "hu" => Self::Hungarian,
            "id" => Self::Indonesian,
            "it" => Self::Italian,
            "ja" => Self::Japanese,
            "ko" => Self::Korean,
            "lt" => Self::Lithuanian,
            "no" => Self::Norwegian,
            "pl" => Self::Polish,
            "pt-BR" => Self::PortugueseBrazilian,
            "ro" => Self::Romanian,
            "ru" => Self::Russian,
            "es-ES" => Self::Spanish,
            "es-419" => Self::SpanishLatam,
            "sv-SE" => Self::Swedish,
            "th" => Self::Thai,
            "tr" => Self::Turkish,
            "uk" => Self::Ukrainian,
            "vi" => Self::Vietnamese,
            _ => Self::Unknown,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

struct LocaleVisitor;

impl<'de> Visitor<'de> for LocaleVisitor {
    type Value = Locale;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a locale tag")
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Locale::from_tag(value))
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(LocaleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;
    use serde_test::Token;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Locale: Clone, Copy, Eq, PartialEq, std::hash::Hash, Send, Sync);

    #[test]
    fn tag_roundtrip() {
        for locale in [
            Locale::EnglishUs,
            Locale::EnglishUk,
            Locale::SpanishLatam,
            Locale::ChineseTaiwan,
            Locale::PortugueseBrazilian,
        ] {
            assert_eq!(Locale::from_tag(locale.tag()), locale);
        }
    }

    #[test]
    fn unknown_tag_is_not_an_error() {
        assert_eq!(Locale::from_tag("xx-YY"), Locale::Unknown);

        let parsed: Locale = serde_json::from_str("\"xx-YY\"").unwrap();
        assert_eq!(parsed, Locale::Unknown);
    }

    #[test]
    fn serde_uses_wire_tags() {
        serde_test::assert_tokens(&Locale::French, &[Token::Str("fr")]);
        serde_test::assert_tokens(&Locale::EnglishUs, &[Token::Str("en-US")]);
    }

    #[test]
    fn default_is_english_us() {
        assert_eq!(Locale::default(), Locale::EnglishUs);
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(Locale::German.to_string(), "de");
    }
}
