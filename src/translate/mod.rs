//! Locale-aware string lookup with a two-tier fallback.
//!
//! A [`Translator`] owns one [`TranslationTable`] per locale plus a default
//! locale. Lookups prefer an explicit entry in the requested locale's table,
//! then the default locale's table, then the [`NO_TRANSLATION`] sentinel —
//! so callers always get displayable text. Whenever the requested locale has
//! no entry of its own a warning is emitted naming the key and locale, which
//! is how missing translations surface during development.
//!
//! The registry is an explicit value rather than process-global state: build
//! and populate it during startup (registration takes `&mut self`), then
//! share it immutably — behind an `Arc`, in your command context, wherever.
//! The borrow checker enforces that nobody registers tables while lookups
//! are running.
//!
//! ```
//! use discord_utils::translate::{TranslationTable, Translator};
//! use discord_utils::types::Locale;
//!
//! let mut translator = Translator::default(); // defaults to en-US
//! translator.add_locale(
//!     Locale::EnglishUs,
//!     TranslationTable::from_properties("GREETING = Hello"),
//! );
//! translator.add_locale(
//!     Locale::German,
//!     TranslationTable::from_properties("GREETING = Hallo"),
//! );
//!
//! assert_eq!(translator.translate(Locale::German, "GREETING").unwrap(), "Hallo");
//! // French isn't registered: falls back to the default locale's table.
//! assert_eq!(translator.translate(Locale::French, "GREETING").unwrap(), "Hello");
//! ```

mod error;
mod table;

pub use self::error::{TranslateError, TranslateErrorType};
pub use self::table::TranslationTable;

use std::collections::HashMap;

use tracing::warn;

use crate::types::locale::Locale;

/// Sentinel returned when a key has no translation in any consulted table.
pub const NO_TRANSLATION: &str = "No translation provided";

/// Registry of per-locale translation tables with a designated default.
#[derive(Clone, Debug)]
pub struct Translator {
    tables: HashMap<Locale, TranslationTable>,
    default_locale: Locale,
}

impl Translator {
    /// Create an empty translator whose fallback is `default_locale`.
    ///
    /// The default locale's table must be registered with
    /// [`Self::add_locale`] before the first lookup, or lookups fail with a
    /// configuration error.
    pub fn new(default_locale: Locale) -> Self {
        Self {
            tables: HashMap::new(),
            default_locale,
        }
    }

    /// The locale lookups fall back to.
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Replace the default locale.
    ///
    /// No check is made that a table exists for it yet; register one before
    /// the next lookup.
    pub fn set_default_locale(&mut self, locale: Locale) {
        self.default_locale = locale;
    }

    /// Register the table for a locale, replacing any table registered
    /// earlier. Last write wins.
    pub fn add_locale(&mut self, locale: Locale, table: TranslationTable) {
        self.tables.insert(locale, table);
    }

    /// The table registered for `locale`, if any.
    pub fn table(&self, locale: Locale) -> Option<&TranslationTable> {
        self.tables.get(&locale)
    }

    /// The locales with a registered table.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.tables.keys().copied()
    }

    /// Translate `key` for `locale`.
    ///
    /// An explicit entry in the locale's own table wins. Otherwise a warning
    /// is emitted and the default locale's entry is returned, or
    /// [`NO_TRANSLATION`] if the key is unknown there too.
    ///
    /// # Errors
    ///
    /// Returns an error if no table is registered for the default locale.
    /// That is a configuration fault: it means *every* lookup is running
    /// without its fallback.
    pub fn translate(&self, locale: Locale, key: &str) -> Result<&str, TranslateError> {
        let default_table = self
            .tables
            .get(&self.default_locale)
            .ok_or(TranslateError::default_table_missing(self.default_locale))?;

        if let Some(value) = self.tables.get(&locale).and_then(|table| table.get(key)) {
            return Ok(value);
        }

        warn!(%key, %locale, "no translation provided");

        Ok(default_table.get(key).unwrap_or(NO_TRANSLATION))
    }

    /// Every registered locale's translation for `key`, for feeding into a
    /// command localization map.
    ///
    /// The default locale is always present (with [`NO_TRANSLATION`] if its
    /// table lacks the key); other locales appear only when their table has
    /// an explicit entry.
    ///
    /// # Errors
    ///
    /// Returns an error if no table is registered for the default locale.
    pub fn build_locale_map(&self, key: &str) -> Result<HashMap<Locale, String>, TranslateError> {
        let default_table = self
            .tables
            .get(&self.default_locale)
            .ok_or(TranslateError::default_table_missing(self.default_locale))?;

        let mut map = HashMap::new();
        map.insert(
            self.default_locale,
            default_table.get(key).unwrap_or(NO_TRANSLATION).to_owned(),
        );

        for (locale, table) in &self.tables {
            if *locale == self.default_locale {
                continue;
            }

            if let Some(value) = table.get(key) {
                map.insert(*locale, value.to_owned());
            }
        }

        Ok(map)
    }
}

impl Default for Translator {
    /// An empty translator defaulting to [`Locale::EnglishUs`].
    fn default() -> Self {
        Self::new(Locale::EnglishUs)
    }
}
