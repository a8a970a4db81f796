//! Error types for translation lookups.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::types::locale::Locale;

/// Reason a translation lookup couldn't be performed at all.
///
/// Missing keys and missing locales are *not* errors — they resolve through
/// the fallback chain. This error only covers configuration faults.
#[derive(Debug)]
pub struct TranslateError {
    kind: TranslateErrorType,
}

impl TranslateError {
    pub(crate) const fn default_table_missing(locale: Locale) -> Self {
        Self {
            kind: TranslateErrorType::DefaultTableMissing { locale },
        }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &TranslateErrorType {
        &self.kind
    }
}

impl Display for TranslateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            TranslateErrorType::DefaultTableMissing { locale } => {
                write!(
                    f,
                    "no translation table registered for the default locale {locale}"
                )
            }
        }
    }
}

impl Error for TranslateError {}

/// Type of [`TranslateError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum TranslateErrorType {
    /// Lookups fall back to the default locale's table, so every lookup
    /// requires it to have been registered.
    DefaultTableMissing {
        /// The default locale at the time of the lookup.
        locale: Locale,
    },
}

#[cfg(test)]
mod tests {
    use super::{TranslateError, TranslateErrorType};
    use crate::types::locale::Locale;

    #[test]
    fn display_names_the_locale() {
        let err = TranslateError::default_table_missing(Locale::EnglishUs);

        assert_eq!(
            err.to_string(),
            "no translation table registered for the default locale en-US"
        );
        assert!(matches!(
            err.kind(),
            TranslateErrorType::DefaultTableMissing {
                locale: Locale::EnglishUs
            }
        ));
    }
}
