//! Error types for rule-set construction and loading

use crate::PluralCategory;
use thiserror::Error;

/// Errors raised while building or loading rule sets.
///
/// Lookups never produce these: a tag that does not resolve is reported
/// as `None` or in a [`ValidationReport`](crate::ValidationReport).
#[derive(Debug, Error)]
pub enum PluralError {
    /// A locale tag failed BCP 47 syntax checks
    #[error("Invalid locale tag: {0}")]
    InvalidTag(String),

    /// A form label that is not a CLDR plural category
    #[error("Invalid plural category: {0}")]
    InvalidPluralCategory(String),

    /// The same form appears twice in one case list
    #[error("Duplicate plural form `{form}` in case list")]
    DuplicateForm { form: PluralCategory },

    /// A tag is declared by two cultures, or by a culture and Others
    #[error("Locale tag declared more than once: {0}")]
    DuplicateTag(String),

    /// A tag is listed twice within one culture
    #[error("Locale tag repeated within a culture: {0}")]
    DuplicateLang(String),

    /// A culture was built without any tag
    #[error("Culture has no locale tags")]
    EmptyLangs,

    /// A loaded culture defines neither cardinal nor ordinal cases
    #[error("Culture {0} defines no cardinal or ordinal rules")]
    EmptyRuleSet(String),

    /// Unknown document format
    #[error("Unsupported rules format: {0}")]
    UnsupportedFormat(String),

    /// The process-wide rule sets were already installed
    #[error("Rule sets already installed")]
    AlreadyInstalled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
