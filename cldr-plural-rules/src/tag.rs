//! Structured locale tags
//!
//! [`LocaleTag`] wraps a `unic_langid::LanguageIdentifier` and adds the
//! two operations fallback needs: [`LocaleTag::base`] (the language,
//! possibly inferred) and [`LocaleTag::parent`] (one subtag less).

use crate::{PluralError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// How certain a base-language extraction is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// Nothing to go on (`und`, or an unknown script/region)
    No,
    /// Inferred from the region
    Low,
    /// Inferred from the script
    High,
    /// The language subtag was given
    Exact,
}

/// A parsed BCP 47 language tag.
///
/// # Examples
///
/// ```
/// use cldr_plural_rules::LocaleTag;
///
/// let tag = LocaleTag::parse("zh_hant_tw").unwrap();
/// assert_eq!(tag.to_string(), "zh-Hant-TW");
/// assert_eq!(tag.parent().to_string(), "zh-Hant");
/// assert!(LocaleTag::parse("root").unwrap().is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag(LanguageIdentifier);

impl LocaleTag {
    /// Parse a tag. `-` and `_` are both accepted as separators and the
    /// CLDR alias `root` maps to `und`.
    ///
    /// Extension and private-use sections (`-u-co-phonebk`, `-x-foo`) are
    /// checked for well-formedness and then dropped.
    pub fn parse(tag: &str) -> Result<Self> {
        let invalid = || PluralError::InvalidTag(tag.to_string());
        if tag.is_empty() {
            return Err(invalid());
        }
        if tag.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }

        let id = strip_extensions(tag).ok_or_else(invalid)?;
        id.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| invalid())
    }

    /// The root tag, `und`.
    pub fn root() -> Self {
        Self(LanguageIdentifier::default())
    }

    pub fn is_root(&self) -> bool {
        self.0 == LanguageIdentifier::default()
    }

    /// Whether the language subtag is something other than `und`.
    pub fn has_language(&self) -> bool {
        self.0.language != LanguageIdentifier::default().language
    }

    pub fn has_script(&self) -> bool {
        self.0.script.is_some()
    }

    pub fn has_region(&self) -> bool {
        self.0.region.is_some()
    }

    pub fn has_variants(&self) -> bool {
        self.0.variants().next().is_some()
    }

    /// Number of subtags, counting the language even when it is `und`.
    pub fn subtag_count(&self) -> usize {
        1 + usize::from(self.has_script())
            + usize::from(self.has_region())
            + self.0.variants().count()
    }

    pub fn as_langid(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// The bare base-language tag and how sure we are about it.
    ///
    /// An explicit language is [`Confidence::Exact`]. For `und-…` tags the
    /// language is guessed from the script, then the region.
    pub fn base(&self) -> (LocaleTag, Confidence) {
        if self.has_language() {
            return (self.language_only(), Confidence::Exact);
        }

        let by_script = self
            .0
            .script
            .as_ref()
            .and_then(|script| likely_language(&LIKELY_BY_SCRIPT, &script.to_string()));
        if let Some(base) = by_script {
            return (base, Confidence::High);
        }

        let by_region = self
            .0
            .region
            .as_ref()
            .and_then(|region| likely_language(&LIKELY_BY_REGION, &region.to_string()));
        if let Some(base) = by_region {
            return (base, Confidence::Low);
        }

        (Self::root(), Confidence::No)
    }

    /// The tag with one level of specificity removed: variants, then
    /// region, then script, then the language itself. The parent of a bare
    /// language, and of root, is root.
    pub fn parent(&self) -> LocaleTag {
        let mut id = self.0.clone();
        if self.has_variants() {
            id.clear_variants();
        } else if id.region.is_some() {
            id.region = None;
        } else if id.script.is_some() {
            id.script = None;
        } else {
            return Self::root();
        }
        Self(id)
    }

    fn language_only(&self) -> LocaleTag {
        let mut id = LanguageIdentifier::default();
        id.language = self.0.language.clone();
        Self(id)
    }
}

fn likely_language(table: &HashMap<&'static str, &'static str>, key: &str) -> Option<LocaleTag> {
    table.get(key).and_then(|lang| LocaleTag::parse(lang).ok())
}

static LIKELY_BY_SCRIPT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Arab", "ar"),
        ("Armn", "hy"),
        ("Beng", "bn"),
        ("Cyrl", "ru"),
        ("Deva", "hi"),
        ("Ethi", "am"),
        ("Geor", "ka"),
        ("Grek", "el"),
        ("Gujr", "gu"),
        ("Guru", "pa"),
        ("Hang", "ko"),
        ("Hans", "zh"),
        ("Hant", "zh"),
        ("Hebr", "he"),
        ("Hira", "ja"),
        ("Jpan", "ja"),
        ("Kana", "ja"),
        ("Khmr", "km"),
        ("Knda", "kn"),
        ("Kore", "ko"),
        ("Laoo", "lo"),
        ("Latn", "en"),
        ("Mlym", "ml"),
        ("Mymr", "my"),
        ("Orya", "or"),
        ("Sinh", "si"),
        ("Taml", "ta"),
        ("Telu", "te"),
        ("Thai", "th"),
        ("Tibt", "bo"),
    ])
});

static LIKELY_BY_REGION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("BR", "pt"),
        ("CN", "zh"),
        ("DE", "de"),
        ("EG", "ar"),
        ("ES", "es"),
        ("FR", "fr"),
        ("GB", "en"),
        ("GR", "el"),
        ("ID", "id"),
        ("IL", "he"),
        ("IN", "hi"),
        ("IT", "it"),
        ("JP", "ja"),
        ("KR", "ko"),
        ("MX", "es"),
        ("NL", "nl"),
        ("PL", "pl"),
        ("PT", "pt"),
        ("RU", "ru"),
        ("SA", "ar"),
        ("SE", "sv"),
        ("TH", "th"),
        ("TR", "tr"),
        ("TW", "zh"),
        ("UA", "uk"),
        ("US", "en"),
        ("VN", "vi"),
    ])
});

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for LocaleTag {
    type Err = PluralError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = PluralError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

/// The language-identifier part of `tag`, or `None` if the extension
/// section that follows it is malformed.
fn strip_extensions(tag: &str) -> Option<&str> {
    let mut offset = 0;
    for (index, subtag) in tag.split(['-', '_']).enumerate() {
        if index > 0 && subtag.len() == 1 {
            let head = &tag[..offset - 1];
            return (!head.is_empty() && extensions_well_formed(&tag[offset..])).then_some(head);
        }
        offset += subtag.len() + 1;
    }
    Some(tag)
}

/// Each singleton needs at least one subtag. Extension subtags are 2-8
/// alphanumerics; everything after `x` is private use with 1-8.
fn extensions_well_formed(section: &str) -> bool {
    let mut private = false;
    let mut awaiting_subtag = false;

    for subtag in section.split(['-', '_']) {
        if !subtag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return false;
        }
        match subtag.len() {
            1 if !private => {
                if awaiting_subtag {
                    return false;
                }
                private = subtag.eq_ignore_ascii_case("x");
                awaiting_subtag = true;
            }
            len if (1..=8).contains(&len) && (private || len >= 2) => awaiting_subtag = false,
            _ => return false,
        }
    }

    !awaiting_subtag
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.to_string()
    }
}

impl From<LanguageIdentifier> for LocaleTag {
    fn from(id: LanguageIdentifier) -> Self {
        Self(id)
    }
}
