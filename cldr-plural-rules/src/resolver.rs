//! Locale resolution with parent-tag fallback
//!
//! A requested tag is tried as-is, then progressively less specific
//! forms of it, until a culture or an Others entry matches:
//!
//! ```text
//! sr-Latn-RS -> sr-Latn -> sr -> und
//! und-Cyrl   -> ru      -> und
//! ```

use crate::{Confidence, Culture, LocaleTag, RuleSets};

/// Outcome of a successful [`RuleSets::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// A culture declares `tag`
    RuleSet { culture: &'a Culture, tag: LocaleTag },
    /// `tag` is listed in Others: use the universal `other` category
    Others { tag: LocaleTag },
}

impl<'a> Resolution<'a> {
    /// The tag that matched, which may be an ancestor of the request.
    pub fn tag(&self) -> &LocaleTag {
        match self {
            Resolution::RuleSet { tag, .. } | Resolution::Others { tag } => tag,
        }
    }

    /// The matched culture, `None` for Others.
    pub fn culture(&self) -> Option<&'a Culture> {
        match self {
            Resolution::RuleSet { culture, .. } => Some(*culture),
            Resolution::Others { .. } => None,
        }
    }

    pub fn is_others(&self) -> bool {
        matches!(self, Resolution::Others { .. })
    }
}

/// The candidates tried for a requested tag, most specific first.
///
/// Each step strips one subtag, or, for an `und-…` tag, jumps to the
/// inferred language. The chain ends after root, or as soon as a
/// candidate has no base language with any confidence, so it yields at
/// most `subtag_count() + 1` tags and never repeats one.
#[derive(Debug, Clone)]
pub struct FallbackChain {
    next: Option<LocaleTag>,
}

impl FallbackChain {
    pub fn new(requested: LocaleTag) -> Self {
        Self {
            next: Some(requested),
        }
    }

    fn successor(tag: &LocaleTag) -> Option<LocaleTag> {
        let (base, confidence) = tag.base();
        if confidence == Confidence::No {
            return None;
        }
        if !tag.has_language() {
            return Some(base);
        }
        Some(tag.parent())
    }
}

impl Iterator for FallbackChain {
    type Item = LocaleTag;

    fn next(&mut self) -> Option<LocaleTag> {
        let current = self.next.take()?;
        self.next = Self::successor(&current);
        Some(current)
    }
}

/// Result of [`RuleSets::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Inputs that are not locale tags
    pub unparseable: Vec<String>,
    /// Well-formed inputs with no matching ancestor
    pub unresolved: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.unparseable.is_empty() && self.unresolved.is_empty()
    }
}

impl RuleSets {
    /// Find the rule set for `requested`.
    ///
    /// Exact culture matches win, then Others membership, then the same
    /// two checks for each ancestor in the [`FallbackChain`]. Returns
    /// `None` if nothing up to and including root matches.
    pub fn find(&self, requested: &LocaleTag) -> Option<Resolution<'_>> {
        FallbackChain::new(requested.clone()).find_map(|candidate| {
            if let Some(culture) = self.exact(&candidate) {
                Some(Resolution::RuleSet {
                    culture,
                    tag: candidate,
                })
            } else if self.is_others(&candidate) {
                Some(Resolution::Others { tag: candidate })
            } else {
                None
            }
        })
    }

    /// [`find`](Self::find) for a raw string. Malformed input is simply
    /// not found.
    pub fn find_str(&self, requested: &str) -> Option<Resolution<'_>> {
        LocaleTag::parse(requested)
            .ok()
            .and_then(|tag| self.find(&tag))
    }

    /// Sort raw tags into unparseable and unresolved, keeping input order.
    pub fn validate<I, S>(&self, tags: I) -> ValidationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ValidationReport::default();
        for raw in tags {
            let raw = raw.as_ref();
            match LocaleTag::parse(raw) {
                Err(_) => report.unparseable.push(raw.to_string()),
                Ok(tag) if self.find(&tag).is_none() => report.unresolved.push(raw.to_string()),
                Ok(_) => {}
            }
        }
        report
    }
}
