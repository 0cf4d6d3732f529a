//! The rule-set collection and its lookup indices

use crate::{Culture, LocaleTag, PluralError, Result};
use cldr_plural_log::debug;
use std::collections::{HashMap, HashSet};

/// All cultures plus the tags that use the universal `other` category.
///
/// Both indices are built in the constructor and never change, so a
/// `RuleSets` can be shared across threads and queried without locking.
#[derive(Debug, Clone, Default)]
pub struct RuleSets {
    cultures: Vec<Culture>,
    others: Vec<LocaleTag>,
    by_tag: HashMap<LocaleTag, usize>,
    others_index: HashSet<LocaleTag>,
}

impl RuleSets {
    /// Index the cultures and Others tags.
    ///
    /// Fails with [`PluralError::DuplicateTag`] if any tag is declared by
    /// two cultures, twice in Others, or by both a culture and Others.
    pub fn new(cultures: Vec<Culture>, others: Vec<LocaleTag>) -> Result<Self> {
        let tag_count: usize = cultures.iter().map(|c| c.langs().len()).sum();
        let mut by_tag = HashMap::with_capacity(tag_count);

        for (idx, culture) in cultures.iter().enumerate() {
            for tag in culture.langs() {
                if by_tag.insert(tag.clone(), idx).is_some() {
                    return Err(PluralError::DuplicateTag(tag.to_string()));
                }
            }
        }

        let mut others_index = HashSet::with_capacity(others.len());
        for tag in &others {
            if by_tag.contains_key(tag) || !others_index.insert(tag.clone()) {
                return Err(PluralError::DuplicateTag(tag.to_string()));
            }
        }

        debug!(
            "indexed {} cultures, {} culture tags, {} others",
            cultures.len(),
            by_tag.len(),
            others_index.len()
        );

        Ok(Self {
            cultures,
            others,
            by_tag,
            others_index,
        })
    }

    /// Like [`RuleSets::new`], parsing the Others tags first.
    pub fn with_others<I, S>(cultures: Vec<Culture>, others: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let others = others
            .into_iter()
            .map(|tag| LocaleTag::parse(tag.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(cultures, others)
    }

    pub fn cultures(&self) -> &[Culture] {
        &self.cultures
    }

    pub fn others(&self) -> &[LocaleTag] {
        &self.others
    }

    /// Every declared tag: each culture's tags in order, then Others.
    pub fn langs(&self) -> Vec<&LocaleTag> {
        let mut langs = Vec::with_capacity(self.by_tag.len() + self.others.len());
        for culture in &self.cultures {
            langs.extend(culture.langs());
        }
        langs.extend(&self.others);
        langs
    }

    /// The culture declared for exactly this tag.
    pub fn exact(&self, tag: &LocaleTag) -> Option<&Culture> {
        self.by_tag.get(tag).map(|&idx| &self.cultures[idx])
    }

    pub fn is_others(&self, tag: &LocaleTag) -> bool {
        self.others_index.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.cultures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cultures.is_empty() && self.others.is_empty()
    }
}
