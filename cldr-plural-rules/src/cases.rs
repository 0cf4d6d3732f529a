//! Plural cases: a form paired with its condition

use crate::{PluralCategory, PluralError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One plural category and the condition that selects it.
///
/// `cond` is handed to an external evaluator untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Case {
    pub form: PluralCategory,
    pub cond: String,
}

impl Case {
    pub fn new(form: PluralCategory, cond: impl Into<String>) -> Self {
        Self {
            form,
            cond: cond.into(),
        }
    }
}

/// An ordered list of cases with unique forms.
///
/// The form index is rebuilt from the list in [`Cases::new`] and there
/// are no mutators, so the two never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Case>", into = "Vec<Case>")]
pub struct Cases {
    items: Vec<Case>,
    by_form: HashMap<PluralCategory, usize>,
}

impl Cases {
    /// Build from cases in declaration order.
    ///
    /// Fails with [`PluralError::DuplicateForm`] if a form repeats.
    pub fn new(items: Vec<Case>) -> Result<Self> {
        let mut by_form = HashMap::with_capacity(items.len());
        for (idx, case) in items.iter().enumerate() {
            if by_form.insert(case.form, idx).is_some() {
                return Err(PluralError::DuplicateForm { form: case.form });
            }
        }
        Ok(Self { items, by_form })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, form: PluralCategory) -> Option<&Case> {
        self.by_form.get(&form).map(|&idx| &self.items[idx])
    }

    pub fn contains(&self, form: PluralCategory) -> bool {
        self.by_form.contains_key(&form)
    }

    /// Cases in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Case> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Case] {
        &self.items
    }

    /// Forms in declaration order.
    pub fn forms(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.items.iter().map(|c| c.form)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrowed form → case map.
    pub fn to_map(&self) -> HashMap<PluralCategory, &Case> {
        self.items.iter().map(|c| (c.form, c)).collect()
    }

    /// Conditions, for operand scanning.
    pub(crate) fn conditions(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|c| c.cond.as_str())
    }
}

impl TryFrom<Vec<Case>> for Cases {
    type Error = PluralError;

    fn try_from(items: Vec<Case>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<Cases> for Vec<Case> {
    fn from(cases: Cases) -> Self {
        cases.items
    }
}

impl<'a> IntoIterator for &'a Cases {
    type Item = &'a Case;
    type IntoIter = std::slice::Iter<'a, Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
