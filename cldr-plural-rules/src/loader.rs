//! Rule-set documents
//!
//! Reads a [`RuleSets`] from JSON or TOML. A document looks like:
//!
//! ```json
//! {
//!   "cultures": [
//!     {
//!       "langs": ["en", "de"],
//!       "cardinal": [
//!         { "form": "one", "cond": "i = 1 and v = 0" },
//!         { "form": "other", "cond": "" }
//!       ]
//!     }
//!   ],
//!   "others": ["ja", "zh"]
//! }
//! ```
//!
//! Loading is where data integrity is enforced: besides everything
//! [`CultureBuilder`](crate::CultureBuilder) and [`RuleSets::new`] check,
//! a culture with neither cardinal nor ordinal cases is rejected.

use crate::{Case, Culture, Operand, PluralError, Result, RuleSets, UnitTests, Var};
use cldr_plural_log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    Json,
    #[cfg(feature = "toml")]
    Toml,
}

impl RulesFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(RulesFormat::Json),
            #[cfg(feature = "toml")]
            "toml" => Some(RulesFormat::Toml),
            _ => None,
        }
    }

    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| PluralError::UnsupportedFormat(path.display().to_string()))?;

        Self::from_extension(ext).ok_or_else(|| PluralError::UnsupportedFormat(ext.to_string()))
    }
}

/// Serialized shape of one culture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CultureDocument {
    pub langs: Vec<String>,
    #[serde(default)]
    pub cardinal: Vec<Case>,
    #[serde(default)]
    pub ordinal: Vec<Case>,
    #[serde(default)]
    pub tests: UnitTests,
    /// Overrides the operands found by scanning the conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operands: Option<Vec<Operand>>,
    /// Overrides the variables found by scanning the conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vec<Var>>,
}

impl CultureDocument {
    fn into_culture(self) -> Result<Culture> {
        if self.cardinal.is_empty() && self.ordinal.is_empty() {
            return Err(PluralError::EmptyRuleSet(self.langs.join(" ")));
        }

        let mut builder = Culture::builder()
            .langs(self.langs)
            .cardinal(self.cardinal)
            .ordinal(self.ordinal)
            .tests(self.tests);
        if let Some(operands) = self.operands {
            builder = builder.operands(operands);
        }
        if let Some(vars) = self.vars {
            builder = builder.vars(vars);
        }
        builder.build()
    }
}

/// Serialized shape of a whole collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSetsDocument {
    #[serde(default)]
    pub cultures: Vec<CultureDocument>,
    #[serde(default)]
    pub others: Vec<String>,
}

impl TryFrom<RuleSetsDocument> for RuleSets {
    type Error = PluralError;

    fn try_from(doc: RuleSetsDocument) -> Result<Self> {
        let cultures = doc
            .cultures
            .into_iter()
            .map(CultureDocument::into_culture)
            .collect::<Result<Vec<_>>>()?;
        RuleSets::with_others(cultures, doc.others)
    }
}

impl RuleSets {
    pub fn from_json(content: &str) -> Result<Self> {
        let doc: RuleSetsDocument = serde_json::from_str(content)?;
        Self::try_from(doc)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(content: &str) -> Result<Self> {
        let doc: RuleSetsDocument = toml::from_str(content)?;
        Self::try_from(doc)
    }

    /// Parse `content` in the given format.
    pub fn parse(content: &str, format: RulesFormat) -> Result<Self> {
        match format {
            RulesFormat::Json => Self::from_json(content),
            #[cfg(feature = "toml")]
            RulesFormat::Toml => Self::from_toml(content),
        }
    }

    /// Load a document, choosing the format from the file extension.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = RulesFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let sets = Self::parse(&content, format)?;

        debug!(
            "loaded {} cultures and {} others from {}",
            sets.cultures().len(),
            sets.others().len(),
            path.display()
        );
        Ok(sets)
    }
}
