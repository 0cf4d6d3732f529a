//! CLDR Plural Rule Sets
//!
//! Models the plural rules of many locales and finds, for any requested
//! language tag, the rule set that applies:
//!
//! - **Rule-set model**: [`Culture`] with its operand [`Symbol`]s,
//!   cardinal and ordinal [`Cases`], modulus [`Var`]s and [`UnitTests`]
//! - **Resolution**: [`RuleSets::find`] with parent-tag fallback
//!   (`en-GB` → `en` → `und`)
//! - **Loading**: JSON and TOML documents via [`RuleSets::load_file`]
//!
//! Conditions such as `i = 1 and v = 0` are opaque here; evaluating them
//! against a number is left to the consumer of [`Culture::cardinal`] and
//! [`Culture::ordinal`].
//!
//! # Quick Start
//!
//! ```rust
//! use cldr_plural_rules::{Case, Culture, PluralCategory, RuleSets};
//!
//! let english = Culture::builder()
//!     .lang("en")
//!     .cardinal(vec![
//!         Case::new(PluralCategory::One, "n = 1"),
//!         Case::new(PluralCategory::Other, "true"),
//!     ])
//!     .build()?;
//!
//! let sets = RuleSets::with_others(vec![english], ["ja", "zh"])?;
//!
//! let found = sets.find_str("en-US").unwrap();
//! assert_eq!(found.tag().to_string(), "en");
//! assert!(found.culture().is_some());
//!
//! assert!(sets.find_str("ja").unwrap().is_others());
//! assert!(sets.find_str("xx-Yyyy-ZZ").is_none());
//! # Ok::<(), cldr_plural_rules::PluralError>(())
//! ```
//!
//! # Concurrency
//!
//! [`RuleSets`] builds its indices in the constructor and has no interior
//! mutability. Share it by reference or `Arc`, or install it once with
//! [`global::install`].

mod cases;
mod category;
mod collection;
mod culture;
mod error;
pub mod global;
mod loader;
mod operand;
mod resolver;
mod tag;

pub use cases::{Case, Cases};
pub use category::PluralCategory;
pub use collection::RuleSets;
pub use culture::{Culture, CultureBuilder};
pub use error::PluralError;
pub use loader::{CultureDocument, RuleSetsDocument, RulesFormat};
pub use operand::{ConditionScan, Operand, Operands, Symbol, Var, scan_condition};
pub use resolver::{FallbackChain, Resolution, ValidationReport};
pub use tag::{Confidence, LocaleTag};
pub use unit_test::{UnitTest, UnitTests};

/// Result type for rule-set construction and loading
pub type Result<T> = std::result::Result<T, PluralError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Case, Cases, Culture, LocaleTag, PluralCategory, PluralError, Resolution, Result,
        RuleSets, ValidationReport,
    };
}
