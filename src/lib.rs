// cldr-plural - CLDR plural rule sets with locale resolution
//
// Re-exports the rule-set model and resolver so applications depend on a
// single crate.

pub use cldr_plural_rules::*;

#[cfg(feature = "log")]
pub use cldr_plural_log as log;
