//! Process-wide rule sets
//!
//! Rule data is loaded once at startup and lives for the whole process.
//! [`install`] is a set-once barrier: concurrent first callers race
//! safely and exactly one wins.

use crate::{PluralError, Result, RuleSets};
use cldr_plural_log::debug;
use once_cell::sync::OnceCell;

static RULE_SETS: OnceCell<RuleSets> = OnceCell::new();

/// Install the process rule sets.
///
/// Returns [`PluralError::AlreadyInstalled`] if called a second time.
pub fn install(sets: RuleSets) -> Result<&'static RuleSets> {
    RULE_SETS
        .set(sets)
        .map_err(|_| PluralError::AlreadyInstalled)?;
    let installed = RULE_SETS.get().ok_or(PluralError::AlreadyInstalled)?;

    debug!("installed {} cultures as process rule sets", installed.len());
    Ok(installed)
}

/// The installed rule sets, if any.
pub fn get() -> Option<&'static RuleSets> {
    RULE_SETS.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Case, Culture, PluralCategory};

    #[test]
    fn test_install_once() {
        let culture = Culture::builder()
            .lang("en")
            .cardinal(vec![Case::new(PluralCategory::Other, "")])
            .build()
            .unwrap();
        let sets = RuleSets::new(vec![culture], vec![]).unwrap();

        let installed = install(sets.clone()).unwrap();
        assert!(installed.find_str("en-NZ").is_some());
        assert!(std::ptr::eq(get().unwrap(), installed));

        assert!(matches!(install(sets), Err(PluralError::AlreadyInstalled)));
    }
}
