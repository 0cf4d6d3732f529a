//! Rule sets: one culture's plural behavior

use crate::operand::{ConditionScan, scan_condition};
use crate::{Case, Cases, LocaleTag, Operand, Operands, PluralError, Result, UnitTests, Var};
use std::collections::HashSet;

/// The plural rules shared by one or more locale tags.
///
/// Built with [`CultureBuilder`]. Tags are parsed and checked once, at
/// build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    langs: Vec<LocaleTag>,
    operands: Operands,
    cardinal: Cases,
    ordinal: Cases,
    vars: Vec<Var>,
    tests: UnitTests,
}

impl Culture {
    pub fn builder() -> CultureBuilder {
        CultureBuilder::new()
    }

    /// Tags this rule set applies to, in declaration order. Never empty.
    pub fn langs(&self) -> &[LocaleTag] {
        &self.langs
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    pub fn cardinal(&self) -> &Cases {
        &self.cardinal
    }

    pub fn ordinal(&self) -> &Cases {
        &self.ordinal
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn tests(&self) -> &UnitTests {
        &self.tests
    }

    /// Any operand is referenced, or a modulus variable is needed.
    pub fn has_vars(&self) -> bool {
        !self.vars.is_empty() || self.operands.any_used()
    }

    /// Any of `f`, `v`, `t`, `w` is referenced, so the evaluator must
    /// look at the fraction digits.
    pub fn needs_extended_operands(&self) -> bool {
        self.operands
            .iter()
            .any(|s| s.is_used() && s.operand().is_extended())
    }

    pub fn has_cardinal(&self) -> bool {
        !self.cardinal.is_empty()
    }

    pub fn has_ordinal(&self) -> bool {
        !self.ordinal.is_empty()
    }

    pub fn has_test(&self) -> bool {
        self.has_cardinal_test() || self.has_ordinal_test()
    }

    pub fn has_cardinal_test(&self) -> bool {
        !self.tests.cardinal.is_empty()
    }

    pub fn has_ordinal_test(&self) -> bool {
        !self.tests.ordinal.is_empty()
    }
}

/// Builder for [`Culture`].
///
/// Unless [`operands`](Self::operands) or [`vars`](Self::vars) are set
/// explicitly, both are derived by scanning the case conditions.
///
/// ```
/// use cldr_plural_rules::{Case, Culture, PluralCategory};
///
/// let culture = Culture::builder()
///     .langs(["en", "de"])
///     .cardinal(vec![
///         Case::new(PluralCategory::One, "i = 1 and v = 0"),
///         Case::new(PluralCategory::Other, ""),
///     ])
///     .build()
///     .unwrap();
///
/// assert!(culture.needs_extended_operands());
/// assert_eq!(culture.langs().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CultureBuilder {
    langs: Vec<String>,
    operands: Option<Vec<Operand>>,
    vars: Option<Vec<Var>>,
    cardinal: Vec<Case>,
    ordinal: Vec<Case>,
    tests: UnitTests,
}

impl CultureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, tag: impl Into<String>) -> Self {
        self.langs.push(tag.into());
        self
    }

    pub fn langs<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.langs.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn cardinal(mut self, cases: Vec<Case>) -> Self {
        self.cardinal = cases;
        self
    }

    pub fn ordinal(mut self, cases: Vec<Case>) -> Self {
        self.ordinal = cases;
        self
    }

    pub fn tests(mut self, tests: UnitTests) -> Self {
        self.tests = tests;
        self
    }

    /// Mark exactly these operands as used instead of scanning.
    pub fn operands(mut self, used: impl IntoIterator<Item = Operand>) -> Self {
        self.operands = Some(used.into_iter().collect());
        self
    }

    /// Use exactly these variables instead of scanning.
    pub fn vars(mut self, vars: Vec<Var>) -> Self {
        self.vars = Some(vars);
        self
    }

    /// Parse the tags, validate the case lists and derive symbols.
    pub fn build(self) -> Result<Culture> {
        if self.langs.is_empty() {
            return Err(PluralError::EmptyLangs);
        }

        let mut seen = HashSet::with_capacity(self.langs.len());
        let mut langs = Vec::with_capacity(self.langs.len());
        for raw in &self.langs {
            let tag = LocaleTag::parse(raw)?;
            if !seen.insert(tag.clone()) {
                return Err(PluralError::DuplicateLang(tag.to_string()));
            }
            langs.push(tag);
        }

        let cardinal = Cases::new(self.cardinal)?;
        let ordinal = Cases::new(self.ordinal)?;

        let mut scan = ConditionScan::default();
        for cond in cardinal.conditions().chain(ordinal.conditions()) {
            scan.merge(scan_condition(cond));
        }

        let operands = Operands::from_used(self.operands.unwrap_or(scan.operands));
        let vars = self.vars.unwrap_or(scan.vars);

        Ok(Culture {
            langs,
            operands,
            cardinal,
            ordinal,
            vars,
            tests: self.tests,
        })
    }
}
