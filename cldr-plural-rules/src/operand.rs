//! Plural operands, symbol slots and modulus variables
//!
//! Conditions stay opaque strings; this module only looks at them
//! lexically to learn which operands a rule set touches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CLDR plural operand, plus `p` for extended rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    /// Visible fraction digits, with trailing zeros
    F,
    /// Integer digits
    I,
    /// Absolute value
    N,
    /// Number of visible fraction digits, with trailing zeros
    V,
    /// Visible fraction digits, without trailing zeros
    T,
    /// Number of visible fraction digits, without trailing zeros
    W,
    /// Extended operand for custom rules
    P,
}

impl Operand {
    /// Slot order used by [`Operands`].
    pub const ALL: [Operand; 7] = [
        Operand::F,
        Operand::I,
        Operand::N,
        Operand::V,
        Operand::T,
        Operand::W,
        Operand::P,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operand::F => "f",
            Operand::I => "i",
            Operand::N => "n",
            Operand::V => "v",
            Operand::T => "t",
            Operand::W => "w",
            Operand::P => "p",
        }
    }

    /// Operands that need the fraction digits of the source number.
    pub fn is_extended(&self) -> bool {
        matches!(self, Operand::F | Operand::V | Operand::T | Operand::W)
    }

    fn from_identifier(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == ident)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An operand slot and whether any rule of the culture references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    operand: Operand,
    used: bool,
}

impl Symbol {
    pub const fn new(operand: Operand, used: bool) -> Self {
        Self { operand, used }
    }

    pub fn operand(&self) -> Operand {
        self.operand
    }

    pub fn name(&self) -> &'static str {
        self.operand.name()
    }

    pub fn is_used(&self) -> bool {
        self.used
    }
}

/// The seven symbol slots of a culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub f: Symbol,
    pub i: Symbol,
    pub n: Symbol,
    pub v: Symbol,
    pub t: Symbol,
    pub w: Symbol,
    pub p: Symbol,
}

impl Default for Operands {
    fn default() -> Self {
        Self::from_used(std::iter::empty())
    }
}

impl Operands {
    /// Slots with exactly the given operands marked used.
    pub fn from_used(used: impl IntoIterator<Item = Operand>) -> Self {
        let used: Vec<Operand> = used.into_iter().collect();
        let slot = |op: Operand| Symbol::new(op, used.contains(&op));
        Self {
            f: slot(Operand::F),
            i: slot(Operand::I),
            n: slot(Operand::N),
            v: slot(Operand::V),
            t: slot(Operand::T),
            w: slot(Operand::W),
            p: slot(Operand::P),
        }
    }

    pub fn get(&self, operand: Operand) -> Symbol {
        match operand {
            Operand::F => self.f,
            Operand::I => self.i,
            Operand::N => self.n,
            Operand::V => self.v,
            Operand::T => self.t,
            Operand::W => self.w,
            Operand::P => self.p,
        }
    }

    /// Slots in F, I, N, V, T, W, P order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        Operand::ALL.into_iter().map(|op| self.get(op))
    }

    pub fn any_used(&self) -> bool {
        self.iter().any(|s| s.is_used())
    }
}

/// A derived variable such as `n % 100`, named `n100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Var {
    pub operand: Operand,
    #[serde(rename = "mod")]
    pub modulus: u32,
}

impl Var {
    pub fn new(operand: Operand, modulus: u32) -> Self {
        Self { operand, modulus }
    }

    pub fn name(&self) -> String {
        format!("{}{}", self.operand.name(), self.modulus)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operand.name(), self.modulus)
    }
}

/// What a condition references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionScan {
    /// Operands named, in first-seen order
    pub operands: Vec<Operand>,
    /// `operand % modulus` terms, in first-seen order
    pub vars: Vec<Var>,
}

impl ConditionScan {
    /// Fold another scan into this one, keeping first-seen order.
    pub fn merge(&mut self, other: ConditionScan) {
        for op in other.operands {
            push_unique(&mut self.operands, op);
        }
        for var in other.vars {
            push_unique(&mut self.vars, var);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Ident(&'a str),
    Number(&'a str),
    Percent,
    Other,
}

fn tokenize(cond: &str) -> Vec<Token<'_>> {
    let bytes = cond.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_whitespace() {
            pos += 1;
        } else if b.is_ascii_alphabetic() {
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                pos += 1;
            }
            tokens.push(Token::Ident(&cond[start..pos]));
        } else if b.is_ascii_digit() {
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            tokens.push(Token::Number(&cond[start..pos]));
        } else if b == b'%' {
            tokens.push(Token::Percent);
            pos += 1;
        } else {
            tokens.push(Token::Other);
            pos += 1;
        }
    }

    tokens
}

/// Find the operands and modulus variables a condition references.
///
/// Sample lists (`@integer …`, `@decimal …`) are ignored. The scan never
/// fails; text it does not understand is skipped.
pub fn scan_condition(cond: &str) -> ConditionScan {
    let rule = cond.split('@').next().unwrap_or_default();
    let tokens = tokenize(rule);
    let mut scan = ConditionScan::default();

    for (idx, token) in tokens.iter().enumerate() {
        let Token::Ident(ident) = token else {
            continue;
        };
        let Some(operand) = Operand::from_identifier(ident) else {
            continue;
        };
        push_unique(&mut scan.operands, operand);

        let is_mod = matches!(
            tokens.get(idx + 1),
            Some(Token::Percent) | Some(Token::Ident("mod"))
        );
        if !is_mod {
            continue;
        }
        if let Some(Token::Number(digits)) = tokens.get(idx + 2) {
            if let Ok(modulus) = digits.parse::<u32>() {
                push_unique(&mut scan.vars, Var::new(operand, modulus));
            }
        }
    }

    scan
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}
