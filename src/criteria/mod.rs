//! Password checklist criteria
//!
//! Each criterion is an independent predicate over the password text.
//! The set is fixed: four criteria, always evaluated in the same order.

mod digit;
mod length;
mod symbol;
mod uppercase;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use digit::digit_met;
pub use length::{MIN_LENGTH, length_met};
pub use symbol::symbol_met;
pub use uppercase::uppercase_met;

/// Predicate signature shared by all criteria.
pub type CriterionFn = fn(&str) -> bool;

/// Identifier of one checklist criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CriterionId {
    Length,
    Uppercase,
    Digit,
    Symbol,
}

impl CriterionId {
    /// All identifiers, in checklist order.
    pub const ALL: [CriterionId; 4] = [
        CriterionId::Length,
        CriterionId::Uppercase,
        CriterionId::Digit,
        CriterionId::Symbol,
    ];

    /// Lowercase key of the criterion (`length`, `uppercase`, `digit`, `symbol`).
    pub fn key(&self) -> &'static str {
        match self {
            CriterionId::Length => "length",
            CriterionId::Uppercase => "uppercase",
            CriterionId::Digit => "digit",
            CriterionId::Symbol => "symbol",
        }
    }

    /// The full criterion entry for this identifier.
    pub fn criterion(&self) -> &'static Criterion {
        &CRITERIA[*self as usize]
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown criterion: {0}")]
pub struct ParseCriterionError(pub String);

impl FromStr for CriterionId {
    type Err = ParseCriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(CriterionId::Length),
            "uppercase" => Ok(CriterionId::Uppercase),
            "digit" => Ok(CriterionId::Digit),
            "symbol" => Ok(CriterionId::Symbol),
            _ => Err(ParseCriterionError(s.to_string())),
        }
    }
}

/// A named pass/fail rule applied to the password.
pub struct Criterion {
    pub id: CriterionId,
    pub description: &'static str,
    predicate: CriterionFn,
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Criterion {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Criterion {}

impl Criterion {
    /// Returns `true` if `password` satisfies this criterion.
    pub fn is_met(&self, password: &str) -> bool {
        (self.predicate)(password)
    }

    /// The fixed criterion table.
    pub fn all() -> &'static [Criterion] {
        &CRITERIA
    }
}

/// The four checklist criteria, indexed by `CriterionId as usize`.
pub static CRITERIA: [Criterion; 4] = [
    Criterion {
        id: CriterionId::Length,
        description: "10 characters long",
        predicate: length_met,
    },
    Criterion {
        id: CriterionId::Uppercase,
        description: "Minimum one uppercase letter",
        predicate: uppercase_met,
    },
    Criterion {
        id: CriterionId::Digit,
        description: "Include numbers (digits)",
        predicate: digit_met,
    },
    Criterion {
        id: CriterionId::Symbol,
        description: "Include symbols (special characters)",
        predicate: symbol_met,
    },
];
