//! Criteria evaluator - maps a password to its checklist outcome.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::{CriterionId, digit_met, length_met, symbol_met, uppercase_met};

/// Pass/fail outcome of every checklist criterion for one password.
///
/// Always carries exactly the four fixed criteria. Built fresh by
/// [`evaluate`]; holds no reference to the password it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationResult {
    pub length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl EvaluationResult {
    /// Outcome of a single criterion.
    pub fn get(&self, id: CriterionId) -> bool {
        match id {
            CriterionId::Length => self.length,
            CriterionId::Uppercase => self.uppercase,
            CriterionId::Digit => self.digit,
            CriterionId::Symbol => self.symbol,
        }
    }

    /// Iterates `(criterion, met)` pairs in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (CriterionId, bool)> + '_ {
        CriterionId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// `true` when all four criteria are met.
    pub fn is_success(&self) -> bool {
        self.length && self.uppercase && self.digit && self.symbol
    }

    /// Criteria that are not met, in checklist order.
    pub fn unmet(&self) -> Vec<CriterionId> {
        self.iter().filter(|(_, met)| !met).map(|(id, _)| id).collect()
    }

    /// Number of criteria met.
    pub fn met_count(&self) -> usize {
        self.iter().filter(|(_, met)| *met).count()
    }
}

/// Evaluates the password against the four checklist criteria.
///
/// Total and pure: any input, including the empty string, yields a result.
pub fn evaluate(password: &str) -> EvaluationResult {
    let result = EvaluationResult {
        length: length_met(password),
        uppercase: uppercase_met(password),
        digit: digit_met(password),
        symbol: symbol_met(password),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: {}/{} criteria met",
        result.met_count(),
        CriterionId::ALL.len()
    );

    result
}

/// Same as [`evaluate`], for passwords held as a `SecretString`.
pub fn evaluate_secret(password: &SecretString) -> EvaluationResult {
    evaluate(password.expose_secret())
}
