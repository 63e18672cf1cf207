//! Linguistic variables: a named crisp value read through overlapping terms.

use crate::error::FuzzyError;

use super::term::{MembershipFunction, Term};

/// A named quantity whose crisp value is interpreted through fuzzy terms.
///
/// Terms keep their insertion order so listings stay deterministic; the order
/// has no effect on evaluation.
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: String,
    min: f64,
    max: f64,
    terms: Vec<Term>,
    value: f64,
    lock_value_in_range: bool,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            terms: Vec::new(),
            value: 0.0,
            lock_value_in_range: false,
        }
    }

    /// When set, `set_value` clamps incoming values to [min, max].
    pub fn lock_value_in_range(mut self, lock: bool) -> Self {
        self.lock_value_in_range = lock;
        self
    }

    pub fn with_term(mut self, name: impl Into<String>, shape: MembershipFunction) -> Self {
        self.terms.push(Term::new(name, shape));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn set_value(&mut self, x: f64) {
        self.value = if self.lock_value_in_range {
            x.clamp(self.min, self.max)
        } else {
            x
        };
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Look up a term by name.
    pub fn term(&self, name: &str) -> Result<&Term, FuzzyError> {
        self.terms
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: self.name.clone(),
                term: name.to_string(),
            })
    }

    /// Membership degree of the stored value in the named term.
    pub fn degree_of(&self, term: &str) -> Result<f64, FuzzyError> {
        Ok(self.term(term)?.evaluate(self.value))
    }

    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(Term::name)
    }
}
