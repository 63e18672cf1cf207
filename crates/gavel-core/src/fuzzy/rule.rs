//! Rules and the operators that combine them.

/// T-norm: fuzzy AND. Doubles as the implication operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TNorm {
    Minimum,
    AlgebraicProduct,
}

impl TNorm {
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            TNorm::Minimum => a.min(b),
            TNorm::AlgebraicProduct => a * b,
        }
    }
}

/// S-norm: fuzzy OR. Doubles as the aggregation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SNorm {
    Maximum,
    AlgebraicSum,
}

impl SNorm {
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            SNorm::Maximum => a.max(b),
            SNorm::AlgebraicSum => a + b - a * b,
        }
    }
}

/// One IF-THEN rule: AND-combined antecedent pairs, one consequent pair.
///
/// Built with the `when`/`and`/`then` chain:
///
/// ```
/// use gavel_core::fuzzy::Rule;
///
/// let rule = Rule::when("BUDGET", "NORMAL")
///     .and("DIVERGENCE", "LOWER")
///     .then("BUY", "LOWER");
/// assert_eq!(rule.consequent(), ("BUY", "LOWER"));
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    antecedent: Vec<(String, String)>,
    consequent: (String, String),
}

impl Rule {
    pub fn when(variable: impl Into<String>, term: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            antecedent: vec![(variable.into(), term.into())],
        }
    }

    /// The (variable, term) pairs of the antecedent, in rule order.
    pub fn antecedent(&self) -> &[(String, String)] {
        &self.antecedent
    }

    pub fn consequent(&self) -> (&str, &str) {
        (&self.consequent.0, &self.consequent.1)
    }
}

/// Intermediate state of the `when`/`and`/`then` chain.
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    antecedent: Vec<(String, String)>,
}

impl RuleBuilder {
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.antecedent.push((variable.into(), term.into()));
        self
    }

    pub fn then(self, variable: impl Into<String>, term: impl Into<String>) -> Rule {
        Rule {
            antecedent: self.antecedent,
            consequent: (variable.into(), term.into()),
        }
    }
}

/// Ordered rules plus the operators used to evaluate and combine them.
#[derive(Debug, Clone)]
pub struct RuleBlock {
    rules: Vec<Rule>,
    pub conjunction: TNorm,
    /// Unused by the bidding rule table (no antecedent ever disjoins), kept
    /// so the block describes a complete operator set.
    pub disjunction: SNorm,
    pub implication: TNorm,
    pub aggregation: SNorm,
}

impl RuleBlock {
    pub fn new(
        conjunction: TNorm,
        disjunction: SNorm,
        implication: TNorm,
        aggregation: SNorm,
    ) -> Self {
        Self {
            rules: Vec::new(),
            conjunction,
            disjunction,
            implication,
            aggregation,
        }
    }

    /// The Mamdani operator set the agent runs with: product conjunction,
    /// algebraic-sum disjunction, minimum implication, maximum aggregation.
    pub fn mamdani() -> Self {
        Self::new(
            TNorm::AlgebraicProduct,
            SNorm::AlgebraicSum,
            TNorm::Minimum,
            SNorm::Maximum,
        )
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
