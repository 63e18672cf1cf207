//! Mamdani-style inference: fuzzify, fire rules, aggregate, defuzzify.

use tracing::{debug, trace};

use crate::error::FuzzyError;

use super::rule::RuleBlock;
use super::term::Term;
use super::variable::LinguisticVariable;

/// Number of samples the centroid defuzzifier takes across the output range.
const CENTROID_RESOLUTION: usize = 100;

/// Below this aggregated mass a round is treated as "no rule fired" and the
/// output falls back to its default value instead of dividing by ~0.
const AGGREGATE_EPSILON: f64 = 1e-10;

/// An output variable plus its defuzzification fallback and last result.
#[derive(Debug, Clone)]
struct OutputVariable {
    variable: LinguisticVariable,
    default_value: f64,
    value: f64,
}

/// Owns the input/output variables and one rule block.
///
/// `evaluate` reads the inputs' current values and stores one crisp value per
/// output; `output_value` reads it back. The defuzzified value is
/// intentionally NOT clamped to the output range and NOT snapped to the
/// previous value.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    inputs: Vec<LinguisticVariable>,
    outputs: Vec<OutputVariable>,
    rule_block: RuleBlock,
}

impl InferenceEngine {
    pub fn new(rule_block: RuleBlock) -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            rule_block,
        }
    }

    pub fn add_input(&mut self, variable: LinguisticVariable) {
        self.inputs.push(variable);
    }

    /// Register an output variable. `default_value` is what `output_value`
    /// yields when no rule fires meaningfully (and before any evaluation).
    pub fn add_output(&mut self, variable: LinguisticVariable, default_value: f64) {
        self.outputs.push(OutputVariable {
            variable,
            default_value,
            value: default_value,
        });
    }

    /// Set an input variable's crisp value (clamped iff the variable locks).
    pub fn set_input(&mut self, name: &str, value: f64) -> Result<(), FuzzyError> {
        self.inputs
            .iter_mut()
            .find(|v| v.name() == name)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.to_string()))?
            .set_value(value);
        Ok(())
    }

    /// Crisp result of the last `evaluate` for the named output.
    pub fn output_value(&self, name: &str) -> Result<f64, FuzzyError> {
        self.outputs
            .iter()
            .find(|o| o.variable.name() == name)
            .map(|o| o.value)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.to_string()))
    }

    /// Run one inference pass over all rules and outputs.
    pub fn evaluate(&mut self) -> Result<(), FuzzyError> {
        let strengths = self.firing_strengths()?;

        // Every consequent must name a registered output, even if its rule
        // did not fire this round.
        for rule in self.rule_block.rules() {
            let (variable, _) = rule.consequent();
            if !self.outputs.iter().any(|o| o.variable.name() == variable) {
                return Err(FuzzyError::UnknownVariable(variable.to_string()));
            }
        }

        for idx in 0..self.outputs.len() {
            let value = {
                let output = &self.outputs[idx];
                let mut activated: Vec<(f64, &Term)> = Vec::new();
                for (rule, strength) in self.rule_block.rules().iter().zip(&strengths) {
                    let (variable, term) = rule.consequent();
                    if variable != output.variable.name() {
                        continue;
                    }
                    let term = output.variable.term(term)?;
                    if *strength > 0.0 {
                        activated.push((*strength, term));
                    }
                }
                centroid(output, &self.rule_block, &activated)
            };
            let output = &mut self.outputs[idx];
            output.value = value;
            debug!(output = output.variable.name(), value, "defuzzified");
        }

        Ok(())
    }

    /// Conjunction of each rule's antecedent degrees, in rule order.
    fn firing_strengths(&self) -> Result<Vec<f64>, FuzzyError> {
        let mut strengths = Vec::with_capacity(self.rule_block.rules().len());
        for rule in self.rule_block.rules() {
            let mut strength = 1.0;
            for (variable, term) in rule.antecedent() {
                let degree = self.input(variable)?.degree_of(term)?;
                strength = self.rule_block.conjunction.apply(strength, degree);
            }
            trace!(consequent = ?rule.consequent(), strength, "rule fired");
            strengths.push(strength);
        }
        Ok(strengths)
    }

    fn input(&self, name: &str) -> Result<&LinguisticVariable, FuzzyError> {
        self.inputs
            .iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.to_string()))
    }
}

/// Weighted-average defuzzification over midpoint samples of the output range.
///
/// Each sample's membership is the aggregation over all activated consequents
/// of the implication of the rule's firing strength with the term's shape.
fn centroid(output: &OutputVariable, block: &RuleBlock, activated: &[(f64, &Term)]) -> f64 {
    let (min, max) = output.variable.range();
    let dx = (max - min) / CENTROID_RESOLUTION as f64;

    let mut area = 0.0;
    let mut moment = 0.0;
    for i in 0..CENTROID_RESOLUTION {
        let x = min + (i as f64 + 0.5) * dx;
        let mut membership = 0.0;
        for (strength, term) in activated {
            let clipped = block.implication.apply(*strength, term.evaluate(x));
            membership = block.aggregation.apply(membership, clipped);
        }
        moment += x * membership;
        area += membership;
    }

    if area < AGGREGATE_EPSILON {
        output.default_value
    } else {
        moment / area
    }
}
