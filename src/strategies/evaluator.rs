//! Generic evaluator for data-only screening rules.

use crate::common::math;
use crate::models::{Condition, IndicatorKey, IndicatorSeries, LatestValues, Operand, ScreeningRule};
use crate::strategies::convergence::moving_averages_converge;
use serde::Serialize;
use std::fmt;

/// Outcome of one condition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "missing", rename_all = "snake_case")]
pub enum ConditionOutcome {
    Passed,
    Failed,
    /// A referenced value is undefined; counts as a failure.
    Undefined(Vec<IndicatorKey>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionResult {
    pub condition: String,
    pub outcome: ConditionOutcome,
}

/// Result of applying one rule to one ticker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub rule: String,
    pub results: Vec<ConditionResult>,
}

impl Evaluation {
    /// All conditions passed. A rule without conditions never passes.
    pub fn passed(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|r| r.outcome == ConditionOutcome::Passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConditionResult> {
        self.results
            .iter()
            .filter(|r| r.outcome != ConditionOutcome::Passed)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "passed {}", self.rule);
        }
        if self.results.is_empty() {
            return write!(f, "failed {} (rule has no conditions)", self.rule);
        }
        let reasons: Vec<String> = self
            .failures()
            .map(|r| match &r.outcome {
                ConditionOutcome::Undefined(keys) => {
                    let names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
                    format!("{} undefined ({})", r.condition, names.join(", "))
                }
                _ => r.condition.clone(),
            })
            .collect();
        write!(f, "failed {} ({})", self.rule, reasons.join("; "))
    }
}

pub struct ScreeningEvaluator;

impl ScreeningEvaluator {
    /// Evaluate a rule against the latest row of `series`.
    pub fn evaluate(rule: &ScreeningRule, series: &IndicatorSeries) -> Evaluation {
        Self::evaluate_latest(rule, &series.latest_values())
    }

    pub fn passes(rule: &ScreeningRule, series: &IndicatorSeries) -> bool {
        Self::evaluate(rule, series).passed()
    }

    /// Evaluate a rule against an already extracted latest row.
    pub fn evaluate_latest(rule: &ScreeningRule, latest: &LatestValues) -> Evaluation {
        let results = rule
            .conditions
            .iter()
            .map(|condition| ConditionResult {
                condition: condition.to_string(),
                outcome: Self::evaluate_condition(condition, latest),
            })
            .collect();

        Evaluation {
            rule: rule.name.clone(),
            results,
        }
    }

    fn evaluate_condition(condition: &Condition, latest: &LatestValues) -> ConditionOutcome {
        match condition {
            Condition::Compare {
                left,
                comparison,
                right,
            } => match (Self::resolve(left, latest), Self::resolve(right, latest)) {
                (Ok(l), Ok(r)) => {
                    if comparison.holds(l, r) {
                        ConditionOutcome::Passed
                    } else {
                        ConditionOutcome::Failed
                    }
                }
                (l, r) => ConditionOutcome::Undefined(merge_missing(l, r)),
            },
            Condition::Converge { keys, tolerance } => {
                let values: Vec<Option<f64>> =
                    keys.iter().map(|k| Self::lookup(*k, latest)).collect();
                let missing: Vec<IndicatorKey> = keys
                    .iter()
                    .zip(&values)
                    .filter(|(_, v)| v.is_none())
                    .map(|(k, _)| *k)
                    .collect();
                if !missing.is_empty() {
                    ConditionOutcome::Undefined(missing)
                } else if moving_averages_converge(&values, *tolerance) {
                    ConditionOutcome::Passed
                } else {
                    ConditionOutcome::Failed
                }
            }
        }
    }

    fn lookup(key: IndicatorKey, latest: &LatestValues) -> Option<f64> {
        latest.get(&key).copied().flatten().and_then(math::defined)
    }

    /// Resolve an operand, or report which keys were undefined.
    fn resolve(operand: &Operand, latest: &LatestValues) -> Result<f64, Vec<IndicatorKey>> {
        let get = |key: IndicatorKey| Self::lookup(key, latest).ok_or_else(|| vec![key]);
        let pair = |a: IndicatorKey, b: IndicatorKey| match (get(a), get(b)) {
            (Ok(x), Ok(y)) => Ok((x, y)),
            (x, y) => Err(merge_missing(x, y)),
        };

        match *operand {
            Operand::Value { key } => get(key),
            Operand::Constant { value } => Ok(value),
            Operand::Offset { key, by } => get(key).map(|v| v + by),
            Operand::Abs { key } => get(key).map(f64::abs),
            Operand::Spread { left, right } => pair(left, right).map(|(l, r)| l - r),
            Operand::AbsSpread { left, right } => pair(left, right).map(|(l, r)| (l - r).abs()),
            Operand::Ratio {
                numerator,
                denominator,
            } => {
                let (n, d) = pair(numerator, denominator)?;
                math::defined(n / d).ok_or_else(|| vec![denominator])
            }
        }
    }
}

fn merge_missing(
    left: Result<f64, Vec<IndicatorKey>>,
    right: Result<f64, Vec<IndicatorKey>>,
) -> Vec<IndicatorKey> {
    let mut missing = left.err().unwrap_or_default();
    missing.extend(right.err().unwrap_or_default());
    missing
}
