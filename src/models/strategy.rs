//! Screening rule data models.
//!
//! A rule is pure data: a name and a list of conditions over the latest
//! indicator values. Every condition must hold for the rule to pass.

use crate::models::indicators::IndicatorKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named screening rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRule {
    pub name: String,
    pub conditions: Vec<Condition>,
}

impl ScreeningRule {
    pub fn new(name: impl Into<String>, conditions: Vec<Condition>) -> Self {
        Self {
            name: name.into(),
            conditions,
        }
    }

    /// Every indicator the rule reads, deduplicated and sorted.
    pub fn referenced_keys(&self) -> Vec<IndicatorKey> {
        let mut keys: Vec<IndicatorKey> = self
            .conditions
            .iter()
            .flat_map(|c| c.referenced_keys())
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// Single predicate over latest values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    Compare {
        left: Operand,
        comparison: Comparison,
        right: Operand,
    },
    /// All listed averages lie within `tolerance` of each other after
    /// truncation to integers.
    Converge {
        keys: Vec<IndicatorKey>,
        tolerance: i64,
    },
}

impl Condition {
    pub fn compare(left: Operand, comparison: Comparison, right: Operand) -> Self {
        Condition::Compare {
            left,
            comparison,
            right,
        }
    }

    pub fn converge(keys: Vec<IndicatorKey>, tolerance: i64) -> Self {
        Condition::Converge { keys, tolerance }
    }

    pub fn referenced_keys(&self) -> Vec<IndicatorKey> {
        match self {
            Condition::Compare { left, right, .. } => {
                let mut keys = left.referenced_keys();
                keys.extend(right.referenced_keys());
                keys
            }
            Condition::Converge { keys, .. } => keys.clone(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Compare {
                left,
                comparison,
                right,
            } => write!(f, "{} {} {}", left, comparison, right),
            Condition::Converge { keys, tolerance } => {
                let names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
                write!(f, "converge({}; tol {})", names.join(", "), tolerance)
            }
        }
    }
}

/// Side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operand {
    Value { key: IndicatorKey },
    Constant { value: f64 },
    /// `key + by`
    Offset { key: IndicatorKey, by: f64 },
    /// `numerator / denominator`
    Ratio {
        numerator: IndicatorKey,
        denominator: IndicatorKey,
    },
    /// `left - right`
    Spread { left: IndicatorKey, right: IndicatorKey },
    /// `|left - right|`
    AbsSpread { left: IndicatorKey, right: IndicatorKey },
    /// `|key|`
    Abs { key: IndicatorKey },
}

impl Operand {
    pub fn value(key: IndicatorKey) -> Self {
        Operand::Value { key }
    }

    pub fn constant(value: f64) -> Self {
        Operand::Constant { value }
    }

    pub fn referenced_keys(&self) -> Vec<IndicatorKey> {
        match *self {
            Operand::Value { key } | Operand::Offset { key, .. } | Operand::Abs { key } => {
                vec![key]
            }
            Operand::Constant { .. } => Vec::new(),
            Operand::Ratio {
                numerator,
                denominator,
            } => vec![numerator, denominator],
            Operand::Spread { left, right } | Operand::AbsSpread { left, right } => {
                vec![left, right]
            }
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value { key } => write!(f, "{}", key),
            Operand::Constant { value } => write!(f, "{}", value),
            Operand::Offset { key, by } if *by < 0.0 => write!(f, "{} - {}", key, -by),
            Operand::Offset { key, by } => write!(f, "{} + {}", key, by),
            Operand::Ratio {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
            Operand::Spread { left, right } => write!(f, "{} - {}", left, right),
            Operand::AbsSpread { left, right } => write!(f, "|{} - {}|", left, right),
            Operand::Abs { key } => write!(f, "|{}|", key),
        }
    }
}

/// Comparison operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Comparison {
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    pub fn holds(self, left: f64, right: f64) -> bool {
        match self {
            Comparison::GreaterThan => left > right,
            Comparison::LessThan => left < right,
            Comparison::GreaterEqual => left >= right,
            Comparison::LessEqual => left <= right,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
            Comparison::GreaterEqual => ">=",
            Comparison::LessEqual => "<=",
        };
        write!(f, "{}", symbol)
    }
}
