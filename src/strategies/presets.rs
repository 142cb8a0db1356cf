//! Built-in screening profiles.
//!
//! Each preset is an independent configuration with its own thresholds. They
//! are not revisions of one another and may disagree on the same ticker.

use crate::indicators::IndicatorParams;
use crate::models::{Comparison, Condition, IndicatorKey, Operand, ScreeningRule};
use crate::strategies::profile::ScreeningProfile;

pub const MOMENTUM_BREAKOUT: &str = "momentum-breakout";
pub const STABILITY_REVERSAL: &str = "stability-reversal";
pub const CONVERGENCE: &str = "convergence";

/// Truncated-integer tolerance for the MA convergence sub-rule.
pub const MA_CONVERGENCE_TOLERANCE: i64 = 1;

const MA5: IndicatorKey = IndicatorKey::Sma(5);
const MA10: IndicatorKey = IndicatorKey::Sma(10);
const MA20: IndicatorKey = IndicatorKey::Sma(20);
const PSY10: IndicatorKey = IndicatorKey::Psy(10);
const PSY20: IndicatorKey = IndicatorKey::Psy(20);
const RSI5: IndicatorKey = IndicatorKey::Rsi(5);
const RSI10: IndicatorKey = IndicatorKey::Rsi(10);

fn value(key: IndicatorKey) -> Operand {
    Operand::value(key)
}

fn constant(v: f64) -> Operand {
    Operand::constant(v)
}

fn abs_spread(left: IndicatorKey, right: IndicatorKey) -> Operand {
    Operand::AbsSpread { left, right }
}

fn close_ratio() -> Operand {
    Operand::Ratio {
        numerator: IndicatorKey::Close,
        denominator: IndicatorKey::PrevClose,
    }
}

fn psy_not_far_below() -> Condition {
    Condition::compare(
        value(PSY10),
        Comparison::GreaterEqual,
        Operand::Offset { key: PSY20, by: -10.0 },
    )
}

/// PSY(10) > PSY(20), RSI(5) > RSI(10), %K > %D, MACD histogram > -0.8.
pub fn momentum_breakout() -> ScreeningProfile {
    let rule = ScreeningRule::new(
        MOMENTUM_BREAKOUT,
        vec![
            Condition::compare(value(PSY10), Comparison::GreaterThan, value(PSY20)),
            Condition::compare(value(RSI5), Comparison::GreaterThan, value(RSI10)),
            Condition::compare(
                value(IndicatorKey::StochK),
                Comparison::GreaterThan,
                value(IndicatorKey::StochD),
            ),
            Condition::compare(
                value(IndicatorKey::MacdHistogram),
                Comparison::GreaterThan,
                constant(-0.8),
            ),
        ],
    );
    ScreeningProfile::new(rule, IndicatorParams::default())
}

/// Rising momentum while short averages sit well away from the longer ones.
pub fn stability_reversal() -> ScreeningProfile {
    let rule = ScreeningRule::new(
        STABILITY_REVERSAL,
        vec![
            Condition::compare(close_ratio(), Comparison::GreaterEqual, constant(0.5)),
            Condition::compare(
                value(IndicatorKey::MacdHistogram),
                Comparison::GreaterEqual,
                constant(1.5),
            ),
            Condition::compare(value(RSI5), Comparison::GreaterThan, value(RSI10)),
            psy_not_far_below(),
            Condition::compare(
                value(IndicatorKey::StochK),
                Comparison::GreaterEqual,
                value(IndicatorKey::StochD),
            ),
            Condition::compare(abs_spread(MA5, MA10), Comparison::GreaterThan, constant(10.0)),
            Condition::compare(abs_spread(MA5, MA20), Comparison::GreaterThan, constant(10.0)),
        ],
    );
    ScreeningProfile::new(rule, IndicatorParams::default())
}

/// Short, mid and long averages bunched together with a mild positive MACD.
pub fn convergence() -> ScreeningProfile {
    let rule = ScreeningRule::new(
        CONVERGENCE,
        vec![
            Condition::converge(vec![MA5, MA10, MA20], MA_CONVERGENCE_TOLERANCE),
            Condition::compare(close_ratio(), Comparison::GreaterEqual, constant(0.5)),
            Condition::compare(
                value(IndicatorKey::MacdHistogram),
                Comparison::GreaterEqual,
                constant(0.5),
            ),
            Condition::compare(
                Operand::Abs {
                    key: IndicatorKey::Macd,
                },
                Comparison::LessThan,
                constant(12.0),
            ),
            Condition::compare(
                Operand::Abs {
                    key: IndicatorKey::MacdSignal,
                },
                Comparison::LessThan,
                constant(12.0),
            ),
            Condition::compare(value(RSI5), Comparison::GreaterThan, value(RSI10)),
            psy_not_far_below(),
            Condition::compare(
                value(IndicatorKey::StochK),
                Comparison::GreaterEqual,
                value(IndicatorKey::StochD),
            ),
            Condition::compare(abs_spread(MA5, MA10), Comparison::LessEqual, constant(10.0)),
            Condition::compare(abs_spread(MA5, MA20), Comparison::LessEqual, constant(10.0)),
        ],
    );
    ScreeningProfile::new(rule, IndicatorParams::default())
}

pub fn all() -> Vec<ScreeningProfile> {
    vec![momentum_breakout(), stability_reversal(), convergence()]
}

pub fn names() -> Vec<&'static str> {
    vec![MOMENTUM_BREAKOUT, STABILITY_REVERSAL, CONVERGENCE]
}

/// Look up a preset by name, case-insensitively.
pub fn by_name(name: &str) -> Option<ScreeningProfile> {
    let name = name.trim();
    all()
        .into_iter()
        .find(|p| p.name().eq_ignore_ascii_case(name))
}
