//! PSY (Psychological Line) indicator

use crate::common::math;
use crate::models::Bar;

/// Share of up-closing days among the last `window` close-to-close changes,
/// scaled to 0-100 and rounded to 2 decimals.
///
/// Needs `window + 1` bars, so the first defined value is at index `window`.
pub fn calculate_psy(bars: &[Bar], window: usize) -> Vec<Option<f64>> {
    let len = bars.len();
    let mut out = vec![None; len];
    if window == 0 || len <= window {
        return out;
    }

    let up: Vec<bool> = bars
        .windows(2)
        .map(|pair| pair[1].close > pair[0].close)
        .collect();

    // up[j] describes the change into bar j + 1
    let mut count = up[..window].iter().filter(|u| **u).count();
    out[window] = Some(psy_value(count, window));
    for i in (window + 1)..len {
        if up[i - 1] {
            count += 1;
        }
        if up[i - 1 - window] {
            count -= 1;
        }
        out[i] = Some(psy_value(count, window));
    }
    out
}

fn psy_value(up_days: usize, window: usize) -> f64 {
    math::round_to(up_days as f64 / window as f64 * 100.0, 2)
}
