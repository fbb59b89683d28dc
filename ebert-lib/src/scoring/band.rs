/// Neutral starting point of every axis score.
pub const BASELINE: f64 = 50.0;

/// One rung of a threshold ladder: an adjustment applied when the predicate holds.
#[derive(Debug, Clone, Copy)]
pub struct Band<T> {
    pub applies: fn(T) -> bool,
    pub adjustment: f64,
}

impl<T> Band<T> {
    pub const fn new(applies: fn(T) -> bool, adjustment: f64) -> Self {
        Self { applies, adjustment }
    }
}

/// Adjustment of the first band whose predicate holds, or zero when none does.
///
/// Bands are tried in order, so a ladder must list its most specific band first.
pub fn first_match<T: Copy>(bands: &[Band<T>], input: T) -> f64 {
    bands.iter().find(|band| (band.applies)(input)).map_or(0.0, |band| band.adjustment)
}

/// Restrict a score to `[0, 100]`.
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    0.0_f64.max(100.0_f64.min(value))
}

/// `numerator / denominator`, or zero when the denominator is zero.
#[expect(clippy::cast_precision_loss, reason = "counters are far below 2^52")]
pub fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
