/// Lowest metric value, for a hopeless position.
pub const MIN_VALUE: i32 = 0;

/// Highest metric value, for a won position.
pub const MAX_VALUE: i32 = 100;

/// Metric value of a balanced position.
pub const HALF_VALUE: i32 = (MAX_VALUE - MIN_VALUE) / 2;

/// Compares the `own` and `other` measurements of a metric whose raw count
/// never exceeds `max`, mapping the comparison onto \[0, 100\].
///
/// Equal counts give 50. When one side has nothing the other side's count is
/// scaled linearly. Otherwise the advantage `(larger - 1) / smaller` is
/// scaled by `max`. Results are truncated toward zero.
///
/// Counts above `max` are clamped to `max`, which keeps the result inside
/// \[0, 100\].
///
/// # Example
///
/// ```
/// use oxidraughts_evaluator::metric::ratio;
///
/// assert_eq!(ratio(12, 3, 3), 50);
/// assert_eq!(ratio(12, 0, 12), 0);
/// assert_eq!(ratio(12, 12, 0), 100);
/// assert_eq!(ratio(12, 2, 3), 45);
/// ```
///
/// # Panics
///
/// Panics if `max` is not positive.
#[must_use]
pub fn ratio(max: i32, own: i32, other: i32) -> i32 {
    assert!(max > 0, "metric maximum must be positive");
    let own = own.clamp(0, max);
    let other = other.clamp(0, max);

    if own == 0 {
        HALF_VALUE - ceil_div(HALF_VALUE * other, max)
    } else if other == 0 {
        HALF_VALUE + HALF_VALUE * own / max
    } else if own > other {
        HALF_VALUE + HALF_VALUE * (own - 1) / (other * max)
    } else if own < other {
        HALF_VALUE - ceil_div(HALF_VALUE * (other - 1), own * max)
    } else {
        HALF_VALUE
    }
}

/// Ceiling division of non-negative `a` by positive `b`.
const fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}
