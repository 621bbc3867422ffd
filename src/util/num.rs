/// Promotes an integer operand to a float.
///
/// Integers beyond `2^53` round to the nearest representable float, which is
/// the promotion rule for mixed arithmetic.
///
/// ## Example
/// ```
/// use monkey::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(5), 5.0);
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a length to a language integer, saturating at `i64::MAX`.
///
/// ## Example
/// ```
/// use monkey::util::num::usize_to_i64;
///
/// assert_eq!(usize_to_i64(3), 3);
/// ```
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Resolves an integer index against a sequence of length `len`.
///
/// ## Returns
/// `Some(position)` when `0 <= index < len`, otherwise `None`. Negative
/// indices never wrap around.
///
/// ## Example
/// ```
/// use monkey::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 3), Some(2));
/// assert_eq!(checked_index(3, 3), None);
/// assert_eq!(checked_index(-1, 3), None);
/// ```
#[must_use]
pub fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&position| position < len)
}
