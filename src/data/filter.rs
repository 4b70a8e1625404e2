use super::model::{NumberList, SquareResult};

// ---------------------------------------------------------------------------
// Natural-square predicate
// ---------------------------------------------------------------------------

/// Classify one value, returning its truncated integer form when it is a
/// natural square.
///
/// With `r = sqrt(n)`, `n` qualifies when:
/// * `r == 0.0` → zero counts as a natural square
/// * `n % r == 0.0` and `n / r == r` → `r` divides `n` and is its exact root
///
/// Negative (and any non-finite) `n` is rejected before `sqrt`, so NaN never
/// reaches the comparisons. The emitted value truncates toward zero.
pub fn classify(n: f64) -> Option<SquareResult> {
    if !n.is_finite() || n < 0.0 {
        return None;
    }

    let r = n.sqrt();
    let is_square = r == 0.0 || (n % r == 0.0 && n / r == r);

    // `as` truncates toward zero and saturates at the i64 bounds.
    is_square.then(|| SquareResult(n as i64))
}

/// Keep the natural squares of `numbers`, preserving input order and
/// duplicates.
pub fn natural_squares(numbers: &NumberList) -> Vec<SquareResult> {
    let squares: Vec<SquareResult> = numbers
        .values
        .iter()
        .copied()
        .filter_map(classify)
        .collect();
    log::info!(
        "{} of {} values are natural squares",
        squares.len(),
        numbers.len()
    );
    squares
}
