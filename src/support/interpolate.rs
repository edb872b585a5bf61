//! One-dimensional linear interpolation primitives.
//!
//! The aerodynamic tables in this crate (polar tables indexed by angle of
//! attack, airfoils indexed by Reynolds number, blade geometry indexed by
//! radius) are all small, tens of entries at most, and are resolved with the same
//! two building blocks: a two-point linear interpolation and a right-closed
//! bracket search over a sorted axis. A linear scan is adequate at these
//! sizes; a binary search would be a drop-in replacement as long as the
//! right-closed tie-break is preserved.

/// Linearly interpolates (or extrapolates) between `(x1, y1)` and `(x2, y2)`.
///
/// The query point `xq` may lie outside `[x1, x2]`. A degenerate segment
/// (`x1 == x2`) returns `y1` rather than dividing by zero, which lets callers
/// collapse both bracket endpoints onto the same sample to express clamping.
#[must_use]
pub fn interp1(x1: f64, y1: f64, x2: f64, y2: f64, xq: f64) -> f64 {
    if x1 == x2 {
        return y1;
    }
    y1 + (xq - x1) * (y2 - y1) / (x2 - x1)
}

/// Finds the pair of adjacent samples bracketing `xq` on a sorted axis.
///
/// The axis is described by its length and an accessor so callers can bracket
/// over struct fields without collecting them first. Intervals are
/// right-closed: index `i` is selected when `x[i-1] < xq <= x[i]`, so a query
/// landing exactly on a sample resolves to the interval ending at it.
/// Queries at or below the first sample return `(0, 0)` and queries above the
/// last return `(len - 1, len - 1)`, collapsing the bracket so that
/// [`interp1`] clamps to the nearest endpoint.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn bracket(len: usize, x: impl Fn(usize) -> f64, xq: f64) -> (usize, usize) {
    assert!(len > 0, "cannot bracket over an empty axis");

    if xq <= x(0) {
        return (0, 0);
    }
    if xq > x(len - 1) {
        return (len - 1, len - 1);
    }
    for i in 1..len {
        if x(i - 1) < xq && xq <= x(i) {
            return (i - 1, i);
        }
    }
    unreachable!("sorted axis must bracket an interior query");
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn interpolates_and_extrapolates() {
        assert_relative_eq!(interp1(0.0, 1.0, 2.0, 3.0, 1.0), 2.0);
        assert_relative_eq!(interp1(0.0, 1.0, 2.0, 3.0, 4.0), 5.0);
        assert_relative_eq!(interp1(0.0, 1.0, 2.0, 3.0, -2.0), -1.0);
    }

    #[test]
    fn degenerate_segment_returns_first_sample() {
        assert_relative_eq!(interp1(1.5, 7.0, 1.5, 9.0, 1.5), 7.0);
        assert_relative_eq!(interp1(1.5, 7.0, 1.5, 9.0, 100.0), 7.0);
    }

    #[test]
    fn bracket_is_right_closed() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let at = |i: usize| xs[i];

        // A query on a sample resolves to the interval ending at it.
        assert_eq!(bracket(xs.len(), at, 1.0), (0, 1));
        assert_eq!(bracket(xs.len(), at, 2.0), (1, 2));
        assert_eq!(bracket(xs.len(), at, 1.5), (1, 2));
    }

    #[test]
    fn bracket_collapses_outside_the_axis() {
        let xs = [0.0, 1.0, 2.0];
        let at = |i: usize| xs[i];

        assert_eq!(bracket(xs.len(), at, -1.0), (0, 0));
        assert_eq!(bracket(xs.len(), at, 0.0), (0, 0));
        assert_eq!(bracket(xs.len(), at, 2.5), (2, 2));
    }
}
