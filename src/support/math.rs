//! Scalar math helpers shared by the solution models.

use num_traits::Float;

/// Natural logarithm extended to non-positive arguments.
///
/// Returns `ln(v)` for `v > 0` and exactly zero for `v ≤ 0`.
///
/// Configurational entropy terms have the form `y·ln(y)`, whose limit as
/// `y → 0` is zero. Multiplying `safe_ln(y)` by `y` gives that limit directly
/// instead of `0 · -∞ = NaN`.
///
/// A `NaN` argument is returned unchanged.
///
/// ```
/// use twine_sublattice::support::math::safe_ln;
///
/// assert_eq!(safe_ln(0.0), 0.0);
/// assert_eq!(safe_ln(-0.5), 0.0);
/// assert_eq!(safe_ln(1.0), 0.0);
/// assert_eq!(safe_ln(0.5_f64), 0.5_f64.ln());
/// ```
#[inline]
pub fn safe_ln<T: Float>(v: T) -> T {
    if v > T::zero() {
        v.ln()
    } else if v.is_nan() {
        v
    } else {
        T::zero()
    }
}

/// Returns `v · safe_ln(v)`, the ideal-mixing contribution of one site fraction.
#[inline]
pub fn x_ln_x<T: Float>(v: T) -> T {
    v * safe_ln(v)
}
