use num::Complex;

use crate::{util::complex::c_real, RealScalar};

/// Root of `a x + b = 0`.
///
/// Returns [`None`] if `a` is zero, as the equation then has no finite root.
///
/// # Examples
/// ```
/// use poly_roots::linear;
/// use num::Complex;
///
/// assert_eq!(linear(2.0, 1.0), Some(Complex::new(-0.5, 0.0)));
/// assert_eq!(linear(0.0, 1.0), None);
/// ```
#[must_use]
pub fn linear<T: RealScalar>(a: T, b: T) -> Option<Complex<T>> {
    if a.is_zero() {
        return None;
    }
    Some(c_real(-b / a))
}

#[cfg(test)]
mod test {
    use super::linear;

    #[test]
    fn zero_root() {
        assert_eq!(linear(2.0, 0.0).map(|z| z.re), Some(0.0));
    }

    #[test]
    fn degenerate() {
        assert_eq!(linear(0.0, 2.0), None);
        assert_eq!(linear(-0.0, 0.0), None);
    }
}
