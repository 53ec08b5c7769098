//! Plain coefficient-slice helpers.
//!
//! Coefficients are always ordered highest degree first, so `[1.0, 2.0, 3.0]`
//! is `x^2 + 2x + 3`.

use num::{Complex, One, Zero};

use crate::RealScalar;

/// Number of contiguous zero coefficients at the front of the slice.
fn leading_zeros<T: Zero>(coeffs: &[T]) -> usize {
    coeffs.iter().take_while(|c| c.is_zero()).count()
}

/// The degree of the polynomial after removing leading zero coefficients.
///
/// The zero polynomial (and the empty slice) has degree 0 by convention, as
/// it has no finite roots to report.
///
/// # Examples
/// ```
/// use poly_roots::poly::effective_degree;
///
/// assert_eq!(effective_degree(&[0.0, 0.0, 1.0, 2.0]), 1);
/// assert_eq!(effective_degree(&[0.0, 0.0, 0.0]), 0);
/// assert_eq!(effective_degree(&[5.0]), 0);
/// ```
#[must_use]
pub fn effective_degree<T: Zero>(coeffs: &[T]) -> usize {
    trim_leading_zeros(coeffs).len().saturating_sub(1)
}

/// View of the coefficients starting at the first nonzero one.
///
/// If every coefficient but the constant term is zero, the constant term is
/// kept so the view is never empty for non-empty input.
#[must_use]
pub fn trim_leading_zeros<T: Zero>(coeffs: &[T]) -> &[T] {
    let first = leading_zeros(coeffs).min(coeffs.len().saturating_sub(1));
    &coeffs[first..]
}

/// Evaluate the polynomial at a complex point using Horner's method.
///
/// # Examples
/// ```
/// use poly_roots::poly::eval;
/// use num::Complex;
///
/// // x^2 + 1
/// let y = eval(&[1.0, 0.0, 1.0], Complex::new(0.0, 1.0));
/// assert_eq!(y, Complex::new(0.0, 0.0));
/// ```
#[must_use]
pub fn eval<T: RealScalar>(coeffs: &[T], x: Complex<T>) -> Complex<T> {
    coeffs
        .iter()
        .fold(Complex::zero(), |acc, &c| acc * x + Complex::new(c, T::zero()))
}

/// Monic polynomial from its complex roots, highest degree first.
///
/// Roots of a real polynomial come in conjugate pairs, so for such input the
/// imaginary parts of the result are zero up to rounding.
///
/// # Examples
/// ```
/// use poly_roots::poly::from_roots;
/// use num::Complex;
///
/// // (x - 1)(x + 1) = x^2 - 1
/// let p = from_roots(&[Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)]);
/// assert_eq!(p, vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)]);
/// ```
#[must_use]
pub fn from_roots<T: RealScalar>(roots: &[Complex<T>]) -> Vec<Complex<T>> {
    let mut coeffs = Vec::with_capacity(roots.len() + 1);
    coeffs.push(Complex::<T>::one());
    for &r in roots {
        // multiply by (x - r), highest degree first
        coeffs.push(Complex::zero());
        for i in (1..coeffs.len()).rev() {
            let prev = coeffs[i - 1];
            coeffs[i] = coeffs[i] - prev * r;
        }
    }
    coeffs
}
