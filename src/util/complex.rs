//! Helpers for `Complex` that `num` does not provide in the form we need.

use std::cmp::Ordering;

use num::{Complex, Float, One, Zero};

use crate::RealScalar;

/// Principal square root with a pinned branch convention.
///
/// The branch cut lies on the negative real axis. On the cut, the sign of the
/// (zero) imaginary part picks the side: `+0` maps into the upper half plane,
/// `-0` into the lower one. All closed-form solvers go through this function
/// instead of relying on whatever convention the complex type implements.
pub(crate) fn c_sqrt<T: RealScalar>(z: Complex<T>) -> Complex<T> {
    if z.im.is_zero() {
        if z.re.is_sign_positive() {
            return Complex::new(z.re.sqrt(), z.im);
        }
        let im = (-z.re).sqrt();
        return Complex::new(T::zero(), im.copysign(z.im));
    }
    z.sqrt()
}

/// Real number as a complex number with a `+0` imaginary part
pub(crate) fn c_real<T: RealScalar>(re: T) -> Complex<T> {
    Complex::new(re, T::zero())
}

/// Canonical ordering of complex numbers: by real part, then by imaginary part.
///
/// Parts that cannot be compared (NaN) are considered equal, so sorting never
/// panics.
#[must_use]
pub fn complex_cmp<T: Float>(a: &Complex<T>, b: &Complex<T>) -> Ordering {
    let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
    if re_ord != Ordering::Equal {
        return re_ord;
    }
    a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
}

/// Returns true iff `a` strictly precedes `b` in the canonical ordering.
#[must_use]
pub fn complex_lt<T: Float>(a: &Complex<T>, b: &Complex<T>) -> bool {
    complex_cmp(a, b) == Ordering::Less
}

/// Sort a slice of complex numbers lexicographically, using their real part
/// first.
pub fn complex_sort_mut<T: Float>(v: &mut [Complex<T>]) {
    v.sort_by(complex_cmp);
}

/// Compact formatting for log messages, real numbers print without `+i0`.
pub(crate) fn complex_fmt<T: std::fmt::Display + Zero + One + PartialEq>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}
