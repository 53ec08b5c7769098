use num::Complex;

use crate::{
    scalar::lit,
    util::{
        complex::{c_real, c_sqrt, complex_lt},
        doc_macros::nonzero_leading,
    },
    RealScalar,
};

/// Roots of `p0 x^2 + p1 x + p2 = 0`, in ascending order.
///
#[doc = nonzero_leading!()]
/// # Examples
/// ```
/// use poly_roots::quadratic;
/// use num::Complex;
///
/// let (z0, z1) = quadratic(1.0, 0.0, -4.0);
/// assert_eq!(z0, Complex::new(-2.0, 0.0));
/// assert_eq!(z1, Complex::new(2.0, 0.0));
/// ```
#[must_use]
pub fn quadratic<T: RealScalar>(p0: T, p1: T, p2: T) -> (Complex<T>, Complex<T>) {
    // reduce to: x^2 + a x + b = 0
    let norm = T::one() / p0;
    let b = p2 * norm;
    let a = p1 * norm;
    log::trace!("quadratic {{a: {a}, b: {b}}}");

    let ha = lit::<T>(-0.5) * a;
    let delta = c_sqrt(c_real(ha * ha - b));
    let z0 = c_real(ha) + delta;
    let z1 = c_real(ha) - delta;
    if complex_lt(&z0, &z1) {
        (z0, z1)
    } else {
        (z1, z0)
    }
}

#[cfg(test)]
mod test {
    use super::quadratic;

    #[test]
    fn complex_pair() {
        let (z0, z1) = quadratic(3.0, 2.0, 1.0);
        assert!((z0 - complex!(-1.0 / 3.0, -0.471_404_520_791_031_7)).norm() < 1E-15);
        assert!((z1 - complex!(-1.0 / 3.0, 0.471_404_520_791_031_7)).norm() < 1E-15);
    }

    #[test]
    fn double_root() {
        let (z0, z1) = quadratic(1.0, -2.0, 1.0);
        assert_eq!(z0, complex!(1.0));
        assert_eq!(z1, complex!(1.0));
    }

    #[test]
    fn ordered_real_roots() {
        // -x^2 + x + 6 = -(x - 3)(x + 2)
        let (z0, z1) = quadratic(-1.0, 1.0, 6.0);
        assert_eq!(z0, complex!(-2.0));
        assert_eq!(z1, complex!(3.0));
    }

    #[test]
    fn f32() {
        let (z0, z1) = quadratic(1.0f32, 0.0, -9.0);
        assert_eq!(z0, complex!(-3.0f32));
        assert_eq!(z1, complex!(3.0f32));
    }
}
