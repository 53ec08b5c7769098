use num::Complex;

use crate::{
    scalar::lit,
    util::{
        complex::{c_real, complex_sort_mut},
        doc_macros::{nonzero_leading, panic_nan_discriminant},
    },
    RealScalar,
};

/// Absolute tolerance on the cubic discriminant below which the cubic is
/// treated as having a repeated root.
///
/// This is not scaled with the magnitude of the coefficients, so polynomials
/// with very large or very small coefficients may be classified differently
/// than their normalized counterparts.
pub const DISCRIMINANT_EPSILON: f64 = 1E-15;

/// Roots of `p0 x^3 + p1 x^2 + p2 x + p3 = 0`, in ascending order.
///
/// Uses Cardano's formula for a single real root, and the trigonometric
/// (Viète) form when there are three distinct real roots.
///
#[doc = nonzero_leading!()]
/// # Panics
#[doc = panic_nan_discriminant!()]
/// # Examples
/// ```
/// use poly_roots::cubic;
///
/// // (x - 1)(x - 2)(x - 3)
/// let (z0, z1, z2) = cubic(1.0_f64, -6.0, 11.0, -6.0);
/// assert!((z0.re - 1.0).abs() < 1E-12);
/// assert!((z1.re - 2.0).abs() < 1E-12);
/// assert!((z2.re - 3.0).abs() < 1E-12);
/// ```
#[must_use]
pub fn cubic<T: RealScalar>(p0: T, p1: T, p2: T, p3: T) -> (Complex<T>, Complex<T>, Complex<T>) {
    try_cubic(p0, p1, p2, p3).unwrap_or_else(|| {
        panic!("impossible cubic discriminant for coefficients {p0:?}, {p1:?}, {p2:?}, {p3:?}")
    })
}

pub(crate) type Roots3<T> = (Complex<T>, Complex<T>, Complex<T>);

/// Like [`cubic`], but returns [`None`] instead of panicking when the
/// discriminant is NaN, which happens when the monic coefficients overflow.
#[allow(clippy::many_single_char_names)]
pub(crate) fn try_cubic<T: RealScalar>(p0: T, p1: T, p2: T, p3: T) -> Option<Roots3<T>> {
    // reduce to monic form: x^3 + a x^2 + b x + c = 0
    let ip = T::one() / p0;
    let a = p1 * ip;
    let b = p2 * ip;
    let c = p3 * ip;
    log::trace!("cubic {{a: {a}, b: {b}, c: {c}}}");

    let k3 = T::one() / lit(3.0);
    let k27 = T::one() / lit(27.0);
    let two = lit::<T>(2.0);
    let half = lit::<T>(0.5);

    // depressed cubic t^3 + p t + q = 0, with x = t - a/3
    let a2 = a * a;
    let p = k3 * (lit::<T>(3.0) * b - a2);
    let q = k27 * (two * a2 * a - lit::<T>(9.0) * a * b + lit::<T>(27.0) * c);
    let shift = a * k3;

    if p.is_zero() && q.is_zero() {
        log::debug!("cubic: triple root");
        let x = c_real(-shift);
        return Some((x, x, x));
    }

    let delta = lit::<T>(0.25) * (q * q) + (p * p * p) * k27;
    let eps = lit::<T>(DISCRIMINANT_EPSILON);

    if delta.is_zero() || delta.abs() < eps {
        log::debug!("cubic: repeated root {{delta: {delta}}}");
        let cbrt = (half * q).cbrt();
        let x0 = c_real(-two * cbrt - shift);
        let x1 = c_real(cbrt - shift);
        return Some(if x0.re < x1.re {
            (x0, x1, x1)
        } else {
            (x1, x1, x0)
        });
    }

    if delta > eps {
        log::debug!("cubic: one real root {{delta: {delta}}}");
        let sq = delta.sqrt();
        let hq = half * q;
        let u = (-hq + sq).cbrt();
        let v = (hq + sq).cbrt();
        let re = -half * (u - v) - shift;
        let im = half * (u + v) * lit::<T>(3.0).sqrt();

        let mut zs = [
            c_real(u - v - shift),
            Complex::new(re, im),
            Complex::new(re, -im),
        ];
        complex_sort_mut(&mut zs);
        return Some((zs[0], zs[1], zs[2]));
    }

    if delta < eps {
        log::debug!("cubic: three real roots {{delta: {delta}}}");
        let pp = -p / lit(3.0);
        let r = (pp * pp * pp).sqrt();
        // rounding can push the ratio just outside [-1, 1]
        let theta = (-half * q / r).max(-T::one()).min(T::one()).acos();
        let r3 = two * r.cbrt();
        let tau = two * T::PI();

        let mut zs = [
            c_real(r3 * (theta * k3).cos() - shift),
            c_real(r3 * ((theta + tau) * k3).cos() - shift),
            c_real(r3 * ((theta + two * tau) * k3).cos() - shift),
        ];
        complex_sort_mut(&mut zs);
        return Some((zs[0], zs[1], zs[2]));
    }

    log::debug!("cubic: no branch for discriminant {{delta: {delta}}}");
    None
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use crate::__testing::check_roots;

    use super::cubic;

    fn as_vec(zs: (Complex64, Complex64, Complex64)) -> Vec<Complex64> {
        vec![zs.0, zs.1, zs.2]
    }

    #[test]
    fn triple_root() {
        let zs = as_vec(cubic(1.0, 1.0, 1.0 / 3.0, 1.0 / 27.0));
        for z in zs {
            assert!((z - complex!(-1.0 / 3.0)).norm() < 1E-15);
        }
    }

    #[test]
    fn repeated_root() {
        let zs = as_vec(cubic(1.0, 0.0, -1.0, 2.0 / 3.0 * (1.0f64 / 3.0).sqrt()));
        let expected = [
            complex!(-1.154_700_538_379_251_5),
            complex!(0.577_350_269_189_625_7),
            complex!(0.577_350_269_189_625_7),
        ];
        for (z, e) in zs.iter().zip(expected) {
            assert!((z - e).norm() < 1E-12, "{z} != {e}");
            assert_eq!(z.im, 0.0);
        }
    }

    #[test]
    fn one_real_root() {
        let zs = as_vec(cubic(4.0, 3.0, 2.0, 1.0));
        let expected = [
            complex!(-0.605_829_586_188_268),
            complex!(-0.072_085_206_905_866, -0.638_326_735_148_376_5),
            complex!(-0.072_085_206_905_866, 0.638_326_735_148_376_5),
        ];
        for (z, e) in zs.iter().zip(expected) {
            assert!((z - e).norm() < 1E-12, "{z} != {e}");
        }
    }

    #[test]
    fn three_real_roots() {
        let zs = as_vec(cubic(1.0, -6.0, 11.0, -6.0));
        assert!(check_roots(
            zs.clone(),
            vec![complex!(1.0), complex!(2.0), complex!(3.0)],
            1E-12
        ));
        assert!(zs[0].re < zs[1].re && zs[1].re < zs[2].re);
    }

    #[test]
    fn scaled_coefficients() {
        // 2 (x + 1)(x^2 + 1)
        let zs = as_vec(cubic(2.0, 2.0, 2.0, 2.0));
        assert!(check_roots(
            zs,
            vec![complex!(-1.0), complex!(0.0, 1.0), complex!(0.0, -1.0)],
            1E-12
        ));
    }

    #[test]
    #[should_panic(expected = "impossible cubic discriminant")]
    fn nan_coefficient() {
        let _ = cubic(1.0, f64::NAN, 0.0, 0.0);
    }
}
