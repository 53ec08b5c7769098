use num::{Complex, Zero};

use crate::{
    scalar::lit,
    util::{
        complex::{c_real, c_sqrt, complex_sort_mut},
        doc_macros::{nonzero_leading, panic_nan_discriminant},
    },
    RealScalar,
};

use super::{cubic::try_cubic, quadratic};

/// Roots of `p0 x^4 + p1 x^3 + p2 x^2 + p3 x + p4 = 0`, in ascending order.
///
/// Degenerate quartics (`x^4 + a x^3`, `x^4 + d` and `x^4 + a x^3 + b x^2`)
/// are solved directly, everything else goes through Ferrari's method using
/// the real root of the resolvent cubic.
///
#[doc = nonzero_leading!()]
/// # Panics
#[doc = panic_nan_discriminant!()]
/// # Examples
/// ```
/// use poly_roots::quartic;
/// use num::Complex;
///
/// let (z0, z1, z2, z3) = quartic(1.0, 5.0, 0.0, 0.0, 0.0);
/// assert_eq!(z0, Complex::new(-5.0, 0.0));
/// assert_eq!([z1, z2, z3], [Complex::new(0.0, 0.0); 3]);
/// ```
#[must_use]
pub fn quartic<T: RealScalar>(
    p0: T,
    p1: T,
    p2: T,
    p3: T,
    p4: T,
) -> (Complex<T>, Complex<T>, Complex<T>, Complex<T>) {
    try_quartic(p0, p1, p2, p3, p4).unwrap_or_else(|| {
        panic!(
            "impossible cubic discriminant in the resolvent of quartic {p0:?}, {p1:?}, {p2:?}, {p3:?}, {p4:?}"
        )
    })
}

pub(crate) type Roots4<T> = (Complex<T>, Complex<T>, Complex<T>, Complex<T>);

/// Like [`quartic`], but returns [`None`] instead of panicking when the
/// resolvent cubic cannot be solved because its coefficients overflowed.
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub(crate) fn try_quartic<T: RealScalar>(p0: T, p1: T, p2: T, p3: T, p4: T) -> Option<Roots4<T>> {
    // reduce to monic form: x^4 + a x^3 + b x^2 + c x + d = 0
    let ip = T::one() / p0;
    let a = p1 * ip;
    let b = p2 * ip;
    let c = p3 * ip;
    let d = p4 * ip;
    log::trace!("quartic {{a: {a}, b: {b}, c: {c}, d: {d}}}");

    if b.is_zero() && c.is_zero() {
        if d.is_zero() {
            log::debug!("quartic: x^4 + a x^3");
            let zero = Complex::zero();
            let root = c_real(-a);
            return Some(if a > T::zero() {
                (root, zero, zero, zero)
            } else {
                (zero, zero, zero, root)
            });
        }
        if a.is_zero() {
            log::debug!("quartic: x^4 + d");
            return Some(sorted(biquadratic_roots(d)));
        }
    }

    if c.is_zero() && d.is_zero() {
        log::debug!("quartic: x^2 (x^2 + a x + b)");
        let (z0, z1) = quadratic(T::one(), a, b);
        return Some(sorted([z0, z1, Complex::zero(), Complex::zero()]));
    }

    ferrari(a, b, c, d).map(sorted)
}

/// The four roots of `x^4 + d = 0`, `d != 0`.
fn biquadratic_roots<T: RealScalar>(d: T) -> [Complex<T>; 4] {
    let (z2, z3) = if d > T::zero() {
        let z3 = c_sqrt(c_real(d.sqrt()) * Complex::i());
        (Complex::new(T::zero(), -T::one()) * z3, z3)
    } else {
        let z3 = c_sqrt(c_real((-d).sqrt()));
        (z3 * Complex::i(), z3)
    };
    let z1 = Complex::new(-z2.re, -z2.im);
    let z0 = Complex::new(-z3.re, -z3.im);
    [z0, z1, z2, z3]
}

/// Ferrari's method on the monic quartic `x^4 + a x^3 + b x^2 + c x + d`.
#[allow(clippy::many_single_char_names, clippy::similar_names)]
fn ferrari<T: RealScalar>(a: T, b: T, c: T, d: T) -> Option<[Complex<T>; 4]> {
    let four = lit::<T>(4.0);
    let quarter = lit::<T>(0.25);
    let half = lit::<T>(0.5);
    let two = lit::<T>(2.0);

    // resolvent cubic: y^3 + A y^2 + B y + C = 0
    let a2 = a * a;
    let ya = -b;
    let yb = c * a - four * d;
    let yc = four * b * d - c * c - a2 * d;
    let y = resolvent_real_root(ya, yb, yc)?;
    log::debug!("quartic: resolvent root {{y: {y}}}");

    let big_r = c_sqrt(c_real(quarter * a2 - b + y));
    let f = c_real(lit::<T>(0.75) * a2 - two * b);
    let g = c_real(two) * c_sqrt(c_real(y * y - four * d));

    let (big_d, big_e) = if big_r.is_zero() {
        (c_sqrt(f + g), c_sqrt(f - g))
    } else {
        let h = c_real(quarter * (four * a * b - lit::<T>(8.0) * c - a * a2)) / big_r;
        let r2 = big_r * big_r;
        (c_sqrt(f - r2 + h), c_sqrt(f - r2 - h))
    };

    let rr = big_r.scale(half);
    let dd = big_d.scale(half);
    let ee = big_e.scale(half);
    let za = c_real(quarter * a);

    Some([
        -za + rr + dd,
        -za + rr - dd,
        -za - rr + ee,
        -za - rr - ee,
    ])
}

/// First root of the resolvent cubic, in ascending order, whose imaginary
/// part is exactly zero.
///
/// The cubic solver constructs real roots with an exact zero imaginary part,
/// and a real cubic always has one, so the fallback is never expected to run.
fn resolvent_real_root<T: RealScalar>(ya: T, yb: T, yc: T) -> Option<T> {
    let (y1, y2, y3) = try_cubic(T::one(), ya, yb, yc)?;
    if let Some(y) = [y1, y2, y3].into_iter().find(|y| y.im.is_zero()) {
        return Some(y.re);
    }
    log::warn!("resolvent cubic has no real root {{roots: [{y1}, {y2}, {y3}]}}, using y = 0");
    Some(T::zero())
}

fn sorted<T: RealScalar>(mut zs: [Complex<T>; 4]) -> Roots4<T> {
    complex_sort_mut(&mut zs);
    (zs[0], zs[1], zs[2], zs[3])
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use crate::__testing::check_roots;

    use super::quartic;

    type Roots4 = (Complex64, Complex64, Complex64, Complex64);

    fn as_vec(zs: Roots4) -> Vec<Complex64> {
        vec![zs.0, zs.1, zs.2, zs.3]
    }

    fn assert_close(got: &[Complex64], expected: &[Complex64], tol: f64) {
        assert_eq!(got.len(), expected.len());
        for (z, e) in got.iter().zip(expected) {
            assert!((z - e).norm() < tol, "{got:?} != {expected:?}");
        }
    }

    #[test]
    fn cubed_zero_positive_a() {
        let zs = as_vec(quartic(1.0, 5.0, 0.0, 0.0, 0.0));
        assert_eq!(
            zs,
            vec![complex!(-5.0), complex!(0.0), complex!(0.0), complex!(0.0)]
        );
    }

    #[test]
    fn cubed_zero_negative_a() {
        let zs = as_vec(quartic(1.0, -5.0, 0.0, 0.0, 0.0));
        assert_eq!(
            zs,
            vec![complex!(0.0), complex!(0.0), complex!(0.0), complex!(5.0)]
        );
    }

    #[test]
    fn quadruple_zero() {
        let zs = as_vec(quartic(1.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(zs, vec![complex!(0.0); 4]);
        // -a is -0.0, which is not positive, so it lands last
        assert!(zs[3].re.is_sign_negative());
        assert!(zs[..3].iter().all(|z| z.re.is_sign_positive()));
    }

    #[test]
    fn biquadratic_positive_d() {
        let zs = as_vec(quartic(1.0, 0.0, 0.0, 0.0, 9.0));
        let s = 1.224_744_871_391_589;
        assert!(check_roots(
            zs.clone(),
            vec![
                complex!(-s, -s),
                complex!(-s, s),
                complex!(s, -s),
                complex!(s, s)
            ],
            1E-14
        ));
        for z in zs {
            assert!((z.powi(4) + 9.0).norm() < 1E-12);
        }
    }

    #[test]
    fn biquadratic_negative_d() {
        let zs = as_vec(quartic(1.0, 0.0, 0.0, 0.0, -9.0));
        let s = 1.732_050_807_568_877_2;
        assert_close(
            &zs,
            &[
                complex!(-s, 0.0),
                complex!(0.0, -s),
                complex!(0.0, s),
                complex!(s, 0.0),
            ],
            1E-15,
        );
    }

    #[test]
    fn double_zero() {
        let zs = as_vec(quartic(1.0, 25.0, 4.0, 0.0, 0.0));
        assert_close(
            &zs,
            &[
                complex!(-24.838_962_679_253_065),
                complex!(-0.161_037_320_746_933_33),
                complex!(0.0),
                complex!(0.0),
            ],
            1E-12,
        );
    }

    #[test]
    fn general() {
        let zs = as_vec(quartic(5.0, 4.0, 3.0, 2.0, 1.0));
        assert_close(
            &zs,
            &[
                complex!(-0.537_832_274_902_989_9, -0.358_284_686_345_128),
                complex!(-0.537_832_274_902_989_9, 0.358_284_686_345_128),
                complex!(0.137_832_274_902_989_88, -0.678_154_389_105_336_4),
                complex!(0.137_832_274_902_989_88, 0.678_154_389_105_336_4),
            ],
            1E-12,
        );
    }

    #[test]
    fn general_zero_resolvent_radius() {
        let zs = as_vec(quartic(
            2.220_684_680_802_133_7,
            7.643_281_053_997_895,
            8.831_759_446_092_846,
            3.880_673_545_129_404,
            0.572_455_138_014_407_7,
        ));
        // ill-conditioned: two close pairs of roots
        assert_close(
            &zs,
            &[
                complex!(-1.342_829_043_850_011_7, -1.345_173_146_522_382e-6),
                complex!(-1.342_829_043_850_011_7, 1.345_173_146_522_382e-6),
                complex!(-0.378_099_893_084_219_1, -1.345_173_146_522_382e-6),
                complex!(-0.378_099_893_084_219_1, 1.345_173_146_522_382e-6),
            ],
            1E-5,
        );
    }

    #[test]
    fn four_real_roots() {
        // (x + 2)(x + 1)(x - 1)(x - 3)
        let zs = as_vec(quartic(1.0, -1.0, -7.0, 1.0, 6.0));
        assert!(check_roots(
            zs,
            vec![complex!(-2.0), complex!(-1.0), complex!(1.0), complex!(3.0)],
            1E-9
        ));
    }
}
