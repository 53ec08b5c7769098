//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, Complex};

use crate::{poly::from_roots, util::complex::complex_cmp};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Infinite stream of real numbers (as complex numbers), uniform in
/// `[min, max)`.
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max - self.min, self.min);
        Some(Complex64 { re, im: 0.0 })
    }
}

/// Infinite stream of complex numbers, uniform in a rectangle.
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex::new(re, im))
    }
}

/// Pairs every number of the upstream with its conjugate.
pub struct RandStreamConjugate64<I: Iterator<Item = Complex<f64>>> {
    upstream: I,
}

impl<I: Iterator<Item = Complex<f64>>> RandStreamConjugate64<I> {
    pub const fn new(upstream: I) -> Self {
        Self { upstream }
    }
}

impl<I: Iterator<Item = Complex<f64>>> Iterator for RandStreamConjugate64<I> {
    type Item = (Complex64, Complex64);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.upstream.next()?;
        Some((c, c.conj()))
    }
}

/// Real coefficients, highest degree first, of `scale * prod(x - root)`.
///
/// The roots must be closed under conjugation for the result to be exact.
fn scaled_real_coeffs(roots: &[Complex64], scale: f64) -> Vec<f64> {
    from_roots(roots).into_iter().map(|c| c.re * scale).collect_vec()
}

/// Generate one test case of real roots, returns the coefficients and the
/// roots they were built from.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Vec<f64>, Vec<Complex64>) {
    let roots = roots_stream.take(degree).map(|z| complex!(z.re)).collect_vec();
    let scale = scale_stream.next().expect("rng stream should be infinite").re;
    (scaled_real_coeffs(&roots, scale), roots)
}

/// Generate one test case where the roots come in conjugate pairs, plus one
/// real root for odd degrees.
pub fn test_case_conj_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Vec<f64>, Vec<Complex64>) {
    let mut roots_stream = RandStreamConjugate64::new(roots_stream);
    let mut roots = roots_stream
        .by_ref()
        .take(degree / 2)
        .flat_map(|(r1, r2)| [r1, r2])
        .collect_vec();
    if degree % 2 == 1 {
        let (r, _) = roots_stream.next().expect("rng stream should be infinite");
        roots.push(complex!(r.re));
    }
    let scale = scale_stream.next().expect("rng stream should be infinite").re;
    (scaled_real_coeffs(&roots, scale), roots)
}

/// Generate one test case of real roots where the first root is repeated
/// `multiplicity` extra times.
pub fn test_case_multiple_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    degree: usize,
    multiplicity: usize,
) -> (Vec<f64>, Vec<Complex64>) {
    let mut roots = roots_stream
        .take(degree - multiplicity)
        .map(|z| complex!(z.re))
        .collect_vec();
    let first_root = roots[0];
    for _ in 0..multiplicity {
        roots.push(first_root);
    }
    let scale = scale_stream.next().expect("rng stream should be infinite").re;
    (scaled_real_coeffs(&roots, scale), roots)
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

/// Check that roots are non-decreasing in the canonical ordering
#[must_use]
pub fn check_sorted(roots: &[Complex64]) -> bool {
    roots
        .iter()
        .tuple_windows()
        .all(|(a, b)| complex_cmp(a, b).is_le())
}

/// Check that the monic polynomial rebuilt from `roots` matches `coeffs`
/// divided by its leading coefficient, with a tolerance relative to the
/// largest normalized coefficient.
#[must_use]
pub fn check_round_trip(coeffs: &[f64], roots: &[Complex64], tol: f64) -> bool {
    let coeffs = crate::poly::trim_leading_zeros(coeffs);
    if coeffs.len() != roots.len() + 1 {
        return false;
    }
    let lead = coeffs[0];
    let rebuilt = from_roots(roots);
    let scale = coeffs
        .iter()
        .map(|c| (c / lead).abs())
        .fold(1.0, f64::max);
    coeffs
        .iter()
        .zip(rebuilt)
        .all(|(c, r)| (r - complex!(c / lead)).norm() <= tol * scale)
}
