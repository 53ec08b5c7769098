//! Root finding for real polynomials of any degree.
//!
//! Degrees 1 to 4 are solved in closed form, higher degrees as the
//! eigenvalues of the companion matrix. Roots are always returned in
//! ascending order, see [`complex_cmp`](crate::complex_cmp).

use nalgebra::RealField;
use num::{Complex, Float, Zero};

use crate::{
    error::Result,
    poly::trim_leading_zeros,
    util::{
        complex::complex_fmt,
        doc_macros::{errors_length_mismatch, errors_roots},
    },
    Error, RealScalar,
};

mod companion;
mod cubic;
use cubic::try_cubic;
pub use cubic::{cubic, DISCRIMINANT_EPSILON};
mod linear;
pub use linear::linear;
mod quadratic;
pub use quadratic::quadratic;
mod quartic;
pub use quartic::quartic;
use quartic::try_quartic;

/// Tuning of the companion matrix path, which handles degree 5 and above.
///
/// The closed-form solvers have nothing to tune.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<T> {
    /// Tolerance used by the eigenvalue decomposition to decide that an
    /// off-diagonal entry converged to zero.
    pub epsilon: T,

    /// The eigenvalue decomposition gives up after
    /// `max_iter_per_root * degree` iterations.
    pub max_iter_per_root: usize,
}

impl<T: RealScalar> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            epsilon: T::epsilon(),
            max_iter_per_root: 100,
        }
    }
}

/// A configurable root finder.
///
/// The free functions [`roots`] and [`roots_into`] use the default
/// configuration.
///
/// # Examples
/// ```
/// use poly_roots::Solver;
///
/// let solver = Solver::new().with_epsilon(1E-14).with_max_iter_per_root(50);
/// let roots = solver.roots(&[1.0, 0.0, 0.0, 0.0, 0.0, -1.0]).unwrap();
/// assert_eq!(roots.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Solver<T> {
    config: SolverConfig<T>,
}

impl<T: RealScalar> Default for Solver<T> {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

impl<T: RealScalar> Solver<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Convergence tolerance of the eigenvalue decomposition.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Iteration budget of the eigenvalue decomposition, per root.
    #[must_use]
    pub fn with_max_iter_per_root(mut self, max_iter_per_root: usize) -> Self {
        self.config.max_iter_per_root = max_iter_per_root;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

impl<T: RealScalar + RealField> Solver<T> {
    /// All roots of the polynomial with coefficients `coeffs`, highest degree
    /// first, in ascending order.
    ///
    /// Leading zero coefficients are ignored, so the number of roots is the
    /// effective degree of the polynomial. Constant polynomials, including
    /// the zero polynomial, have no roots.
    ///
    /// # Errors
    #[doc = errors_roots!()]
    pub fn roots(&self, coeffs: &[T]) -> Result<Vec<Complex<T>>> {
        let ps = trim_leading_zeros(coeffs);
        let mut dst = vec![Complex::zero(); ps.len().saturating_sub(1)];
        self.solve(ps, &mut dst)?;
        Ok(dst)
    }

    /// Like [`Solver::roots`], but writes the roots into a caller-supplied
    /// buffer, which must have exactly one slot per root.
    ///
    /// # Errors
    #[doc = errors_length_mismatch!()]
    #[doc = errors_roots!()]
    pub fn roots_into<'a>(
        &self,
        coeffs: &[T],
        dst: &'a mut [Complex<T>],
    ) -> Result<&'a mut [Complex<T>]> {
        let ps = trim_leading_zeros(coeffs);
        let degree = ps.len().saturating_sub(1);
        if dst.len() != degree {
            return Err(Error::LengthMismatch {
                expected: degree,
                got: dst.len(),
            });
        }
        self.solve(ps, dst)?;
        Ok(dst)
    }

    /// Dispatch on the degree of the trimmed coefficients `ps`.
    fn solve(&self, ps: &[T], dst: &mut [Complex<T>]) -> Result<()> {
        if let Some(index) = ps.iter().position(|&p| !Float::is_finite(p)) {
            return Err(Error::NonFinite { index });
        }

        let degree = dst.len();
        log::trace!("solving {{degree: {degree}, coeffs: {ps:?}}}");

        if let [lead, rest @ ..] = ps {
            if rest.iter().any(|&p| !Float::is_finite(p / *lead)) {
                log::warn!("monic coefficients overflow {{degree: {degree}, lead: {lead}}}");
                return Err(Error::Overflow { degree });
            }
        }

        match *ps {
            [] | [_] => {}
            [a, b] => {
                if let Some(z) = linear(a, b) {
                    dst[0] = z;
                }
            }
            [p0, p1, p2] => {
                (dst[0], dst[1]) = quadratic(p0, p1, p2);
            }
            [p0, p1, p2, p3] => {
                (dst[0], dst[1], dst[2]) =
                    try_cubic(p0, p1, p2, p3).ok_or(Error::Overflow { degree })?;
            }
            [p0, p1, p2, p3, p4] => {
                (dst[0], dst[1], dst[2], dst[3]) =
                    try_quartic(p0, p1, p2, p3, p4).ok_or(Error::Overflow { degree })?;
            }
            _ => companion::companion_roots(ps, &self.config, dst)?,
        }

        // the monic coefficients can be finite while intermediates are not
        if dst.iter().any(|z| !(Float::is_finite(z.re) && Float::is_finite(z.im))) {
            log::warn!("non-finite roots {{degree: {degree}, coeffs: {ps:?}}}");
            return Err(Error::Overflow { degree });
        }

        if log::log_enabled!(log::Level::Debug) {
            let found: Vec<String> = dst.iter().map(complex_fmt).collect();
            log::debug!("roots {{degree: {degree}, roots: {found:?}}}");
        }
        Ok(())
    }
}

/// All roots of the polynomial with coefficients `coeffs`, highest degree
/// first, in ascending order.
///
/// Uses the default [`SolverConfig`], see [`Solver::roots`].
///
/// # Errors
#[doc = errors_roots!()]
///
/// # Examples
/// ```
/// use poly_roots::roots;
/// use num::Complex;
///
/// // 2x + 1
/// assert_eq!(roots(&[2.0, 1.0]).unwrap(), vec![Complex::new(-0.5, 0.0)]);
///
/// // leading zeros are ignored, the zero polynomial has no roots
/// assert_eq!(roots(&[0.0, 1.0, 2.0]).unwrap().len(), 1);
/// assert!(roots(&[0.0, 0.0]).unwrap().is_empty());
/// ```
pub fn roots<T: RealScalar + RealField>(coeffs: &[T]) -> Result<Vec<Complex<T>>> {
    Solver::default().roots(coeffs)
}

/// All roots of the polynomial with coefficients `coeffs`, written in
/// ascending order into `dst`.
///
/// Uses the default [`SolverConfig`], see [`Solver::roots_into`].
///
/// # Errors
#[doc = errors_length_mismatch!()]
#[doc = errors_roots!()]
///
/// # Examples
/// ```
/// use poly_roots::{roots_into, Error};
/// use num::Complex;
///
/// let mut dst = [Complex::default(); 2];
/// roots_into(&[1.0, 0.0, -1.0], &mut dst).unwrap();
/// assert_eq!(dst, [Complex::new(-1.0, 0.0), Complex::new(1.0, 0.0)]);
///
/// let mut too_long = [Complex::default(); 3];
/// assert_eq!(
///     roots_into(&[1.0, 0.0, -1.0], &mut too_long),
///     Err(Error::LengthMismatch { expected: 2, got: 3 })
/// );
/// ```
pub fn roots_into<'a, T: RealScalar + RealField>(
    coeffs: &[T],
    dst: &'a mut [Complex<T>],
) -> Result<&'a mut [Complex<T>]> {
    Solver::default().roots_into(coeffs, dst)
}
