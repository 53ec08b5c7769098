//! Roots of real polynomials.
//!
//! Polynomials up to degree 4 are solved with closed-form formulas (Cardano
//! for cubics, Ferrari for quartics), with special handling of degenerate
//! cases. Higher degrees fall back to the eigenvalues of the companion matrix.
//!
//! All roots are returned as complex numbers, sorted by real part and then by
//! imaginary part, so results are deterministic.
//!
//! # Examples
//! ```
//! use poly_roots::roots;
//!
//! // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let zs = roots(&[1.0_f64, -6.0, 11.0, -6.0]).unwrap();
//! assert_eq!(zs.len(), 3);
//! assert!((zs[0].re - 1.0).abs() < 1E-12);
//! assert!((zs[2].re - 3.0).abs() < 1E-12);
//! ```
//!
//! # Branch cuts
//! Square roots of complex intermediates use the principal branch with the cut
//! on the negative real axis; a zero imaginary part keeps its sign, so `+0`
//! lands in the upper half plane and `-0` in the lower one. Real cube roots
//! are odd, `cbrt(-x) == -cbrt(x)`.
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use num;

/// Shorthand for constructing complex numbers, `complex!(re)` has a zero
/// imaginary part.
///
/// ```
/// use poly_roots::complex;
/// use num::Complex;
///
/// assert_eq!(complex!(1.0, 2.0), Complex::new(1.0, 2.0));
/// assert_eq!(complex!(1.0), Complex::new(1.0, 0.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
    ($re:expr) => {
        $crate::num::Complex::new($re, $crate::num::Zero::zero())
    };
}

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::RealScalar;

pub mod poly;

mod roots;
pub use roots::{
    cubic, linear, quadratic, quartic, roots, roots_into, Solver, SolverConfig,
    DISCRIMINANT_EPSILON,
};

mod util;
pub use util::complex::{complex_cmp, complex_lt, complex_sort_mut};

#[doc(hidden)]
pub use util::__testing;
