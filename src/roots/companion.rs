use nalgebra::{DMatrix, RealField, Schur};
use num::{Complex, Float};

use crate::{error::Result, util::complex::complex_sort_mut, Error, RealScalar};

use super::SolverConfig;

/// Frobenius companion matrix of the polynomial, in the form
/// ```text
/// [
///     [-p1/p0, -p2/p0, ..., -pn/p0],
///     [     1,      0, ...,      0],
///     [     0,      1, ...,      0],
///     [     :,      :, ...,      :],
///     [     0,      0, ...,  1,  0]
/// ]
/// ```
/// Its characteristic polynomial is the monic version of `ps`.
pub(crate) fn companion<T: RealScalar + RealField>(ps: &[T]) -> DMatrix<T> {
    debug_assert!(ps.len() >= 2, "constant polynomials have no companion");
    let n = ps.len() - 1;
    let norm = T::one() / ps[0];
    let mut m = DMatrix::<T>::zeros(n, n);
    for (j, &p) in ps[1..].iter().enumerate() {
        m[(0, j)] = p * -norm;
    }
    for i in 1..n {
        m[(i, i - 1)] = T::one();
    }
    m
}

/// Roots of a polynomial of any degree as the eigenvalues of its companion
/// matrix, written into `dst` in ascending order.
///
/// The matrix is not balanced beforehand, so accuracy degrades quickly with
/// the degree and with badly scaled coefficients.
pub(crate) fn companion_roots<T: RealScalar + RealField>(
    ps: &[T],
    config: &SolverConfig<T>,
    dst: &mut [Complex<T>],
) -> Result<()> {
    let n = ps.len() - 1;
    debug_assert_eq!(dst.len(), n);
    log::trace!("companion {{degree: {n}}}");

    // a cap of 0 would make the decomposition iterate without bound
    let max_iter = config.max_iter_per_root.saturating_mul(n).max(1);
    let Some(schur) = Schur::try_new(companion(ps), config.epsilon, max_iter) else {
        log::warn!(
            "eigenvalue decomposition did not converge {{degree: {n}, max_iter: {max_iter}}}"
        );
        return Err(Error::NoConverge { degree: n });
    };

    let eigenvalues = schur.complex_eigenvalues();
    if eigenvalues
        .iter()
        .any(|z| !(Float::is_finite(z.re) && Float::is_finite(z.im)))
    {
        log::warn!("eigenvalue decomposition produced non-finite eigenvalues {{degree: {n}}}");
        return Err(Error::NoConverge { degree: n });
    }
    for (d, z) in dst.iter_mut().zip(eigenvalues.iter()) {
        *d = *z;
    }
    complex_sort_mut(dst);
    Ok(())
}

#[cfg(test)]
mod test {
    use nalgebra::dmatrix;
    use num::complex::Complex64;

    use crate::{__testing::check_roots, roots::SolverConfig, Error};

    use super::{companion, companion_roots};

    #[test]
    fn matrix_layout() {
        let m = companion(&[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(
            m,
            dmatrix![-2.0, -3.0, -4.0; 1.0, 0.0, 0.0; 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn quintic() {
        // (x - 1)(x - 2)(x - 3)(x - 4)(x - 5)
        let ps = [1.0, -15.0, 85.0, -225.0, 274.0, -120.0];
        let mut roots = vec![Complex64::default(); 5];
        companion_roots(&ps, &SolverConfig::default(), &mut roots).unwrap();
        assert!(check_roots(
            roots.clone(),
            (1..=5).map(|r| complex!(f64::from(r))).collect(),
            1E-8
        ));
        assert!(roots.windows(2).all(|w| w[0].re <= w[1].re));
    }

    #[test]
    fn non_finite_companion() {
        // -p1/p0 overflows to -inf
        let ps = [1E-300, 1E300, 1.0, 1.0, 1.0, 1.0];
        let mut roots = vec![Complex64::default(); 5];
        assert_eq!(
            companion_roots(&ps, &SolverConfig::default(), &mut roots),
            Err(Error::NoConverge { degree: 5 })
        );
    }

    #[test]
    fn no_converge() {
        let ps = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut roots = vec![Complex64::default(); 5];
        let config = SolverConfig {
            epsilon: 0.0,
            max_iter_per_root: 1,
        };
        assert_eq!(
            companion_roots(&ps, &config, &mut roots),
            Err(Error::NoConverge { degree: 5 })
        );
    }
}
