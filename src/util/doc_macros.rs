//! Macros for reducing doc comment boilerplate.

/// Documents the internal-consistency panic of the cubic case split.
macro_rules! panic_nan_discriminant {
    () => {
        r"Panics if the cubic discriminant is NaN. This happens when a coefficient is NaN or infinite, when the leading coefficient is zero, or when dividing by a tiny leading coefficient overflows. [`crate::roots()`] reports all of these as errors instead.\n\n"
    };
}
pub(crate) use panic_nan_discriminant;

/// Documents that the leading coefficient must be nonzero.
macro_rules! nonzero_leading {
    () => {
        r"The leading coefficient `p0` must be nonzero, otherwise the result is meaningless (non-finite). Use [`crate::roots()`] when the degree is not known up front.\n\n"
    };
}
pub(crate) use nonzero_leading;

/// Default explanation for the errors of the dispatching entry points.
macro_rules! errors_roots {
    () => {
        r"- `NonFinite`: a coefficient is NaN or infinite.
- `Overflow`: the leading coefficient is so small that the monic coefficients, or intermediate values of the closed-form solvers, are not finite.
- `NoConverge`: degree 5 and above only, the eigenvalue decomposition of the companion matrix did not converge within the configured number of iterations.
"
    };
}
pub(crate) use errors_roots;

/// Explanation for [`crate::Error::LengthMismatch`].
macro_rules! errors_length_mismatch {
    () => {
        r"- `LengthMismatch`: the output buffer does not have exactly one slot per root, i.e. its length differs from the effective degree.
"
    };
}
pub(crate) use errors_length_mismatch;
