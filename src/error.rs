use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The caller-supplied output buffer does not have one slot per root.
    #[error("output buffer has length {got}, but the polynomial has {expected} roots")]
    LengthMismatch { expected: usize, got: usize },

    /// A coefficient is NaN or infinite.
    #[error("coefficient at index {index} is not finite")]
    NonFinite { index: usize },

    /// Dividing through by the leading coefficient, or an intermediate value
    /// of a closed-form solver, overflowed.
    #[error("solving degree {degree} polynomial overflowed, the leading coefficient is too small")]
    Overflow { degree: usize },

    /// The eigenvalue decomposition of the companion matrix hit its
    /// iteration limit.
    #[error("eigenvalue decomposition did not converge for degree {degree} polynomial")]
    NoConverge { degree: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
