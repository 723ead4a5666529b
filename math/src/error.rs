use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Errors raised by arithmetic in GF(p).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MathError {
    /// Inversion of a residue with no multiplicative inverse. Under a
    /// prime modulus this means the residue was zero.
    #[error("modular inverse does not exist")]
    ZeroInverse,
}
