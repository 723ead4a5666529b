use num_bigint::BigUint;
use thiserror::Error;

pub use math::error::MathError;

/// Result type specialized for secret-sharing operations.
pub type Result<T> = std::result::Result<T, ShamirError>;

/// Errors that can arise while splitting or combining a secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShamirError {
    /// Field arithmetic failed. In practice this is always a zero
    /// inversion, caused by duplicate x-coordinates among the supplied
    /// shares.
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("invalid threshold configuration: threshold {0} for {1} shares")]
    InvalidThreshold(usize, usize),
    #[error("prime modulus {0} is too small for the requested parameters")]
    InvalidPrime(BigUint),
    #[error("insufficient shares: need {0}, got {1}")]
    InsufficientShares(usize, usize),
    #[error("secret {0} is not a residue of the field")]
    SecretOutOfRange(BigUint),
    #[error("share x-coordinate must be nonzero")]
    ZeroXCoordinate,
}
