use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Result, ShamirError};

/// One point `(x, f(x))` on a secret-encoding polynomial.
///
/// Shares are opaque to the scheme: it assigns them no persistent
/// identity and never mutates them. Distribution and storage are the
/// caller's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub x: BigUint,
    pub y: BigUint,
}

impl Share {
    /// Build a share, rejecting `x = 0`: that abscissa carries the
    /// secret itself.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self> {
        if x.is_zero() {
            return Err(ShamirError::ZeroXCoordinate);
        }
        Ok(Share { x, y })
    }
}
