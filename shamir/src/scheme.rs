//! Caller-facing split/combine boundary.

use num_bigint::BigUint;
use rand::CryptoRng;

use crate::encoder::generate_shares;
use crate::error::{Result, ShamirError};
use crate::interpolate::reconstruct;
use crate::share::Share;

/// A `(threshold, share_count)` sharing session over GF(`prime`).
///
/// Parameter consistency is validated once at construction; the
/// underlying encoder and interpolator stay check-free.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use shamir::Shamir;
///
/// # fn main() -> shamir::Result<()> {
/// let session = Shamir::new(3, 5, BigUint::from(2089u32))?;
/// let shares = session.split(&BigUint::from(1234u32))?;
/// assert_eq!(session.combine(&shares[..3])?, BigUint::from(1234u32));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Shamir {
    threshold: usize,
    share_count: usize,
    prime: BigUint,
}

impl Shamir {
    /// Set up a session in which any `threshold` of `share_count` shares
    /// recover the secret.
    ///
    /// `prime` must be prime; primality is the caller's contract and is
    /// not verified here. It must however exceed `share_count`, so that
    /// the x-coordinates `1..=share_count` are distinct nonzero
    /// residues.
    pub fn new(threshold: usize, share_count: usize, prime: BigUint) -> Result<Self> {
        if threshold == 0 || threshold > share_count {
            return Err(ShamirError::InvalidThreshold(threshold, share_count));
        }
        if prime <= BigUint::from(share_count) {
            return Err(ShamirError::InvalidPrime(prime));
        }

        Ok(Shamir {
            threshold,
            share_count,
            prime,
        })
    }

    /// Split `secret` into shares at x = 1..=`share_count`, drawing
    /// coefficients from the operating system CSPRNG.
    pub fn split(&self, secret: &BigUint) -> Result<Vec<Share>> {
        self.split_with_rng(secret, &mut rand::rng())
    }

    /// Same as [`split`](Self::split), with a caller-supplied randomness
    /// source.
    ///
    /// The source must be cryptographically secure: coefficient
    /// unpredictability is what keeps sub-threshold share sets free of
    /// information about the secret.
    pub fn split_with_rng<R: CryptoRng + ?Sized>(
        &self,
        secret: &BigUint,
        rng: &mut R,
    ) -> Result<Vec<Share>> {
        if secret >= &self.prime {
            return Err(ShamirError::SecretOutOfRange(secret.clone()));
        }

        let xs: Vec<BigUint> = (1..=self.share_count).map(BigUint::from).collect();
        generate_shares(secret, self.threshold, &xs, &self.prime, rng)
    }

    /// Recover the secret from `shares`.
    ///
    /// The threshold is known here, so a short share set is rejected
    /// with [`ShamirError::InsufficientShares`]. Exactly the first
    /// `threshold` shares are interpolated; extras are ignored. Shares
    /// that do not lie on the original polynomial are not detected.
    pub fn combine(&self, shares: &[Share]) -> Result<BigUint> {
        if shares.len() < self.threshold {
            return Err(ShamirError::InsufficientShares(
                self.threshold,
                shares.len(),
            ));
        }

        reconstruct(&shares[..self.threshold], &self.prime)
    }
}
