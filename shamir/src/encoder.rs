//! Builds the secret-encoding polynomial and evaluates it into shares.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::Result;
use crate::share::Share;

/// Evaluate `f(x) = Σ coeffs[k]·x^k (mod p)` by accumulated powers,
/// reducing after every multiplication.
fn evaluate(coeffs: &[BigUint], x: &BigUint, p: &BigUint) -> BigUint {
    let mut acc = BigUint::zero();
    let mut x_power = BigUint::one();

    for coeff in coeffs {
        acc = (acc + coeff * &x_power) % p;
        x_power = x_power * x % p;
    }

    acc
}

/// Draw a field element uniformly from `[0, bound)` by rejection
/// sampling. The top byte is masked down to the bound's bit length, so
/// each draw succeeds with probability > 1/2.
fn random_below<R: CryptoRng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    debug_assert!(!bound.is_zero());

    let bits = bound.bits();
    let nbytes = bits.div_ceil(8) as usize;
    let excess = (nbytes as u64 * 8 - bits) as u32;
    let mut buf = vec![0u8; nbytes];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] >>= excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Produce one share per x-coordinate in `xs`.
///
/// The encoding polynomial is `f(x) = secret + a_1·x + … +
/// a_{t-1}·x^{t-1}`, each `a_k` drawn independently and uniformly from
/// `[0, p)`. The coefficient vector lives only inside this call; it is
/// never returned, retained, or logged.
///
/// Recoverability (`xs.len() >= threshold`) is reconstruction policy and
/// is not enforced here; [`Shamir`](crate::Shamir) checks it at the
/// boundary where the threshold is known.
pub fn generate_shares<R: CryptoRng + ?Sized>(
    secret: &BigUint,
    threshold: usize,
    xs: &[BigUint],
    prime: &BigUint,
    rng: &mut R,
) -> Result<Vec<Share>> {
    let coefficients: Vec<BigUint> = std::iter::once(secret.clone())
        .chain((1..threshold).map(|_| random_below(rng, prime)))
        .collect();

    xs.iter()
        .map(|x| Share::new(x.clone(), evaluate(&coefficients, x, prime)))
        .collect()
}
