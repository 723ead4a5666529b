//! Arithmetic in the prime field GF(p).
//!
//! The modulus is an explicit parameter of every operation; nothing in
//! this module caches a default prime or holds cross-call state.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{MathError, Result};

/// Normalize an arbitrary integer into the canonical range `[0, p)`.
///
/// `%` on `BigInt` keeps the dividend's sign, so a negative remainder
/// needs one extra addition of `p` before it is a field element.
///
/// `p` must be nonzero.
pub fn reduce(x: &BigInt, p: &BigUint) -> BigUint {
    let p = BigInt::from(p.clone());
    let mut r = x % &p;
    if r.sign() == Sign::Minus {
        r += &p;
    }
    r.magnitude().clone()
}

/// Field subtraction `a - b (mod p)`, normalized into `[0, p)`.
pub fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    reduce(&(BigInt::from(a.clone()) - BigInt::from(b.clone())), p)
}

/// Field multiplication `a · b (mod p)`.
pub fn mul_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    a * b % p
}

/// Multiplicative inverse of `a` modulo the prime `p`.
///
/// Returns the unique `s ∈ [1, p-1]` with `a·s ≡ 1 (mod p)`, computed by
/// the extended Euclidean algorithm. The loop is iterative: the O(log p)
/// step count stays off the call stack even for cryptographic-size
/// moduli.
///
/// `a ≡ 0 (mod p)` has no inverse and yields [`MathError::ZeroInverse`].
/// The same error surfaces when `p` is composite and `gcd(a, p) > 1`,
/// i.e. when the caller broke the primality contract.
pub fn invert(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Err(MathError::ZeroInverse);
    }

    // Invariant: old_s·a + old_t·p = old_r at every step. The t
    // coefficients never feed the result, so only r and s are tracked.
    let mut old_r = BigInt::from(a);
    let mut r = BigInt::from(p.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = r;
        r = next_r;
        let next_s = &old_s - &q * &s;
        old_s = s;
        s = next_s;
    }

    if !old_r.is_one() {
        return Err(MathError::ZeroInverse);
    }

    Ok(reduce(&old_s, p))
}
