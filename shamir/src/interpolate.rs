//! Lagrange interpolation over GF(p).

use num_bigint::BigUint;
use num_traits::{One, Zero};

use math::field::{invert, mul_mod, sub_mod};

use crate::error::Result;
use crate::share::Share;

/// The Lagrange basis polynomial `δ_i` of the sample set `xs`, evaluated
/// at `x`:
///
/// `δ_i(x) = Π_{j ≠ i} (x − x_j)·(x_i − x_j)⁻¹ (mod p)`
///
/// Every product is reduced as it is formed; numerator and denominator
/// accumulate separately so one inversion suffices. By construction
/// `δ_i(x_i) = 1` and `δ_i(x_j) = 0` for every other `j` in the set.
///
/// A duplicate x-coordinate makes the denominator a multiple of `p`, and
/// the failed inversion propagates as
/// [`MathError::ZeroInverse`](crate::error::MathError::ZeroInverse).
///
/// # Panics
///
/// Panics if `i` is not an index into `xs`.
pub fn lagrange_basis(x: &BigUint, i: usize, xs: &[BigUint], p: &BigUint) -> Result<BigUint> {
    let mut numerator = BigUint::one();
    let mut denominator = BigUint::one();

    for (j, xj) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        numerator = mul_mod(&numerator, &sub_mod(x, xj, p), p);
        denominator = mul_mod(&denominator, &sub_mod(&xs[i], xj, p), p);
    }

    Ok(mul_mod(&numerator, &invert(&denominator, p)?, p))
}

/// Evaluate the polynomial interpolating `points` at `x`:
/// `Σ y_i·δ_i(x) (mod p)`.
pub fn interpolate_at(x: &BigUint, points: &[Share], p: &BigUint) -> Result<BigUint> {
    let xs: Vec<BigUint> = points.iter().map(|s| s.x.clone()).collect();

    let mut acc = BigUint::zero();
    for (i, share) in points.iter().enumerate() {
        let basis = lagrange_basis(x, i, &xs, p)?;
        acc = (acc + mul_mod(&share.y, &basis, p)) % p;
    }

    Ok(acc)
}

/// Reconstruct the secret: the interpolating polynomial evaluated at 0.
///
/// Correct exactly when `points` holds at least `t` shares that all lie
/// on one degree-(t-1) polynomial. No consistency check is performed:
/// inconsistent or sub-threshold share sets yield a silently wrong
/// value. Duplicate x-coordinates abort with a zero-inversion error
/// instead.
pub fn reconstruct(points: &[Share], p: &BigUint) -> Result<BigUint> {
    interpolate_at(&BigUint::zero(), points, p)
}
