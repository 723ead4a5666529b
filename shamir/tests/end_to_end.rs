//! End-to-end split/combine behavior, including the reference share set
//! the scheme was validated against.

use num_bigint::{BigInt, BigUint};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use shamir::error::{MathError, ShamirError};
use shamir::{interpolate, Shamir, Share};

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn every_threshold_subset_recovers_the_secret() {
    let session = Shamir::new(3, 5, big(2089)).unwrap();
    let secret = big(1234);
    let shares = session.split(&secret).unwrap();
    assert_eq!(shares.len(), 5);

    // all C(5,3) = 10 subsets
    for i in 0..5 {
        for j in (i + 1)..5 {
            for k in (j + 1)..5 {
                let subset = [shares[i].clone(), shares[j].clone(), shares[k].clone()];
                assert_eq!(session.combine(&subset).unwrap(), secret);
            }
        }
    }
}

#[test]
fn below_threshold_reconstruction_is_generally_wrong() {
    // Two shares of a degree-2 polynomial interpolate a line, which only
    // hits the secret by coincidence (probability 1/p per trial). Checked
    // statistically, not as a strict inequality.
    let session = Shamir::new(3, 5, big(2089)).unwrap();
    let secret = big(1234);

    let mut mismatches = 0;
    for _ in 0..100 {
        let shares = session.split(&secret).unwrap();
        let guess = interpolate::reconstruct(&shares[..2], &big(2089)).unwrap();
        if guess != secret {
            mismatches += 1;
        }
    }
    assert!(mismatches >= 90, "only {mismatches}/100 trials missed");
}

#[test]
fn combine_is_invariant_under_share_order() {
    let session = Shamir::new(3, 5, big(2089)).unwrap();
    let secret = big(1758);
    let mut shares = session.split(&secret).unwrap();

    shares.reverse();
    assert_eq!(session.combine(&shares).unwrap(), secret);

    shares.rotate_left(2);
    assert_eq!(session.combine(&shares).unwrap(), secret);
}

#[test]
fn duplicate_abscissas_error_instead_of_lying() {
    let points = [
        Share::new(big(3), big(5)).unwrap(),
        Share::new(big(3), big(9)).unwrap(),
    ];

    let res = interpolate::reconstruct(&points, &big(17));
    assert!(matches!(res, Err(ShamirError::Math(MathError::ZeroInverse))));
}

#[test]
fn splitting_is_deterministic_under_a_seeded_rng() {
    let session = Shamir::new(3, 5, big(5_575_621)).unwrap();
    let secret = big(1_935_737);

    let a = session
        .split_with_rng(&secret, &mut ChaCha20Rng::seed_from_u64(42))
        .unwrap();
    let b = session
        .split_with_rng(&secret, &mut ChaCha20Rng::seed_from_u64(42))
        .unwrap();
    assert_eq!(a, b);

    let c = session
        .split_with_rng(&secret, &mut ChaCha20Rng::seed_from_u64(43))
        .unwrap();
    assert_ne!(a, c);

    assert_eq!(session.combine(&a[2..]).unwrap(), secret);
}

// The published reference share set: five points on a degree-4
// polynomial over GF(5575621) with y-intercept 1935737. The y values are
// raw signed evaluations, orders of magnitude outside the field, so they
// exercise the negative-remainder normalization on the way in.
#[test]
fn recovers_the_reference_secret_from_raw_signed_shares() {
    let p = big(5_575_621);
    let raw: [(u64, &str); 5] = [
        (870_193, "-23613404754021249939363940813"),
        (485_592, "-2289717337456309501708473607"),
        (3_994_760, "-10487199360175451308104343835783"),
        (4_325_261, "-14412723039002678222346852964541"),
        (3_730_509, "-7975705554298882208355190391485"),
    ];

    let shares: Vec<Share> = raw
        .iter()
        .map(|(x, y)| {
            let y = BigInt::parse_bytes(y.as_bytes(), 10).unwrap();
            Share::new(big(*x), math::field::reduce(&y, &p)).unwrap()
        })
        .collect();

    assert_eq!(
        interpolate::reconstruct(&shares, &p).unwrap(),
        big(1_935_737)
    );
}
