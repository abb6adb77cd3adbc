//! Integration tests for the ML-DSA ring transform

use pqntt_algorithms::ml_dsa;
use pqntt_algorithms::poly::prelude::*;
use pqntt_algorithms::poly::reduce::reduce32;
use pqntt_sign::{ml_dsa_44, ml_dsa_65, ml_dsa_87, MlDsaLevel};
use pqntt_tests::vectors::{self, MONT_FACTOR, ML_DSA_N, ML_DSA_Q};

const Q: i32 = ML_DSA_Q as i32;

#[test]
fn test_ramp_roundtrip_every_namespace() {
    type Transform = fn(&mut [i32; ML_DSA_N]);
    let namespaces: [(Transform, Transform); 3] = [
        (ml_dsa_44::ntt, ml_dsa_44::invntt),
        (ml_dsa_65::ntt, ml_dsa_65::invntt),
        (ml_dsa_87::ntt, ml_dsa_87::invntt),
    ];
    for (ntt, invntt) in namespaces {
        let mut a = vectors::ml_dsa_ramp();
        ntt(&mut a);
        invntt(&mut a);
        assert_eq!(a, vectors::ml_dsa_ramp());
    }
}

#[test]
fn test_top_residue_roundtrip() {
    let mut a = [Q - 1; ML_DSA_N];
    ml_dsa::forward(&mut a);
    assert!(a.iter().all(|c| c.abs() < 9 * Q));
    ml_dsa::inverse_canonical(&mut a);
    assert!(a.iter().all(|&c| c == Q - 1));
}

#[test]
fn test_impulse_transforms_to_ones() {
    let mut a = [0i32; ML_DSA_N];
    a[0] = 1;
    ml_dsa::forward(&mut a);
    assert!(a.iter().all(|&c| c == 1));
}

#[test]
fn test_zero_is_fixed() {
    let mut a = [0i32; ML_DSA_N];
    ml_dsa_87::ntt(&mut a);
    assert_eq!(a, [0; ML_DSA_N]);
    ml_dsa_87::invntt_tomont(&mut a);
    assert_eq!(a, [0; ML_DSA_N]);
}

#[test]
fn test_signed_inputs_roundtrip_to_canonical() {
    let mut rng = vectors::rng(7);
    for _ in 0..16 {
        let x = vectors::random_ml_dsa_signed(&mut rng);
        let mut a = x;
        ml_dsa_65::ntt(&mut a);
        ml_dsa_65::invntt(&mut a);
        for (&got, &orig) in a.iter().zip(x.iter()) {
            assert_eq!(got as u32, vectors::canonical(orig as i64, ML_DSA_Q));
        }
    }
}

#[test]
fn test_montgomery_output_differs_from_canonical() {
    let mut rng = vectors::rng(11);
    let x = vectors::random_ml_dsa(&mut rng);

    let mut mont = x;
    let mut canon = x;
    ml_dsa_44::ntt(&mut mont);
    ml_dsa_44::invntt_tomont(&mut mont);
    ml_dsa_44::ntt(&mut canon);
    ml_dsa_44::invntt(&mut canon);

    assert_ne!(mont, canon);
    assert_eq!(canon, x);
    assert!(mont.iter().all(|c| c.abs() < Q));
    for (&m, &c) in mont.iter().zip(canon.iter()) {
        let scaled = c as u64 * MONT_FACTOR as u64 % ML_DSA_Q as u64;
        assert_eq!(vectors::canonical(m as i64, ML_DSA_Q) as u64, scaled);
        assert_eq!(freeze(montgomery_reduce(m as i64)), c);
    }
}

#[test]
fn test_multiplication_matches_schoolbook() {
    let mut rng = vectors::rng(3);
    for _ in 0..4 {
        let a = vectors::random_ml_dsa(&mut rng);
        let b = vectors::random_ml_dsa_signed(&mut rng);
        let expected = vectors::negacyclic_mul(
            &vectors::widen_i32(&a),
            &vectors::widen_i32(&b),
            ML_DSA_Q,
        );

        // Montgomery path: pointwise_montgomery then invntt_tomont cancel
        let (mut na, mut nb) = (a, b);
        ml_dsa::forward(&mut na);
        ml_dsa::forward(&mut nb);
        let mut c = [0i32; ML_DSA_N];
        ml_dsa::pointwise_montgomery(&mut c, &na, &nb);
        MlDsaLevel::MlDsa65.invntt_tomont(&mut c);
        let c: Vec<u32> = c.iter().map(|&x| freeze(x) as u32).collect();
        assert_eq!(c, expected);

        // exact path
        let mut d = na;
        ml_dsa::pointwise(&mut d, &nb);
        ml_dsa::inverse_canonical(&mut d);
        let d: Vec<u32> = d.iter().map(|&x| x as u32).collect();
        assert_eq!(d, expected);
    }
}

#[test]
fn test_sum_of_transforms_stays_invertible() {
    // a few unreduced additions in the NTT domain before the inverse
    let mut rng = vectors::rng(5);
    let x = vectors::random_ml_dsa(&mut rng);
    let y = vectors::random_ml_dsa(&mut rng);

    let (mut nx, mut ny) = (x, y);
    ml_dsa::forward(&mut nx);
    ml_dsa::forward(&mut ny);
    let mut sum = [0i32; ML_DSA_N];
    for i in 0..ML_DSA_N {
        sum[i] = nx[i] + ny[i] + nx[i];
        assert!(sum[i].abs() < ml_dsa::INVERSE_INPUT_BOUND);
    }
    ml_dsa::inverse_canonical(&mut sum);
    for i in 0..ML_DSA_N {
        let expected = (2 * x[i] as i64 + y[i] as i64).rem_euclid(ML_DSA_Q as i64);
        assert_eq!(sum[i] as i64, expected);
    }
}

#[test]
fn test_reduce32_at_inverse_input_bound() {
    let top = ml_dsa::INVERSE_INPUT_BOUND;
    for x in [top, -top, top - 1, -top + 1] {
        let r = reduce32(x);
        assert!((-6_283_009..=6_283_008).contains(&r));
        assert_eq!((r as i64 - x as i64).rem_euclid(ML_DSA_Q as i64), 0);
    }
}

#[test]
fn test_typed_polynomial_domains() {
    let x = Polynomial::<MlDsaRing>::from_coeffs(&vectors::ml_dsa_ramp()).unwrap();
    assert_eq!(x.domain(), Domain::Canonical);

    let hat = x.clone().ntt();
    assert_eq!(hat.domain(), Domain::Ntt);

    let mont = hat.clone().inverse_to_montgomery();
    assert_eq!(mont.domain(), Domain::Montgomery);
    assert_eq!(mont.reduce(), x);
    assert_eq!(hat.inverse(), x);
}
