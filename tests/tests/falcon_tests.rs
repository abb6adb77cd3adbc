//! Integration tests for the Falcon ring transform

use pqntt_algorithms::falcon as engine;
use pqntt_algorithms::poly::prelude::*;
use pqntt_sign::{falcon, FalconVariant};
use pqntt_tests::vectors::{self, FALCON_Q};

#[test]
fn test_pattern_roundtrip_512() {
    let original = vectors::falcon_pattern(9);
    let mut a = original.clone();
    falcon::ntt(&mut a, 9);
    assert_ne!(a, original);
    assert!(a.iter().all(|&c| (c as u32) < FALCON_Q));
    falcon::intt(&mut a, 9);
    assert_eq!(a, original);
}

#[test]
fn test_roundtrip_every_degree() {
    let mut rng = vectors::rng(1);
    for logn in 1..=10 {
        let x = vectors::random_falcon(&mut rng, logn);
        let mut a = x.clone();
        engine::forward(&mut a, logn);
        engine::inverse(&mut a, logn);
        assert_eq!(a, x, "logn = {}", logn);
    }
}

#[test]
fn test_degree_two_closed_form() {
    // X^2 + 1 splits at the primitive 4th root w = 7^512 = 10810
    let mut a = vec![1u16, 2];
    falcon::ntt(&mut a, 1);
    assert_eq!(a, vec![9332, 2959]);
    falcon::intt(&mut a, 1);
    assert_eq!(a, vec![1, 2]);
}

#[test]
fn test_zero_is_fixed() {
    for logn in 1..=10 {
        let mut a = vec![0u16; 1 << logn];
        falcon::ntt(&mut a, logn);
        assert!(a.iter().all(|&c| c == 0));
        falcon::intt(&mut a, logn);
        assert!(a.iter().all(|&c| c == 0));
    }
}

#[test]
fn test_impulse_transforms_to_ones() {
    for logn in [1, 5, 9, 10] {
        let mut a = vec![0u16; 1 << logn];
        a[0] = 1;
        falcon::ntt(&mut a, logn);
        assert!(a.iter().all(|&c| c == 1), "logn = {}", logn);
    }
}

#[test]
fn test_only_prefix_is_touched() {
    let mut a = vectors::falcon_pattern(10);
    let tail: Vec<u16> = a[512..].to_vec();
    falcon::ntt(&mut a, 9);
    falcon::intt(&mut a, 9);
    assert_eq!(a, vectors::falcon_pattern(10));
    assert_eq!(&a[512..], &tail[..]);
}

#[test]
fn test_multiplication_matches_schoolbook() {
    let mut rng = vectors::rng(9);
    for logn in [1, 2, 4, 7, 9, 10] {
        let a = vectors::random_falcon(&mut rng, logn);
        let b = vectors::random_falcon(&mut rng, logn);
        let expected = vectors::negacyclic_mul(
            &vectors::widen_u16(&a),
            &vectors::widen_u16(&b),
            FALCON_Q,
        );

        let (mut na, mut nb) = (a, b);
        falcon::ntt(&mut na, logn);
        falcon::ntt(&mut nb, logn);
        engine::pointwise(&mut na, &nb);
        falcon::intt(&mut na, logn);
        let got: Vec<u32> = na.iter().map(|&c| c as u32).collect();
        assert_eq!(got, expected, "logn = {}", logn);
    }
}

#[test]
fn test_montgomery_conversion_roundtrip() {
    let original = vectors::falcon_pattern(6);
    let mut a = original.clone();
    engine::to_montgomery(&mut a);
    assert_ne!(a, original);
    engine::from_montgomery(&mut a);
    assert_eq!(a, original);
}

#[test]
fn test_variants_resolve_to_degrees() {
    let mut rng = vectors::rng(2);
    for variant in FalconVariant::ALL {
        let x = vectors::random_falcon(&mut rng, variant.logn());
        let mut a = x.clone();
        variant.try_ntt(&mut a).unwrap();
        let mut b = x.clone();
        falcon::ntt(&mut b, variant.logn());
        assert_eq!(a, b, "{}", variant.name());
        variant.try_intt(&mut a).unwrap();
        assert_eq!(a, x, "{}", variant.name());
    }
}

#[test]
fn test_typed_polynomial_multiplication() {
    let mut rng = vectors::rng(4);
    let a = Polynomial::<FalconRing>::from_coeffs(&vectors::random_falcon(&mut rng, 8)).unwrap();
    let b = Polynomial::<FalconRing>::from_coeffs(&vectors::random_falcon(&mut rng, 8)).unwrap();
    assert_eq!(a.ntt_mul(&b).unwrap(), a.schoolbook_mul(&b).unwrap());

    let small = Polynomial::<FalconRing>::zero(7).unwrap();
    assert!(a.ntt_mul(&small).is_err());
}
