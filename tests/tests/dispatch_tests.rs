//! Integration tests for the named entry points, the registry and the
//! generic ring layer

use pqntt_algorithms::poly::ntt::{self, check_buffer};
use pqntt_algorithms::poly::prelude::*;
use pqntt_api::Error;
use pqntt_sign::{
    falcon, ml_dsa_44, ml_dsa_65, ml_dsa_87, self_test, self_tests_passed, FalconVariant,
    MlDsaLevel, ParameterSet,
};
use pqntt_tests::vectors;

fn generic_roundtrip<R>(coeffs: &[R::Coeff], logn: u32) -> Vec<R::Coeff>
where
    R: NttOperator + InverseNttOperator,
{
    let mut a = coeffs.to_vec();
    try_ntt::<R>(&mut a, logn).unwrap();
    try_inverse_canonical::<R>(&mut a, logn).unwrap();
    a
}

#[test]
fn test_generic_layer_serves_both_rings() {
    let ramp = vectors::ml_dsa_ramp();
    assert_eq!(generic_roundtrip::<MlDsaRing>(&ramp, 8), ramp.to_vec());

    let pattern = vectors::falcon_pattern(9);
    assert_eq!(generic_roundtrip::<FalconRing>(&pattern, 9), pattern);
}

#[test]
fn test_generic_inverse_domains() {
    assert_eq!(MlDsaRing::INVERSE_OUTPUT, Domain::Montgomery);
    assert_eq!(FalconRing::INVERSE_OUTPUT, Domain::Canonical);

    // ML-DSA: the raw inverse leaves the 2^32 factor, the canonical one not
    let mut raw = vectors::ml_dsa_ramp();
    let mut canon = raw;
    MlDsaRing::ntt(&mut raw, 8);
    MlDsaRing::inv_ntt(&mut raw, 8);
    MlDsaRing::ntt(&mut canon, 8);
    inverse_canonical::<MlDsaRing>(&mut canon, 8);
    assert_ne!(raw, canon);
    assert_eq!(canon, vectors::ml_dsa_ramp());

    // Falcon: both inverses coincide
    let mut raw = vectors::falcon_pattern(10);
    let mut canon = raw.clone();
    FalconRing::ntt(&mut raw, 10);
    FalconRing::inv_ntt(&mut raw, 10);
    FalconRing::ntt(&mut canon, 10);
    inverse_canonical::<FalconRing>(&mut canon, 10);
    assert_eq!(raw, canon);
}

#[test]
fn test_check_buffer_limits() {
    assert!(check_buffer::<MlDsaRing>("test", 256, 8).is_ok());
    assert!(check_buffer::<MlDsaRing>("test", 512, 9).is_err());
    assert!(check_buffer::<MlDsaRing>("test", 128, 7).is_err());
    assert!(check_buffer::<FalconRing>("test", 2, 1).is_ok());
    assert!(check_buffer::<FalconRing>("test", 1, 0).is_err());
    assert!(check_buffer::<FalconRing>("test", 2048, 11).is_err());
    assert!(matches!(
        check_buffer::<FalconRing>("test", 500, 9),
        Err(Error::InvalidLength {
            expected: 512,
            actual: 500,
            ..
        })
    ));
}

#[test]
fn test_checked_entry_points_reject() {
    let mut short = vec![0i32; 128];
    assert!(ml_dsa_44::try_ntt(&mut short).is_err());
    assert!(ml_dsa_65::try_invntt(&mut short).is_err());
    assert!(ml_dsa_87::try_invntt_tomont(&mut short).is_err());

    let mut poly = vec![0u16; 512];
    assert!(falcon::try_ntt(&mut poly, 8).is_err());
    assert!(falcon::try_ntt(&mut poly, 11).is_err());
    assert!(falcon::try_intt(&mut poly, 10).is_err());
    assert!(falcon::try_ntt(&mut poly, 9).is_ok());

    let mut too_long = vec![0i32; 257];
    assert!(ntt::try_ntt::<MlDsaRing>(&mut too_long, 8).is_err());
}

#[test]
fn test_registry_resolves_every_configuration() {
    let names = [
        "ML-DSA-44",
        "ML-DSA-65",
        "ML-DSA-87",
        "Falcon-512",
        "Falcon-1024",
        "Falcon-padded-512",
        "Falcon-padded-1024",
    ];
    for name in names {
        let set = ParameterSet::from_name(name).unwrap();
        assert_eq!(set.name(), name);
        assert_eq!(set.to_string(), name);
    }
    assert_eq!(ParameterSet::all().count(), names.len());

    assert_eq!(
        "ml_dsa_87".parse::<ParameterSet>().unwrap(),
        ParameterSet::MlDsa(MlDsaLevel::MlDsa87)
    );
    assert!(matches!(
        ParameterSet::from_name("Kyber-768"),
        Err(Error::UnknownParameterSet { .. })
    ));
}

#[test]
fn test_registry_shapes_match_entry_points() {
    for set in ParameterSet::all() {
        match set {
            ParameterSet::MlDsa(level) => {
                assert_eq!(set.degree(), 256);
                assert_eq!(set.modulus(), vectors::ML_DSA_Q);
                let mut a = vectors::ml_dsa_ramp();
                level.ntt(&mut a);
                level.invntt(&mut a);
                assert_eq!(a, vectors::ml_dsa_ramp());
            }
            ParameterSet::Falcon(variant) => {
                assert_eq!(set.degree(), variant.degree());
                assert_eq!(set.logn(), variant.logn());
                assert_eq!(set.modulus(), vectors::FALCON_Q);
                let mut a = vectors::falcon_pattern(set.logn());
                variant.ntt(&mut a);
                variant.intt(&mut a);
                assert_eq!(a, vectors::falcon_pattern(set.logn()));
            }
        }
    }
}

#[test]
fn test_padded_and_plain_share_transform() {
    let mut a = vectors::falcon_pattern(10);
    let mut b = a.clone();
    FalconVariant::Falcon1024.ntt(&mut a);
    FalconVariant::FalconPadded1024.ntt(&mut b);
    assert_eq!(a, b);
}

#[test]
fn test_self_test_latches() {
    self_test().unwrap();
    assert!(self_tests_passed());
}
