// File: crates/dh/src/keypair/tests.rs
use super::*;
use rand::rngs::OsRng;

#[test]
fn test_keypair_generate_by_curve() {
    let mut rng = OsRng;

    let p256 = Keypair::generate(CurveType::P256, &mut rng).unwrap();
    assert_eq!(p256.curve_type(), CurveType::P256);
    assert_eq!(p256.export_public_key().public_key_data().len(), 33);

    let x25519 = Keypair::generate(CurveType::Curve25519, &mut rng).unwrap();
    assert_eq!(x25519.curve_type(), CurveType::Curve25519);
    assert_eq!(x25519.export_public_key().public_key_data().len(), 32);
}

#[test]
fn test_keypair_symmetry_both_curves() {
    let mut rng = OsRng;

    for curve in [CurveType::P256, CurveType::Curve25519] {
        let pair_a = Keypair::generate(curve, &mut rng).unwrap();
        let pair_b = Keypair::generate(curve, &mut rng).unwrap();

        let shared_a = pair_a
            .compute_shared_secret(&pair_b.export_public_key())
            .unwrap();
        let shared_b = pair_b
            .compute_shared_secret(&pair_a.export_public_key())
            .unwrap();

        assert_eq!(shared_a, shared_b, "symmetry must hold on {}", curve);
    }
}

#[test]
fn test_keypair_cross_curve_import_fails() {
    let mut rng = OsRng;

    let mut p256 = Keypair::generate(CurveType::P256, &mut rng).unwrap();
    let mut x25519 = Keypair::generate(CurveType::Curve25519, &mut rng).unwrap();

    let p256_message = p256.export_public_key();
    let x25519_message = x25519.export_public_key();

    let err = p256.import_public_key(&x25519_message).unwrap_err();
    assert!(matches!(err, dkex_api::Error::WrongCurveType { .. }));

    let err = x25519.import_public_key(&p256_message).unwrap_err();
    assert!(matches!(err, dkex_api::Error::WrongCurveType { .. }));
}

#[test]
fn test_keypair_cross_curve_compute_is_mismatch() {
    let mut rng = OsRng;

    let p256 = Keypair::generate(CurveType::P256, &mut rng).unwrap();
    let x25519 = Keypair::generate(CurveType::Curve25519, &mut rng).unwrap();

    let err = p256
        .compute_shared_secret(&x25519.export_public_key())
        .unwrap_err();
    assert!(matches!(err, dkex_api::Error::CurveMismatch { .. }));
}
