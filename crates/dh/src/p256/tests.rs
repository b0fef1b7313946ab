// File: crates/dh/src/p256/tests.rs
use super::*;
use rand::rngs::OsRng;

#[test]
fn test_p256_shared_secret_symmetry() {
    let mut rng = OsRng;

    let pair_a = P256Keypair::generate(&mut rng).unwrap();
    let pair_b = P256Keypair::generate(&mut rng).unwrap();

    let shared_a = pair_a
        .compute_shared_secret(&pair_b.export_public_key())
        .unwrap();
    let shared_b = pair_b
        .compute_shared_secret(&pair_a.export_public_key())
        .unwrap();

    assert_eq!(shared_a, shared_b, "Shared secrets should match");
    assert_eq!(shared_a.as_bytes().len(), 32);
}

#[test]
fn test_p256_shared_secret_differs_per_peer() {
    let mut rng = OsRng;

    let pair_a = P256Keypair::generate(&mut rng).unwrap();
    let pair_b = P256Keypair::generate(&mut rng).unwrap();
    let pair_c = P256Keypair::generate(&mut rng).unwrap();

    let shared_ab = pair_a
        .compute_shared_secret(&pair_b.export_public_key())
        .unwrap();
    let shared_cb = pair_c
        .compute_shared_secret(&pair_b.export_public_key())
        .unwrap();

    assert_ne!(
        shared_ab, shared_cb,
        "Different private scalars must not derive the same secret"
    );
}

#[test]
fn test_p256_export_format() {
    let mut rng = OsRng;

    let pair = P256Keypair::generate(&mut rng).unwrap();
    let message = pair.export_public_key();

    assert_eq!(message.curve_type(), CurveType::P256);
    assert_eq!(message.public_key_data().len(), P256_POINT_COMPRESSED_SIZE);
    // SEC1 compressed prefix
    let prefix = message.public_key_data()[0];
    assert!(prefix == 0x02 || prefix == 0x03);
}

#[test]
fn test_p256_export_deterministic() {
    let mut rng = OsRng;

    let pair = P256Keypair::generate(&mut rng).unwrap();
    assert_eq!(pair.export_public_key(), pair.export_public_key());
}

#[test]
fn test_p256_import_roundtrip() {
    let mut rng = OsRng;

    let pair = P256Keypair::generate(&mut rng).unwrap();
    let message = pair.export_public_key();

    // Importing into a fresh slot replaces its public key with ours
    let mut import_pair = P256Keypair::generate(&mut rng).unwrap();
    import_pair.import_public_key(&message).unwrap();
    assert_eq!(import_pair.export_public_key(), message);
}

#[test]
fn test_p256_import_wrong_curve_type() {
    let mut rng = OsRng;

    let mut pair = P256Keypair::generate(&mut rng).unwrap();
    let foreign = PublicKeyMessage::new(CurveType::Curve25519, vec![0u8; 32]);

    let err = pair.import_public_key(&foreign).unwrap_err();
    assert!(matches!(err, Error::WrongCurveType { .. }));
}

#[test]
fn test_p256_import_truncated_payload() {
    let mut rng = OsRng;

    let mut pair = P256Keypair::generate(&mut rng).unwrap();
    let message = pair.export_public_key();

    // Removing 5 bytes from the middle must fail the unmarshal step
    let mut data = message.public_key_data().to_vec();
    data.drain(10..15);
    let truncated = PublicKeyMessage::new(CurveType::P256, data);

    let err = pair.import_public_key(&truncated).unwrap_err();
    assert!(matches!(err, Error::Unmarshal { .. }));
}

#[test]
fn test_p256_import_invalid_prefix() {
    let mut rng = OsRng;

    let mut pair = P256Keypair::generate(&mut rng).unwrap();
    let mut data = pair.export_public_key().public_key_data().to_vec();
    data[0] = 0x05; // Invalid format byte
    let corrupted = PublicKeyMessage::new(CurveType::P256, data);

    let err = pair.import_public_key(&corrupted).unwrap_err();
    assert!(matches!(err, Error::Unmarshal { .. }));
}

#[test]
fn test_p256_import_rejects_uncompressed_encoding() {
    let mut rng = OsRng;

    let pair = P256Keypair::generate(&mut rng).unwrap();
    let mut receiver = P256Keypair::generate(&mut rng).unwrap();

    // A valid point in the 65-byte uncompressed form; only the 33-byte
    // compressed encoding is part of the wire format.
    let uncompressed = pair.public.to_encoded_point(false).as_bytes().to_vec();
    assert_eq!(uncompressed.len(), 65);
    let message = PublicKeyMessage::new(CurveType::P256, uncompressed);

    let err = receiver.import_public_key(&message).unwrap_err();
    assert!(matches!(err, Error::Unmarshal { .. }));

    let err = receiver.compute_shared_secret(&message).unwrap_err();
    assert!(matches!(err, Error::Unmarshal { .. }));
}

#[test]
fn test_p256_compute_rejects_invalid_prefix() {
    let mut rng = OsRng;

    let pair = P256Keypair::generate(&mut rng).unwrap();
    let mut data = pair.export_public_key().public_key_data().to_vec();
    data[0] = 0x05; // Compact form tag; not a compressed point
    let corrupted = PublicKeyMessage::new(CurveType::P256, data);

    let err = pair.compute_shared_secret(&corrupted).unwrap_err();
    assert!(matches!(err, Error::Unmarshal { .. }));
}

#[test]
fn test_p256_generate_surfaces_entropy_failure() {
    let mut rng = crate::test_rng::FailingRng;

    let err = P256Keypair::generate(&mut rng).unwrap_err();
    assert!(matches!(err, Error::RandomSource { .. }));
}

#[test]
fn test_p256_import_non_curve_x_coordinate() {
    let mut rng = OsRng;

    let mut pair = P256Keypair::generate(&mut rng).unwrap();

    // Valid length and prefix, x-coordinate above the field prime
    let mut data = vec![0xFFu8; P256_POINT_COMPRESSED_SIZE];
    data[0] = 0x02;
    let off_curve = PublicKeyMessage::new(CurveType::P256, data);

    let err = pair.import_public_key(&off_curve).unwrap_err();
    assert!(matches!(err, Error::Unmarshal { .. }));
}

#[test]
fn test_p256_compute_curve_mismatch() {
    let mut rng = OsRng;

    let pair = P256Keypair::generate(&mut rng).unwrap();
    let foreign = PublicKeyMessage::new(CurveType::Curve25519, vec![0u8; 32]);

    let err = pair.compute_shared_secret(&foreign).unwrap_err();
    assert!(matches!(
        err,
        Error::CurveMismatch {
            local: CurveType::P256,
            peer: CurveType::Curve25519,
        }
    ));
}

#[test]
fn test_p256_import_does_not_disturb_private_scalar() {
    let mut rng = OsRng;

    let mut pair_a = P256Keypair::generate(&mut rng).unwrap();
    let pair_b = P256Keypair::generate(&mut rng).unwrap();
    let message_b = pair_b.export_public_key();

    let before = pair_a.compute_shared_secret(&message_b).unwrap();
    pair_a.import_public_key(&message_b).unwrap();
    let after = pair_a.compute_shared_secret(&message_b).unwrap();

    assert_eq!(before, after, "Import must leave the private scalar intact");
}
