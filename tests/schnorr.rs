use secp256k1_core::keys::{KeyPair, PrivateKey};
use secp256k1_core::schnorr;

#[test]
fn deterministic_signing_is_byte_identical_across_two_signs() {
    // sk = 1 has an odd-y public key; KeyPair::from_secret_key negates it
    // to n-1 internally so the stored scalar's point has even y.
    let sk = PrivateKey::from_bytes([1u8; 32]).unwrap();
    let keypair = KeyPair::from_secret_key(sk);
    let xonly = keypair.x_only_public_key();
    let msg = [0u8; 32];

    let sig1 = schnorr::sign(&msg, &keypair, None).unwrap();
    let sig2 = schnorr::sign(&msg, &keypair, None).unwrap();
    assert_eq!(sig1.to_bytes(), sig2.to_bytes());
    assert!(schnorr::verify(&sig1, &msg, &xonly));
}

#[test]
fn aux_randomness_changes_signature_but_not_validity() {
    let sk = PrivateKey::from_bytes([1u8; 32]).unwrap();
    let keypair = KeyPair::from_secret_key(sk);
    let xonly = keypair.x_only_public_key();
    let msg = [0u8; 32];

    let sig_no_aux = schnorr::sign(&msg, &keypair, None).unwrap();
    let aux = [0x42u8; 32];
    let sig_with_aux = schnorr::sign(&msg, &keypair, Some(&aux)).unwrap();

    assert_ne!(sig_no_aux.to_bytes(), sig_with_aux.to_bytes());
    assert!(schnorr::verify(&sig_with_aux, &msg, &xonly));
}

#[test]
fn tampered_message_fails_verification() {
    let keypair = KeyPair::from_secret_key(PrivateKey::from_bytes([3u8; 32]).unwrap());
    let xonly = keypair.x_only_public_key();
    let msg = [7u8; 32];
    let sig = schnorr::sign(&msg, &keypair, None).unwrap();

    let mut tampered = msg;
    tampered[0] ^= 1;
    assert!(!schnorr::verify(&sig, &tampered, &xonly));
}

#[test]
fn signature_byte_round_trip() {
    let keypair = KeyPair::from_secret_key(PrivateKey::from_bytes([9u8; 32]).unwrap());
    let sig = schnorr::sign(&[1u8; 32], &keypair, None).unwrap();
    let bytes = sig.to_bytes();
    let decoded = schnorr::Signature::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.to_bytes(), bytes);
}
