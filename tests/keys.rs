use secp256k1_core::keys::{KeyPair, PrivateKey, PublicKey, XOnlyPublicKey};

fn sk_of(byte: u8) -> PrivateKey {
    let mut raw = [0u8; 32];
    raw[31] = byte;
    PrivateKey::from_bytes(raw).unwrap()
}

#[test]
fn public_key_from_sk_one_matches_known_generator_encoding() {
    let sk = sk_of(1);
    let pk = sk.public_key();
    let expected = [
        0x02, 0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87,
        0x0b, 0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16,
        0xf8, 0x17, 0x98,
    ];
    assert_eq!(pk.serialize(), expected);
}

#[test]
fn compressed_round_trip() {
    let pk = sk_of(42).public_key();
    let bytes = pk.serialize();
    let decoded = PublicKey::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.serialize(), bytes);
}

#[test]
fn uncompressed_round_trip() {
    let pk = sk_of(42).public_key();
    let bytes = pk.serialize_uncompressed();
    let decoded = PublicKey::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.serialize_uncompressed(), bytes);
}

#[test]
fn x_only_round_trip() {
    let pk = sk_of(42).public_key();
    let xonly = XOnlyPublicKey::from_public_key(&pk);
    let bytes = xonly.serialize();
    let decoded = XOnlyPublicKey::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.serialize(), bytes);
}

#[test]
fn zero_secret_key_is_rejected() {
    assert!(PrivateKey::from_bytes([0u8; 32]).is_err());
}

#[test]
fn tweak_add_commutes_between_secret_and_public_key() {
    let sk = sk_of(5);
    let tweak = {
        let mut t = [0u8; 32];
        t[31] = 3;
        t
    };
    let tweaked_sk = sk.tweak_add(&tweak).unwrap();
    let pk_then_tweak = sk.public_key().tweak_add(&tweak).unwrap();
    assert_eq!(tweaked_sk.public_key().serialize(), pk_then_tweak.serialize());
}

#[test]
fn tweak_mul_commutes_between_secret_and_public_key() {
    let sk = sk_of(5);
    let tweak = {
        let mut t = [0u8; 32];
        t[31] = 3;
        t
    };
    let tweaked_sk = sk.tweak_mul(&tweak).unwrap();
    let pk_then_tweak = sk.public_key().tweak_mul(&tweak).unwrap();
    assert_eq!(tweaked_sk.public_key().serialize(), pk_then_tweak.serialize());
}

#[test]
fn combine_two_keys_matches_manual_tweak_add() {
    let a = sk_of(5).public_key();
    let b_sk = sk_of(9);
    let combined = PublicKey::combine(&[a, b_sk.public_key()]).unwrap();
    let expected = a.tweak_add(&b_sk.to_bytes()).unwrap();
    assert_eq!(combined.serialize(), expected.serialize());
}

#[test]
fn keypair_x_only_matches_direct_derivation() {
    let sk = sk_of(7);
    let direct_xonly = XOnlyPublicKey::from_public_key(&sk.public_key());
    let keypair_xonly = KeyPair::from_secret_key(sk_of(7)).x_only_public_key();
    // `x` doesn't depend on a point's y-parity, so the keypair's internal
    // sign correction doesn't change which x-only key comes out.
    assert_eq!(keypair_xonly.serialize(), direct_xonly.serialize());
}
