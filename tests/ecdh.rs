use secp256k1_core::ecdh;
use secp256k1_core::keys::PrivateKey;

#[test]
fn shared_secret_is_symmetric() {
    let sk_a = PrivateKey::random();
    let sk_b = PrivateKey::random();
    let pk_a = sk_a.public_key();
    let pk_b = sk_b.public_key();

    let secret_a = ecdh::shared_secret(&sk_a, &pk_b, None).unwrap();
    let secret_b = ecdh::shared_secret(&sk_b, &pk_a, None).unwrap();
    assert_eq!(secret_a, secret_b);
}

#[test]
fn x_only_variant_is_also_symmetric() {
    let sk_a = PrivateKey::random();
    let sk_b = PrivateKey::random();
    let pk_a = sk_a.public_key();
    let pk_b = sk_b.public_key();

    let secret_a = ecdh::shared_secret_xonly(&sk_a, &pk_b).unwrap();
    let secret_b = ecdh::shared_secret_xonly(&sk_b, &pk_a).unwrap();
    assert_eq!(secret_a, secret_b);
}

#[test]
fn custom_hash_hook_is_used() {
    fn passthrough_x(out: &mut [u8; 32], x: &[u8; 32], _y: &[u8; 32]) -> bool {
        *out = *x;
        true
    }

    let sk_a = PrivateKey::random();
    let sk_b = PrivateKey::random();
    let pk_b = sk_b.public_key();

    let hooked = ecdh::shared_secret(&sk_a, &pk_b, Some(passthrough_x)).unwrap();
    let xonly = ecdh::shared_secret_xonly(&sk_a, &pk_b).unwrap();
    assert_eq!(hooked, xonly);
}
