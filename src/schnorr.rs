//! BIP-340 Schnorr signatures over secp256k1.

use std::sync::OnceLock;

use crate::ecmult;
use crate::ecmult_gen::mul_gen;
use crate::error::Error;
use crate::hash::tagged_hash;
use crate::keys::{KeyPair, XOnlyPublicKey};
use crate::scalar::Sc;

/// `r32 || s`, BIP-340's 64-byte signature encoding.
#[derive(Clone, Copy)]
pub struct Signature {
    r32: [u8; 32],
    s: Sc,
}

impl Signature {
    pub fn from_bytes(b: &[u8; 64]) -> Result<Signature, Error> {
        let mut r32 = [0u8; 32];
        r32.copy_from_slice(&b[0..32]);
        let (_, overflow) = crate::field::Fe::set_b32(&r32);
        if overflow {
            return Err(Error::InvalidSignature);
        }
        let mut s_bytes = [0u8; 32];
        s_bytes.copy_from_slice(&b[32..64]);
        let (s, s_overflow) = Sc::set_b32(&s_bytes);
        if s_overflow {
            return Err(Error::InvalidSignature);
        }
        Ok(Signature { r32, s })
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[0..32].copy_from_slice(&self.r32);
        out[32..64].copy_from_slice(&self.s.get_b32());
        out
    }
}

/// `TaggedHash("BIP0340/aux", 0^32)`, cached since it's independent of
/// the caller's inputs whenever aux randomness is omitted.
fn zero_aux_hash() -> &'static [u8; 32] {
    static ZERO_MASK: OnceLock<[u8; 32]> = OnceLock::new();
    ZERO_MASK.get_or_init(|| tagged_hash("BIP0340/aux", &[0u8; 32]))
}

/// `nonce_function_bip340`: derives the 32-byte nonce seed from a
/// (parity-corrected) secret scalar, the signer's x-only pubkey, the
/// message, and optional auxiliary randomness.
fn nonce_function_bip340(
    sk32: &[u8; 32],
    xonly_pk: &[u8; 32],
    msg32: &[u8; 32],
    aux: Option<&[u8; 32]>,
) -> [u8; 32] {
    let aux_hash = match aux {
        Some(a) => tagged_hash("BIP0340/aux", a),
        None => *zero_aux_hash(),
    };
    let mut t = [0u8; 32];
    for i in 0..32 {
        t[i] = sk32[i] ^ aux_hash[i];
    }
    let mut input = Vec::with_capacity(64 + 32);
    input.extend_from_slice(&t);
    input.extend_from_slice(xonly_pk);
    input.extend_from_slice(msg32);
    tagged_hash("BIP0340/nonce", &input)
}

fn challenge(r32: &[u8; 32], xonly_pk: &[u8; 32], msg32: &[u8; 32]) -> Sc {
    let mut input = Vec::with_capacity(96);
    input.extend_from_slice(r32);
    input.extend_from_slice(xonly_pk);
    input.extend_from_slice(msg32);
    let e_bytes = tagged_hash("BIP0340/challenge", &input);
    Sc::set_b32(&e_bytes).0
}

/// Signs `msg32` with `keypair`, optionally mixing in 32 bytes of
/// auxiliary randomness. Fails only if the derived nonce reduces to
/// zero mod `n` — a pure function of `(sk, aux, msg)` with no retry
/// counter to vary, unlike ECDSA's RFC 6979 loop.
pub fn sign(msg32: &[u8; 32], keypair: &KeyPair, aux: Option<&[u8; 32]>) -> Result<Signature, Error> {
    let sk_bytes = keypair.sk.get_b32();
    let xonly_bytes = keypair.xonly.serialize();

    let nonce_seed = nonce_function_bip340(&sk_bytes, &xonly_bytes, msg32, aux);
    let (mut k, overflow) = Sc::set_b32(&nonce_seed);
    if overflow || k.is_zero() {
        return Err(Error::NonceFailure);
    }

    let mut r_point = mul_gen(&k).to_affine();
    r_point.y.normalize();
    r_point.x.normalize();
    k = k.cond_negate(r_point.y.is_odd() as u8);

    let r32 = r_point.x.get_b32();
    let e = challenge(&r32, &xonly_bytes, msg32);
    let s = k.add(&e.mul(&keypair.sk)).0;

    Ok(Signature { r32, s })
}

/// Verifies `sig` over `msg32` against the x-only key `pk`.
pub fn verify(sig: &Signature, msg32: &[u8; 32], pk: &XOnlyPublicKey) -> bool {
    let xonly_bytes = pk.serialize();
    let e = challenge(&sig.r32, &xonly_bytes, msg32);
    let pubkey = pk.public_key_even_y();

    let r_prime = ecmult::mul_add_gen_var(&e.negate(), &pubkey.p, &sig.s);
    if r_prime.infinity {
        return false;
    }
    let mut affine = r_prime.to_affine();
    affine.x.normalize();
    affine.y.normalize();
    if affine.y.is_odd() {
        return false;
    }
    affine.x.get_b32() == sig.r32
}
