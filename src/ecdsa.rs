//! ECDSA: sign, verify, and the compact `r || s` wire codec.

use crate::ecmult;
use crate::ecmult_gen::mul_gen;
use crate::error::Error;
use crate::hash::Rfc6979Drbg;
use crate::keys::{PrivateKey, PublicKey};
use crate::scalar::Sc;

/// A parsed ECDSA signature: the pair `(r, s)`, both reduced mod `n`.
#[derive(Clone, Copy)]
pub struct Signature {
    r: Sc,
    s: Sc,
}

impl Signature {
    /// Decodes the 64-byte compact `r || s` encoding. Rejects `r` or `s`
    /// that decode to `0` or `>= n`.
    pub fn from_compact(b: &[u8; 64]) -> Result<Signature, Error> {
        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&b[0..32]);
        s_bytes.copy_from_slice(&b[32..64]);
        let (r, r_overflow) = Sc::set_b32(&r_bytes);
        let (s, s_overflow) = Sc::set_b32(&s_bytes);
        if r_overflow || s_overflow || r.is_zero() || s.is_zero() {
            return Err(Error::InvalidSignature);
        }
        Ok(Signature { r, s })
    }

    pub fn to_compact(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[0..32].copy_from_slice(&self.r.get_b32());
        out[32..64].copy_from_slice(&self.s.get_b32());
        out
    }
}

/// Signs a 32-byte message digest with `sk`.
///
/// The nonce is derived deterministically via RFC 6979 (HMAC-SHA-256
/// DRBG) over `sk || msg32`; candidates that don't parse to a nonzero
/// scalar `< n` are vanishingly rare but are handled by drawing another
/// output block from the same DRBG rather than surfacing an error —
/// unlike BIP-340's nonce function (`crate::schnorr`), RFC 6979 has no
/// fixed output, so there is always another candidate to try.
pub fn sign(msg32: &[u8; 32], sk: &PrivateKey) -> Signature {
    let sk_bytes = sk.to_bytes();
    let mut drbg = Rfc6979Drbg::new(&sk_bytes, msg32, &[]);

    let (k, r) = loop {
        let candidate = drbg.next_bytes();
        let (k, overflow) = Sc::set_b32(&candidate);
        if overflow || k.is_zero() {
            continue;
        }
        let mut r_point = mul_gen(&k).to_affine();
        r_point.x.normalize();
        let (r, _overflow) = Sc::set_b32(&r_point.x.get_b32());
        if r.is_zero() {
            continue;
        }
        break (k, r);
    };

    let msg = Sc::set_b32(msg32).0;
    let k_inv = k.inverse();
    let mut s = msg.add(&r.mul(&sk.sk)).0.mul(&k_inv);
    if s.is_high() {
        s = s.negate();
    }

    Signature { r, s }
}

/// Verifies `sig` over `msg32` against `pubkey`.
pub fn verify(sig: &Signature, msg32: &[u8; 32], pubkey: &PublicKey) -> bool {
    if sig.r.is_zero() || sig.s.is_zero() {
        return false;
    }
    let s_inv = sig.s.inverse();
    let msg = Sc::set_b32(msg32).0;
    let u1 = msg.mul(&s_inv);
    let u2 = sig.r.mul(&s_inv);

    let r_point = ecmult::mul_add_gen_var(&u2, &pubkey.p, &u1);
    if r_point.infinity {
        return false;
    }
    let mut affine = r_point.to_affine();
    affine.x.normalize();
    let (candidate_r, _overflow) = Sc::set_b32(&affine.x.get_b32());
    candidate_r.eq_var(&sig.r)
}
