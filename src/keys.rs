//! Key primitives: [`PrivateKey`], [`PublicKey`], [`XOnlyPublicKey`], [`KeyPair`].
//!
//! These are the public-facing wrappers around the bare [`Sc`]/[`Ge`]
//! arithmetic types, responsible for validation, the wire encodings of
//! §6, and — for the two secret-carrying types — wiping their scalar on
//! drop the way the donor's `derivation::argon2id::block::Block` wipes
//! its limbs, extended with a `compiler_fence` since a key's wipe must
//! survive optimization in a way an Argon2 scratch block's didn't need to.

use crate::ecmult_const::mul_const;
use crate::ecmult_gen::mul_gen;
use crate::error::Error;
use crate::group::{generator, Ge, Gej};
use crate::scalar::Sc;

/// A secp256k1 private key: a nonzero scalar `< n`.
pub struct PrivateKey {
    pub(crate) sk: Sc,
}

impl PrivateKey {
    /// Decodes a big-endian 32-byte scalar. Rejects zero and values `>= n`.
    pub fn from_bytes(b: [u8; 32]) -> Result<PrivateKey, Error> {
        let (sk, overflow) = Sc::set_b32(&b);
        if overflow || sk.is_zero() {
            return Err(Error::InvalidSecretKey);
        }
        Ok(PrivateKey { sk })
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.sk.get_b32()
    }

    pub fn public_key(&self) -> PublicKey {
        let mut p = mul_gen(&self.sk).to_affine();
        p.x.normalize();
        p.y.normalize();
        PublicKey { p }
    }

    /// `new_sk = sk + tweak (mod n)`, rejecting an invalid tweak or a
    /// result of zero.
    pub fn tweak_add(&self, tweak: &[u8; 32]) -> Result<PrivateKey, Error> {
        let (t, overflow) = Sc::set_b32(tweak);
        if overflow {
            return Err(Error::InvalidTweak);
        }
        let (sum, carry) = self.sk.add(&t);
        if carry || sum.is_zero() {
            return Err(Error::InvalidTweak);
        }
        Ok(PrivateKey { sk: sum })
    }

    /// `new_sk = sk * tweak (mod n)`, rejecting a zero or out-of-range tweak.
    pub fn tweak_mul(&self, tweak: &[u8; 32]) -> Result<PrivateKey, Error> {
        let (t, overflow) = Sc::set_b32(tweak);
        if overflow || t.is_zero() {
            return Err(Error::InvalidTweak);
        }
        Ok(PrivateKey { sk: self.sk.mul(&t) })
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.sk.wipe();
    }
}

/// A secp256k1 public key: a non-infinite point on the curve.
#[derive(Clone, Copy)]
pub struct PublicKey {
    pub(crate) p: Ge,
}

impl PublicKey {
    /// Accepts the 33-byte compressed or 65-byte uncompressed encodings
    /// of §6; rejects any other prefix/length or a point off the curve.
    pub fn from_bytes(b: &[u8]) -> Result<PublicKey, Error> {
        match (b.len(), b.first()) {
            (33, Some(0x02)) | (33, Some(0x03)) => {
                let odd = b[0] == 0x03;
                let mut x_bytes = [0u8; 32];
                x_bytes.copy_from_slice(&b[1..33]);
                let (x, overflow) = crate::field::Fe::set_b32(&x_bytes);
                if overflow {
                    return Err(Error::InvalidPublicKey);
                }
                Ge::set_xo_var(&x, odd).map(|p| PublicKey { p }).ok_or(Error::InvalidPublicKey)
            }
            (65, Some(0x04)) => {
                let mut x_bytes = [0u8; 32];
                let mut y_bytes = [0u8; 32];
                x_bytes.copy_from_slice(&b[1..33]);
                y_bytes.copy_from_slice(&b[33..65]);
                let (x, x_overflow) = crate::field::Fe::set_b32(&x_bytes);
                let (y, y_overflow) = crate::field::Fe::set_b32(&y_bytes);
                if x_overflow || y_overflow {
                    return Err(Error::InvalidPublicKey);
                }
                let p = Ge::new(x, y);
                if !p.is_valid_var() {
                    return Err(Error::InvalidPublicKey);
                }
                Ok(PublicKey { p })
            }
            _ => Err(Error::InvalidPublicKey),
        }
    }

    pub fn serialize(&self) -> [u8; 33] {
        let mut x = self.p.x;
        let mut y = self.p.y;
        x.normalize();
        y.normalize();
        let mut out = [0u8; 33];
        out[0] = if y.is_odd() { 0x03 } else { 0x02 };
        out[1..33].copy_from_slice(&x.get_b32());
        out
    }

    pub fn serialize_uncompressed(&self) -> [u8; 65] {
        let mut x = self.p.x;
        let mut y = self.p.y;
        x.normalize();
        y.normalize();
        let mut out = [0u8; 65];
        out[0] = 0x04;
        out[1..33].copy_from_slice(&x.get_b32());
        out[33..65].copy_from_slice(&y.get_b32());
        out
    }

    /// `P' = P + tweak*G`.
    pub fn tweak_add(&self, tweak: &[u8; 32]) -> Result<PublicKey, Error> {
        let (t, overflow) = Sc::set_b32(tweak);
        if overflow {
            return Err(Error::InvalidTweak);
        }
        let contribution = mul_gen(&t);
        let sum = Gej::from_ge(&self.p).add_var(&contribution, None);
        if sum.infinity {
            return Err(Error::InvalidTweak);
        }
        let mut p = sum.to_affine();
        p.x.normalize();
        p.y.normalize();
        Ok(PublicKey { p })
    }

    /// `P' = tweak*P`.
    pub fn tweak_mul(&self, tweak: &[u8; 32]) -> Result<PublicKey, Error> {
        let (t, overflow) = Sc::set_b32(tweak);
        if overflow || t.is_zero() {
            return Err(Error::InvalidTweak);
        }
        let mut p = mul_const(&t, &self.p).to_affine();
        p.x.normalize();
        p.y.normalize();
        Ok(PublicKey { p })
    }

    /// Variable-time sum of public points; fails only if the sum is
    /// infinity (callers passing a key and its negation, say).
    pub fn combine(keys: &[PublicKey]) -> Result<PublicKey, Error> {
        if keys.is_empty() {
            return Err(Error::InvalidPublicKey);
        }
        let mut acc = Gej::from_ge(&keys[0].p);
        for key in &keys[1..] {
            acc = acc.add_ge_var(&key.p, None);
        }
        if acc.infinity {
            return Err(Error::InvalidPublicKey);
        }
        let mut p = acc.to_affine();
        p.x.normalize();
        p.y.normalize();
        Ok(PublicKey { p })
    }
}

/// A BIP-340 x-only public key: 32 bytes, the x-coordinate of a point
/// with even y.
#[derive(Clone, Copy)]
pub struct XOnlyPublicKey {
    pub(crate) x: crate::field::Fe,
}

impl XOnlyPublicKey {
    pub fn from_bytes(b: &[u8; 32]) -> Result<XOnlyPublicKey, Error> {
        let (x, overflow) = crate::field::Fe::set_b32(b);
        if overflow {
            return Err(Error::InvalidXOnlyPublicKey);
        }
        if Ge::set_xo_var(&x, false).is_none() {
            return Err(Error::InvalidXOnlyPublicKey);
        }
        Ok(XOnlyPublicKey { x })
    }

    pub fn serialize(&self) -> [u8; 32] {
        let mut x = self.x;
        x.normalize();
        x.get_b32()
    }

    /// Drops the parity bit from a full public key.
    pub fn from_public_key(pk: &PublicKey) -> XOnlyPublicKey {
        XOnlyPublicKey { x: pk.p.x }
    }

    /// Re-attaches the even-y parity §4.9 verification expects.
    pub fn public_key_even_y(&self) -> PublicKey {
        let mut x = self.x;
        x.normalize();
        let p = Ge::set_xo_var(&x, false).expect("XOnlyPublicKey always has a valid x");
        PublicKey { p }
    }
}

/// A private scalar paired with its cached x-only public key, parity-
/// corrected once at construction per BIP-340 (see [`crate::schnorr`]).
pub struct KeyPair {
    pub(crate) sk: Sc,
    pub(crate) xonly: XOnlyPublicKey,
}

impl KeyPair {
    /// Builds a keypair from a private key, negating the stored scalar if
    /// its naturally-derived public key has odd y so the *stored* scalar
    /// always corresponds to the even-y key.
    pub fn from_secret_key(sk: PrivateKey) -> KeyPair {
        let p = mul_gen(&sk.sk).to_affine();
        let mut y = p.y;
        y.normalize();
        let odd = y.is_odd();
        let corrected = sk.sk.cond_negate(odd as u8);
        let mut x = p.x;
        x.normalize();
        KeyPair { sk: corrected, xonly: XOnlyPublicKey { x } }
    }

    pub fn x_only_public_key(&self) -> XOnlyPublicKey {
        self.xonly
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.sk.wipe();
    }
}

/// The base point `G`, exposed for callers (tests, `ecdh`) that need it
/// directly rather than through a [`PublicKey`].
pub(crate) fn base_point() -> Ge {
    generator()
}
