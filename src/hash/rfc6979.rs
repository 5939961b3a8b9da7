//! RFC 6979 deterministic nonce generation (the HMAC-DRBG construction,
//! section 3.2), specialized to SHA-256 and a 32-byte secret/message
//! input — the only instantiation ECDSA signing here needs.
//!
//! This mirrors the shape of [`crate::rng::Csprng`] (seed once, then draw
//! fixed-size blocks from internal state) but is deterministic: the same
//! `(secret, msg_hash)` pair always walks the same path, which is the
//! whole point — no OS entropy is consulted.

use crate::hash::hmac::hmac_sha256;

/// An RFC 6979 HMAC-DRBG instance, seeded from a private key and a
/// message hash and optionally additional caller data.
pub(crate) struct Rfc6979Drbg {
    k: [u8; 32],
    v: [u8; 32],
}

impl Rfc6979Drbg {
    pub(crate) fn new(secret: &[u8; 32], msg_hash: &[u8; 32], extra: &[u8]) -> Rfc6979Drbg {
        let mut k = [0u8; 32];
        let mut v = [1u8; 32];

        let mut input = Vec::with_capacity(32 + 1 + 32 + 32 + extra.len());
        input.extend_from_slice(&v);
        input.push(0x00);
        input.extend_from_slice(secret);
        input.extend_from_slice(msg_hash);
        input.extend_from_slice(extra);
        k = hmac_sha256(&k, &input);
        v = hmac_sha256(&k, &v);

        input.clear();
        input.extend_from_slice(&v);
        input.push(0x01);
        input.extend_from_slice(secret);
        input.extend_from_slice(msg_hash);
        input.extend_from_slice(extra);
        k = hmac_sha256(&k, &input);
        v = hmac_sha256(&k, &v);

        Rfc6979Drbg { k, v }
    }

    /// Produces the next 32-byte output block, per the RFC 6979
    /// generation loop (section 3.2, steps g/h). A full ECDSA nonce
    /// search only ever needs one or two calls in practice.
    pub(crate) fn next_bytes(&mut self) -> [u8; 32] {
        self.v = hmac_sha256(&self.k, &self.v);
        let out = self.v;

        let mut input = Vec::with_capacity(33);
        input.extend_from_slice(&self.v);
        input.push(0x00);
        self.k = hmac_sha256(&self.k, &input);
        self.v = hmac_sha256(&self.k, &self.v);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic_given_the_same_inputs() {
        let secret = [1u8; 32];
        let msg_hash = [2u8; 32];
        let mut a = Rfc6979Drbg::new(&secret, &msg_hash, &[]);
        let mut b = Rfc6979Drbg::new(&secret, &msg_hash, &[]);
        assert_eq!(a.next_bytes(), b.next_bytes());
        assert_eq!(a.next_bytes(), b.next_bytes());
    }

    #[test]
    fn different_messages_give_different_nonces() {
        let secret = [1u8; 32];
        let mut a = Rfc6979Drbg::new(&secret, &[2u8; 32], &[]);
        let mut b = Rfc6979Drbg::new(&secret, &[3u8; 32], &[]);
        assert_ne!(a.next_bytes(), b.next_bytes());
    }

    #[test]
    fn successive_blocks_differ() {
        let mut drbg = Rfc6979Drbg::new(&[1u8; 32], &[2u8; 32], &[]);
        let first = drbg.next_bytes();
        let second = drbg.next_bytes();
        assert_ne!(first, second);
    }
}
