//! BIP-340 tagged hashing: `SHA256(SHA256(tag) || SHA256(tag) || msg)`.
//!
//! Prefixing every hash with a domain tag keeps Schnorr's various hash
//! uses (nonce derivation, challenge computation, auxiliary-randomness
//! mixing) from ever colliding with each other or with an unrelated
//! protocol's use of SHA-256.

use crate::hash::sha256;

pub(crate) fn tagged_hash(tag: &str, msg: &[u8]) -> [u8; 32] {
    let tag_hash = sha256(tag.as_bytes()).0;

    let mut input = Vec::with_capacity(64 + msg.len());
    input.extend_from_slice(&tag_hash);
    input.extend_from_slice(&tag_hash);
    input.extend_from_slice(msg);

    sha256(&input).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic_and_tag_sensitive() {
        let msg = b"hello";
        assert_eq!(tagged_hash("BIP0340/challenge", msg), tagged_hash("BIP0340/challenge", msg));
        assert_ne!(tagged_hash("BIP0340/challenge", msg), tagged_hash("BIP0340/nonce", msg));
    }

    #[test]
    fn matches_definition() {
        let tag_hash = sha256(b"t").0;
        let mut expected_input = Vec::new();
        expected_input.extend_from_slice(&tag_hash);
        expected_input.extend_from_slice(&tag_hash);
        expected_input.extend_from_slice(b"msg");
        let expected = sha256(&expected_input).0;
        assert_eq!(tagged_hash("t", b"msg"), expected);
    }
}
