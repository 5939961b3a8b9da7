//! HMAC-SHA256 (RFC 2104).
//!
//! Built directly on [`crate::hash::sha256`], following the same
//! dependency-free, explicit-semantics style as the rest of `hash`: no
//! `hmac`/`digest` crate, just the construction spelled out.

use crate::hash::sha256;

const BLOCK_SIZE: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Computes `HMAC-SHA256(key, message)`.
///
/// Keys longer than the block size are hashed down first, per RFC 2104;
/// shorter keys are zero-padded up to the block size.
pub(crate) fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut block_key = [0u8; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        let digest = sha256(key).0;
        block_key[..32].copy_from_slice(&digest);
    } else {
        block_key[..key.len()].copy_from_slice(key);
    }

    let mut ipad_key = [0u8; BLOCK_SIZE];
    let mut opad_key = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        ipad_key[i] = block_key[i] ^ IPAD;
        opad_key[i] = block_key[i] ^ OPAD;
    }

    let mut inner_input = Vec::with_capacity(BLOCK_SIZE + message.len());
    inner_input.extend_from_slice(&ipad_key);
    inner_input.extend_from_slice(message);
    let inner_digest = sha256(&inner_input).0;

    let mut outer_input = Vec::with_capacity(BLOCK_SIZE + 32);
    outer_input.extend_from_slice(&opad_key);
    outer_input.extend_from_slice(&inner_digest);
    sha256(&outer_input).0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RFC 4231 test case 2: key = "Jefe", data = "what do ya want for nothing?"
    #[test]
    fn matches_rfc4231_test_case_2() {
        let key = b"Jefe";
        let data = b"what do ya want for nothing?";
        let expected = [
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ];
        assert_eq!(hmac_sha256(key, data), expected);
    }
}
