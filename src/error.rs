//! Error taxonomy for the secp256k1 core and its protocol layers.
//!
//! Every variant here corresponds to a *recoverable* condition: malformed
//! input, invalid key material, or a signature that simply doesn't verify.
//! None of these are raised for precondition violations on the field/scalar
//! arithmetic (e.g. exceeding a documented magnitude bound) — those are
//! programmer errors and out of contract, per spec.

/// Recoverable failure conditions surfaced by this crate's public API.
///
/// All parsing, key-derivation and signing operations are total: they
/// return `Result<_, Error>` and never panic on attacker-controlled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A secret key was zero, or its big-endian encoding was >= the group order `n`.
    InvalidSecretKey,
    /// A public key was malformed: wrong length, bad prefix byte, or the
    /// decoded coordinates don't satisfy the curve equation.
    InvalidPublicKey,
    /// An x-only public key's x coordinate has no corresponding curve point.
    InvalidXOnlyPublicKey,
    /// A tweak value was unusable for the requested operation (>= n for
    /// addition; zero or >= n for multiplication).
    InvalidTweak,
    /// A signature's `r`/`s` (or `r32`/`s`) components were out of range
    /// for their respective moduli.
    InvalidSignature,
    /// Reserved: message digests handed to this crate are always 32
    /// bytes, so nothing currently constructs this variant. Kept for
    /// callers that validate message length before this crate sees it.
    #[allow(dead_code)]
    InvalidMessage,
    /// A BIP-340 nonce derivation reduced to zero mod n. Unlike RFC 6979,
    /// this has no retry counter to vary and so fails outright.
    NonceFailure,
}
