//! ECDH shared-secret computation, with a caller-replaceable hash hook
//! and an x-only variant that skips hashing entirely.

use crate::ecmult_const::mul_const;
use crate::error::Error;
use crate::hash::sha256;
use crate::keys::{PrivateKey, PublicKey};

/// A caller-supplied hash hook: given the shared point's normalized
/// `(x, y)` coordinates, fills `out` and returns whether it succeeded.
/// Mirrors the donor's preference for small functional contracts over a
/// trait object at a hot, secret-touching call site.
pub type HashHook = fn(out: &mut [u8; 32], x: &[u8; 32], y: &[u8; 32]) -> bool;

/// The default hook: `SHA256([(y[31] & 1) | 2] || x)`, the widely used
/// "compressed-point-prefix" convention.
pub fn default_hash_hook(out: &mut [u8; 32], x: &[u8; 32], y: &[u8; 32]) -> bool {
    let mut input = [0u8; 33];
    input[0] = (y[31] & 1) | 2;
    input[1..33].copy_from_slice(x);
    *out = sha256(&input).0;
    true
}

/// Computes the ECDH shared secret between `sk` and `pubkey`, passing
/// the resulting point's coordinates through `hook` (or
/// [`default_hash_hook`] if `None`).
pub fn shared_secret(
    sk: &PrivateKey,
    pubkey: &PublicKey,
    hook: Option<HashHook>,
) -> Result<[u8; 32], Error> {
    let mut shared = mul_const(&sk.sk, &pubkey.p).to_affine();
    if shared.infinity {
        return Err(Error::InvalidPublicKey);
    }
    shared.x.normalize();
    shared.y.normalize();
    let x = shared.x.get_b32();
    let y = shared.y.get_b32();

    let hook = hook.unwrap_or(default_hash_hook);
    let mut out = [0u8; 32];
    if !hook(&mut out, &x, &y) {
        return Err(Error::InvalidPublicKey);
    }
    Ok(out)
}

/// The x-only variant: outputs the shared point's x-coordinate directly,
/// with no hashing step.
pub fn shared_secret_xonly(sk: &PrivateKey, pubkey: &PublicKey) -> Result<[u8; 32], Error> {
    let mut shared = mul_const(&sk.sk, &pubkey.p).to_affine();
    if shared.infinity {
        return Err(Error::InvalidPublicKey);
    }
    shared.x.normalize();
    Ok(shared.x.get_b32())
}
