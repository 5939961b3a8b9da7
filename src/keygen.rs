//! Library-edge key generation. Kept separate from `keys.rs`: everything
//! in `keys` is a pure function of its byte inputs, while this module is
//! the crate's one dependency on outside randomness, via the donor's
//! OS-seeded [`crate::rng::Csprng`].

use crate::keys::PrivateKey;
use crate::rng::Csprng;
use crate::scalar::Sc;

impl PrivateKey {
    /// Draws a private key from OS-seeded randomness, retrying the
    /// vanishingly rare case where the raw bytes decode to zero or
    /// `>= n`.
    pub fn random() -> PrivateKey {
        let mut rng = Csprng::from_os();
        loop {
            let mut candidate = [0u8; 32];
            rng.fill_bytes(&mut candidate);
            let (sk, overflow) = Sc::set_b32(&candidate);
            candidate.fill(0);
            if !overflow && !sk.is_zero() {
                return PrivateKey { sk };
            }
        }
    }
}
