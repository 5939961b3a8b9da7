//! Constant-time variable-base scalar multiplication: `k * P` for a
//! caller-supplied (not necessarily public) point `P`.
//!
//! This is the multiplication ECDSA/ECDH use on untrusted or secret
//! scalars, so every step must take the same path regardless of the bits
//! of `k`: no table index or branch may depend on secret data. Two ideas
//! combine to make that cheap:
//!
//! - **GLV split**: `k` is decomposed as `k = k1 + k2*lambda (mod n)` via
//!   [`Sc::split_lambda`], with `k1`, `k2` each only about half the bit
//!   width of `k`. Since `lambda*P` has the same `y` as `P` (just a
//!   `beta`-scaled `x`), the two halves can be accumulated with a single
//!   shared sequence of doublings instead of two full-width ladders.
//! - **Constant-time ladder**: each step doubles the accumulator once and
//!   *unconditionally* computes both candidate mixed additions, using
//!   [`Gej::cmov`] to select whether each one actually applied. The
//!   control flow never depends on `k`; only data does.

use crate::group::{Ge, Gej};
use crate::scalar::Sc;

/// Bits of slack above the ~128-bit GLV bound on `|k1|`, `|k2|`.
const LADDER_BITS: u32 = 130;

/// Splits a GLV half into `(sign, magnitude)`. The decomposition
/// guarantees `|k1|, |k2| < 2^128` (with a few bits of slack); a value
/// whose top 128 bits are nonzero is therefore the *negated* short value,
/// stored as `n - |k|`.
fn sign_and_abs(k: Sc) -> (u8, Sc) {
    let bytes = k.get_b32();
    let is_negative = bytes[0..16].iter().any(|&b| b != 0);
    if is_negative {
        (1, k.negate())
    } else {
        (0, k)
    }
}

/// `k * point`, constant-time in `k`.
pub(crate) fn mul_const(k: &Sc, point: &Ge) -> Gej {
    let (k1, k2) = k.split_lambda();
    let (k1_neg, k1_abs) = sign_and_abs(k1);
    let (k2_neg, k2_abs) = sign_and_abs(k2);

    let p_pos = *point;
    let p_neg = point.neg();
    let mut p_signed = p_pos;
    p_signed.cmov(&p_neg, k1_neg);

    let plam_pos = point.mul_lambda();
    let plam_neg = plam_pos.neg();
    let mut plam_signed = plam_pos;
    plam_signed.cmov(&plam_neg, k2_neg);

    let mut acc = Gej::infinity();
    for i in (0..LADDER_BITS).rev() {
        acc = acc.double_var();

        let bit1 = k1_abs.get_bits(i, 1) as u8;
        let added1 = acc.add_ge(&p_signed);
        acc.cmov(&added1, bit1);

        let bit2 = k2_abs.get_bits(i, 1) as u8;
        let added2 = acc.add_ge(&plam_signed);
        acc.cmov(&added2, bit2);
    }
    acc
}
