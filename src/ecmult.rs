//! Variable-time multi-scalar multiplication: `a*P + b*G`.
//!
//! Signature verification checks a public equation on public data — there
//! is no secret scalar here, so unlike [`crate::ecmult_const`] this path
//! is free to branch on its inputs and take whatever shortcuts are
//! fastest. It still builds a small odd-multiples table for `P` (the
//! standard simultaneous-multiplication trick), interleaving bits of `a`
//! and `b` so the two scalars share one pass of doublings.

use crate::ecmult_gen;
use crate::group::{Ge, Gej};
use crate::scalar::Sc;

/// Window width for `P`'s odd-multiples table: entries `1*P, 3*P, ..., 15*P`.
const WINDOW_A: u32 = 4;
const TABLE_SIZE: usize = 1 << (WINDOW_A - 1);

/// Builds `{1*P, 3*P, 5*P, ..., (2*TABLE_SIZE-1)*P}` in Jacobian form.
fn build_odd_table(point: &Gej) -> [Gej; TABLE_SIZE] {
    let mut table = [Gej::infinity(); TABLE_SIZE];
    table[0] = *point;
    let double = point.double_var();
    for i in 1..TABLE_SIZE {
        table[i] = table[i - 1].add_var(&double, None);
    }
    table
}

/// Picks the table entry for a nonzero odd digit `|d| <= 2*TABLE_SIZE-1`,
/// negating it back if `d` was negative.
fn lookup(table: &[Gej; TABLE_SIZE], digit: i32) -> Gej {
    let idx = ((digit.unsigned_abs() - 1) / 2) as usize;
    let entry = table[idx];
    if digit < 0 {
        entry.neg()
    } else {
        entry
    }
}

/// Width-`w` NAF recoding of a scalar's low 256 bits into signed odd
/// digits (plus zeros), most-significant digit first out of the caller's
/// perspective (this builds the array index-by-bit-position, LSB first).
fn wnaf(k: &Sc, w: u32) -> [i32; 257] {
    let mut digits = [0i32; 257];
    let mut bits = [0u8; 257];
    for i in 0..256 {
        bits[i] = k.get_bits(i as u32, 1) as u8;
    }
    let width = w as usize;
    let mut i = 0usize;
    while i < 256 {
        if bits[i] == 1 {
            let mut val: i32 = 1;
            let mut j = 1;
            while j < width && i + j < 257 {
                val |= (bits[i + j] as i32) << j;
                j += 1;
            }
            let half = 1i32 << (width - 1);
            let mut digit = val;
            let mut carry = 0u8;
            if val >= half {
                digit = val - (1 << width);
                carry = 1;
            }
            digits[i] = digit;
            if carry == 1 {
                let mut c = i + width;
                while c < 257 && bits[c] == 1 {
                    bits[c] = 0;
                    c += 1;
                }
                if c < 257 {
                    bits[c] = 1;
                }
            }
            i += width;
        } else {
            i += 1;
        }
    }
    digits
}

/// `a*point + b*G`, using whatever time `a`/`b` happen to take: both are
/// public in every caller (signature verification, Schnorr verification).
pub(crate) fn mul_add_gen_var(a: &Sc, point: &Ge, b: &Sc) -> Gej {
    let point_j = Gej::from_ge(point);
    let odd_table = build_odd_table(&point_j);
    let a_naf = wnaf(a, WINDOW_A);

    let mut acc = Gej::infinity();
    let mut i = 256i32;
    while i >= 0 {
        acc = acc.double_var();
        let d = a_naf[i as usize];
        if d != 0 {
            acc = acc.add_var(&lookup(&odd_table, d), None);
        }
        i -= 1;
    }

    let b_contrib = ecmult_gen::mul_gen(b);
    acc.add_var(&b_contrib, None)
}
