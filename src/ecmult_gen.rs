//! Fixed-base scalar multiplication: `k * G`.
//!
//! A comb table is precomputed once (behind a [`OnceLock`], the same
//! lazy-singleton idiom the donor crate's `primitives`/`hash` modules use
//! in place of `lazy_static`): for each of the 32 byte positions `i` and
//! every possible byte value `v`, `table[i][v] = v * 256^i * G`. Computing
//! `k * G` then costs 32 table lookups and mixed additions instead of
//! ~256 doublings, at the cost of a multi-hundred-KB table.
//!
//! Table *lookups* are scanned linearly with constant-time select rather
//! than indexed directly, since `k` here is typically a secret key or
//! nonce — the table's row values aren't secret, but which column gets
//! picked out of each row is.

use std::sync::OnceLock;

use crate::ct;
use crate::group::{generator, Ge, Gej};
use crate::scalar::Sc;

struct GenTable {
    rows: Box<[[Ge; 256]; 32]>,
}

static GEN_TABLE: OnceLock<GenTable> = OnceLock::new();

fn table() -> &'static GenTable {
    GEN_TABLE.get_or_init(build_table)
}

fn build_table() -> GenTable {
    let mut rows: Box<[[Ge; 256]; 32]> = Box::new([[Ge::infinity(); 256]; 32]);
    let mut base = Gej::from_ge(&generator());
    for i in 0..32 {
        let mut running = Gej::infinity();
        rows[i][0] = Ge::infinity();
        for v in 1..256usize {
            running = running.add_var(&base, None);
            rows[i][v] = running.to_affine();
        }
        for _ in 0..8 {
            base = base.double_var();
        }
    }
    GenTable { rows }
}

fn eq_flag(a: u8, b: u8) -> u8 {
    1 - ct::nonzero_to_flag((a ^ b) as u64)
}

/// Constant-time selection of `row[idx]` via a full linear scan.
fn select(row: &[Ge; 256], idx: u8) -> Ge {
    let mut result = Ge::infinity();
    for (v, candidate) in row.iter().enumerate() {
        let flag = eq_flag(v as u8, idx);
        result.cmov(candidate, flag);
    }
    result
}

/// `k * G`.
pub(crate) fn mul_gen(k: &Sc) -> Gej {
    let t = table();
    let bytes = k.get_b32();
    let mut acc = Gej::infinity();
    for i in 0..32 {
        // bytes[31-i] is the byte at position 2^(8*i) (bytes[] is big-endian).
        let entry = select(&t.rows[i], bytes[31 - i]);
        acc = acc.add_ge(&entry);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gives_infinity() {
        assert!(mul_gen(&Sc::ZERO).infinity);
    }

    #[test]
    fn one_gives_the_generator() {
        let g = generator();
        let got = mul_gen(&Sc::ONE).to_affine();
        assert!(got.x.eq_var(&g.x));
        assert!(got.y.eq_var(&g.y));
    }
}
