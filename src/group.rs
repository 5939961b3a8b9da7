//! The secp256k1 group: `y^2 = x^3 + 7` over `F_p`.
//!
//! Two point representations are used, matching the donor crate's
//! `signatures::ed25519::ge`-style split between a compact wire form and a
//! working form: [`Ge`] (affine, two field elements) for stored/encoded
//! points, and [`Gej`] (Jacobian, `(X, Y, Z)` representing affine
//! `(X/Z^2, Y/Z^3)`) for the additions and doublings inside scalar
//! multiplication, where affine coordinates would need a field inversion
//! per step.

use crate::field::Fe;

/// The curve's `b` coefficient.
const CURVE_B: Fe = Fe::from_int(7);

/// `beta`, a primitive cube root of unity mod `p` such that
/// `(beta*x, y)` lies on the curve whenever `(x, y)` does — the
/// `GLV` endomorphism's action on points, paired with
/// [`crate::scalar::Sc::split_lambda`]'s action on scalars.
const BETA_BYTES: [u8; 32] = [
    0x7a, 0xe9, 0x6a, 0x2b, 0x65, 0x7c, 0x07, 0x10, 0x6e, 0x64, 0x47, 0x9e, 0xac, 0x34, 0x34, 0xe9,
    0x9c, 0xf0, 0x49, 0x75, 0x12, 0xf5, 0x89, 0x95, 0xc1, 0x39, 0x6c, 0x28, 0x71, 0x95, 0x01, 0xee,
];

pub(crate) fn beta() -> Fe {
    Fe::set_b32(&BETA_BYTES).0
}

/// An affine point on the curve, or the point at infinity.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ge {
    pub(crate) x: Fe,
    pub(crate) y: Fe,
    pub(crate) infinity: bool,
}

impl Ge {
    pub(crate) const fn infinity() -> Ge {
        Ge { x: Fe::ZERO, y: Fe::ZERO, infinity: true }
    }

    pub(crate) fn new(x: Fe, y: Fe) -> Ge {
        Ge { x, y, infinity: false }
    }

    /// Recovers a point from its x-coordinate and a desired oddness for
    /// y, i.e. `y^2 = x^3 + 7`, picking whichever root has the requested
    /// parity. Returns `None` if `x` isn't on the curve at all.
    pub(crate) fn set_xo_var(x: &Fe, odd: bool) -> Option<Ge> {
        let mut xn = *x;
        xn.normalize();
        let rhs = xn.sqr().mul(&xn).add(&CURVE_B);
        let (mut y, is_square) = rhs.sqrt();
        if !is_square {
            return None;
        }
        y.normalize();
        if y.is_odd() != odd {
            y = y.negate(1);
            y.normalize();
        }
        Some(Ge::new(xn, y))
    }

    /// Checks `y^2 == x^3 + 7` for a normalized-on-entry point.
    pub(crate) fn is_valid_var(&self) -> bool {
        if self.infinity {
            return false;
        }
        let mut x = self.x;
        let mut y = self.y;
        x.normalize();
        y.normalize();
        let lhs = y.sqr();
        let rhs = x.sqr().mul(&x).add(&CURVE_B);
        lhs.eq_var(&rhs)
    }

    pub(crate) fn neg(&self) -> Ge {
        if self.infinity {
            return *self;
        }
        let mut y = self.y.negate(1);
        y.normalize_weak();
        Ge { x: self.x, y, infinity: false }
    }

    /// Applies the GLV endomorphism: `(beta*x, y)`.
    pub(crate) fn mul_lambda(&self) -> Ge {
        Ge { x: self.x.mul(&beta()), y: self.y, infinity: self.infinity }
    }

    /// Rescales a precomputed table entry that was built against an old
    /// shared Jacobian Z onto a new one, given `zr = z_new / z_old`:
    /// `x' = x * zr^2`, `y' = y * zr^3`. This is the "effective affine"
    /// trick — a whole table of affine points can ride along with a
    /// running Jacobian Z without ever calling [`Fe::inv`] per entry.
    pub(crate) fn rescale(&mut self, zr: &Fe) {
        if self.infinity {
            return;
        }
        let zr2 = zr.sqr();
        let zr3 = zr2.mul(zr);
        self.x = self.x.mul(&zr2);
        self.y = self.y.mul(&zr3);
    }

    pub(crate) fn cmov(&mut self, other: &Ge, flag: u8) {
        self.x.cmov(&other.x, flag);
        self.y.cmov(&other.y, flag);
        if flag == 1 {
            self.infinity = other.infinity;
        }
    }
}

/// A point in Jacobian coordinates: affine `(X/Z^2, Y/Z^3)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Gej {
    pub(crate) x: Fe,
    pub(crate) y: Fe,
    pub(crate) z: Fe,
    pub(crate) infinity: bool,
}

impl Gej {
    pub(crate) const fn infinity() -> Gej {
        Gej { x: Fe::ZERO, y: Fe::ZERO, z: Fe::ZERO, infinity: true }
    }

    pub(crate) fn from_ge(a: &Ge) -> Gej {
        if a.infinity {
            return Gej::infinity();
        }
        Gej { x: a.x, y: a.y, z: Fe::ONE, infinity: false }
    }

    pub(crate) fn neg(&self) -> Gej {
        if self.infinity {
            return *self;
        }
        let mut y = self.y.negate(1);
        y.normalize_weak();
        Gej { x: self.x, y, z: self.z, infinity: false }
    }

    /// Point doubling ("dbl-2009-l", valid for any `a = 0` Weierstrass
    /// curve): 4M + 4S.
    pub(crate) fn double_var(&self) -> Gej {
        if self.infinity {
            return Gej::infinity();
        }
        let mut y1 = self.y;
        y1.normalize();
        if y1.is_zero() {
            return Gej::infinity();
        }

        let a = self.x.sqr();
        let b = self.y.sqr();
        let c = b.sqr();
        let mut d = self.x.add(&b).sqr().add(&a.negate(1)).add(&c.negate(1));
        d = d.mul_int(2);
        let e = a.mul_int(3);
        let f = e.sqr();
        let x3 = f.add(&d.mul_int(2).negate(2));
        let y3 = e.mul(&d.add(&x3.negate(3))).add(&c.mul_int(8).negate(8));
        let z3 = self.y.mul(&self.z).mul_int(2);

        Gej { x: x3, y: y3, z: z3, infinity: false }
    }

    /// Full Jacobian addition ("add-2007-bl"), falling back to doubling
    /// or infinity when the inputs coincide or are mutual inverses.
    /// `rzr`, if given, receives `Z3 / Z1` — the ratio a caller riding a
    /// shared global Z on a whole table needs to rescale the rest of it.
    pub(crate) fn add_var(&self, other: &Gej, rzr: Option<&mut Fe>) -> Gej {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }

        let z1z1 = self.z.sqr();
        let z2z2 = other.z.sqr();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);
        let h = u2.add(&u1.negate(1));
        let r = s2.add(&s1.negate(1));

        if h.normalizes_to_zero_var() {
            if r.normalizes_to_zero_var() {
                return self.double_var();
            }
            return Gej::infinity();
        }

        let i = h.mul_int(2).sqr();
        let j = h.mul(&i);
        let rr = r.mul_int(2);
        let v = u1.mul(&i);
        let x3 = rr.sqr().add(&j.negate(1)).add(&v.mul_int(2).negate(2));
        let y3 = rr.mul(&v.add(&x3.negate(3))).add(&s1.mul(&j).mul_int(2).negate(2));
        let z3 = self.z.add(&other.z).sqr().add(&z1z1.negate(1)).add(&z2z2.negate(1)).mul(&h);

        if let Some(out) = rzr {
            *out = h;
        }
        Gej { x: x3, y: y3, z: z3, infinity: false }
    }

    /// Mixed addition with an affine point, constant-time with respect to
    /// the "is `other` infinity" branch (selected via `cmov` rather than
    /// an early return) — used inside the fixed-window loops in
    /// [`crate::ecmult_const`] where every iteration must do the same work.
    pub(crate) fn add_ge(&self, other: &Ge) -> Gej {
        let z1z1 = self.z.sqr();
        let u2 = other.x.mul(&z1z1);
        let s2 = other.y.mul(&self.z).mul(&z1z1);
        let h = u2.add(&self.x.negate(1));
        let hh = h.sqr();
        let i = hh.mul_int(4);
        let j = h.mul(&i);
        let r = s2.add(&self.y.negate(1)).mul_int(2);
        let v = self.x.mul(&i);
        let x3 = r.sqr().add(&j.negate(1)).add(&v.mul_int(2).negate(2));
        let y3 = r.mul(&v.add(&x3.negate(3))).add(&self.y.mul(&j).mul_int(2).negate(2));
        let z3 = self.z.add(&h).sqr().add(&z1z1.negate(1)).add(&hh.negate(1));

        let mut result = Gej { x: x3, y: y3, z: z3, infinity: false };
        let self_inf = self.infinity as u8;
        let other_inf = other.infinity as u8;
        result.cmov(&Gej::from_ge(other), self_inf);
        let mut as_self = *self;
        as_self.cmov(&result, 1 - other_inf);
        as_self
    }

    /// Variable-time mixed addition; `rzr` receives `Z3 / Z1` as in
    /// [`Gej::add_var`].
    pub(crate) fn add_ge_var(&self, other: &Ge, rzr: Option<&mut Fe>) -> Gej {
        if self.infinity {
            return Gej::from_ge(other);
        }
        if other.infinity {
            return *self;
        }

        let z1z1 = self.z.sqr();
        let u2 = other.x.mul(&z1z1);
        let s2 = other.y.mul(&self.z).mul(&z1z1);
        let h = u2.add(&self.x.negate(1));
        let r = s2.add(&self.y.negate(1));

        if h.normalizes_to_zero_var() {
            if r.normalizes_to_zero_var() {
                return self.double_var();
            }
            return Gej::infinity();
        }

        let hh = h.sqr();
        let i = hh.mul_int(4);
        let j = h.mul(&i);
        let rr = r.mul_int(2);
        let v = self.x.mul(&i);
        let x3 = rr.sqr().add(&j.negate(1)).add(&v.mul_int(2).negate(2));
        let y3 = rr.mul(&v.add(&x3.negate(3))).add(&self.y.mul(&j).mul_int(2).negate(2));
        let z3 = self.z.add(&h).sqr().add(&z1z1.negate(1)).add(&hh.negate(1));

        if let Some(out) = rzr {
            *out = h;
        }
        Gej { x: x3, y: y3, z: z3, infinity: false }
    }

    /// Converts to affine by inverting `Z` — the one point in the whole
    /// module where a field inversion actually happens.
    pub(crate) fn to_affine(&self) -> Ge {
        if self.infinity {
            return Ge::infinity();
        }
        let zinv = self.z.inv();
        let zinv2 = zinv.sqr();
        let zinv3 = zinv2.mul(&zinv);
        let mut x = self.x.mul(&zinv2);
        let mut y = self.y.mul(&zinv3);
        x.normalize();
        y.normalize();
        Ge::new(x, y)
    }

    pub(crate) fn cmov(&mut self, other: &Gej, flag: u8) {
        self.x.cmov(&other.x, flag);
        self.y.cmov(&other.y, flag);
        self.z.cmov(&other.z, flag);
        if flag == 1 {
            self.infinity = other.infinity;
        }
    }
}

/// The base point `G`.
pub(crate) fn generator() -> Ge {
    let x = Fe::set_b32(&[
        0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b,
        0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8,
        0x17, 0x98,
    ])
    .0;
    let y = Fe::set_b32(&[
        0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08,
        0xa8, 0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10,
        0xd4, 0xb8,
    ])
    .0;
    Ge::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        assert!(generator().is_valid_var());
    }

    #[test]
    fn point_plus_its_negation_is_infinity() {
        let g = Gej::from_ge(&generator());
        let neg = g.neg();
        let sum = g.add_var(&neg, None);
        assert!(sum.infinity);
    }

    #[test]
    fn point_plus_infinity_is_identity() {
        let g = Gej::from_ge(&generator());
        let sum = g.add_var(&Gej::infinity(), None);
        assert!(sum.to_affine().x.eq_var(&g.to_affine().x));
        assert!(sum.to_affine().y.eq_var(&g.to_affine().y));
    }

    #[test]
    fn doubling_matches_self_addition() {
        let g = Gej::from_ge(&generator());
        let doubled = g.double_var().to_affine();
        let added = g.add_var(&g, None).to_affine();
        assert!(doubled.x.eq_var(&added.x));
        assert!(doubled.y.eq_var(&added.y));
    }

    #[test]
    fn mul_lambda_stays_on_curve() {
        let g = generator();
        let moved = g.mul_lambda();
        assert!(moved.is_valid_var());
        assert!(moved.y.eq_var(&g.y));
    }
}
