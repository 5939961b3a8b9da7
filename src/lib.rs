//! A from-scratch secp256k1 elliptic-curve library: field and scalar
//! arithmetic, group operations, fixed-base/variable-base scalar
//! multiplication, ECDSA, ECDH (with an x-only variant), and BIP-340
//! Schnorr signatures.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are designed to be dependency-free, explicit in their
//! semantics, and suitable for security-critical code.
//!
//! # Module overview
//!
//! - `field` / `scalar`
//!   The two modular-arithmetic layers everything else is built on: `Fe`
//!   (base field `F_p`, lazily-reduced 5×52-bit limbs with a tracked
//!   magnitude) and `Sc` (scalar field mod the group order `n`, always
//!   fully reduced).
//!
//! - `group`
//!   Affine (`Ge`) and Jacobian (`Gej`) points on the curve, with the
//!   doubling/addition formulas and the effective-affine trick
//!   precomputed tables use to avoid a field inversion per entry.
//!
//! - `ecmult_gen` / `ecmult_const` / `ecmult`
//!   The three scalar-multiplication paths: fixed-base `k*G` via a
//!   precomputed comb, constant-time variable-base `k*P` via a GLV split
//!   and a `cmov`-selected ladder, and variable-time `a*P + b*G` for
//!   signature verification.
//!
//! - `ecdsa` / `ecdh` / `schnorr`
//!   The three signature/agreement protocols built on the arithmetic
//!   core.
//!
//! - `keys` / `keygen`
//!   Key types (`PrivateKey`, `PublicKey`, `XOnlyPublicKey`, `KeyPair`),
//!   their wire encodings and tweak operations, and OS-seeded key
//!   generation.
//!
//! - `hash`
//!   Cryptographic hash functions and related utilities this crate
//!   builds itself rather than depending on `sha2`/`hmac`: SHA-256,
//!   HMAC-SHA-256, the RFC 6979 nonce DRBG, and BIP-340 tagged hashing.
//!
//! - `rng`
//!   Cryptographically secure pseudorandom number generation built from
//!   internal primitives, used only by `keygen` — never by the core
//!   arithmetic or signing paths.
//!
//! - `primitives`
//!   Fixed-size, low-level integer primitives (`U256`) used as a
//!   building block by `hash`.
//!
//! - `ct`
//!   Constant-time helpers (`cmov`, branch-free masks, byte-level
//!   equality) shared by `field`, `scalar` and `group`.
//!
//! - `error`
//!   The recoverable-failure taxonomy surfaced by this crate's public API.
//!
//! # Design goals
//!
//! - No heap allocations on the constant-time paths (the fixed-base
//!   table and the `ecmult_const` odd-multiples table are the only
//!   allocations anywhere in the library, both built once from public
//!   data).
//! - Constant-time arithmetic wherever a secret scalar is involved;
//!   variable-time is used only where the inputs are already public
//!   (signature verification, public-key combination).
//! - Side-channel countermeasures beyond constant-time arithmetic (e.g.
//!   table blinding), DER signature encoding, and CLI/build tooling are
//!   out of scope.
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries, but to serve as a small, controlled,
//! from-scratch implementation of the secp256k1 primitives Bitcoin-style
//! protocols need.

mod ct;
mod ecmult;
mod ecmult_const;
mod ecmult_gen;
mod error;
mod field;
mod group;
mod keygen;
mod os;
mod scalar;

pub mod ecdh;
pub mod ecdsa;
pub mod hash;
pub mod keys;
pub mod primitives;
pub mod rng;
pub mod schnorr;

pub use error::Error;
