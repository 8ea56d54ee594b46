// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1, SHA-2, SHA-3 and SHAKE message digests.
//!
//! Two engines carry every algorithm:
//! - a Merkle–Damgård engine (FIPS 180-4) parameterized by word width,
//!   block function and initial state, shared by SHA-1 and all six SHA-2
//!   variants;
//! - a sponge over Keccak-f[1600] (FIPS 202) parameterized by rate and
//!   domain suffix, shared by SHA3-224..512 and SHAKE128/256.
//!
//! All intermediate state is zeroized before a call returns.
//!
//! ```
//! use digestive::{Algorithm, sha256, shake128};
//!
//! assert_eq!(
//!     sha256(b"abc").to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! assert_eq!(shake128(b"", 256).len(), 32);
//!
//! let algorithm: Algorithm = "SHA3-256".parse().unwrap();
//! assert_eq!(algorithm.hash(b"abc").unwrap().len(), 32);
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - FIPS 202: SHA-3 Standard
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod consts;
mod keccak;
mod md;
mod oneshot;
mod sha1;
mod sha2;
mod sponge;
mod variants;

pub use algorithm::{Algorithm, Family};
pub use digestive_core::{Digest, DigestError, Word};
pub use keccak::{KeccakState, keccak_f1600};
pub use oneshot::{
    sha1, sha3_224, sha3_256, sha3_384, sha3_512, sha224, sha256, sha384, sha512, sha512_224,
    sha512_256, shake128, shake256,
};
