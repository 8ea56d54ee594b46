// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared building blocks for the digestive hash engines.
//!
//! - [`Word`]: fixed-width machine words (`u32`, `u64`) with the rotate,
//!   shift and boolean functions used by FIPS 180-4.
//! - [`pack`]: explicit big-endian / little-endian conversions between byte
//!   buffers and word arrays.
//! - [`Digest`]: the immutable digest value with hex (de)serialization.
//! - [`DigestError`]: the single error type of the workspace.
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

mod digest;
mod error;
mod word;

pub mod pack;

pub use digest::Digest;
pub use error::DigestError;
pub use word::Word;
