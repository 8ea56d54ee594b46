// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word - fixed-width machine word shared by the 32-bit and 64-bit engines.
//!
//! SHA-1 and SHA-224/256 run on `u32`, SHA-384/512 and Keccak lanes on `u64`.
//! All arithmetic is modulo 2^BITS.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use zeroize::DefaultIsZeroes;

/// Fixed-width word with the primitive operations of FIPS 180-4 Section 3.2.
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + Send
    + Sync
    + DefaultIsZeroes
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const BYTES: usize;

    /// (self + rhs) mod 2^BITS
    fn wrapping_add(self, rhs: Self) -> Self;

    /// ROTR^n(self)
    fn rotr(self, n: u32) -> Self;

    /// ROTL^n(self)
    fn rotl(self, n: u32) -> Self;

    /// SHR^n(self)
    fn shr(self, n: u32) -> Self;

    /// Reads a word from the first `BYTES` bytes of `bytes`, big-endian.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `BYTES`.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Reads a word from the first `BYTES` bytes of `bytes`, little-endian.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `BYTES`.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Writes the word into the first `BYTES` bytes of `out`, big-endian.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `BYTES`.
    fn write_be(self, out: &mut [u8]);

    /// Writes the word into the first `BYTES` bytes of `out`, little-endian.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `BYTES`.
    fn write_le(self, out: &mut [u8]);

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z) per FIPS 180-4 Section 4.1
    #[inline(always)]
    fn ch(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (!x & z)
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z) per FIPS 180-4 Section 4.1
    ///
    /// Optimized form: (x & y) ^ (z & (x ^ y))
    #[inline(always)]
    fn maj(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (z & (x ^ y))
    }

    /// Parity(x,y,z) = x ⊕ y ⊕ z per FIPS 180-4 Section 4.1.1
    #[inline(always)]
    fn parity(x: Self, y: Self, z: Self) -> Self {
        x ^ y ^ z
    }
}

/// Implements [`Word`] for an unsigned integer type of `$size` bytes.
macro_rules! impl_word {
    ($type:ty, $size:expr) => {
        impl Word for $type {
            const BITS: u32 = <$type>::BITS;
            const BYTES: usize = $size;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$type>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n)
            }

            #[inline(always)]
            fn rotl(self, n: u32) -> Self {
                self.rotate_left(n)
            }

            #[inline(always)]
            fn shr(self, n: u32) -> Self {
                self >> n
            }

            #[inline(always)]
            fn from_be_slice(bytes: &[u8]) -> Self {
                bytes[..$size]
                    .iter()
                    .fold(0, |acc, &byte| (acc << 8) | <$type>::from(byte))
            }

            #[inline(always)]
            fn from_le_slice(bytes: &[u8]) -> Self {
                bytes[..$size]
                    .iter()
                    .rev()
                    .fold(0, |acc, &byte| (acc << 8) | <$type>::from(byte))
            }

            #[inline(always)]
            fn write_be(self, out: &mut [u8]) {
                for (i, byte) in out[..$size].iter_mut().enumerate() {
                    *byte = (self >> (8 * ($size - 1 - i))) as u8;
                }
            }

            #[inline(always)]
            fn write_le(self, out: &mut [u8]) {
                for (i, byte) in out[..$size].iter_mut().enumerate() {
                    *byte = (self >> (8 * i)) as u8;
                }
            }
        }
    };
}

impl_word!(u32, 4);
impl_word!(u64, 8);
