// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest value type.
//!
//! A digest is an immutable sequence of N bytes, index 0 being the most
//! significant byte of the canonical hex rendering. Fixed-size digests (up to
//! 512 bits) are stored inline; longer SHAKE outputs spill to the heap.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use smallvec::{SmallVec, smallvec};
use subtle::ConstantTimeEq;

use crate::error::DigestError;
use crate::pack::words_to_be_bytes;
use crate::word::Word;

/// Bytes stored inline before a digest allocates (SHA-512 width).
const INLINE_LEN: usize = 64;

/// Message digest produced by one of the hash engines.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest {
    bytes: SmallVec<[u8; INLINE_LEN]>,
}

impl Digest {
    /// Creates a digest holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: SmallVec::from_slice(bytes),
        }
    }

    /// Creates a `len`-byte digest whose bytes are written by `fill`.
    ///
    /// `fill` receives a zeroed buffer of exactly `len` bytes.
    pub fn from_fn(len: usize, fill: impl FnOnce(&mut [u8])) -> Self {
        let mut bytes: SmallVec<[u8; INLINE_LEN]> = smallvec![0u8; len];
        fill(bytes.as_mut_slice());
        Self { bytes }
    }

    /// Creates a `ceil(bits / 8)`-byte digest from big-endian words.
    ///
    /// Words are rendered big-endian and concatenated; the result is cut (or
    /// zero-extended) to the requested width. When `bits` is not a multiple of
    /// 8 the unused low-order bits of the last byte are cleared.
    pub fn from_words<W: Word>(words: &[W], bits: usize) -> Self {
        let mut digest = Self::from_fn(bits.div_ceil(8), |out| {
            words_to_be_bytes(words, out);
        });

        let spare = bits % 8;
        if spare != 0 {
            if let Some(last) = digest.bytes.last_mut() {
                *last &= 0xFFu8 << (8 - spare);
            }
        }

        digest
    }

    /// [`Digest::from_words`] for 32-bit words.
    pub fn from_words32(words: &[u32], bits: usize) -> Self {
        Self::from_words(words, bits)
    }

    /// [`Digest::from_words`] for 64-bit words.
    pub fn from_words64(words: &[u64], bits: usize) -> Self {
        Self::from_words(words, bits)
    }

    /// Decodes a hex string into a digest of exactly `len` bytes.
    ///
    /// - Upper- and lower-case digits are accepted.
    /// - Strings shorter than `2 * len` digits are right-padded with zero
    ///   nibbles; an odd trailing digit therefore lands in the high nibble of
    ///   its byte (`"abc"` with `len = 2` decodes to `[0xab, 0xc0]`).
    /// - Digits beyond `2 * len` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidEncoding`] for the first character that
    /// is not a hex digit, wherever it appears in `hex`.
    pub fn from_hex(hex: &str, len: usize) -> Result<Self, DigestError> {
        let mut bytes: SmallVec<[u8; INLINE_LEN]> = smallvec![0u8; len];

        for (position, found) in hex.chars().enumerate() {
            let nibble = found
                .to_digit(16)
                .ok_or(DigestError::InvalidEncoding { position, found })?
                as u8;

            if let Some(byte) = bytes.get_mut(position / 2) {
                if position % 2 == 0 {
                    *byte |= nibble << 4;
                } else {
                    *byte |= nibble;
                }
            }
        }

        Ok(Self { bytes })
    }

    /// Lowercase hex rendering, exactly `2 * len()` characters.
    pub fn to_hex(&self) -> String {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut hex = String::with_capacity(2 * self.bytes.len());
        for &byte in &self.bytes {
            hex.push(DIGITS[usize::from(byte >> 4)] as char);
            hex.push(DIGITS[usize::from(byte & 0x0F)] as char);
        }
        hex
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest holds no bytes (a zero-length XOF output)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Width in bits (`8 * len()`)
    pub fn bits(&self) -> usize {
        8 * self.bytes.len()
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the digest, returning its bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_vec()
    }

    /// Compares two digests in time independent of where they differ.
    ///
    /// Digests of different lengths compare unequal.
    pub fn ct_eq(&self, other: &Digest) -> bool {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice()).into()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: SmallVec::from_vec(bytes),
        }
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    /// Decodes a hex string; the length is `ceil(digits / 2)` bytes.
    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        Self::from_hex(hex, hex.chars().count().div_ceil(2))
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
