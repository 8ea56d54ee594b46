// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime algorithm selection.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use digestive_core::{Digest, DigestError};
use tracing::{debug, trace};

use crate::md::{self, Compression};
use crate::sha1::Sha1;
use crate::sha2::Sha2;
use crate::variants;

/// Largest SHA-1 / SHA-224 / SHA-256 message in bytes: its bit length must
/// fit the 64-bit length field.
const MD64_MAX_MESSAGE_LEN: u64 = u64::MAX / 8;

/// Algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// SHA-1
    Sha1,
    /// SHA-224 through SHA-512/256
    Sha2,
    /// SHA3-224 through SHA3-512
    Sha3,
    /// SHAKE128, SHAKE256
    Shake,
}

impl Family {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Family::Sha1 => "SHA-1",
            Family::Sha2 => "SHA-2",
            Family::Sha3 => "SHA-3",
            Family::Shake => "SHAKE",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A supported hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// SHA-1, FIPS 180-4
    Sha1,
    /// SHA-224, FIPS 180-4
    Sha224,
    /// SHA-256, FIPS 180-4
    Sha256,
    /// SHA-384, FIPS 180-4
    Sha384,
    /// SHA-512, FIPS 180-4
    Sha512,
    /// SHA-512/224, FIPS 180-4
    Sha512_224,
    /// SHA-512/256, FIPS 180-4
    Sha512_256,
    /// SHA3-224, FIPS 202
    Sha3_224,
    /// SHA3-256, FIPS 202
    Sha3_256,
    /// SHA3-384, FIPS 202
    Sha3_384,
    /// SHA3-512, FIPS 202
    Sha3_512,
    /// SHAKE128, FIPS 202
    Shake128,
    /// SHAKE256, FIPS 202
    Shake256,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
        Algorithm::Shake128,
        Algorithm::Shake256,
    ];

    /// Selects an algorithm by family and output width.
    ///
    /// For [`Family::Shake`], `bits` is the security strength (128 or 256).
    /// SHA-512/224 and SHA-512/256 are reached through [`Algorithm::sha512_t`].
    pub fn from_parts(family: Family, bits: usize) -> Result<Self, DigestError> {
        let algorithm = match (family, bits) {
            (Family::Sha1, 160) => Algorithm::Sha1,
            (Family::Sha2, 224) => Algorithm::Sha224,
            (Family::Sha2, 256) => Algorithm::Sha256,
            (Family::Sha2, 384) => Algorithm::Sha384,
            (Family::Sha2, 512) => Algorithm::Sha512,
            (Family::Sha3, 224) => Algorithm::Sha3_224,
            (Family::Sha3, 256) => Algorithm::Sha3_256,
            (Family::Sha3, 384) => Algorithm::Sha3_384,
            (Family::Sha3, 512) => Algorithm::Sha3_512,
            (Family::Shake, 128) => Algorithm::Shake128,
            (Family::Shake, 256) => Algorithm::Shake256,
            _ => {
                debug!(family = family.name(), bits, "rejected variant");
                return Err(DigestError::UnsupportedVariant {
                    family: family.name(),
                    bits,
                });
            }
        };

        Ok(algorithm)
    }

    /// Selects SHA-512/t; `bits` must be 224 or 256.
    pub fn sha512_t(bits: usize) -> Result<Self, DigestError> {
        match bits {
            224 => Ok(Algorithm::Sha512_224),
            256 => Ok(Algorithm::Sha512_256),
            _ => {
                debug!(bits, "rejected SHA-512/t width");
                Err(DigestError::UnsupportedVariant {
                    family: "SHA-512/t",
                    bits,
                })
            }
        }
    }

    /// Canonical name, e.g. `SHA-512/256` or `SHA3-256`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
            Algorithm::Sha512_224 => "SHA-512/224",
            Algorithm::Sha512_256 => "SHA-512/256",
            Algorithm::Sha3_224 => "SHA3-224",
            Algorithm::Sha3_256 => "SHA3-256",
            Algorithm::Sha3_384 => "SHA3-384",
            Algorithm::Sha3_512 => "SHA3-512",
            Algorithm::Shake128 => "SHAKE128",
            Algorithm::Shake256 => "SHAKE256",
        }
    }

    /// Family this algorithm belongs to
    pub fn family(self) -> Family {
        match self {
            Algorithm::Sha1 => Family::Sha1,
            Algorithm::Sha224
            | Algorithm::Sha256
            | Algorithm::Sha384
            | Algorithm::Sha512
            | Algorithm::Sha512_224
            | Algorithm::Sha512_256 => Family::Sha2,
            Algorithm::Sha3_224 | Algorithm::Sha3_256 | Algorithm::Sha3_384 | Algorithm::Sha3_512 => {
                Family::Sha3
            }
            Algorithm::Shake128 | Algorithm::Shake256 => Family::Shake,
        }
    }

    /// Fixed digest width in bits; `None` for extendable-output functions
    pub fn output_bits(self) -> Option<usize> {
        match self {
            Algorithm::Sha1 => Some(160),
            Algorithm::Sha224 | Algorithm::Sha512_224 | Algorithm::Sha3_224 => Some(224),
            Algorithm::Sha256 | Algorithm::Sha512_256 | Algorithm::Sha3_256 => Some(256),
            Algorithm::Sha384 | Algorithm::Sha3_384 => Some(384),
            Algorithm::Sha512 | Algorithm::Sha3_512 => Some(512),
            Algorithm::Shake128 | Algorithm::Shake256 => None,
        }
    }

    /// Input block size in bytes; the rate for sponge algorithms
    pub fn block_len(self) -> usize {
        match self {
            Algorithm::Sha1 => <Sha1 as Compression>::BLOCK_LEN,
            Algorithm::Sha224 | Algorithm::Sha256 => <Sha2<u32> as Compression>::BLOCK_LEN,
            Algorithm::Sha384 | Algorithm::Sha512 | Algorithm::Sha512_224 | Algorithm::Sha512_256 => {
                <Sha2<u64> as Compression>::BLOCK_LEN
            }
            Algorithm::Sha3_224 => variants::SHA3_224.rate,
            Algorithm::Sha3_256 => variants::SHA3_256.rate,
            Algorithm::Sha3_384 => variants::SHA3_384.rate,
            Algorithm::Sha3_512 => variants::SHA3_512.rate,
            Algorithm::Shake128 => variants::SHAKE128.rate,
            Algorithm::Shake256 => variants::SHAKE256.rate,
        }
    }

    /// Whether the caller chooses the output length
    pub fn is_xof(self) -> bool {
        self.family() == Family::Shake
    }

    /// Largest accepted message in bytes, or `None` when no `usize` length
    /// can overflow the length field.
    pub fn max_message_len(self) -> Option<u64> {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => Some(MD64_MAX_MESSAGE_LEN),
            _ => None,
        }
    }

    /// Hashes `data` with a fixed-output algorithm.
    ///
    /// # Errors
    ///
    /// - [`DigestError::UnsupportedVariant`] for SHAKE; use
    ///   [`Algorithm::hash_xof`].
    /// - [`DigestError::MessageTooLong`] when the bit length of `data`
    ///   overflows the length field.
    pub fn hash(self, data: &[u8]) -> Result<Digest, DigestError> {
        trace!(algorithm = self.name(), len = data.len(), "hash");

        let Some(output_bits) = self.output_bits() else {
            debug!(algorithm = self.name(), "fixed-output call on an XOF");
            return Err(DigestError::UnsupportedVariant {
                family: self.family().name(),
                bits: 0,
            });
        };

        self.check_len(data.len())?;

        Ok(self.compute(data, output_bits))
    }

    /// Squeezes `output_bits` bits of SHAKE output from `data`.
    ///
    /// Returns `ceil(output_bits / 8)` bytes; unused high-order bits of the
    /// last byte are zero.
    ///
    /// # Errors
    ///
    /// [`DigestError::UnsupportedVariant`] for fixed-output algorithms.
    pub fn hash_xof(self, data: &[u8], output_bits: usize) -> Result<Digest, DigestError> {
        trace!(algorithm = self.name(), len = data.len(), output_bits, "hash_xof");

        if !self.is_xof() {
            debug!(algorithm = self.name(), output_bits, "XOF call on a fixed-output algorithm");
            return Err(DigestError::UnsupportedVariant {
                family: self.family().name(),
                bits: output_bits,
            });
        }

        Ok(self.compute(data, output_bits))
    }

    /// Rejects messages whose bit length overflows the length field
    pub(crate) fn check_len(self, len: usize) -> Result<(), DigestError> {
        match self.max_message_len() {
            Some(max) if len as u64 > max => {
                debug!(algorithm = self.name(), len, max, "message too long");
                Err(DigestError::MessageTooLong { len, max })
            }
            _ => Ok(()),
        }
    }

    /// `output_bits` is ignored by the fixed-output variants
    fn compute(self, data: &[u8], output_bits: usize) -> Digest {
        match self {
            Algorithm::Sha1 => md::digest(&variants::SHA1, data),
            Algorithm::Sha224 => md::digest(&variants::SHA224, data),
            Algorithm::Sha256 => md::digest(&variants::SHA256, data),
            Algorithm::Sha384 => md::digest(&variants::SHA384, data),
            Algorithm::Sha512 => md::digest(&variants::SHA512, data),
            Algorithm::Sha512_224 => md::digest(&variants::SHA512_224, data),
            Algorithm::Sha512_256 => md::digest(&variants::SHA512_256, data),
            Algorithm::Sha3_224 => variants::SHA3_224.digest(data, output_bits),
            Algorithm::Sha3_256 => variants::SHA3_256.digest(data, output_bits),
            Algorithm::Sha3_384 => variants::SHA3_384.digest(data, output_bits),
            Algorithm::Sha3_512 => variants::SHA3_512.digest(data, output_bits),
            Algorithm::Shake128 => variants::SHAKE128.digest(data, output_bits),
            Algorithm::Shake256 => variants::SHAKE256.digest(data, output_bits),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    /// Parses a name case-insensitively, ignoring `-`, `_`, `/` and spaces,
    /// so `SHA-512/256`, `sha512_256` and `Sha512 256` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let significant = |c: &char| !matches!(c, '-' | '_' | '/' | ' ');

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| {
                s.chars()
                    .filter(significant)
                    .map(|c| c.to_ascii_uppercase())
                    .eq(algorithm.name().chars().filter(significant))
            })
            .ok_or_else(|| {
                debug!(name = s, "unknown algorithm name");
                DigestError::UnknownAlgorithm(String::from(s))
            })
    }
}
