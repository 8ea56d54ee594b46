// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Typed one-shot entry points.

use digestive_core::Digest;

use crate::algorithm::Algorithm;

fn fixed(algorithm: Algorithm, data: &[u8]) -> Digest {
    match algorithm.hash(data) {
        Ok(digest) => digest,
        Err(err) => panic!("{algorithm}: {err}"),
    }
}

fn xof(algorithm: Algorithm, data: &[u8], output_bits: usize) -> Digest {
    match algorithm.hash_xof(data, output_bits) {
        Ok(digest) => digest,
        Err(err) => panic!("{algorithm}: {err}"),
    }
}

macro_rules! fixed_output {
    ($($(#[$doc:meta])* $name:ident => $algorithm:ident;)+) => {
        $(
            $(#[$doc])*
            pub fn $name(data: &[u8]) -> Digest {
                fixed(Algorithm::$algorithm, data)
            }
        )+
    };
}

fixed_output! {
    /// SHA-1 digest (20 bytes).
    ///
    /// # Panics
    ///
    /// Panics if `data` is longer than `u64::MAX / 8` bytes.
    sha1 => Sha1;

    /// SHA-224 digest (28 bytes).
    ///
    /// # Panics
    ///
    /// Panics if `data` is longer than `u64::MAX / 8` bytes.
    sha224 => Sha224;

    /// SHA-256 digest (32 bytes).
    ///
    /// # Panics
    ///
    /// Panics if `data` is longer than `u64::MAX / 8` bytes.
    sha256 => Sha256;

    /// SHA-384 digest (48 bytes)
    sha384 => Sha384;

    /// SHA-512 digest (64 bytes)
    sha512 => Sha512;

    /// SHA-512/224 digest (28 bytes)
    sha512_224 => Sha512_224;

    /// SHA-512/256 digest (32 bytes)
    sha512_256 => Sha512_256;

    /// SHA3-224 digest (28 bytes)
    sha3_224 => Sha3_224;

    /// SHA3-256 digest (32 bytes)
    sha3_256 => Sha3_256;

    /// SHA3-384 digest (48 bytes)
    sha3_384 => Sha3_384;

    /// SHA3-512 digest (64 bytes)
    sha3_512 => Sha3_512;
}

/// SHAKE128 output of `output_bits` bits, `ceil(output_bits / 8)` bytes.
pub fn shake128(data: &[u8], output_bits: usize) -> Digest {
    xof(Algorithm::Shake128, data, output_bits)
}

/// SHAKE256 output of `output_bits` bits, `ceil(output_bits / 8)` bytes.
pub fn shake256(data: &[u8], output_bits: usize) -> Digest {
    xof(Algorithm::Shake256, data, output_bits)
}
