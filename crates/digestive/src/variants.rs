// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Immutable per-variant records handed to the two engines.

use crate::consts::{
    SHA3_224_RATE, SHA3_256_RATE, SHA3_384_RATE, SHA3_512_RATE, SHA3_SUFFIX, SHA224_H0, SHA256_H0,
    SHA256_K, SHA256_ROTATIONS, SHA384_H0, SHA512_224_H0, SHA512_256_H0, SHA512_H0, SHA512_K,
    SHA512_ROTATIONS, SHAKE_SUFFIX, SHAKE128_RATE, SHAKE256_RATE,
};
use crate::sha1::Sha1;
use crate::sha2::Sha2;
use crate::sponge::Sponge;

pub(crate) const SHA1: Sha1 = Sha1;

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-2, 32-bit words
// ═══════════════════════════════════════════════════════════════════════════════

pub(crate) const SHA224: Sha2<u32> = Sha2 {
    iv: SHA224_H0,
    round_constants: &SHA256_K,
    rotations: &SHA256_ROTATIONS,
    output_bits: 224,
};

pub(crate) const SHA256: Sha2<u32> = Sha2 {
    iv: SHA256_H0,
    round_constants: &SHA256_K,
    rotations: &SHA256_ROTATIONS,
    output_bits: 256,
};

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-2, 64-bit words
// ═══════════════════════════════════════════════════════════════════════════════

pub(crate) const SHA384: Sha2<u64> = Sha2 {
    iv: SHA384_H0,
    round_constants: &SHA512_K,
    rotations: &SHA512_ROTATIONS,
    output_bits: 384,
};

pub(crate) const SHA512: Sha2<u64> = Sha2 {
    iv: SHA512_H0,
    round_constants: &SHA512_K,
    rotations: &SHA512_ROTATIONS,
    output_bits: 512,
};

pub(crate) const SHA512_224: Sha2<u64> = Sha2 {
    iv: SHA512_224_H0,
    round_constants: &SHA512_K,
    rotations: &SHA512_ROTATIONS,
    output_bits: 224,
};

pub(crate) const SHA512_256: Sha2<u64> = Sha2 {
    iv: SHA512_256_H0,
    round_constants: &SHA512_K,
    rotations: &SHA512_ROTATIONS,
    output_bits: 256,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Sponges
// ═══════════════════════════════════════════════════════════════════════════════

pub(crate) const SHA3_224: Sponge = Sponge { rate: SHA3_224_RATE, suffix: SHA3_SUFFIX };
pub(crate) const SHA3_256: Sponge = Sponge { rate: SHA3_256_RATE, suffix: SHA3_SUFFIX };
pub(crate) const SHA3_384: Sponge = Sponge { rate: SHA3_384_RATE, suffix: SHA3_SUFFIX };
pub(crate) const SHA3_512: Sponge = Sponge { rate: SHA3_512_RATE, suffix: SHA3_SUFFIX };
pub(crate) const SHAKE128: Sponge = Sponge { rate: SHAKE128_RATE, suffix: SHAKE_SUFFIX };
pub(crate) const SHAKE256: Sponge = Sponge { rate: SHAKE256_RATE, suffix: SHAKE_SUFFIX };
