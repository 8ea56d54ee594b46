// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant tables per FIPS 180-4 Sections 4.2 / 5.3 and FIPS 202 Section 3.2

use crate::sha2::Sha2Rotations;

/// Keccak-f[1600] state size in bytes
pub(crate) const KECCAK_STATE_LEN: usize = 200;

/// Keccak-f[1600] round count
pub(crate) const KECCAK_ROUNDS: usize = 24;

/// SHA3-224 rate in bytes (c = 448)
pub(crate) const SHA3_224_RATE: usize = 144;

/// SHA3-256 rate in bytes (c = 512)
pub(crate) const SHA3_256_RATE: usize = 136;

/// SHA3-384 rate in bytes (c = 768)
pub(crate) const SHA3_384_RATE: usize = 104;

/// SHA3-512 rate in bytes (c = 1024)
pub(crate) const SHA3_512_RATE: usize = 72;

/// SHAKE128 rate in bytes (c = 256)
pub(crate) const SHAKE128_RATE: usize = 168;

/// SHAKE256 rate in bytes (c = 512)
pub(crate) const SHAKE256_RATE: usize = 136;

/// Domain-separation suffix `01` + first pad bit, FIPS 202 Section 6.1
pub(crate) const SHA3_SUFFIX: u8 = 0x06;

/// Domain-separation suffix `1111` + first pad bit, FIPS 202 Section 6.2
pub(crate) const SHAKE_SUFFIX: u8 = 0x1F;

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-1
// ═══════════════════════════════════════════════════════════════════════════════

/// SHA-1 initial hash value H(0) per FIPS 180-4 Section 5.3.1.
///
/// Only five words are used; the tail keeps the shared 8-word state shape.
pub(crate) const SHA1_H0: [u32; 8] = [
    0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0, 0, 0, 0,
];

/// SHA-1 constants K per FIPS 180-4 Section 4.2.1, one per group of 20 rounds
pub(crate) const SHA1_K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-224 / SHA-256
// ═══════════════════════════════════════════════════════════════════════════════

/// SHA-224 initial hash value per FIPS 180-4 Section 5.3.2
pub(crate) const SHA224_H0: [u32; 8] = [
    0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939, 0xFFC00B31, 0x68581511, 0x64F98FA7, 0xBEFA4FA4,
];

/// SHA-256 initial hash value per FIPS 180-4 Section 5.3.3.
/// First 32 bits of fractional parts of square roots of first 8 primes
pub(crate) const SHA256_H0: [u32; 8] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

/// SHA-224/256 constants K per FIPS 180-4 Section 4.2.2.
/// First 32 bits of fractional parts of cube roots of first 64 primes
pub(crate) const SHA256_K: [u32; 64] = [
    0x428A2F98, 0x71374491, 0xB5C0FBCF, 0xE9B5DBA5, 0x3956C25B, 0x59F111F1, 0x923F82A4, 0xAB1C5ED5,
    0xD807AA98, 0x12835B01, 0x243185BE, 0x550C7DC3, 0x72BE5D74, 0x80DEB1FE, 0x9BDC06A7, 0xC19BF174,
    0xE49B69C1, 0xEFBE4786, 0x0FC19DC6, 0x240CA1CC, 0x2DE92C6F, 0x4A7484AA, 0x5CB0A9DC, 0x76F988DA,
    0x983E5152, 0xA831C66D, 0xB00327C8, 0xBF597FC7, 0xC6E00BF3, 0xD5A79147, 0x06CA6351, 0x14292967,
    0x27B70A85, 0x2E1B2138, 0x4D2C6DFC, 0x53380D13, 0x650A7354, 0x766A0ABB, 0x81C2C92E, 0x92722C85,
    0xA2BFE8A1, 0xA81A664B, 0xC24B8B70, 0xC76C51A3, 0xD192E819, 0xD6990624, 0xF40E3585, 0x106AA070,
    0x19A4C116, 0x1E376C08, 0x2748774C, 0x34B0BCB5, 0x391C0CB3, 0x4ED8AA4A, 0x5B9CCA4F, 0x682E6FF3,
    0x748F82EE, 0x78A5636F, 0x84C87814, 0x8CC70208, 0x90BEFFFA, 0xA4506CEB, 0xBEF9A3F7, 0xC67178F2,
];

/// SHA-224/256 rotation and shift amounts per FIPS 180-4 Section 4.1.2
pub(crate) const SHA256_ROTATIONS: Sha2Rotations = Sha2Rotations {
    schedule_sigma0: [7, 18, 3],
    schedule_sigma1: [17, 19, 10],
    round_sigma0: [2, 13, 22],
    round_sigma1: [6, 11, 25],
};

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-384 / SHA-512 / SHA-512/t
// ═══════════════════════════════════════════════════════════════════════════════

/// SHA-384 initial hash value per FIPS 180-4 Section 5.3.4
pub(crate) const SHA384_H0: [u64; 8] = [
    0xCBBB9D5DC1059ED8,
    0x629A292A367CD507,
    0x9159015A3070DD17,
    0x152FECD8F70E5939,
    0x67332667FFC00B31,
    0x8EB44A8768581511,
    0xDB0C2E0D64F98FA7,
    0x47B5481DBEFA4FA4,
];

/// SHA-512 initial hash value per FIPS 180-4 Section 5.3.5.
/// First 64 bits of fractional parts of square roots of first 8 primes
pub(crate) const SHA512_H0: [u64; 8] = [
    0x6A09E667F3BCC908,
    0xBB67AE8584CAA73B,
    0x3C6EF372FE94F82B,
    0xA54FF53A5F1D36F1,
    0x510E527FADE682D1,
    0x9B05688C2B3E6C1F,
    0x1F83D9ABFB41BD6B,
    0x5BE0CD19137E2179,
];

/// SHA-512/224 initial hash value per FIPS 180-4 Section 5.3.6.1
pub(crate) const SHA512_224_H0: [u64; 8] = [
    0x8C3D37C819544DA2,
    0x73E1996689DCD4D6,
    0x1DFAB7AE32FF9C82,
    0x679DD514582F9FCF,
    0x0F6D2B697BD44DA8,
    0x77E36F7304C48942,
    0x3F9D85A86A1D36C8,
    0x1112E6AD91D692A1,
];

/// SHA-512/256 initial hash value per FIPS 180-4 Section 5.3.6.2
pub(crate) const SHA512_256_H0: [u64; 8] = [
    0x22312194FC2BF72C,
    0x9F555FA3C84C64C2,
    0x2393B86B6F53B151,
    0x963877195940EABD,
    0x96283EE2A88EFFE3,
    0xBE5E1E2553863992,
    0x2B0199FC2C85B8AA,
    0x0EB72DDC81C52CA2,
];

/// SHA-384/512 constants K per FIPS 180-4 Section 4.2.3.
/// First 64 bits of fractional parts of cube roots of first 80 primes
pub(crate) const SHA512_K: [u64; 80] = [
    0x428a2f98d728ae22,
    0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f,
    0xe9b5dba58189dbbc,
    0x3956c25bf348b538,
    0x59f111f1b605d019,
    0x923f82a4af194f9b,
    0xab1c5ed5da6d8118,
    0xd807aa98a3030242,
    0x12835b0145706fbe,
    0x243185be4ee4b28c,
    0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f,
    0x80deb1fe3b1696b1,
    0x9bdc06a725c71235,
    0xc19bf174cf692694,
    0xe49b69c19ef14ad2,
    0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5,
    0x240ca1cc77ac9c65,
    0x2de92c6f592b0275,
    0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4,
    0x76f988da831153b5,
    0x983e5152ee66dfab,
    0xa831c66d2db43210,
    0xb00327c898fb213f,
    0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2,
    0xd5a79147930aa725,
    0x06ca6351e003826f,
    0x142929670a0e6e70,
    0x27b70a8546d22ffc,
    0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed,
    0x53380d139d95b3df,
    0x650a73548baf63de,
    0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6,
    0x92722c851482353b,
    0xa2bfe8a14cf10364,
    0xa81a664bbc423001,
    0xc24b8b70d0f89791,
    0xc76c51a30654be30,
    0xd192e819d6ef5218,
    0xd69906245565a910,
    0xf40e35855771202a,
    0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8,
    0x1e376c085141ab53,
    0x2748774cdf8eeb99,
    0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63,
    0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373,
    0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc,
    0x78a5636f43172f60,
    0x84c87814a1f0ab72,
    0x8cc702081a6439ec,
    0x90befffa23631e28,
    0xa4506cebde82bde9,
    0xbef9a3f7b2c67915,
    0xc67178f2e372532b,
    0xca273eceea26619c,
    0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e,
    0xf57d4f7fee6ed178,
    0x06f067aa72176fba,
    0x0a637dc5a2c898a6,
    0x113f9804bef90dae,
    0x1b710b35131c471b,
    0x28db77f523047d84,
    0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc,
    0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6,
    0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec,
    0x6c44198c4a475817,
];

/// SHA-384/512 rotation and shift amounts per FIPS 180-4 Section 4.1.3
pub(crate) const SHA512_ROTATIONS: Sha2Rotations = Sha2Rotations {
    schedule_sigma0: [1, 8, 7],
    schedule_sigma1: [19, 61, 6],
    round_sigma0: [28, 34, 39],
    round_sigma1: [14, 18, 41],
};

// ═══════════════════════════════════════════════════════════════════════════════
// Keccak-f[1600]
// ═══════════════════════════════════════════════════════════════════════════════

/// ι round constants RC[i] per FIPS 202 Section 3.2.5
pub(crate) const KECCAK_RC: [u64; KECCAK_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// ρ rotation offsets per FIPS 202 Section 3.2.2, indexed `x + 5 * y`
pub(crate) const KECCAK_RHO: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];
