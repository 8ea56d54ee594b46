// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keccak-f[1600] state and permutation per FIPS 202 Section 3.
//!
//! The state is stored once, as 25 lanes. Byte `i` of the 200-byte string
//! view is byte `i % 8` (little-endian) of lane `i / 8`, and lane `(x, y)` is
//! lane `x + 5 * y`. Every byte accessor goes through that mapping, so the two
//! views can never disagree.

use digestive_core::pack::{le_bytes_to_words, words_to_le_bytes};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{KECCAK_RC, KECCAK_RHO, KECCAK_STATE_LEN};

/// Number of 64-bit lanes
const LANES: usize = 25;

/// 1600-bit Keccak state with aliased lane and byte views.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState {
    lanes: [u64; LANES],
}

impl KeccakState {
    /// All-zero state
    pub fn new() -> Self {
        Self::default()
    }

    /// Lane at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below 5.
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        assert!(x < 5 && y < 5, "lane ({x}, {y}) outside the 5x5 matrix");
        self.lanes[x + 5 * y]
    }

    /// Overwrites the lane at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below 5.
    pub fn set_lane(&mut self, x: usize, y: usize, value: u64) {
        assert!(x < 5 && y < 5, "lane ({x}, {y}) outside the 5x5 matrix");
        self.lanes[x + 5 * y] = value;
    }

    /// Byte `index` of the 200-byte view.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 200`.
    pub fn byte(&self, index: usize) -> u8 {
        (self.lanes[index / 8] >> (8 * (index % 8))) as u8
    }

    /// XORs `value` into byte `index` of the 200-byte view.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 200`.
    pub fn xor_byte(&mut self, index: usize, value: u8) {
        self.lanes[index / 8] ^= u64::from(value) << (8 * (index % 8));
    }

    /// XORs `bytes` into the byte view starting at byte 0.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than 200 bytes.
    pub fn xor_bytes(&mut self, bytes: &[u8]) {
        assert!(
            bytes.len() <= KECCAK_STATE_LEN,
            "{} bytes do not fit the Keccak state",
            bytes.len()
        );

        let full = bytes.len() / 8;
        let mut words = [0u64; LANES];
        le_bytes_to_words(bytes, &mut words[..full]);
        for (lane, word) in self.lanes.iter_mut().zip(&words[..full]) {
            *lane ^= word;
        }
        words.zeroize();

        let offset = 8 * full;
        for (i, &value) in bytes[offset..].iter().enumerate() {
            self.xor_byte(offset + i, value);
        }
    }

    /// Copies the first `out.len()` bytes of the byte view into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is longer than 200 bytes.
    pub fn read_bytes(&self, out: &mut [u8]) {
        assert!(
            out.len() <= KECCAK_STATE_LEN,
            "{} bytes exceed the Keccak state",
            out.len()
        );
        words_to_le_bytes(&self.lanes, out);
    }

    /// Applies Keccak-f[1600] in place
    pub fn permute(&mut self) {
        keccak_f1600(&mut self.lanes);
    }
}

/// Keccak-f[1600] over lanes indexed `x + 5 * y`, FIPS 202 Algorithm 7.
pub fn keccak_f1600(a: &mut [u64; LANES]) {
    let mut c = [0u64; 5];
    let mut b = [0u64; LANES];

    for rc in KECCAK_RC {
        // θ: XOR each lane with the parities of two neighbouring columns
        for x in 0..5 {
            c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x + 5 * y] ^= d;
            }
        }

        // ρ and π: B[y, 2x + 3y] = ROT(A[x, y], r[x, y])
        for x in 0..5 {
            for y in 0..5 {
                b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y].rotate_left(KECCAK_RHO[x + 5 * y]);
            }
        }

        // χ: A[x, y] = B[x, y] ⊕ (¬B[x+1, y] ∧ B[x+2, y])
        for y in 0..5 {
            for x in 0..5 {
                a[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
            }
        }

        // ι
        a[0] ^= rc;
    }

    c.zeroize();
    b.zeroize();
}
