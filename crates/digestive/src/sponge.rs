// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sponge construction per FIPS 202 Section 4 with pad10*1.

use digestive_core::Digest;

use crate::keccak::KeccakState;

/// Sponge variant record.
pub(crate) struct Sponge {
    /// Bytes absorbed / squeezed per permutation (r / 8)
    pub(crate) rate: usize,
    /// Domain-separation suffix with the first padding bit folded in
    pub(crate) suffix: u8,
}

impl Sponge {
    /// Hashes `data`, producing `output_bits` bits.
    ///
    /// The result is `ceil(output_bits / 8)` bytes. When `output_bits` is not
    /// a multiple of 8 the unused high-order bits of the last byte are
    /// cleared, matching FIPS 202's bit order within a byte.
    pub(crate) fn digest(&self, data: &[u8], output_bits: usize) -> Digest {
        let mut state = KeccakState::new();
        self.absorb(&mut state, data);

        Digest::from_fn(output_bits.div_ceil(8), |out| {
            self.squeeze(&mut state, out);

            let spare = output_bits % 8;
            if spare != 0 {
                if let Some(last) = out.last_mut() {
                    *last &= (1u8 << spare) - 1;
                }
            }
        })
    }

    fn absorb(&self, state: &mut KeccakState, data: &[u8]) {
        let mut blocks = data.chunks_exact(self.rate);
        for block in &mut blocks {
            state.xor_bytes(block);
            state.permute();
        }

        // Suffix right after the message, final pad bit at the end of the
        // rate; both XORs land in one byte when remainder.len() == rate - 1.
        let remainder = blocks.remainder();
        state.xor_bytes(remainder);
        state.xor_byte(remainder.len(), self.suffix);
        state.xor_byte(self.rate - 1, 0x80);
        state.permute();
    }

    /// Fills `out`, permuting between rate-sized chunks.
    ///
    /// No permutation precedes the first chunk: absorption ends with one.
    fn squeeze(&self, state: &mut KeccakState, out: &mut [u8]) {
        for (i, chunk) in out.chunks_mut(self.rate).enumerate() {
            if i > 0 {
                state.permute();
            }
            state.read_bytes(chunk);
        }
    }
}
