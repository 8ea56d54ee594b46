// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle–Damgård engine shared by SHA-1 and the SHA-2 family.
//!
//! Block iteration and padding per FIPS 180-4 Section 5.1 live here; the
//! per-variant block function is supplied through [`Compression`].

use digestive_core::pack::be_bytes_to_words;
use digestive_core::{Digest, Word};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Largest block (SHA-384/512) in bytes
const MAX_BLOCK_LEN: usize = 128;

/// Longest message schedule (SHA-1, SHA-384/512) in words
pub(crate) const MAX_SCHEDULE_LEN: usize = 80;

/// Block function of one Merkle–Damgård variant.
///
/// A block is 16 words and the length field two words wide, so both follow
/// from the word type: 64/8 bytes for 32-bit variants, 128/16 bytes for
/// 64-bit variants.
pub(crate) trait Compression {
    /// State and schedule word
    type Word: Word;

    /// Block size in bytes
    const BLOCK_LEN: usize = 16 * <Self::Word as Word>::BYTES;

    /// Width of the trailing message-length field in bytes
    const LENGTH_FIELD_LEN: usize = 2 * <Self::Word as Word>::BYTES;

    /// H(0)
    fn initial_state(&self) -> [Self::Word; 8];

    /// Digest width in bits; the state is truncated to this
    fn output_bits(&self) -> usize;

    /// Folds one 16-word block into `state`, using `schedule` as scratch.
    fn compress(
        &self,
        state: &mut [Self::Word; 8],
        block: &[Self::Word; 16],
        schedule: &mut [Self::Word; MAX_SCHEDULE_LEN],
    );
}

/// Call-local working memory, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
struct MdState<W: Word> {
    /// Hash state H(i)
    h: [W; 8],
    /// Current block as big-endian words
    block: [W; 16],
    /// Message schedule W[0..R]
    schedule: [W; MAX_SCHEDULE_LEN],
    /// Final block(s) under construction
    tail: [u8; MAX_BLOCK_LEN],
}

impl<W: Word> MdState<W> {
    fn new(h: [W; 8]) -> Self {
        Self {
            h,
            block: [W::default(); 16],
            schedule: [W::default(); MAX_SCHEDULE_LEN],
            tail: [0u8; MAX_BLOCK_LEN],
        }
    }

    fn compress<C: Compression<Word = W>>(&mut self, variant: &C, block: &[u8]) {
        be_bytes_to_words(block, &mut self.block);
        variant.compress(&mut self.h, &self.block, &mut self.schedule);
    }

    /// Compresses the tail buffer and clears it for reuse
    fn compress_tail<C: Compression<Word = W>>(&mut self, variant: &C) {
        be_bytes_to_words(&self.tail[..C::BLOCK_LEN], &mut self.block);
        variant.compress(&mut self.h, &self.block, &mut self.schedule);
        self.tail.zeroize();
    }
}

/// Hashes `data` with the Merkle–Damgård variant `variant`.
///
/// The bit length is written into the variant's full length field (64 or
/// 128 bits). Callers keep messages within the 64-bit field of SHA-1 and
/// SHA-224/256; see `Algorithm::max_message_len`.
pub(crate) fn digest<C: Compression>(variant: &C, data: &[u8]) -> Digest {
    let block_len = C::BLOCK_LEN;
    let length_field_len = C::LENGTH_FIELD_LEN;

    let mut state = MdState::new(variant.initial_state());

    let mut blocks = data.chunks_exact(block_len);
    for block in &mut blocks {
        state.compress(variant, block);
    }

    // Padding per FIPS 180-4 Section 5.1: 0x80, zeros, big-endian bit length
    let remainder = blocks.remainder();
    state.tail[..remainder.len()].copy_from_slice(remainder);
    state.tail[remainder.len()] = 0x80;

    // No room left for the length field: flush and start an all-zero block
    if remainder.len() >= block_len - length_field_len {
        state.compress_tail(variant);
    }

    let bit_len = (data.len() as u128) << 3;
    state.tail[block_len - length_field_len..block_len]
        .copy_from_slice(&bit_len.to_be_bytes()[16 - length_field_len..]);
    state.compress_tail(variant);

    Digest::from_words(&state.h, variant.output_bits())
    // Drop zeroizes via ZeroizeOnDrop derive
}
