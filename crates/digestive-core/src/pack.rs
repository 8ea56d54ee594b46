// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Explicit conversions between byte buffers and word arrays.
//!
//! Nothing here reinterprets memory: every word is assembled from, or
//! scattered into, individual bytes with the stated byte order.

use zeroize::Zeroize;

use crate::word::Word;

/// Fills `words` from big-endian `bytes`.
///
/// # Panics
///
/// Panics if `bytes` holds fewer than `words.len() * W::BYTES` bytes.
#[inline]
pub fn be_bytes_to_words<W: Word>(bytes: &[u8], words: &mut [W]) {
    let bytes = &bytes[..words.len() * W::BYTES];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
        *word = W::from_be_slice(chunk);
    }
}

/// Fills `words` from little-endian `bytes`.
///
/// # Panics
///
/// Panics if `bytes` holds fewer than `words.len() * W::BYTES` bytes.
#[inline]
pub fn le_bytes_to_words<W: Word>(bytes: &[u8], words: &mut [W]) {
    let bytes = &bytes[..words.len() * W::BYTES];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
        *word = W::from_le_slice(chunk);
    }
}

/// Writes `words` big-endian into `out` until either side runs out.
///
/// The last word is cut short when `out` ends inside it, which is how
/// SHA-224 and SHA-512/224 truncate their state. Returns the number of bytes
/// written.
#[inline]
pub fn words_to_be_bytes<W: Word>(words: &[W], out: &mut [u8]) -> usize {
    scatter(words, out, W::write_be)
}

/// Writes `words` little-endian into `out` until either side runs out.
///
/// Returns the number of bytes written.
#[inline]
pub fn words_to_le_bytes<W: Word>(words: &[W], out: &mut [u8]) -> usize {
    scatter(words, out, W::write_le)
}

fn scatter<W: Word>(words: &[W], out: &mut [u8], write: fn(W, &mut [u8])) -> usize {
    let mut tmp = [0u8; 8];
    let mut written = 0;

    for &word in words {
        if written >= out.len() {
            break;
        }

        write(word, &mut tmp[..W::BYTES]);
        let n = (out.len() - written).min(W::BYTES);
        out[written..written + n].copy_from_slice(&tmp[..n]);
        written += n;
    }

    tmp.zeroize();
    written
}
