// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 block function per FIPS 180-4 Sections 6.2.2 and 6.4.2.
//!
//! One generic body serves both word widths. The 32-bit and 64-bit
//! families differ only in round count, constants and the 12 rotation and
//! shift amounts carried by [`Sha2Rotations`].

use digestive_core::Word;
use zeroize::Zeroize;

use crate::md::{Compression, MAX_SCHEDULE_LEN};

/// Rotation and shift amounts of the four σ/Σ functions.
pub(crate) struct Sha2Rotations {
    /// σ0 = ROTR^a ⊕ ROTR^b ⊕ SHR^c (schedule)
    pub(crate) schedule_sigma0: [u32; 3],
    /// σ1 = ROTR^a ⊕ ROTR^b ⊕ SHR^c (schedule)
    pub(crate) schedule_sigma1: [u32; 3],
    /// Σ0 = ROTR^a ⊕ ROTR^b ⊕ ROTR^c (round, applied to `a`)
    pub(crate) round_sigma0: [u32; 3],
    /// Σ1 = ROTR^a ⊕ ROTR^b ⊕ ROTR^c (round, applied to `e`)
    pub(crate) round_sigma1: [u32; 3],
}

/// SHA-2 variant record.
pub(crate) struct Sha2<W: 'static> {
    /// H(0)
    pub(crate) iv: [W; 8],
    /// K; its length is the round count
    pub(crate) round_constants: &'static [W],
    /// σ/Σ amounts for this word width
    pub(crate) rotations: &'static Sha2Rotations,
    /// Digest width in bits
    pub(crate) output_bits: usize,
}

/// State slot playing roles `[a, b, c, d, e, f, g, h]` in round `t % 8`.
///
/// Instead of shifting eight working variables every round, the roles
/// rotate over fixed slots and return to the identity after 8 rounds.
pub(crate) const ROLES: [[usize; 8]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7],
    [7, 0, 1, 2, 3, 4, 5, 6],
    [6, 7, 0, 1, 2, 3, 4, 5],
    [5, 6, 7, 0, 1, 2, 3, 4],
    [4, 5, 6, 7, 0, 1, 2, 3],
    [3, 4, 5, 6, 7, 0, 1, 2],
    [2, 3, 4, 5, 6, 7, 0, 1],
    [1, 2, 3, 4, 5, 6, 7, 0],
];

/// σ(x) = ROTR^r0(x) ⊕ ROTR^r1(x) ⊕ SHR^r2(x)
#[inline(always)]
pub(crate) fn small_sigma<W: Word>(x: W, r: &[u32; 3]) -> W {
    x.rotr(r[0]) ^ x.rotr(r[1]) ^ x.shr(r[2])
}

/// Σ(x) = ROTR^r0(x) ⊕ ROTR^r1(x) ⊕ ROTR^r2(x)
#[inline(always)]
pub(crate) fn big_sigma<W: Word>(x: W, r: &[u32; 3]) -> W {
    x.rotr(r[0]) ^ x.rotr(r[1]) ^ x.rotr(r[2])
}

impl<W: Word> Compression for Sha2<W> {
    type Word = W;

    fn initial_state(&self) -> [W; 8] {
        self.iv
    }

    fn output_bits(&self) -> usize {
        self.output_bits
    }

    fn compress(&self, state: &mut [W; 8], block: &[W; 16], schedule: &mut [W; MAX_SCHEDULE_LEN]) {
        let rounds = self.round_constants.len();
        let rot = self.rotations;

        // ═══════════════════════════════════════════════════════════════════════
        // Step 1: Prepare message schedule W[0..R]
        // ═══════════════════════════════════════════════════════════════════════
        let w = &mut schedule[..rounds];
        w[..16].copy_from_slice(block);

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..rounds {
            w[t] = w[t - 16]
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma(w[t - 15], &rot.schedule_sigma0))
                .wrapping_add(small_sigma(w[t - 2], &rot.schedule_sigma1));
        }

        // ═══════════════════════════════════════════════════════════════════════
        // Step 2: Initialize working variables with H(i-1)
        // ═══════════════════════════════════════════════════════════════════════
        let mut wv = *state;

        // ═══════════════════════════════════════════════════════════════════════
        // Step 3: R rounds
        // ═══════════════════════════════════════════════════════════════════════
        for (t, (&wt, &kt)) in w.iter().zip(self.round_constants).enumerate() {
            let [a, b, c, d, e, f, g, h] = ROLES[t % 8];

            // T1 - h = Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            let mut t1 = big_sigma(wv[e], &rot.round_sigma1)
                .wrapping_add(W::ch(wv[e], wv[f], wv[g]))
                .wrapping_add(kt)
                .wrapping_add(wt);

            // e' = d + T1, written into the slot that plays `e` next round
            wv[d] = wv[d].wrapping_add(t1).wrapping_add(wv[h]);

            // a' = T1 + T2, T2 = Σ0(a) + Maj(a,b,c)
            wv[h] = wv[h]
                .wrapping_add(t1)
                .wrapping_add(big_sigma(wv[a], &rot.round_sigma0))
                .wrapping_add(W::maj(wv[a], wv[b], wv[c]));

            t1.zeroize();
        }

        // ═══════════════════════════════════════════════════════════════════════
        // Step 4: Compute H(i) = H(i-1) + working variables
        // ═══════════════════════════════════════════════════════════════════════
        for (h, v) in state.iter_mut().zip(&wv) {
            *h = (*h).wrapping_add(*v);
        }

        wv.zeroize();
        w.zeroize();
    }
}
