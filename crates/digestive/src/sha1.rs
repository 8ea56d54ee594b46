// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 block function per FIPS 180-4 Section 6.1.2

use digestive_core::Word;
use zeroize::Zeroize;

use crate::consts::{SHA1_H0, SHA1_K};
use crate::md::{Compression, MAX_SCHEDULE_LEN};

/// SHA-1 rounds
const ROUNDS: usize = 80;

/// SHA-1 variant record
pub(crate) struct Sha1;

impl Compression for Sha1 {
    type Word = u32;

    fn initial_state(&self) -> [u32; 8] {
        SHA1_H0
    }

    fn output_bits(&self) -> usize {
        160
    }

    fn compress(&self, state: &mut [u32; 8], block: &[u32; 16], schedule: &mut [u32; MAX_SCHEDULE_LEN]) {
        // ═══════════════════════════════════════════════════════════════════════
        // Step 1: Prepare message schedule W[0..79]
        // ═══════════════════════════════════════════════════════════════════════
        let w = &mut schedule[..ROUNDS];
        w[..16].copy_from_slice(block);

        // W[t] = ROTL^1(W[t-3] ⊕ W[t-8] ⊕ W[t-14] ⊕ W[t-16])
        for t in 16..ROUNDS {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotl(1);
        }

        // ═══════════════════════════════════════════════════════════════════════
        // Step 2: Initialize working variables with H(i-1)
        // ═══════════════════════════════════════════════════════════════════════
        let mut a = state[0];
        let mut b = state[1];
        let mut c = state[2];
        let mut d = state[3];
        let mut e = state[4];

        // ═══════════════════════════════════════════════════════════════════════
        // Step 3: 80 rounds, f and K change every 20
        // ═══════════════════════════════════════════════════════════════════════
        for (t, &wt) in w.iter().enumerate() {
            let f = match t / 20 {
                0 => u32::ch(b, c, d),
                2 => u32::maj(b, c, d),
                _ => u32::parity(b, c, d),
            };

            let temp = a
                .rotl(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(SHA1_K[t / 20])
                .wrapping_add(wt);

            e = d;
            d = c;
            c = b.rotl(30);
            b = a;
            a = temp;
        }

        // ═══════════════════════════════════════════════════════════════════════
        // Step 4: Compute H(i) = H(i-1) + working variables
        // ═══════════════════════════════════════════════════════════════════════
        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);

        a.zeroize();
        b.zeroize();
        c.zeroize();
        d.zeroize();
        e.zeroize();
        w.zeroize();
    }
}
