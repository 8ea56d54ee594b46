// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for the Merkle-Damgard engine and the SHA-1 / SHA-2 block functions
//
// References:
// [1] FIPS 180-4 Sections 5.1, 6.1.2, 6.2.2, 6.4.2
// [2] NIST SHA examples with intermediate values
//     https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values

use digestive_core::pack::be_bytes_to_words;

use crate::md::{self, Compression, MAX_SCHEDULE_LEN};
use crate::sha2::ROLES;
use crate::variants;

/// "abc" padded to one 64-byte block
fn abc_block32() -> [u32; 16] {
    let mut bytes = [0u8; 64];
    bytes[..3].copy_from_slice(b"abc");
    bytes[3] = 0x80;
    bytes[63] = 24;

    let mut block = [0u32; 16];
    be_bytes_to_words(&bytes, &mut block);
    block
}

#[test]
fn test_roles_rotate_back_to_identity() {
    for (k, roles) in ROLES.iter().enumerate() {
        for (j, &slot) in roles.iter().enumerate() {
            assert_eq!(slot, (j + 8 - k) % 8, "round {k}, role {j}");
        }

        // Role h of round k becomes role a of round k + 1
        let next = ROLES[(k + 1) % 8];
        assert_eq!(next[0], roles[7]);
        // Role d of round k (receives T1) becomes role e of round k + 1
        assert_eq!(next[4], roles[3]);
    }
}

#[test]
fn test_sha1_compress_abc() {
    let mut state = variants::SHA1.initial_state();
    let mut schedule = [0u32; MAX_SCHEDULE_LEN];

    variants::SHA1.compress(&mut state, &abc_block32(), &mut schedule);

    assert_eq!(
        state[..5],
        [0xA9993E36, 0x4706816A, 0xBA3E2571, 0x7850C26C, 0x9CD0D89D]
    );
    assert_eq!(state[5..], [0, 0, 0], "unused SHA-1 words stay zero");
    assert!(schedule.iter().all(|&w| w == 0), "schedule must be wiped");
}

#[test]
fn test_sha256_compress_abc() {
    let mut state = variants::SHA256.initial_state();
    let mut schedule = [0u32; MAX_SCHEDULE_LEN];

    variants::SHA256.compress(&mut state, &abc_block32(), &mut schedule);

    assert_eq!(
        state,
        [
            0xBA7816BF, 0x8F01CFEA, 0x414140DE, 0x5DAE2223, 0xB00361A3, 0x96177A9C, 0xB410FF61,
            0xF20015AD,
        ]
    );
    assert!(schedule.iter().all(|&w| w == 0), "schedule must be wiped");
}

#[test]
fn test_length_field_width_follows_word() {
    assert_eq!(<crate::sha1::Sha1 as Compression>::BLOCK_LEN, 64);
    assert_eq!(<crate::sha1::Sha1 as Compression>::LENGTH_FIELD_LEN, 8);
    assert_eq!(<crate::sha2::Sha2<u32> as Compression>::BLOCK_LEN, 64);
    assert_eq!(<crate::sha2::Sha2<u32> as Compression>::LENGTH_FIELD_LEN, 8);
    assert_eq!(<crate::sha2::Sha2<u64> as Compression>::BLOCK_LEN, 128);
    assert_eq!(<crate::sha2::Sha2<u64> as Compression>::LENGTH_FIELD_LEN, 16);
}

#[test]
fn test_digest_widths() {
    assert_eq!(md::digest(&variants::SHA1, b"").len(), 20);
    assert_eq!(md::digest(&variants::SHA224, b"").len(), 28);
    assert_eq!(md::digest(&variants::SHA256, b"").len(), 32);
    assert_eq!(md::digest(&variants::SHA384, b"").len(), 48);
    assert_eq!(md::digest(&variants::SHA512, b"").len(), 64);
    assert_eq!(md::digest(&variants::SHA512_224, b"").len(), 28);
    assert_eq!(md::digest(&variants::SHA512_256, b"").len(), 32);
}

#[test]
fn test_sha512_224_is_not_truncated_sha512() {
    let full = md::digest(&variants::SHA512, b"abc");
    let truncated = md::digest(&variants::SHA512_224, b"abc");

    assert_ne!(&full.as_bytes()[..28], truncated.as_bytes());
    assert_eq!(
        truncated.to_hex(),
        "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"
    );
}

#[test]
fn test_sha512_length_field_region() {
    // 112..119 remainder bytes leave no room for the 16-byte length field
    let data = [0x61u8; 115];
    let digest = md::digest(&variants::SHA512, &data);

    assert_eq!(
        digest.to_hex(),
        concat!(
            "eaa30f93760743ac7d0a6cb8ed5ef3b30c59097bc44d0ec337344301deba9fb9",
            "2b20c488d55de415f6aaed0df4925b42894b81d2e1cde89d91ec7f6cc67262b4",
        )
    );
}
