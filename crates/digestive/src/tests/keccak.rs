// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for the Keccak state and Keccak-f[1600]
//
// References:
// [1] FIPS 202 Section 3: Keccak-p permutations
// [2] Keccak team, KeccakF-1600 intermediate values
//     https://keccak.team/files/KeccakF-1600-IntermediateValues.txt

use crate::keccak::{KeccakState, keccak_f1600};

#[test]
fn test_keccak_f1600_zero_state() {
    let mut a = [0u64; 25];

    keccak_f1600(&mut a);

    let expected = [
        0xF1258F7940E1DDE7,
        0x84D5CCF933C0478A,
        0xD598261EA65AA9EE,
        0xBD1547306F80494D,
        0x8B284E056253D057,
    ];
    assert_eq!(a[..5], expected, "first lanes after one permutation");

    keccak_f1600(&mut a);

    assert_eq!(a[0], 0x2D5C954DF96ECB3C);
    assert_eq!(a[1], 0x6A332CD07057B56D);
    assert_eq!(a[2], 0x093D8D1270D76B6C);
}

#[test]
fn test_state_permute_matches_free_function() {
    let mut state = KeccakState::new();
    let mut lanes = [0u64; 25];

    state.permute();
    keccak_f1600(&mut lanes);

    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(state.lane(x, y), lanes[x + 5 * y], "lane ({x}, {y})");
        }
    }
}

#[test]
fn test_byte_view_is_little_endian_lanes() {
    let mut state = KeccakState::new();
    state.set_lane(1, 0, 0x0807060504030201);
    state.set_lane(0, 1, 0xFF00000000000000);

    for i in 0..8 {
        assert_eq!(state.byte(8 + i), (i + 1) as u8);
    }
    // Lane (0, 1) is lane 5, bytes 40..48
    assert_eq!(state.byte(47), 0xFF);
    assert_eq!(state.byte(40), 0x00);
}

#[test]
fn test_xor_byte_updates_lane() {
    let mut state = KeccakState::new();

    state.xor_byte(0, 0x06);
    state.xor_byte(135, 0x80);

    assert_eq!(state.lane(0, 0), 0x06);
    // Byte 135 is the top byte of lane 16 = (1, 3)
    assert_eq!(state.lane(1, 3), 0x8000000000000000);

    state.xor_byte(135, 0x80);
    assert_eq!(state.lane(1, 3), 0);
}

#[test]
fn test_xor_bytes_partial_lane() {
    let bytes: [u8; 11] = core::array::from_fn(|i| (i as u8) + 1);
    let mut state = KeccakState::new();

    state.xor_bytes(&bytes);

    assert_eq!(state.lane(0, 0), 0x0807060504030201);
    assert_eq!(state.lane(1, 0), 0x0B0A09);
    for i in 0..11 {
        assert_eq!(state.byte(i), bytes[i]);
    }
    assert_eq!(state.byte(11), 0);
}

#[test]
fn test_xor_bytes_matches_bytewise_xor_at_every_length() {
    let input: [u8; 200] = core::array::from_fn(|i| (i * 13 + 5) as u8);

    for len in 0..=200 {
        let mut bulk = KeccakState::new();
        let mut bytewise = KeccakState::new();
        bulk.permute();
        bytewise.permute();

        bulk.xor_bytes(&input[..len]);
        for (i, &value) in input[..len].iter().enumerate() {
            bytewise.xor_byte(i, value);
        }

        for i in 0..200 {
            assert_eq!(bulk.byte(i), bytewise.byte(i), "length {len}, byte {i}");
        }
    }
}

#[test]
fn test_read_bytes_round_trip() {
    let input: [u8; 200] = core::array::from_fn(|i| (i * 7) as u8);
    let mut state = KeccakState::new();
    state.xor_bytes(&input);

    let mut out = [0u8; 200];
    state.read_bytes(&mut out);
    assert_eq!(out, input);

    let mut prefix = [0u8; 13];
    state.read_bytes(&mut prefix);
    assert_eq!(prefix, input[..13]);
}

#[test]
#[should_panic]
fn test_xor_bytes_rejects_oversized_input() {
    let mut state = KeccakState::new();
    state.xor_bytes(&[0u8; 201]);
}

#[test]
#[should_panic]
fn test_lane_rejects_out_of_range() {
    let state = KeccakState::new();
    let _ = state.lane(5, 0);
}
