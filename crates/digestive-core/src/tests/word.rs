// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::Word;

const TEST_VALUES_32: [u32; 5] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
];

const TEST_VALUES_64: [u64; 4] = [
    0x0000_0000_0000_0000,
    0xFFFF_FFFF_FFFF_FFFF,
    0x0123_4567_89AB_CDEF,
    0xF0E1_D2C3_B4A5_9687,
];

#[test]
fn test_ch_matches_reference() {
    // Ch(x, y, z) = (x & y) ^ (!x & z)
    for &x in &TEST_VALUES_32 {
        for &y in &TEST_VALUES_32 {
            for &z in &TEST_VALUES_32 {
                let expected = (x & y) ^ (!x & z);
                assert_eq!(
                    u32::ch(x, y, z),
                    expected,
                    "Ch mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn test_maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES_64 {
        for &y in &TEST_VALUES_64 {
            for &z in &TEST_VALUES_64 {
                let expected = (x & y) ^ (x & z) ^ (y & z);
                assert_eq!(
                    u64::maj(x, y, z),
                    expected,
                    "Maj mismatch for x={x:#018x}, y={y:#018x}, z={z:#018x}"
                );
            }
        }
    }
}

#[test]
fn test_parity_matches_reference() {
    for &x in &TEST_VALUES_32 {
        for &y in &TEST_VALUES_32 {
            assert_eq!(u32::parity(x, y, 0x5A5A_5A5A), x ^ y ^ 0x5A5A_5A5A);
        }
    }
}

#[test]
fn test_rotations_and_shift() {
    assert_eq!(Word::rotr(0x0000_0001u32, 1), 0x8000_0000);
    assert_eq!(Word::rotl(0x8000_0000u32, 1), 0x0000_0001);
    assert_eq!(Word::rotr(0x0123_4567_89AB_CDEFu64, 8), 0xEF01_2345_6789_ABCD);
    assert_eq!(Word::shr(0xFFFF_FFFFu32, 28), 0xF);
    assert_eq!(Word::rotl(0x0123_4567u32, 0), 0x0123_4567);
}

#[test]
fn test_wrapping_add_wraps() {
    assert_eq!(Word::wrapping_add(0xFFFF_FFFFu32, 2), 1);
    assert_eq!(Word::wrapping_add(u64::MAX, 1), 0);
}

#[test]
fn test_be_and_le_byte_order() {
    let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

    assert_eq!(u32::from_be_slice(&bytes), 0x0123_4567);
    assert_eq!(u32::from_le_slice(&bytes), 0x6745_2301);
    assert_eq!(u64::from_be_slice(&bytes), 0x0123_4567_89AB_CDEF);
    assert_eq!(u64::from_le_slice(&bytes), 0xEFCD_AB89_6745_2301);

    let mut out = [0u8; 8];
    0x0123_4567_89AB_CDEFu64.write_be(&mut out);
    assert_eq!(out, bytes);

    0xEFCD_AB89_6745_2301u64.write_le(&mut out);
    assert_eq!(out, bytes);
}

#[test]
#[should_panic]
fn test_from_be_slice_rejects_short_input() {
    u64::from_be_slice(&[0u8; 7]);
}
