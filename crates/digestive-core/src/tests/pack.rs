// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::pack::{be_bytes_to_words, le_bytes_to_words, words_to_be_bytes, words_to_le_bytes};

#[test]
fn test_be_bytes_to_words_reads_in_order() {
    let bytes: Vec<u8> = (0u8..16).collect();
    let mut words = [0u32; 4];

    be_bytes_to_words(&bytes, &mut words);

    assert_eq!(words, [0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]);
}

#[test]
fn test_le_bytes_to_words_reads_in_order() {
    let bytes: Vec<u8> = (0u8..16).collect();
    let mut words = [0u64; 2];

    le_bytes_to_words(&bytes, &mut words);

    assert_eq!(words, [0x0706050403020100, 0x0f0e0d0c0b0a0908]);
}

#[test]
fn test_be_bytes_to_words_ignores_trailing_bytes() {
    let bytes = [0xAAu8, 0xBB, 0xCC, 0xDD, 0xEE];
    let mut words = [0u32; 1];

    be_bytes_to_words(&bytes, &mut words);

    assert_eq!(words, [0xAABBCCDD]);
}

#[test]
#[should_panic]
fn test_be_bytes_to_words_panics_on_short_input() {
    let mut words = [0u32; 2];
    be_bytes_to_words(&[0u8; 7], &mut words);
}

#[test]
fn test_words_to_be_bytes_truncates_inside_a_word() {
    // SHA-512/224 keeps 3.5 of its 64-bit words
    let words = [0x0011223344556677u64, 0x8899aabbccddeeff];
    let mut out = [0u8; 12];

    let written = words_to_be_bytes(&words, &mut out);

    assert_eq!(written, 12);
    assert_eq!(
        out,
        [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]
    );
}

#[test]
fn test_words_to_be_bytes_stops_when_words_run_out() {
    let words = [0xDEADBEEFu32];
    let mut out = [0u8; 6];

    let written = words_to_be_bytes(&words, &mut out);

    assert_eq!(written, 4);
    assert_eq!(out, [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00]);
}

#[test]
fn test_words_to_le_bytes_mirrors_le_bytes_to_words() {
    let words = [0x0706050403020100u64, 0x0f0e0d0c0b0a0908];
    let mut out = [0u8; 16];

    assert_eq!(words_to_le_bytes(&words, &mut out), 16);
    assert_eq!(out.to_vec(), (0u8..16).collect::<Vec<u8>>());
}
