// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference vectors and runners shared by the digestive test suites.
//!
//! Cases name their algorithm by its canonical string (`"SHA-512/256"`,
//! `"SHAKE128"`, ...) so this crate does not depend on the engines it
//! checks. Runners take the hashing function as a closure.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod vectors;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use digestive_core::{Digest, DigestError};

pub use vectors::test_vectors;

/// 448-bit two-block message (FIPS 180-4 examples)
pub const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// 896-bit two-block message (FIPS 180-4 examples, SHA-384/512 family)
pub const MSG_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

/// Pangram used by many published digest tables
pub const PANGRAM: &[u8] = b"The quick brown fox jumps over the lazy dog";

/// Test message, stored compactly for long inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Literal bytes
    Bytes(&'static [u8]),
    /// `count` copies of `byte`
    Repeat {
        /// Repeated byte
        byte: u8,
        /// Number of copies
        count: usize,
    },
    /// `len` bytes where byte `i` is `i % 251`
    Counter {
        /// Message length in bytes
        len: usize,
    },
}

impl Message {
    /// Materializes the message
    pub fn to_vec(&self) -> Vec<u8> {
        match *self {
            Message::Bytes(bytes) => bytes.to_vec(),
            Message::Repeat { byte, count } => vec![byte; count],
            Message::Counter { len } => (0..len).map(|i| (i % 251) as u8).collect(),
        }
    }

    /// Message length in bytes
    pub fn len(&self) -> usize {
        match *self {
            Message::Bytes(bytes) => bytes.len(),
            Message::Repeat { count, .. } => count,
            Message::Counter { len } => len,
        }
    }

    /// Whether the message is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single reference case
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// Unique test case identifier
    pub tc_id: usize,
    /// Canonical algorithm name
    pub algorithm: &'static str,
    /// Human-readable description
    pub comment: &'static str,
    /// Input message
    pub message: Message,
    /// Output width in bits; chosen by the case for SHAKE
    pub output_bits: usize,
    /// Expected digest (lowercase hex)
    pub expected: &'static str,
}

/// Runs one case through `hash(algorithm, message, output_bits)`.
pub fn run_test_case<F>(tc: &TestCase, hash: F) -> Result<(), String>
where
    F: Fn(&str, &[u8], usize) -> Result<Digest, DigestError>,
{
    let message = tc.message.to_vec();

    match hash(tc.algorithm, &message, tc.output_bits) {
        Ok(digest) if digest.to_hex() == tc.expected => Ok(()),
        Ok(digest) => Err(format!(
            "tc_id {} ({} {}): digest mismatch\n  expected: {}\n  got:      {}",
            tc.tc_id,
            tc.algorithm,
            tc.comment,
            tc.expected,
            digest.to_hex()
        )),
        Err(e) => Err(format!(
            "tc_id {} ({} {}): unexpected error: {:?}",
            tc.tc_id, tc.algorithm, tc.comment, e
        )),
    }
}

/// Runs every case accepted by `filter`, collecting failure messages.
pub fn run_test_cases<P, F>(filter: P, hash: F) -> Vec<String>
where
    P: Fn(&TestCase) -> bool,
    F: Fn(&str, &[u8], usize) -> Result<Digest, DigestError>,
{
    test_vectors()
        .iter()
        .filter(|tc| filter(tc))
        .filter_map(|tc| run_test_case(tc, &hash).err())
        .collect()
}
