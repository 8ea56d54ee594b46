// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use thiserror::Error;

/// Digest error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The (family, output width) pair does not name a defined algorithm,
    /// or the algorithm was driven through the wrong entry point.
    #[error("unsupported variant: {family} with {bits}-bit output")]
    UnsupportedVariant {
        /// Algorithm family name
        family: &'static str,
        /// Requested output width in bits
        bits: usize,
    },

    /// The algorithm name could not be parsed
    #[error("unknown algorithm name `{0}`")]
    UnknownAlgorithm(String),

    /// A non-hexadecimal character was found while decoding a digest
    #[error("invalid hex character {found:?} at position {position}")]
    InvalidEncoding {
        /// Character index into the input string
        position: usize,
        /// Offending character
        found: char,
    },

    /// The message bit length does not fit the algorithm's length field
    #[error("message of {len} bytes exceeds the {max}-byte limit")]
    MessageTooLong {
        /// Message length in bytes
        len: usize,
        /// Largest supported message length in bytes
        max: u64,
    },
}
