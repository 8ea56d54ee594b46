// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use digestive_core::Digest;
use proptest::prelude::*;

proptest! {
    #[test]
    fn to_hex_then_from_hex_is_identity(bytes in proptest::collection::vec(any::<u8>(), 0..300)) {
        let digest = Digest::from_bytes(&bytes);
        let hex = digest.to_hex();

        prop_assert_eq!(hex.len(), 2 * bytes.len());

        let decoded = Digest::from_hex(&hex, digest.len())
            .expect("Failed to from_hex(..)");
        prop_assert_eq!(&decoded, &digest);

        let parsed: Digest = hex.parse().expect("Failed to parse()");
        prop_assert_eq!(parsed, digest);
    }

    #[test]
    fn uppercase_hex_decodes_to_same_digest(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let digest = Digest::from_bytes(&bytes);
        let upper = format!("{digest:X}");

        let decoded = Digest::from_hex(&upper, bytes.len()).expect("Failed to from_hex(..)");
        prop_assert_eq!(decoded, digest);
    }

    #[test]
    fn short_input_is_prefix_of_padded_digest(
        bytes in proptest::collection::vec(any::<u8>(), 0..32),
        extra in 0usize..16,
    ) {
        let hex = Digest::from_bytes(&bytes).to_hex();
        let padded = Digest::from_hex(&hex, bytes.len() + extra).expect("Failed to from_hex(..)");

        prop_assert_eq!(&padded.as_bytes()[..bytes.len()], bytes.as_slice());
        prop_assert!(padded.as_bytes()[bytes.len()..].iter().all(|&b| b == 0));
    }
}
