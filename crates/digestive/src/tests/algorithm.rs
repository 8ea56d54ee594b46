// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use digestive_core::DigestError;

use crate::algorithm::{Algorithm, Family};
use crate::md::Compression;
use crate::sha1::Sha1;
use crate::sha2::Sha2;
use crate::variants;

#[test]
fn test_name_round_trips_through_from_str() {
    for algorithm in Algorithm::ALL {
        let parsed: Algorithm = algorithm.name().parse().expect("canonical name");
        assert_eq!(parsed, algorithm);
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
}

#[test]
fn test_from_str_is_lenient_about_case_and_separators() {
    let cases = [
        ("sha256", Algorithm::Sha256),
        ("Sha-1", Algorithm::Sha1),
        ("SHA512/256", Algorithm::Sha512_256),
        ("sha512_224", Algorithm::Sha512_224),
        ("sha3_384", Algorithm::Sha3_384),
        ("SHA3 512", Algorithm::Sha3_512),
        ("shake-128", Algorithm::Shake128),
        ("Shake256", Algorithm::Shake256),
    ];

    for (name, expected) in cases {
        assert_eq!(name.parse::<Algorithm>(), Ok(expected), "{name}");
    }
}

#[test]
fn test_from_str_rejects_unknown_names() {
    for name in ["", "md5", "sha-3", "sha512/384", "shake512", "sha2566"] {
        assert_eq!(
            name.parse::<Algorithm>(),
            Err(DigestError::UnknownAlgorithm(name.to_string())),
            "{name:?}"
        );
    }
}

#[test]
fn test_from_parts() {
    assert_eq!(Algorithm::from_parts(Family::Sha1, 160), Ok(Algorithm::Sha1));
    assert_eq!(Algorithm::from_parts(Family::Sha2, 224), Ok(Algorithm::Sha224));
    assert_eq!(Algorithm::from_parts(Family::Sha2, 512), Ok(Algorithm::Sha512));
    assert_eq!(Algorithm::from_parts(Family::Sha3, 384), Ok(Algorithm::Sha3_384));
    assert_eq!(Algorithm::from_parts(Family::Shake, 256), Ok(Algorithm::Shake256));

    for (family, bits) in [
        (Family::Sha1, 256),
        (Family::Sha2, 160),
        (Family::Sha2, 1024),
        (Family::Sha3, 1024),
        (Family::Shake, 512),
    ] {
        assert_eq!(
            Algorithm::from_parts(family, bits),
            Err(DigestError::UnsupportedVariant {
                family: family.name(),
                bits
            })
        );
    }
}

#[test]
fn test_from_parts_agrees_with_queries() {
    for algorithm in Algorithm::ALL {
        let bits = match algorithm {
            Algorithm::Sha512_224 | Algorithm::Sha512_256 => continue,
            Algorithm::Shake128 => 128,
            Algorithm::Shake256 => 256,
            _ => algorithm.output_bits().expect("fixed output"),
        };

        assert_eq!(Algorithm::from_parts(algorithm.family(), bits), Ok(algorithm));
    }
}

#[test]
fn test_sha512_t() {
    assert_eq!(Algorithm::sha512_t(224), Ok(Algorithm::Sha512_224));
    assert_eq!(Algorithm::sha512_t(256), Ok(Algorithm::Sha512_256));
    assert!(matches!(
        Algorithm::sha512_t(384),
        Err(DigestError::UnsupportedVariant { bits: 384, .. })
    ));
}

#[test]
fn test_block_len_and_xof() {
    let expected = [
        (Algorithm::Sha1, 64, false),
        (Algorithm::Sha224, 64, false),
        (Algorithm::Sha256, 64, false),
        (Algorithm::Sha384, 128, false),
        (Algorithm::Sha512, 128, false),
        (Algorithm::Sha512_224, 128, false),
        (Algorithm::Sha512_256, 128, false),
        (Algorithm::Sha3_224, 144, false),
        (Algorithm::Sha3_256, 136, false),
        (Algorithm::Sha3_384, 104, false),
        (Algorithm::Sha3_512, 72, false),
        (Algorithm::Shake128, 168, true),
        (Algorithm::Shake256, 136, true),
    ];

    for (algorithm, block_len, xof) in expected {
        assert_eq!(algorithm.block_len(), block_len, "{algorithm}");
        assert_eq!(algorithm.is_xof(), xof, "{algorithm}");
        assert_eq!(algorithm.output_bits().is_none(), xof, "{algorithm}");
    }
}

#[test]
fn test_sponge_capacity_is_twice_the_output() {
    for algorithm in [
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
    ] {
        let bits = algorithm.output_bits().expect("fixed output");
        assert_eq!(200 - algorithm.block_len(), 2 * bits / 8, "{algorithm}");
    }
}

#[test]
fn test_check_len_limits() {
    let max = u64::MAX / 8;

    for algorithm in [Algorithm::Sha1, Algorithm::Sha224, Algorithm::Sha256] {
        assert_eq!(algorithm.max_message_len(), Some(max));
        assert_eq!(algorithm.check_len(0), Ok(()));
        assert_eq!(algorithm.check_len(usize::MAX / 16), Ok(()));
        if usize::BITS == 64 {
            assert_eq!(
                algorithm.check_len(usize::MAX),
                Err(DigestError::MessageTooLong {
                    len: usize::MAX,
                    max
                })
            );
        }
    }

    for algorithm in [Algorithm::Sha512, Algorithm::Sha3_256, Algorithm::Shake128] {
        assert_eq!(algorithm.max_message_len(), None);
        assert_eq!(algorithm.check_len(usize::MAX), Ok(()));
    }
}

#[test]
fn test_entry_point_mismatch() {
    assert_eq!(
        Algorithm::Shake128.hash(b"abc"),
        Err(DigestError::UnsupportedVariant {
            family: "SHAKE",
            bits: 0
        })
    );
    assert_eq!(
        Algorithm::Sha256.hash_xof(b"abc", 256),
        Err(DigestError::UnsupportedVariant {
            family: "SHA-2",
            bits: 256
        })
    );
}

#[test]
fn test_family_display() {
    assert_eq!(Family::Sha1.to_string(), "SHA-1");
    assert_eq!(Family::Sha2.to_string(), "SHA-2");
    assert_eq!(Family::Sha3.to_string(), "SHA-3");
    assert_eq!(Family::Shake.to_string(), "SHAKE");
}

#[test]
fn test_block_len_comes_from_the_engines() {
    assert_eq!(Algorithm::Sha1.block_len(), <Sha1 as Compression>::BLOCK_LEN);
    for algorithm in [Algorithm::Sha224, Algorithm::Sha256] {
        assert_eq!(algorithm.block_len(), <Sha2<u32> as Compression>::BLOCK_LEN);
    }
    for algorithm in [
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
    ] {
        assert_eq!(algorithm.block_len(), <Sha2<u64> as Compression>::BLOCK_LEN);
    }
    assert_eq!(Algorithm::Sha3_256.block_len(), variants::SHA3_256.rate);
    assert_eq!(Algorithm::Shake128.block_len(), variants::SHAKE128.rate);
}
