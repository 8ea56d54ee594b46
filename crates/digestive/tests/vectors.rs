// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Reference vectors from digestive-vectors, run through the runtime
// dispatch and through the typed one-shot functions.

use digestive::{
    Algorithm, Digest, DigestError, Family, sha1, sha3_224, sha3_256, sha3_384, sha3_512, sha224,
    sha256, sha384, sha512, sha512_224, sha512_256, shake128, shake256,
};
use digestive_vectors::{Message, TestCase, run_test_cases, test_vectors};

fn dispatch(name: &str, message: &[u8], output_bits: usize) -> Result<Digest, DigestError> {
    let algorithm: Algorithm = name.parse()?;

    if algorithm.is_xof() {
        algorithm.hash_xof(message, output_bits)
    } else {
        algorithm.hash(message)
    }
}

fn typed(name: &str, message: &[u8], output_bits: usize) -> Result<Digest, DigestError> {
    let digest = match name.parse::<Algorithm>()? {
        Algorithm::Sha1 => sha1(message),
        Algorithm::Sha224 => sha224(message),
        Algorithm::Sha256 => sha256(message),
        Algorithm::Sha384 => sha384(message),
        Algorithm::Sha512 => sha512(message),
        Algorithm::Sha512_224 => sha512_224(message),
        Algorithm::Sha512_256 => sha512_256(message),
        Algorithm::Sha3_224 => sha3_224(message),
        Algorithm::Sha3_256 => sha3_256(message),
        Algorithm::Sha3_384 => sha3_384(message),
        Algorithm::Sha3_512 => sha3_512(message),
        Algorithm::Shake128 => shake128(message, output_bits),
        Algorithm::Shake256 => shake256(message, output_bits),
    };

    Ok(digest)
}

fn in_family(family: Family) -> impl Fn(&TestCase) -> bool {
    move |tc: &TestCase| {
        let is_long = matches!(tc.message, Message::Repeat { .. });
        !is_long
            && tc
                .algorithm
                .parse::<Algorithm>()
                .is_ok_and(|algorithm| algorithm.family() == family)
    }
}

fn assert_no_failures(label: &str, failures: Vec<String>) {
    if !failures.is_empty() {
        panic!(
            "{label} vector failures ({}):\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_every_algorithm_has_vectors() {
    let vectors = test_vectors();

    for algorithm in Algorithm::ALL {
        let count = vectors
            .iter()
            .filter(|tc| tc.algorithm == algorithm.name())
            .count();
        assert!(count >= 10, "{algorithm}: only {count} vectors");
    }
}

#[test]
fn test_vector_ids_are_unique() {
    let mut ids: Vec<usize> = test_vectors().iter().map(|tc| tc.tc_id).collect();
    let total = ids.len();

    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), total);
}

#[test]
fn test_sha1_vectors() {
    assert_no_failures("SHA-1", run_test_cases(in_family(Family::Sha1), dispatch));
}

#[test]
fn test_sha2_vectors() {
    assert_no_failures("SHA-2", run_test_cases(in_family(Family::Sha2), dispatch));
}

#[test]
fn test_sha3_vectors() {
    assert_no_failures("SHA-3", run_test_cases(in_family(Family::Sha3), dispatch));
}

#[test]
fn test_shake_vectors() {
    assert_no_failures("SHAKE", run_test_cases(in_family(Family::Shake), dispatch));
}

#[test]
fn test_typed_functions_match_vectors() {
    let short = |tc: &TestCase| !matches!(tc.message, Message::Repeat { .. });

    assert_no_failures("typed", run_test_cases(short, typed));
}

#[test]
fn test_one_million_a() {
    let long = |tc: &TestCase| matches!(tc.message, Message::Repeat { .. });

    assert_no_failures("one million a", run_test_cases(long, dispatch));
}

#[test]
fn test_digest_lengths() {
    for algorithm in Algorithm::ALL {
        let digest = match algorithm.output_bits() {
            Some(bits) => {
                let digest = algorithm.hash(b"").expect("fixed-output hash");
                assert_eq!(digest.bits(), bits, "{algorithm}");
                digest
            }
            None => algorithm.hash_xof(b"", 200).expect("XOF hash"),
        };

        assert_eq!(digest.len(), digest.to_hex().len() / 2, "{algorithm}");
    }
}
