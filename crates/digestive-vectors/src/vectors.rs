// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Reference digests
//
// References:
// [1] NIST Cryptographic Standards and Guidelines: Examples with Intermediate Values
//     https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values
// [2] NIST CAVP (Cryptographic Algorithm Validation Program)
//     https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/secure-hashing
// [3] FIPS 202 Section 6: SHA-3 and SHAKE instances

use alloc::vec;
use alloc::vec::Vec;

use crate::{MSG_448, MSG_896, Message, PANGRAM, TestCase};

/// Every reference case, grouped by algorithm
pub fn test_vectors() -> Vec<TestCase> {
    vec![
        TestCase {
            tc_id: 1,
            algorithm: "SHA-1",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 160,
            expected: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        TestCase {
            tc_id: 2,
            algorithm: "SHA-1",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 160,
            expected: "a9993e364706816aba3e25717850c26c9cd0d89d",
        },
        TestCase {
            tc_id: 3,
            algorithm: "SHA-1",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 160,
            expected: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        },
        TestCase {
            tc_id: 4,
            algorithm: "SHA-1",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 160,
            expected: "a49b2446a02c645bf419f995b67091253a04a259",
        },
        TestCase {
            tc_id: 5,
            algorithm: "SHA-1",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 160,
            expected: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        },
        TestCase {
            tc_id: 6,
            algorithm: "SHA-1",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 160,
            expected: "34aa973cd4c4daa4f61eeb2bdbad27316534016f",
        },
        TestCase {
            tc_id: 7,
            algorithm: "SHA-1",
            comment: "55-byte counter",
            message: Message::Counter { len: 55 },
            output_bits: 160,
            expected: "8ae2d46729cfe68ff927af5eec9c7d1b66d65ac2",
        },
        TestCase {
            tc_id: 8,
            algorithm: "SHA-1",
            comment: "56-byte counter",
            message: Message::Counter { len: 56 },
            output_bits: 160,
            expected: "636e2ec698dac903498e648bd2f3af641d3c88cb",
        },
        TestCase {
            tc_id: 9,
            algorithm: "SHA-1",
            comment: "63-byte counter",
            message: Message::Counter { len: 63 },
            output_bits: 160,
            expected: "6d942da0c4392b123528f2905c713a3ce28364bd",
        },
        TestCase {
            tc_id: 10,
            algorithm: "SHA-1",
            comment: "64-byte counter",
            message: Message::Counter { len: 64 },
            output_bits: 160,
            expected: "c6138d514ffa2135bfce0ed0b8fac65669917ec7",
        },
        TestCase {
            tc_id: 11,
            algorithm: "SHA-1",
            comment: "65-byte counter",
            message: Message::Counter { len: 65 },
            output_bits: 160,
            expected: "69bd728ad6e13cd76ff19751fde427b00e395746",
        },
        TestCase {
            tc_id: 12,
            algorithm: "SHA-1",
            comment: "119-byte counter",
            message: Message::Counter { len: 119 },
            output_bits: 160,
            expected: "41c89d06001bab4ab78736b44efe7ce18ce6ae08",
        },
        TestCase {
            tc_id: 13,
            algorithm: "SHA-1",
            comment: "120-byte counter",
            message: Message::Counter { len: 120 },
            output_bits: 160,
            expected: "d3dbd653bd8597b7475321b60a36891278e6a04a",
        },
        TestCase {
            tc_id: 14,
            algorithm: "SHA-1",
            comment: "128-byte counter",
            message: Message::Counter { len: 128 },
            output_bits: 160,
            expected: "e6434bc401f98603d7eda504790c98c67385d535",
        },
        TestCase {
            tc_id: 15,
            algorithm: "SHA-224",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 224,
            expected: "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
        },
        TestCase {
            tc_id: 16,
            algorithm: "SHA-224",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 224,
            expected: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        },
        TestCase {
            tc_id: 17,
            algorithm: "SHA-224",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 224,
            expected: "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
        },
        TestCase {
            tc_id: 18,
            algorithm: "SHA-224",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 224,
            expected: "c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3",
        },
        TestCase {
            tc_id: 19,
            algorithm: "SHA-224",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 224,
            expected: "730e109bd7a8a32b1cb9d9a09aa2325d2430587ddbc0c38bad911525",
        },
        TestCase {
            tc_id: 20,
            algorithm: "SHA-224",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 224,
            expected: "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67",
        },
        TestCase {
            tc_id: 21,
            algorithm: "SHA-224",
            comment: "55-byte counter",
            message: Message::Counter { len: 55 },
            output_bits: 224,
            expected: "8991dfba74284e04dc7581c7c3e4068ff6cb7a63733361429834bb56",
        },
        TestCase {
            tc_id: 22,
            algorithm: "SHA-224",
            comment: "56-byte counter",
            message: Message::Counter { len: 56 },
            output_bits: 224,
            expected: "2b2cd637c16ad7290bb067ad7d8fd04e204fa43a84366afc7130f4ef",
        },
        TestCase {
            tc_id: 23,
            algorithm: "SHA-224",
            comment: "63-byte counter",
            message: Message::Counter { len: 63 },
            output_bits: 224,
            expected: "049e8dd7eab3378ce9f823bfb569e5b270235d4b7f9623606971998f",
        },
        TestCase {
            tc_id: 24,
            algorithm: "SHA-224",
            comment: "64-byte counter",
            message: Message::Counter { len: 64 },
            output_bits: 224,
            expected: "c37b88a3522dbf7ac30d1c68ea397ac11d4773571aed01ddab73531e",
        },
        TestCase {
            tc_id: 25,
            algorithm: "SHA-224",
            comment: "65-byte counter",
            message: Message::Counter { len: 65 },
            output_bits: 224,
            expected: "114b5fd665736a96585c5d5837d35250aed73c725252cbf7f8b121f6",
        },
        TestCase {
            tc_id: 26,
            algorithm: "SHA-224",
            comment: "119-byte counter",
            message: Message::Counter { len: 119 },
            output_bits: 224,
            expected: "762f18c0df65c3d0ea64126c8a6e51db4425e76d4d969ed0f83899be",
        },
        TestCase {
            tc_id: 27,
            algorithm: "SHA-224",
            comment: "120-byte counter",
            message: Message::Counter { len: 120 },
            output_bits: 224,
            expected: "d022deb78772a77e8b91d68f90ca1f636e8fe047ae219434ced18eef",
        },
        TestCase {
            tc_id: 28,
            algorithm: "SHA-224",
            comment: "128-byte counter",
            message: Message::Counter { len: 128 },
            output_bits: 224,
            expected: "67d88da33fd632d8742424791dface672ff59d597fe38b3f2a998386",
        },
        TestCase {
            tc_id: 29,
            algorithm: "SHA-256",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 256,
            expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        TestCase {
            tc_id: 30,
            algorithm: "SHA-256",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 256,
            expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        },
        TestCase {
            tc_id: 31,
            algorithm: "SHA-256",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 256,
            expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        },
        TestCase {
            tc_id: 32,
            algorithm: "SHA-256",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 256,
            expected: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
        },
        TestCase {
            tc_id: 33,
            algorithm: "SHA-256",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 256,
            expected: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        },
        TestCase {
            tc_id: 34,
            algorithm: "SHA-256",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 256,
            expected: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        },
        TestCase {
            tc_id: 35,
            algorithm: "SHA-256",
            comment: "55-byte counter",
            message: Message::Counter { len: 55 },
            output_bits: 256,
            expected: "463eb28e72f82e0a96c0a4cc53690c571281131f672aa229e0d45ae59b598b59",
        },
        TestCase {
            tc_id: 36,
            algorithm: "SHA-256",
            comment: "56-byte counter",
            message: Message::Counter { len: 56 },
            output_bits: 256,
            expected: "da2ae4d6b36748f2a318f23e7ab1dfdf45acdc9d049bd80e59de82a60895f562",
        },
        TestCase {
            tc_id: 37,
            algorithm: "SHA-256",
            comment: "63-byte counter",
            message: Message::Counter { len: 63 },
            output_bits: 256,
            expected: "29af2686fd53374a36b0846694cc342177e428d1647515f078784d69cdb9e488",
        },
        TestCase {
            tc_id: 38,
            algorithm: "SHA-256",
            comment: "64-byte counter",
            message: Message::Counter { len: 64 },
            output_bits: 256,
            expected: "fdeab9acf3710362bd2658cdc9a29e8f9c757fcf9811603a8c447cd1d9151108",
        },
        TestCase {
            tc_id: 39,
            algorithm: "SHA-256",
            comment: "65-byte counter",
            message: Message::Counter { len: 65 },
            output_bits: 256,
            expected: "4bfd2c8b6f1eec7a2afeb48b934ee4b2694182027e6d0fc075074f2fabb31781",
        },
        TestCase {
            tc_id: 40,
            algorithm: "SHA-256",
            comment: "119-byte counter",
            message: Message::Counter { len: 119 },
            output_bits: 256,
            expected: "da18797ed7c3a777f0847f429724a2d8cd5138e6ed2895c3fa1a6d39d18f7ec6",
        },
        TestCase {
            tc_id: 41,
            algorithm: "SHA-256",
            comment: "120-byte counter",
            message: Message::Counter { len: 120 },
            output_bits: 256,
            expected: "f52b23db1fbb6ded89ef42a23ce0c8922c45f25c50b568a93bf1c075420bbb7c",
        },
        TestCase {
            tc_id: 42,
            algorithm: "SHA-256",
            comment: "128-byte counter",
            message: Message::Counter { len: 128 },
            output_bits: 256,
            expected: "471fb943aa23c511f6f72f8d1652d9c880cfa392ad80503120547703e56a2be5",
        },
        TestCase {
            tc_id: 43,
            algorithm: "SHA-384",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 384,
            expected: concat!(
                "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da",
                "274edebfe76f65fbd51ad2f14898b95b",
            ),
        },
        TestCase {
            tc_id: 44,
            algorithm: "SHA-384",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 384,
            expected: concat!(
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed",
                "8086072ba1e7cc2358baeca134c825a7",
            ),
        },
        TestCase {
            tc_id: 45,
            algorithm: "SHA-384",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 384,
            expected: concat!(
                "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6",
                "b0455a8520bc4e6f5fe95b1fe3c8452b",
            ),
        },
        TestCase {
            tc_id: 46,
            algorithm: "SHA-384",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 384,
            expected: concat!(
                "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712",
                "fcc7c71a557e2db966c3e9fa91746039",
            ),
        },
        TestCase {
            tc_id: 47,
            algorithm: "SHA-384",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 384,
            expected: concat!(
                "ca737f1014a48f4c0b6dd43cb177b0afd9e5169367544c494011e3317dbf9a50",
                "9cb1e5dc1e85a941bbee3d7f2afbc9b1",
            ),
        },
        TestCase {
            tc_id: 48,
            algorithm: "SHA-384",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 384,
            expected: concat!(
                "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b",
                "07b8b3dc38ecc4ebae97ddd87f3d8985",
            ),
        },
        TestCase {
            tc_id: 49,
            algorithm: "SHA-384",
            comment: "111-byte counter",
            message: Message::Counter { len: 111 },
            output_bits: 384,
            expected: concat!(
                "f5f9fe110d809d34029de262a01b208356caec6e054c7f926b2591f6c9780579",
                "d4b59f5578c6f531a84f158a33660cef",
            ),
        },
        TestCase {
            tc_id: 50,
            algorithm: "SHA-384",
            comment: "112-byte counter",
            message: Message::Counter { len: 112 },
            output_bits: 384,
            expected: concat!(
                "33ba080ec0ccb378e4e95fed3b26c23aa1a280476e007519ee47f60cd9c5c8a6",
                "5d627259a9aa2fd33ca06d3c14ee5548",
            ),
        },
        TestCase {
            tc_id: 51,
            algorithm: "SHA-384",
            comment: "127-byte counter",
            message: Message::Counter { len: 127 },
            output_bits: 384,
            expected: concat!(
                "d5fcfe2fcf6b3ef375ede37c8123d9b78065fecc1d55197e2f7721e6e9a93d0b",
                "a4d7fd15f9b96dea2744df24141ba2ef",
            ),
        },
        TestCase {
            tc_id: 52,
            algorithm: "SHA-384",
            comment: "128-byte counter",
            message: Message::Counter { len: 128 },
            output_bits: 384,
            expected: concat!(
                "ca2385773319124534111a36d0581fc3f00815e907034b90cff9c3a861e126a7",
                "41d5dfcff65a417b6d7296863ac0ec17",
            ),
        },
        TestCase {
            tc_id: 53,
            algorithm: "SHA-384",
            comment: "129-byte counter",
            message: Message::Counter { len: 129 },
            output_bits: 384,
            expected: concat!(
                "ef49ae5b9ad51433d00323528d81ea8d2e4d2b507dbd9f1cb84f952b66249a78",
                "8b1c89fcdb77a0db9f1feb901d47fc73",
            ),
        },
        TestCase {
            tc_id: 54,
            algorithm: "SHA-384",
            comment: "247-byte counter",
            message: Message::Counter { len: 247 },
            output_bits: 384,
            expected: concat!(
                "bdc3e02d31db1eb7f04cd9fb8876aa9c7cb1852bd3bd62f56e062e216be648a3",
                "4fd327b84e3b6339f44697470711f661",
            ),
        },
        TestCase {
            tc_id: 55,
            algorithm: "SHA-384",
            comment: "248-byte counter",
            message: Message::Counter { len: 248 },
            output_bits: 384,
            expected: concat!(
                "9135e6d4b1e2356c3de16a85e4af57243cf6861dfb6c53ca13d9481371aee285",
                "b75dccafc1a64499f1b2cbe4a3cd82c8",
            ),
        },
        TestCase {
            tc_id: 56,
            algorithm: "SHA-384",
            comment: "256-byte counter",
            message: Message::Counter { len: 256 },
            output_bits: 384,
            expected: concat!(
                "2786ae11483c719dcb61b32652daf932d7c304f0d5d1e3904f6be6b44826d94d",
                "e4fc922065558ad6aa10ae8b9eba005d",
            ),
        },
        TestCase {
            tc_id: 57,
            algorithm: "SHA-512",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 512,
            expected: concat!(
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce",
                "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
            ),
        },
        TestCase {
            tc_id: 58,
            algorithm: "SHA-512",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 512,
            expected: concat!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a",
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ),
        },
        TestCase {
            tc_id: 59,
            algorithm: "SHA-512",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 512,
            expected: concat!(
                "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c335",
                "96fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
            ),
        },
        TestCase {
            tc_id: 60,
            algorithm: "SHA-512",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 512,
            expected: concat!(
                "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018",
                "501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
            ),
        },
        TestCase {
            tc_id: 61,
            algorithm: "SHA-512",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 512,
            expected: concat!(
                "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64",
                "2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
            ),
        },
        TestCase {
            tc_id: 62,
            algorithm: "SHA-512",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 512,
            expected: concat!(
                "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb",
                "de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
            ),
        },
        TestCase {
            tc_id: 63,
            algorithm: "SHA-512",
            comment: "111-byte counter",
            message: Message::Counter { len: 111 },
            output_bits: 512,
            expected: concat!(
                "a1a111449b198d9b1f538bad7f3fc1022b3a5b1a5e90a0bc860de8512746cbc3",
                "1599e6c834de3a3235327af0b51ff57bf7acf1974a73014d9c3953812edc7c8d",
            ),
        },
        TestCase {
            tc_id: 64,
            algorithm: "SHA-512",
            comment: "112-byte counter",
            message: Message::Counter { len: 112 },
            output_bits: 512,
            expected: concat!(
                "c5fbd731d19d2ae1180f001be72c2c1aaba1d7b094b3748880e24593b8e117a7",
                "50e11c1bd867cc2f96dace8c8b74abd2d5c4f236be444e77d30d1916174070b9",
            ),
        },
        TestCase {
            tc_id: 65,
            algorithm: "SHA-512",
            comment: "127-byte counter",
            message: Message::Counter { len: 127 },
            output_bits: 512,
            expected: concat!(
                "eab89674feaa34e27aebeeff3c0a4d70070bb872d5e9f186cf1dbbdee517b6e3",
                "5724d629ff025a5b07185e911ada7e3c8acf830aa0e4f71777bd2d44f504f7f0",
            ),
        },
        TestCase {
            tc_id: 66,
            algorithm: "SHA-512",
            comment: "128-byte counter",
            message: Message::Counter { len: 128 },
            output_bits: 512,
            expected: concat!(
                "1dffd5e3adb71d45d2245939665521ae001a317a03720a45732ba1900ca3b835",
                "1fc5c9b4ca513eba6f80bc7b1d1fdad4abd13491cb824d61b08d8c0e1561b3f7",
            ),
        },
        TestCase {
            tc_id: 67,
            algorithm: "SHA-512",
            comment: "129-byte counter",
            message: Message::Counter { len: 129 },
            output_bits: 512,
            expected: concat!(
                "1d9da57fbbdab09afb3506ab2d223d06109d65c1c8ad197f50138f714bc4c3f2",
                "fe5787922639c680acad1c651f955990425954ce2cba0c5cc83f2667d878eb0f",
            ),
        },
        TestCase {
            tc_id: 68,
            algorithm: "SHA-512",
            comment: "247-byte counter",
            message: Message::Counter { len: 247 },
            output_bits: 512,
            expected: concat!(
                "006086e61959b1d66c72e754427ead5e1d6c02d8409f5c32b2f5ae448f54682b",
                "504a1abc0346ccf39bf66a8c7b69081e886b47a7d0b02291462391c95351ee40",
            ),
        },
        TestCase {
            tc_id: 69,
            algorithm: "SHA-512",
            comment: "248-byte counter",
            message: Message::Counter { len: 248 },
            output_bits: 512,
            expected: concat!(
                "3828b2ed548cfd0b74bb34a1feae030e267222198d7e387e7fe3ed503905a25d",
                "4c3301a9a47e78372f685b05847062476c507708cdd75580adb579e4cdc79aa0",
            ),
        },
        TestCase {
            tc_id: 70,
            algorithm: "SHA-512",
            comment: "256-byte counter",
            message: Message::Counter { len: 256 },
            output_bits: 512,
            expected: concat!(
                "7ff1cd1e9773a4b7ba1f40e642db0d879bd5f6cc151a7d3401a0bc7778b8270c",
                "108b530fb195f2383f4cec8cf05778e6af4db56811673371674cec1524488f83",
            ),
        },
        TestCase {
            tc_id: 71,
            algorithm: "SHA-512/224",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 224,
            expected: "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4",
        },
        TestCase {
            tc_id: 72,
            algorithm: "SHA-512/224",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 224,
            expected: "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa",
        },
        TestCase {
            tc_id: 73,
            algorithm: "SHA-512/224",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 224,
            expected: "e5302d6d54bb242275d1e7622d68df6eb02dedd13f564c13dbda2174",
        },
        TestCase {
            tc_id: 74,
            algorithm: "SHA-512/224",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 224,
            expected: "23fec5bb94d60b23308192640b0c453335d664734fe40e7268674af9",
        },
        TestCase {
            tc_id: 75,
            algorithm: "SHA-512/224",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 224,
            expected: "944cd2847fb54558d4775db0485a50003111c8e5daa63fe722c6aa37",
        },
        TestCase {
            tc_id: 76,
            algorithm: "SHA-512/224",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 224,
            expected: "37ab331d76f0d36de422bd0edeb22a28accd487b7a8453ae965dd287",
        },
        TestCase {
            tc_id: 77,
            algorithm: "SHA-512/224",
            comment: "111-byte counter",
            message: Message::Counter { len: 111 },
            output_bits: 224,
            expected: "f8810ee322210d0f4cbd7a4e92e7d7e72b63d2777dcb531e13ddd690",
        },
        TestCase {
            tc_id: 78,
            algorithm: "SHA-512/224",
            comment: "112-byte counter",
            message: Message::Counter { len: 112 },
            output_bits: 224,
            expected: "8099918892ebbd31215c9bb5e4e53c0b52927b000ced0720d2c65a22",
        },
        TestCase {
            tc_id: 79,
            algorithm: "SHA-512/224",
            comment: "127-byte counter",
            message: Message::Counter { len: 127 },
            output_bits: 224,
            expected: "29d2c4166a36e07b2dcd3a7c988dcb14776dc187040f6a733162efb7",
        },
        TestCase {
            tc_id: 80,
            algorithm: "SHA-512/224",
            comment: "128-byte counter",
            message: Message::Counter { len: 128 },
            output_bits: 224,
            expected: "49a64b72a88a3c93432b6e4c59a1b4908403f70e46e13bf7494fbe88",
        },
        TestCase {
            tc_id: 81,
            algorithm: "SHA-512/224",
            comment: "129-byte counter",
            message: Message::Counter { len: 129 },
            output_bits: 224,
            expected: "aa05964c59a40bb5140f3f1b9ca03c3eee0a1044bbd3fe84e5936877",
        },
        TestCase {
            tc_id: 82,
            algorithm: "SHA-512/224",
            comment: "247-byte counter",
            message: Message::Counter { len: 247 },
            output_bits: 224,
            expected: "dc5172956e9a8c86e4cc6f2b13d8bc600bcafdc673842aea711589d1",
        },
        TestCase {
            tc_id: 83,
            algorithm: "SHA-512/224",
            comment: "248-byte counter",
            message: Message::Counter { len: 248 },
            output_bits: 224,
            expected: "2b762dad2b6591f4e60becfc43214ef34d5d435a3df85e091b30a47d",
        },
        TestCase {
            tc_id: 84,
            algorithm: "SHA-512/224",
            comment: "256-byte counter",
            message: Message::Counter { len: 256 },
            output_bits: 224,
            expected: "6fa84e430acfc84bdb28c830dea2feb2d23b536216fdf60ac4225edc",
        },
        TestCase {
            tc_id: 85,
            algorithm: "SHA-512/256",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 256,
            expected: "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a",
        },
        TestCase {
            tc_id: 86,
            algorithm: "SHA-512/256",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 256,
            expected: "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
        },
        TestCase {
            tc_id: 87,
            algorithm: "SHA-512/256",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 256,
            expected: "bde8e1f9f19bb9fd3406c90ec6bc47bd36d8ada9f11880dbc8a22a7078b6a461",
        },
        TestCase {
            tc_id: 88,
            algorithm: "SHA-512/256",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 256,
            expected: "3928e184fb8690f840da3988121d31be65cb9d3ef83ee6146feac861e19b563a",
        },
        TestCase {
            tc_id: 89,
            algorithm: "SHA-512/256",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 256,
            expected: "dd9d67b371519c339ed8dbd25af90e976a1eeefd4ad3d889005e532fc5bef04d",
        },
        TestCase {
            tc_id: 90,
            algorithm: "SHA-512/256",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 256,
            expected: "9a59a052930187a97038cae692f30708aa6491923ef5194394dc68d56c74fb21",
        },
        TestCase {
            tc_id: 91,
            algorithm: "SHA-512/256",
            comment: "111-byte counter",
            message: Message::Counter { len: 111 },
            output_bits: 256,
            expected: "bd209f60b0d04102a09175297fd255367e54b5a5605b928635c606306914363f",
        },
        TestCase {
            tc_id: 92,
            algorithm: "SHA-512/256",
            comment: "112-byte counter",
            message: Message::Counter { len: 112 },
            output_bits: 256,
            expected: "2cafeb0882cc405167e9a255b8581a66dc683212474902dd453dbca20a94e61a",
        },
        TestCase {
            tc_id: 93,
            algorithm: "SHA-512/256",
            comment: "127-byte counter",
            message: Message::Counter { len: 127 },
            output_bits: 256,
            expected: "c26bc7e9315e62ab0dc6aeb577724d07c09b0c6fdfc0a9f08d8548047c032248",
        },
        TestCase {
            tc_id: 94,
            algorithm: "SHA-512/256",
            comment: "128-byte counter",
            message: Message::Counter { len: 128 },
            output_bits: 256,
            expected: "2ff11194b2aec1f943cb5f130ba647c151334068083194d7281a55d607ae255f",
        },
        TestCase {
            tc_id: 95,
            algorithm: "SHA-512/256",
            comment: "129-byte counter",
            message: Message::Counter { len: 129 },
            output_bits: 256,
            expected: "c4a3bbf841ed2a289e5109fb392229c80db61c72fd92079b5a4f0441f095a111",
        },
        TestCase {
            tc_id: 96,
            algorithm: "SHA-512/256",
            comment: "247-byte counter",
            message: Message::Counter { len: 247 },
            output_bits: 256,
            expected: "d8d16c8ea78d7f3e047016273b4b145d82adefa1017b07d25b36ceacf5266b7c",
        },
        TestCase {
            tc_id: 97,
            algorithm: "SHA-512/256",
            comment: "248-byte counter",
            message: Message::Counter { len: 248 },
            output_bits: 256,
            expected: "5ae8021e842ab071a0918438cfa7d1522581994d421838b61f53331e5832137c",
        },
        TestCase {
            tc_id: 98,
            algorithm: "SHA-512/256",
            comment: "256-byte counter",
            message: Message::Counter { len: 256 },
            output_bits: 256,
            expected: "0ea4199eb79185d8198973ee464a7e0eb26345b54b361ac6af8b1dc10d41911c",
        },
        TestCase {
            tc_id: 99,
            algorithm: "SHA3-224",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 224,
            expected: "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
        },
        TestCase {
            tc_id: 100,
            algorithm: "SHA3-224",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 224,
            expected: "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
        },
        TestCase {
            tc_id: 101,
            algorithm: "SHA3-224",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 224,
            expected: "8a24108b154ada21c9fd5574494479ba5c7e7ab76ef264ead0fcce33",
        },
        TestCase {
            tc_id: 102,
            algorithm: "SHA3-224",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 224,
            expected: "543e6868e1666c1a643630df77367ae5a62a85070a51c14cbf665cbc",
        },
        TestCase {
            tc_id: 103,
            algorithm: "SHA3-224",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 224,
            expected: "d15dadceaa4d5d7bb3b48f446421d542e08ad8887305e28d58335795",
        },
        TestCase {
            tc_id: 104,
            algorithm: "SHA3-224",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 224,
            expected: "d69335b93325192e516a912e6d19a15cb51c6ed5c15243e7a7fd653c",
        },
        TestCase {
            tc_id: 105,
            algorithm: "SHA3-224",
            comment: "143-byte counter",
            message: Message::Counter { len: 143 },
            output_bits: 224,
            expected: "64d0e8a1be3cf30ef6727b30a6e428f7f068d44634c943d277ad8e7f",
        },
        TestCase {
            tc_id: 106,
            algorithm: "SHA3-224",
            comment: "144-byte counter",
            message: Message::Counter { len: 144 },
            output_bits: 224,
            expected: "5be75e6a08f19913a1d8036c056cc4556b98dc90aeca3f2a0664dedc",
        },
        TestCase {
            tc_id: 107,
            algorithm: "SHA3-224",
            comment: "145-byte counter",
            message: Message::Counter { len: 145 },
            output_bits: 224,
            expected: "90b861ac1b1598459ad8337afa9933ce2f1a6f972c57daf8fc2737e4",
        },
        TestCase {
            tc_id: 108,
            algorithm: "SHA3-224",
            comment: "288-byte counter",
            message: Message::Counter { len: 288 },
            output_bits: 224,
            expected: "c31edb82e0debcac85099028f8dda66900e716217b7f30e003d611bc",
        },
        TestCase {
            tc_id: 109,
            algorithm: "SHA3-256",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 256,
            expected: "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        },
        TestCase {
            tc_id: 110,
            algorithm: "SHA3-256",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 256,
            expected: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
        },
        TestCase {
            tc_id: 111,
            algorithm: "SHA3-256",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 256,
            expected: "41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
        },
        TestCase {
            tc_id: 112,
            algorithm: "SHA3-256",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 256,
            expected: "916f6061fe879741ca6469b43971dfdb28b1a32dc36cb3254e812be27aad1d18",
        },
        TestCase {
            tc_id: 113,
            algorithm: "SHA3-256",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 256,
            expected: "69070dda01975c8c120c3aada1b282394e7f032fa9cf32f4cb2259a0897dfc04",
        },
        TestCase {
            tc_id: 114,
            algorithm: "SHA3-256",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 256,
            expected: "5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1",
        },
        TestCase {
            tc_id: 115,
            algorithm: "SHA3-256",
            comment: "135-byte counter",
            message: Message::Counter { len: 135 },
            output_bits: 256,
            expected: "fded8fd9d6551c601eeb3b7c6bc5e5cfd8aad1d015b7e9aaa9c9b9475231d5e2",
        },
        TestCase {
            tc_id: 116,
            algorithm: "SHA3-256",
            comment: "136-byte counter",
            message: Message::Counter { len: 136 },
            output_bits: 256,
            expected: "cf3ccff92480a29160c2d38317c430e14749bfee1788106957dfe73f8c4930e5",
        },
        TestCase {
            tc_id: 117,
            algorithm: "SHA3-256",
            comment: "137-byte counter",
            message: Message::Counter { len: 137 },
            output_bits: 256,
            expected: "ce9d7dc90913ee5d92745019479a5352c6d6279bef18ed07dc0a83ee8084daca",
        },
        TestCase {
            tc_id: 118,
            algorithm: "SHA3-256",
            comment: "272-byte counter",
            message: Message::Counter { len: 272 },
            output_bits: 256,
            expected: "b7ccd55b6c2c3fa144c9e0624059294975a348b02f321abe289701d3012f7794",
        },
        TestCase {
            tc_id: 119,
            algorithm: "SHA3-384",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 384,
            expected: concat!(
                "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a",
                "c3713831264adb47fb6bd1e058d5f004",
            ),
        },
        TestCase {
            tc_id: 120,
            algorithm: "SHA3-384",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 384,
            expected: concat!(
                "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2",
                "98d88cea927ac7f539f1edf228376d25",
            ),
        },
        TestCase {
            tc_id: 121,
            algorithm: "SHA3-384",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 384,
            expected: concat!(
                "991c665755eb3a4b6bbdfb75c78a492e8c56a22c5c4d7e429bfdbc32b9d4ad5a",
                "a04a1f076e62fea19eef51acd0657c22",
            ),
        },
        TestCase {
            tc_id: 122,
            algorithm: "SHA3-384",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 384,
            expected: concat!(
                "79407d3b5916b59c3e30b09822974791c313fb9ecc849e406f23592d04f625dc",
                "8c709b98b43b3852b337216179aa7fc7",
            ),
        },
        TestCase {
            tc_id: 123,
            algorithm: "SHA3-384",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 384,
            expected: concat!(
                "7063465e08a93bce31cd89d2e3ca8f602498696e253592ed26f07bf7e703cf32",
                "8581e1471a7ba7ab119b1a9ebdf8be41",
            ),
        },
        TestCase {
            tc_id: 124,
            algorithm: "SHA3-384",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 384,
            expected: concat!(
                "eee9e24d78c1855337983451df97c8ad9eedf256c6334f8e948d252d5e0e7684",
                "7aa0774ddb90a842190d2c558b4b8340",
            ),
        },
        TestCase {
            tc_id: 125,
            algorithm: "SHA3-384",
            comment: "103-byte counter",
            message: Message::Counter { len: 103 },
            output_bits: 384,
            expected: concat!(
                "1f91ee551ad18f268876d1fc262f137fe196580216c5193819a95ec5222537d2",
                "a658dd129c3d8080e65ec7460f1f4704",
            ),
        },
        TestCase {
            tc_id: 126,
            algorithm: "SHA3-384",
            comment: "104-byte counter",
            message: Message::Counter { len: 104 },
            output_bits: 384,
            expected: concat!(
                "5b8d0d5cf8b41be507be8fcbfcbdbac3a28eb368d430fed6780aaa78a93a8da4",
                "a6c50485949ca344f228be91a96005a3",
            ),
        },
        TestCase {
            tc_id: 127,
            algorithm: "SHA3-384",
            comment: "105-byte counter",
            message: Message::Counter { len: 105 },
            output_bits: 384,
            expected: concat!(
                "4a2f0a8f2f1f4cc4605cc2537e0be28cf8b465c30f0a54b494a7128ec54ee4e8",
                "5706b5e47a5697344d15cbf85680cd40",
            ),
        },
        TestCase {
            tc_id: 128,
            algorithm: "SHA3-384",
            comment: "208-byte counter",
            message: Message::Counter { len: 208 },
            output_bits: 384,
            expected: concat!(
                "13a929eb9e4ac18a07de84b17e79bb420a86924b9dc4cd80038dd61f17770fc4",
                "2460f2a0a717dd26fb6b6b4de357ae02",
            ),
        },
        TestCase {
            tc_id: 129,
            algorithm: "SHA3-512",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 512,
            expected: concat!(
                "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6",
                "15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
            ),
        },
        TestCase {
            tc_id: 130,
            algorithm: "SHA3-512",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 512,
            expected: concat!(
                "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e",
                "10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
            ),
        },
        TestCase {
            tc_id: 131,
            algorithm: "SHA3-512",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 512,
            expected: concat!(
                "04a371e84ecfb5b8b77cb48610fca8182dd457ce6f326a0fd3d7ec2f1e91636d",
                "ee691fbe0c985302ba1b0d8dc78c086346b533b49c030d99a27daf1139d6e75e",
            ),
        },
        TestCase {
            tc_id: 132,
            algorithm: "SHA3-512",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 512,
            expected: concat!(
                "afebb2ef542e6579c50cad06d2e578f9f8dd6881d7dc824d26360feebf18a4fa",
                "73e3261122948efcfd492e74e82e2189ed0fb440d187f382270cb455f21dd185",
            ),
        },
        TestCase {
            tc_id: 133,
            algorithm: "SHA3-512",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 512,
            expected: concat!(
                "01dedd5de4ef14642445ba5f5b97c15e47b9ad931326e4b0727cd94cefc44fff",
                "23f07bf543139939b49128caf436dc1bdee54fcb24023a08d9403f9b4bf0d450",
            ),
        },
        TestCase {
            tc_id: 134,
            algorithm: "SHA3-512",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 512,
            expected: concat!(
                "3c3a876da14034ab60627c077bb98f7e120a2a5370212dffb3385a18d4f38859",
                "ed311d0a9d5141ce9cc5c66ee689b266a8aa18ace8282a0e0db596c90b0a7b87",
            ),
        },
        TestCase {
            tc_id: 135,
            algorithm: "SHA3-512",
            comment: "71-byte counter",
            message: Message::Counter { len: 71 },
            output_bits: 512,
            expected: concat!(
                "3ccc850d53a1287af7b4560b2ef0d43eb5d9a80d62a0e9cf1dbc040135921104",
                "d4395168e90bfc871773ebb34bca1bd67056e1cc7dc7a48ff7c3167d389f117c",
            ),
        },
        TestCase {
            tc_id: 136,
            algorithm: "SHA3-512",
            comment: "72-byte counter",
            message: Message::Counter { len: 72 },
            output_bits: 512,
            expected: concat!(
                "5d63f2bbe971a983ac6847480106e4e1264ee3a0befd79954914e1d86e795b2e",
                "18238f12fc5e46cb9cc78efdec610a93647cc04e1c23d8caaa6a58c21dd26c07",
            ),
        },
        TestCase {
            tc_id: 137,
            algorithm: "SHA3-512",
            comment: "73-byte counter",
            message: Message::Counter { len: 73 },
            output_bits: 512,
            expected: concat!(
                "921d9b7b2b0f3066a1646dbb058c979cb3925dec0f8c269faaa7f9648e73465a",
                "e55ec527257d5d5e1cfdbf5d6799bea1004b6186f5108c74e3b92fe924166558",
            ),
        },
        TestCase {
            tc_id: 138,
            algorithm: "SHA3-512",
            comment: "144-byte counter",
            message: Message::Counter { len: 144 },
            output_bits: 512,
            expected: concat!(
                "e1951b8bcb58ca75a34af80a7a2b765cad4257fe383a79b55bf21f180b75f6e5",
                "b08f09598851eeea7d13486387618d6c6bf88cf23c0088a3f783f59a06d60493",
            ),
        },
        TestCase {
            tc_id: 139,
            algorithm: "SHAKE128",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 256,
            expected: "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
        },
        TestCase {
            tc_id: 140,
            algorithm: "SHAKE128",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 256,
            expected: "5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8",
        },
        TestCase {
            tc_id: 141,
            algorithm: "SHAKE128",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 256,
            expected: "1a96182b50fb8c7e74e0a707788f55e98209b8d91fade8f32f8dd5cff7bf21f5",
        },
        TestCase {
            tc_id: 142,
            algorithm: "SHAKE128",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 256,
            expected: "7b6df6ff181173b6d7898d7ff63fb07b7c237daf471a5ae5602adbccef9ccf4b",
        },
        TestCase {
            tc_id: 143,
            algorithm: "SHAKE128",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 256,
            expected: "f4202e3c5852f9182a0430fd8144f0a74b95e7417ecae17db0f8cfeed0e3e66e",
        },
        TestCase {
            tc_id: 144,
            algorithm: "SHAKE128",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 256,
            expected: "9d222c79c4ff9d092cf6ca86143aa411e369973808ef97093255826c5572ef58",
        },
        TestCase {
            tc_id: 145,
            algorithm: "SHAKE128",
            comment: "167-byte counter",
            message: Message::Counter { len: 167 },
            output_bits: 256,
            expected: "1e552791cc4e93a0d4a8dc47ae49228c2faa869e40e628f6ace477aec3f1ca7a",
        },
        TestCase {
            tc_id: 146,
            algorithm: "SHAKE128",
            comment: "168-byte counter",
            message: Message::Counter { len: 168 },
            output_bits: 256,
            expected: "f15277eb61c4908d44a2853f3cde071ae2ed7a23461fbe162a1a98cf6875059c",
        },
        TestCase {
            tc_id: 147,
            algorithm: "SHAKE128",
            comment: "169-byte counter",
            message: Message::Counter { len: 169 },
            output_bits: 256,
            expected: "015be3338c986d9846affa0f94b4afc2a76bc289c709e1a596ec9eccf090a773",
        },
        TestCase {
            tc_id: 148,
            algorithm: "SHAKE128",
            comment: "336-byte counter",
            message: Message::Counter { len: 336 },
            output_bits: 256,
            expected: "278918d9abddd4a3c154affd8fe4f85e8e890eb2bbf659f393ca09ec8f9254bb",
        },
        TestCase {
            tc_id: 149,
            algorithm: "SHAKE128",
            comment: "0-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 0,
            expected: "",
        },
        TestCase {
            tc_id: 150,
            algorithm: "SHAKE128",
            comment: "1-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 1,
            expected: "00",
        },
        TestCase {
            tc_id: 151,
            algorithm: "SHAKE128",
            comment: "7-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 7,
            expected: "58",
        },
        TestCase {
            tc_id: 152,
            algorithm: "SHAKE128",
            comment: "12-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 12,
            expected: "5801",
        },
        TestCase {
            tc_id: 153,
            algorithm: "SHAKE128",
            comment: "1344-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 1344,
            expected: concat!(
                "5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8",
                "44c50af32acd3f2cdd066568706f509bc1bdde58295dae3f891a9a0fca578378",
                "9a41f8611214ce612394df286a62d1a2252aa94db9c538956c717dc2bed4f232",
                "a0294c857c730aa16067ac1062f1201fb0d377cfb9cde4c63599b27f3462bba4",
                "a0ed296c801f9ff7f57302bb3076ee145f97a32ae68e76ab66c48d51675bd49a",
                "cc29082f5647584e",
            ),
        },
        TestCase {
            tc_id: 154,
            algorithm: "SHAKE128",
            comment: "1352-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 1352,
            expected: concat!(
                "5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8",
                "44c50af32acd3f2cdd066568706f509bc1bdde58295dae3f891a9a0fca578378",
                "9a41f8611214ce612394df286a62d1a2252aa94db9c538956c717dc2bed4f232",
                "a0294c857c730aa16067ac1062f1201fb0d377cfb9cde4c63599b27f3462bba4",
                "a0ed296c801f9ff7f57302bb3076ee145f97a32ae68e76ab66c48d51675bd49a",
                "cc29082f5647584e6a",
            ),
        },
        TestCase {
            tc_id: 155,
            algorithm: "SHAKE128",
            comment: "4096-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 4096,
            expected: concat!(
                "5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8",
                "44c50af32acd3f2cdd066568706f509bc1bdde58295dae3f891a9a0fca578378",
                "9a41f8611214ce612394df286a62d1a2252aa94db9c538956c717dc2bed4f232",
                "a0294c857c730aa16067ac1062f1201fb0d377cfb9cde4c63599b27f3462bba4",
                "a0ed296c801f9ff7f57302bb3076ee145f97a32ae68e76ab66c48d51675bd49a",
                "cc29082f5647584e6aa01b3f5af057805f973ff8ecb8b226ac32ada6f01c1fcd",
                "4818cb006aa5b4cdb3611eb1e533c8964cacfdf31012cd3fb744d02225b988b4",
                "75375faad996eb1b9176ecb0f8b2871723d6dbb804e23357e50732f5cfc904b1",
                "319795000d7361d9e5e1b77b4b8f5774aa1482cfa58f83096bdb2e06a3eed543",
                "a38919b57ecbec737f4086be007f8ef80094ceea8807193d46e9be540b6e99b4",
                "c1c71507095028a024e8d39aa8f4c5854cedd50d30a223e7d54e9a24f0a2526b",
                "31002afbd1b4ebea69c8400c3deb4c1c35d6dbb75651b284076f5fde47b4a058",
                "6ee173e30bd4d08f2bc59c6114bdd745d20876bee2bf800bd7d8b5e51536c844",
                "c73256f7d1ada1870c7bbaf83af10a6fdd7c02967811815459cfd02d67b936e9",
                "75c6007c63ea7ae087f0a6b0a1319668bb61788eaa3d3b78e3f2061adcdead40",
                "7085901803ec6f17f0ec650a292198275211a56bf13f0bf7241268b50d3f1ec8",
            ),
        },
        TestCase {
            tc_id: 156,
            algorithm: "SHAKE256",
            comment: "empty message",
            message: Message::Bytes(b""),
            output_bits: 512,
            expected: concat!(
                "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
                "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
            ),
        },
        TestCase {
            tc_id: 157,
            algorithm: "SHAKE256",
            comment: "\"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 512,
            expected: concat!(
                "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739",
                "d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4",
            ),
        },
        TestCase {
            tc_id: 158,
            algorithm: "SHAKE256",
            comment: "448-bit message",
            message: Message::Bytes(MSG_448),
            output_bits: 512,
            expected: concat!(
                "4d8c2dd2435a0128eefbb8c36f6f87133a7911e18d979ee1ae6be5d4fd2e3329",
                "40d8688a4e6a59aa8060f1f9bc996c05aca3c696a8b66279dc672c740bb224ec",
            ),
        },
        TestCase {
            tc_id: 159,
            algorithm: "SHAKE256",
            comment: "896-bit message",
            message: Message::Bytes(MSG_896),
            output_bits: 512,
            expected: concat!(
                "98be04516c04cc73593fef3ed0352ea9f6443942d6950e29a372a681c3deaf45",
                "35423709b02843948684e029010badcc0acd8303fc85fdad3eabf4f78cae1656",
            ),
        },
        TestCase {
            tc_id: 160,
            algorithm: "SHAKE256",
            comment: "pangram",
            message: Message::Bytes(PANGRAM),
            output_bits: 512,
            expected: concat!(
                "2f671343d9b2e1604dc9dcf0753e5fe15c7c64a0d283cbbf722d411a0e36f6ca",
                "1d01d1369a23539cd80f7c054b6e5daf9c962cad5b8ed5bd11998b40d5734442",
            ),
        },
        TestCase {
            tc_id: 161,
            algorithm: "SHAKE256",
            comment: "one million \"a\"",
            message: Message::Repeat { byte: b'a', count: 1_000_000 },
            output_bits: 512,
            expected: concat!(
                "3578a7a4ca9137569cdf76ed617d31bb994fca9c1bbf8b184013de8234dfd13a",
                "3fd124d4df76c0a539ee7dd2f6e1ec346124c815d9410e145eb561bcd97b18ab",
            ),
        },
        TestCase {
            tc_id: 162,
            algorithm: "SHAKE256",
            comment: "135-byte counter",
            message: Message::Counter { len: 135 },
            output_bits: 512,
            expected: concat!(
                "c45dae624ad8a2f5aa7bac9d7557737fd91c96eedb70a6be5574d57a844eade0",
                "7f4056bf081a1098101cea8132188c422136feb4687d1e2209f3fd28bedfb8f4",
            ),
        },
        TestCase {
            tc_id: 163,
            algorithm: "SHAKE256",
            comment: "136-byte counter",
            message: Message::Counter { len: 136 },
            output_bits: 512,
            expected: concat!(
                "b7ff4073b3f5a8eabd6e17705ca7f6761a31058f9df781a6a47e3a3063b9d67a",
                "757e8dbf043dac48d2154e46d59c0b9e8bc36ba035153691fbe83b9eff5dae4a",
            ),
        },
        TestCase {
            tc_id: 164,
            algorithm: "SHAKE256",
            comment: "137-byte counter",
            message: Message::Counter { len: 137 },
            output_bits: 512,
            expected: concat!(
                "01d90952c642a5eb2a8fc9d713f843a45d7ac05132dddcb2efc9bebc27e37bcb",
                "e42130c36f3540250ab11796980e773683f28d07f0f838606fb9c45e452bd38f",
            ),
        },
        TestCase {
            tc_id: 165,
            algorithm: "SHAKE256",
            comment: "272-byte counter",
            message: Message::Counter { len: 272 },
            output_bits: 512,
            expected: concat!(
                "e3299fa992163e7ffc875aff708dac93d2157e9b4ccaa2a13ba1ca4ef0b40f29",
                "a8922462cee9739430c22a70d36a91fdf654d7457d79b942d7e1ad573b139bd7",
            ),
        },
        TestCase {
            tc_id: 166,
            algorithm: "SHAKE256",
            comment: "0-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 0,
            expected: "",
        },
        TestCase {
            tc_id: 167,
            algorithm: "SHAKE256",
            comment: "1-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 1,
            expected: "00",
        },
        TestCase {
            tc_id: 168,
            algorithm: "SHAKE256",
            comment: "7-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 7,
            expected: "48",
        },
        TestCase {
            tc_id: 169,
            algorithm: "SHAKE256",
            comment: "12-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 12,
            expected: "4803",
        },
        TestCase {
            tc_id: 170,
            algorithm: "SHAKE256",
            comment: "1088-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 1088,
            expected: concat!(
                "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739",
                "d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4",
                "1385141204f329979fd3047a13c5657724ada64d2470157b3cdc288620944d78",
                "dbcddbd912993f0913f164fb2ce95131a2d09a3e6d51cbfc622720d7a75c6334",
                "e8a2d7ec71a7cc29",
            ),
        },
        TestCase {
            tc_id: 171,
            algorithm: "SHAKE256",
            comment: "1096-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 1096,
            expected: concat!(
                "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739",
                "d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4",
                "1385141204f329979fd3047a13c5657724ada64d2470157b3cdc288620944d78",
                "dbcddbd912993f0913f164fb2ce95131a2d09a3e6d51cbfc622720d7a75c6334",
                "e8a2d7ec71a7cc29cf",
            ),
        },
        TestCase {
            tc_id: 172,
            algorithm: "SHAKE256",
            comment: "4096-bit output of \"abc\"",
            message: Message::Bytes(b"abc"),
            output_bits: 4096,
            expected: concat!(
                "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739",
                "d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4",
                "1385141204f329979fd3047a13c5657724ada64d2470157b3cdc288620944d78",
                "dbcddbd912993f0913f164fb2ce95131a2d09a3e6d51cbfc622720d7a75c6334",
                "e8a2d7ec71a7cc29cf0ea610eeff1a588290a53000faa79932becec0bd3cd0b3",
                "3a7e5d397fed1ada9442b99903f4dcfd8559ed3950faf40fe6f3b5d710ed3b67",
                "7513771af6bfe11934817e8762d9896ba579d88d84ba7aa3cdc7055f6796f195",
                "bd9ae788f2f5bb96100d6bbaff7fbc6eea24d4449a2477d172a5507dcc931412",
                "fc346b1bb39b878330e026b12ddf384af3334560ea1d363966caa7d8ddcbec7d",
                "a52b42215c11d5f8ee57f341e399343ce63a752fc5edec99124a0eb314403e5f",
                "358b8b83d05be2d2970099284b00dcc33d7c753d1f752ab743325bc53d91aa67",
                "1e50f9c3f93abf6e9662f90145c61954f2abbd26edad1553ea3a626f359e8f79",
                "ade16384e151755c47e822fc74c5d7100fd31f667564c6debc7d20d99e109f22",
                "abcbb8c86c0c1146333903422252a5d34a896770b6cb99a1f33935bf87a8e47b",
                "0549dc2539de9e6a9d1e596111b660cb6b3e0040b4d4916f886dd0b6f1a70284",
                "9440b99d6088e20203aebafa8e9dffa94ed35ef1f41f5fdf549fbcc5a0f68298",
            ),
        },
    ]
}
