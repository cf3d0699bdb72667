//! Known Answer Tests (KAT) for self-testing.
//!
//! Each KAT hashes a known input and compares against the expected value
//! from FIPS 180-4 examples or NIST CAVP. Every input is run through both
//! the buffer source and the streaming source.

use std::io::Cursor;

use fipsha_types::DigestError;

use crate::sha2::{compute, Sha224, Sha256, Sha2Algorithm, Sha384, Sha512};
use crate::source::{BufferSource, FileSource};

/// One known-answer case.
struct Kat {
    name: &'static str,
    msg: &'static [u8],
    expected: &'static str,
}

const TWO_BLOCK_256: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_512: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

const SHA224_KATS: &[Kat] = &[Kat {
    name: "SHA-224 abc",
    msg: b"abc",
    expected: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
}];

const SHA256_KATS: &[Kat] = &[
    Kat {
        name: "SHA-256 abc",
        msg: b"abc",
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    Kat {
        name: "SHA-256 two-block",
        msg: TWO_BLOCK_256,
        expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    Kat {
        // NIST CAVP SHAVS short message, 64 bits.
        name: "SHA-256 CAVP 64-bit",
        msg: &[0x57, 0x38, 0xc9, 0x29, 0xc4, 0xf4, 0xcc, 0xb6],
        expected: "963bb88f27f512777aab6c8b1a02c70ec0ad651d428f870036e1917120fb48bf",
    },
];

const SHA384_KATS: &[Kat] = &[
    Kat {
        name: "SHA-384 abc",
        msg: b"abc",
        expected: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
                   8086072ba1e7cc2358baeca134c825a7",
    },
    Kat {
        name: "SHA-384 two-block",
        msg: TWO_BLOCK_512,
        expected: "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
                   fcc7c71a557e2db966c3e9fa91746039",
    },
];

const SHA512_KATS: &[Kat] = &[
    Kat {
        name: "SHA-512 abc",
        msg: b"abc",
        expected: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                   2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    Kat {
        name: "SHA-512 two-block",
        msg: TWO_BLOCK_512,
        expected: "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
                   501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    },
];

/// Run all KAT self-tests. Returns on first failure.
pub(crate) fn run_all_kat() -> Result<(), DigestError> {
    run_kats::<Sha224>(SHA224_KATS)?;
    run_kats::<Sha256>(SHA256_KATS)?;
    run_kats::<Sha384>(SHA384_KATS)?;
    run_kats::<Sha512>(SHA512_KATS)?;
    Ok(())
}

fn run_kats<A>(kats: &[Kat]) -> Result<(), DigestError>
where
    A: Sha2Algorithm,
    A::Digest: ToString + PartialEq,
{
    for kat in kats {
        let buffered = compute::<A, _>(BufferSource::<A::Word>::new(kat.msg)?)
            .map_err(|e| DigestError::KatFailure(format!("{} (buffer): {e}", kat.name)))?;
        let streamed = compute::<A, _>(FileSource::<A::Word, _>::from_reader(Cursor::new(kat.msg))?)
            .map_err(|e| DigestError::KatFailure(format!("{} (stream): {e}", kat.name)))?;

        if buffered.to_string() != kat.expected {
            return Err(DigestError::KatFailure(format!("{} digest mismatch", kat.name)));
        }
        if streamed != buffered {
            return Err(DigestError::KatFailure(format!(
                "{} stream/buffer mismatch",
                kat.name
            )));
        }
    }
    Ok(())
}
