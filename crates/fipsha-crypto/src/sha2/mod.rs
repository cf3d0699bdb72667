//! SHA-2 family of hash algorithms.
//!
//! Provides SHA-224, SHA-256, SHA-384, and SHA-512 as defined in FIPS 180-4.
//! Each algorithm is a zero-sized descriptor carrying its word width, initial
//! hash value and output truncation; the block transform, padding and message
//! sources are shared across the family and parameterized by word width.
//!
//! ```
//! use fipsha_crypto::sha2::Sha256;
//!
//! let digest = Sha256::digest(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

mod block;
mod compress;
pub(crate) mod padding;
mod word;

use std::fs;
use std::path::Path;

use fipsha_types::{DigestError, HashAlgId};

pub use block::MessageBlock;
pub use compress::Engine;
pub use padding::PaddingStatus;
pub use word::Word;

use crate::digest::MessageDigest;
use crate::provider::MessageSource;
use crate::source::{BufferSource, FileSource};

/// Static description of one SHA-2 variant.
pub trait Sha2Algorithm {
    /// Word width of the underlying engine.
    type Word: Word;
    /// Public digest type, possibly truncated from the eight state words.
    type Digest;

    const ID: HashAlgId;
    /// Initial hash value.
    const IV: [Self::Word; 8];

    /// Produce the public digest from the final state.
    fn finalize(state: &[Self::Word; 8]) -> Self::Digest;
}

/// Drive `source` to exhaustion through the compression engine of `A`.
///
/// The source is consumed: it is dropped (closing any file it holds) when
/// this returns, on success and on error alike.
pub fn compute<A, S>(mut source: S) -> Result<A::Digest, DigestError>
where
    A: Sha2Algorithm,
    S: MessageSource<A::Word>,
{
    let mut engine = Engine::new(A::IV);
    while let Some(block) = source.next_block()? {
        tracing::trace!(alg = %A::ID, index = engine.blocks(), "compress block");
        engine.compress(&block);
    }
    tracing::debug!(alg = %A::ID, blocks = engine.blocks(), "digest computed");
    Ok(A::finalize(engine.state()))
}

/// Hash an in-memory buffer with `A`.
pub fn compute_from_buffer<A: Sha2Algorithm>(data: &[u8]) -> Result<A::Digest, DigestError> {
    compute::<A, _>(BufferSource::<A::Word>::new(data)?)
}

/// Hash the first `bit_len` bits of `data` with `A`, rounding up to whole
/// bytes.
pub fn compute_from_bits<A: Sha2Algorithm>(
    data: &[u8],
    bit_len: u64,
) -> Result<A::Digest, DigestError> {
    compute::<A, _>(BufferSource::<A::Word>::from_bits(data, bit_len)?)
}

/// Hash a file with `A`, streaming it block by block.
pub fn compute_from_file<A: Sha2Algorithm>(
    path: impl AsRef<Path>,
) -> Result<A::Digest, DigestError> {
    compute::<A, _>(FileSource::<A::Word>::open(path)?)
}

/// Hash a file with `A` after reading it fully into memory.
///
/// Produces the same digest as [`compute_from_file`]; useful when the
/// caller wants a single read of a small file.
pub fn compute_from_file_in_memory<A: Sha2Algorithm>(
    path: impl AsRef<Path>,
) -> Result<A::Digest, DigestError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| DigestError::FileOpen {
        path: path.display().to_string(),
        source,
    })?;
    compute_from_buffer::<A>(&data)
}

macro_rules! sha2_algorithm {
    (
        $(#[$meta:meta])*
        $name:ident, $id:ident, $word:ty, $words:literal, $digest:ident, $size:ident, $iv:expr
    ) => {
        /// Digest value of this algorithm.
        pub type $digest = MessageDigest<$word, $words>;

        /// Output size in bytes.
        pub const $size: usize = $words * <$word as Word>::BYTES;

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Sha2Algorithm for $name {
            type Word = $word;
            type Digest = $digest;

            const ID: HashAlgId = HashAlgId::$id;
            const IV: [$word; 8] = $iv;

            fn finalize(state: &[$word; 8]) -> $digest {
                MessageDigest::from_state(state)
            }
        }

        impl $name {
            /// One-shot: digest of `data`.
            pub fn digest(data: &[u8]) -> Result<$digest, DigestError> {
                compute_from_buffer::<Self>(data)
            }

            /// One-shot: digest of the first `bit_len` bits of `data`.
            pub fn digest_bits(data: &[u8], bit_len: u64) -> Result<$digest, DigestError> {
                compute_from_bits::<Self>(data, bit_len)
            }

            /// One-shot: digest of the file at `path`, streamed.
            pub fn digest_file(path: impl AsRef<Path>) -> Result<$digest, DigestError> {
                compute_from_file::<Self>(path)
            }

            /// One-shot: digest of the file at `path`, read fully first.
            pub fn digest_file_in_memory(path: impl AsRef<Path>) -> Result<$digest, DigestError> {
                compute_from_file_in_memory::<Self>(path)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// 32-bit family
// ---------------------------------------------------------------------------

#[cfg(feature = "sha256")]
sha2_algorithm!(
    /// SHA-224: the SHA-256 engine with its own IV, truncated to seven words.
    Sha224, Sha224, u32, 7, Sha224Digest, SHA224_OUTPUT_SIZE,
    [
        0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939,
        0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
    ]
);

#[cfg(feature = "sha256")]
sha2_algorithm!(
    /// SHA-256.
    Sha256, Sha256, u32, 8, Sha256Digest, SHA256_OUTPUT_SIZE,
    [
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
        0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
    ]
);

// ---------------------------------------------------------------------------
// 64-bit family
// ---------------------------------------------------------------------------

#[cfg(feature = "sha512")]
sha2_algorithm!(
    /// SHA-384: the SHA-512 engine with its own IV, truncated to six words.
    Sha384, Sha384, u64, 6, Sha384Digest, SHA384_OUTPUT_SIZE,
    [
        0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
        0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
    ]
);

#[cfg(feature = "sha512")]
sha2_algorithm!(
    /// SHA-512.
    Sha512, Sha512, u64, 8, Sha512Digest, SHA512_OUTPUT_SIZE,
    [
        0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
        0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
    ]
);

#[cfg(all(test, feature = "sha256", feature = "sha512"))]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            Sha256::digest(b"").unwrap().to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            Sha256::digest(b"abc").unwrap().to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_two_blocks() {
        // 56 bytes: the padding spills into a second block.
        let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        assert_eq!(msg.len(), 56);
        assert_eq!(
            Sha256::digest(msg).unwrap().to_hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_sha224_abc() {
        assert_eq!(
            Sha224::digest(b"abc").unwrap().to_hex(),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn test_sha384_abc() {
        assert_eq!(
            Sha384::digest(b"abc").unwrap().to_hex(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn test_sha512_abc() {
        assert_eq!(
            Sha512::digest(b"abc").unwrap().to_hex(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_sha512_empty() {
        assert_eq!(
            Sha512::digest(b"").unwrap().to_hex(),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn test_sha384_is_truncated_engine() {
        // SHA-384 shares the engine; only IV and truncation differ.
        let mut engine = Engine::new(Sha384::IV);
        let mut src = BufferSource::<u64>::new(b"abc").unwrap();
        while let Some(block) = src.next_block().unwrap() {
            engine.compress(&block);
        }
        let digest = Sha384::digest(b"abc").unwrap();
        assert_eq!(digest.words(), &engine.state()[..6]);
    }

    #[test]
    fn test_output_sizes() {
        assert_eq!(SHA224_OUTPUT_SIZE, 28);
        assert_eq!(SHA256_OUTPUT_SIZE, 32);
        assert_eq!(SHA384_OUTPUT_SIZE, 48);
        assert_eq!(SHA512_OUTPUT_SIZE, 64);
        assert_eq!(Sha384::ID.output_size(), SHA384_OUTPUT_SIZE);
    }

    #[test]
    fn test_compute_with_boxed_source() {
        let boxed: Box<dyn MessageSource<u32>> =
            Box::new(FileSource::<u32, _>::from_reader(Cursor::new(b"abc".to_vec())).unwrap());
        let digest = compute::<Sha256, _>(boxed).unwrap();
        assert_eq!(digest, Sha256::digest(b"abc").unwrap());
    }

    #[test]
    fn test_digest_bits_rounds_up() {
        let a = Sha256::digest_bits(b"abcd", 17).unwrap();
        let b = Sha256::digest(b"abc").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_file_matches_buffer() {
        let tmp = std::env::temp_dir().join("fipsha_sha2_digest_file.bin");
        let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&tmp, &data).unwrap();
        assert_eq!(Sha512::digest_file(&tmp).unwrap(), Sha512::digest(&data).unwrap());
        assert_eq!(
            Sha256::digest_file_in_memory(&tmp).unwrap(),
            Sha256::digest_file(&tmp).unwrap()
        );
        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn test_digest_missing_file() {
        let err = Sha256::digest_file("/nonexistent_fipsha_test/file.bin").unwrap_err();
        assert!(matches!(err, DigestError::FileOpen { .. }));
        let err = Sha384::digest_file_in_memory("/nonexistent_fipsha_test/file.bin").unwrap_err();
        assert!(matches!(err, DigestError::FileOpen { .. }));
    }
}
