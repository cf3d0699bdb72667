//! Unified hash module.
//!
//! Re-exports the SHA-2 descriptors and provides runtime dispatch on a
//! [`HashAlgId`] for callers that pick the algorithm from configuration or
//! the command line.

use std::fmt;
use std::path::Path;

use fipsha_types::{DigestError, HashAlgId};

pub use crate::provider::MessageSource;

#[cfg(feature = "sha256")]
pub use crate::sha2::{Sha224, Sha224Digest, Sha256, Sha256Digest};

#[cfg(feature = "sha512")]
pub use crate::sha2::{Sha384, Sha384Digest, Sha512, Sha512Digest};

/// A digest of any supported algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyDigest {
    #[cfg(feature = "sha256")]
    Sha224(Sha224Digest),
    #[cfg(feature = "sha256")]
    Sha256(Sha256Digest),
    #[cfg(feature = "sha512")]
    Sha384(Sha384Digest),
    #[cfg(feature = "sha512")]
    Sha512(Sha512Digest),
}

impl AnyDigest {
    pub fn algorithm(&self) -> HashAlgId {
        match self {
            #[cfg(feature = "sha256")]
            AnyDigest::Sha224(_) => HashAlgId::Sha224,
            #[cfg(feature = "sha256")]
            AnyDigest::Sha256(_) => HashAlgId::Sha256,
            #[cfg(feature = "sha512")]
            AnyDigest::Sha384(_) => HashAlgId::Sha384,
            #[cfg(feature = "sha512")]
            AnyDigest::Sha512(_) => HashAlgId::Sha512,
        }
    }

    pub fn to_hex(&self) -> String {
        match self {
            #[cfg(feature = "sha256")]
            AnyDigest::Sha224(d) => d.to_hex(),
            #[cfg(feature = "sha256")]
            AnyDigest::Sha256(d) => d.to_hex(),
            #[cfg(feature = "sha512")]
            AnyDigest::Sha384(d) => d.to_hex(),
            #[cfg(feature = "sha512")]
            AnyDigest::Sha512(d) => d.to_hex(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            #[cfg(feature = "sha256")]
            AnyDigest::Sha224(d) => d.to_bytes(),
            #[cfg(feature = "sha256")]
            AnyDigest::Sha256(d) => d.to_bytes(),
            #[cfg(feature = "sha512")]
            AnyDigest::Sha384(d) => d.to_bytes(),
            #[cfg(feature = "sha512")]
            AnyDigest::Sha512(d) => d.to_bytes(),
        }
    }

    /// Parse a hex digest of algorithm `alg`.
    pub fn parse_hex(alg: HashAlgId, s: &str) -> Result<Self, DigestError> {
        match alg {
            #[cfg(feature = "sha256")]
            HashAlgId::Sha224 => Ok(AnyDigest::Sha224(s.parse()?)),
            #[cfg(feature = "sha256")]
            HashAlgId::Sha256 => Ok(AnyDigest::Sha256(s.parse()?)),
            #[cfg(feature = "sha512")]
            HashAlgId::Sha384 => Ok(AnyDigest::Sha384(s.parse()?)),
            #[cfg(feature = "sha512")]
            HashAlgId::Sha512 => Ok(AnyDigest::Sha512(s.parse()?)),
            #[allow(unreachable_patterns)]
            other => Err(unsupported(other)),
        }
    }
}

impl fmt::Display for AnyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn unsupported(alg: HashAlgId) -> DigestError {
    DigestError::UnsupportedAlgorithm(alg.to_string())
}

/// Digest an in-memory buffer with `alg`.
pub fn hash_bytes(alg: HashAlgId, data: &[u8]) -> Result<AnyDigest, DigestError> {
    match alg {
        #[cfg(feature = "sha256")]
        HashAlgId::Sha224 => Ok(AnyDigest::Sha224(Sha224::digest(data)?)),
        #[cfg(feature = "sha256")]
        HashAlgId::Sha256 => Ok(AnyDigest::Sha256(Sha256::digest(data)?)),
        #[cfg(feature = "sha512")]
        HashAlgId::Sha384 => Ok(AnyDigest::Sha384(Sha384::digest(data)?)),
        #[cfg(feature = "sha512")]
        HashAlgId::Sha512 => Ok(AnyDigest::Sha512(Sha512::digest(data)?)),
        #[allow(unreachable_patterns)]
        other => Err(unsupported(other)),
    }
}

/// Digest the file at `path` with `alg`, streaming it.
pub fn hash_file(alg: HashAlgId, path: impl AsRef<Path>) -> Result<AnyDigest, DigestError> {
    match alg {
        #[cfg(feature = "sha256")]
        HashAlgId::Sha224 => Ok(AnyDigest::Sha224(Sha224::digest_file(path)?)),
        #[cfg(feature = "sha256")]
        HashAlgId::Sha256 => Ok(AnyDigest::Sha256(Sha256::digest_file(path)?)),
        #[cfg(feature = "sha512")]
        HashAlgId::Sha384 => Ok(AnyDigest::Sha384(Sha384::digest_file(path)?)),
        #[cfg(feature = "sha512")]
        HashAlgId::Sha512 => Ok(AnyDigest::Sha512(Sha512::digest_file(path)?)),
        #[allow(unreachable_patterns)]
        other => {
            let _ = path;
            Err(unsupported(other))
        }
    }
}

/// Digest the file at `path` with `alg`, reading it into memory first.
pub fn hash_file_in_memory(
    alg: HashAlgId,
    path: impl AsRef<Path>,
) -> Result<AnyDigest, DigestError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| DigestError::FileOpen {
        path: path.display().to_string(),
        source,
    })?;
    hash_bytes(alg, &data)
}
