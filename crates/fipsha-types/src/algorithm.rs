use std::fmt;
use std::str::FromStr;

use crate::DigestError;

/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgId {
    /// Every supported identifier, in listing order.
    pub const ALL: [HashAlgId; 4] = [
        HashAlgId::Sha224,
        HashAlgId::Sha256,
        HashAlgId::Sha384,
        HashAlgId::Sha512,
    ];

    /// Canonical display name, e.g. `SHA256`.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgId::Sha224 => "SHA224",
            HashAlgId::Sha256 => "SHA256",
            HashAlgId::Sha384 => "SHA384",
            HashAlgId::Sha512 => "SHA512",
        }
    }

    /// Digest size in bytes.
    pub fn output_size(self) -> usize {
        match self {
            HashAlgId::Sha224 => 28,
            HashAlgId::Sha256 => 32,
            HashAlgId::Sha384 => 48,
            HashAlgId::Sha512 => 64,
        }
    }

    /// Block size in bytes.
    pub fn block_size(self) -> usize {
        match self {
            HashAlgId::Sha224 | HashAlgId::Sha256 => 64,
            HashAlgId::Sha384 | HashAlgId::Sha512 => 128,
        }
    }
}

impl fmt::Display for HashAlgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgId {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha224" | "sha-224" => Ok(HashAlgId::Sha224),
            "sha256" | "sha-256" => Ok(HashAlgId::Sha256),
            "sha384" | "sha-384" => Ok(HashAlgId::Sha384),
            "sha512" | "sha-512" => Ok(HashAlgId::Sha512),
            _ => Err(DigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("sha256".parse::<HashAlgId>().unwrap(), HashAlgId::Sha256);
        assert_eq!("SHA-384".parse::<HashAlgId>().unwrap(), HashAlgId::Sha384);
        assert_eq!("Sha512".parse::<HashAlgId>().unwrap(), HashAlgId::Sha512);
        assert_eq!("sha-224".parse::<HashAlgId>().unwrap(), HashAlgId::Sha224);
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "md5".parse::<HashAlgId>().unwrap_err();
        assert!(err.to_string().contains("unsupported hash algorithm"));
    }

    #[test]
    fn test_sizes() {
        for alg in HashAlgId::ALL {
            assert!(alg.output_size() <= alg.block_size());
        }
        assert_eq!(HashAlgId::Sha384.output_size(), 48);
        assert_eq!(HashAlgId::Sha256.block_size(), 64);
        assert_eq!(HashAlgId::Sha512.to_string(), "SHA512");
    }
}
