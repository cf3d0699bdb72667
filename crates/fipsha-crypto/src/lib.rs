#![doc = "SHA-2 message digests built on pluggable, padded message sources."]
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "sha256", feature = "sha512")))]
compile_error!("enable at least one of the `sha256` or `sha512` features");

// Core traits
pub mod provider;

// Digest values
pub mod digest;

// Hash algorithms
pub mod sha2;

// Message sources
pub mod source;

pub mod hash;

// Self-tests
#[cfg(feature = "fips")]
pub mod fips;

pub use digest::MessageDigest;
pub use provider::MessageSource;
pub use sha2::{
    compute, compute_from_bits, compute_from_buffer, compute_from_file,
    compute_from_file_in_memory, MessageBlock, PaddingStatus, Sha2Algorithm,
};
pub use source::{BufferSource, FileSource};
