//! FIPS 140-3 style self-test framework.
//!
//! [`FipsModule`] wraps the digest engine behind its known-answer tests:
//! hashing through the module is refused until the tests have passed, and a
//! failed test disables the module for good. Each KAT runs through both the
//! buffer and the streaming message source.
//!
//! All functionality is gated behind `#[cfg(feature = "fips")]`.

mod kat;

use std::path::Path;

use fipsha_types::{DigestError, HashAlgId};

use crate::hash::{self, AnyDigest};

/// Self-test module states (FIPS 140-3 §10.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FipsState {
    /// Initial state before self-tests have been run.
    PreOperational,
    /// All self-tests passed; the engine is ready for use.
    Operational,
    /// A self-test failed; the engine must not be used.
    Error,
}

/// Self-test gate in front of the unified hash functions.
///
/// # Usage
///
/// ```no_run
/// use fipsha_crypto::fips::FipsModule;
/// use fipsha_types::HashAlgId;
///
/// let mut module = FipsModule::new();
/// module.run_self_tests().expect("self-tests failed");
/// let digest = module.hash_bytes(HashAlgId::Sha256, b"abc").unwrap();
/// println!("{digest}");
/// ```
pub struct FipsModule {
    state: FipsState,
}

impl FipsModule {
    /// Create a new module in `PreOperational` state.
    pub fn new() -> Self {
        FipsModule {
            state: FipsState::PreOperational,
        }
    }

    /// Return the current module state.
    pub fn state(&self) -> FipsState {
        self.state
    }

    /// Return true if the module is in the `Operational` state.
    pub fn is_operational(&self) -> bool {
        self.state == FipsState::Operational
    }

    /// Run all known-answer tests.
    ///
    /// On success, transitions to `Operational`.
    /// On failure, transitions to `Error` and returns the first failure.
    pub fn run_self_tests(&mut self) -> Result<(), DigestError> {
        if self.state == FipsState::Error {
            return Err(DigestError::InvalidState);
        }

        if let Err(e) = kat::run_all_kat() {
            tracing::error!(error = %e, "self-test failed");
            self.state = FipsState::Error;
            return Err(e);
        }

        tracing::debug!("self-tests passed");
        self.state = FipsState::Operational;
        Ok(())
    }

    fn ensure_operational(&self) -> Result<(), DigestError> {
        if self.is_operational() {
            Ok(())
        } else {
            tracing::warn!(state = ?self.state, "hash refused before self-tests passed");
            Err(DigestError::InvalidState)
        }
    }

    /// [`hash::hash_bytes`], refused unless the module is operational.
    pub fn hash_bytes(&self, alg: HashAlgId, data: &[u8]) -> Result<AnyDigest, DigestError> {
        self.ensure_operational()?;
        hash::hash_bytes(alg, data)
    }

    /// [`hash::hash_file`], refused unless the module is operational.
    pub fn hash_file(
        &self,
        alg: HashAlgId,
        path: impl AsRef<Path>,
    ) -> Result<AnyDigest, DigestError> {
        self.ensure_operational()?;
        hash::hash_file(alg, path)
    }
}

impl Default for FipsModule {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the known-answer tests once, without keeping a module around.
pub fn run_self_tests() -> Result<(), DigestError> {
    FipsModule::new().run_self_tests()
}
