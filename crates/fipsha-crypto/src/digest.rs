//! Fixed-width digest values and their hexadecimal form.

use std::fmt;
use std::str::FromStr;

use fipsha_types::DigestError;

use crate::sha2::Word;

/// A digest: `N` state words of width `W`.
///
/// The all-zero value is the null digest, used as an explicit "unset"
/// marker. The hex form is lowercase and exactly `2 * N * W::BYTES`
/// characters long.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageDigest<W: Word, const N: usize> {
    words: [W; N],
}

impl<W: Word, const N: usize> MessageDigest<W, N> {
    /// Length of the digest in bytes.
    pub const BYTES: usize = N * W::BYTES;
    /// Length of the hex form in characters.
    pub const HEX_LEN: usize = 2 * N * W::BYTES;

    /// The null (all-zero) digest.
    pub fn null() -> Self {
        Self {
            words: [W::ZERO; N],
        }
    }

    pub fn is_null(&self) -> bool {
        self.words.iter().all(|&w| w == W::ZERO)
    }

    pub fn from_words(words: [W; N]) -> Self {
        Self { words }
    }

    /// Keep the first `N` of the eight final state words.
    pub(crate) fn from_state(state: &[W; 8]) -> Self {
        let mut words = [W::ZERO; N];
        words.copy_from_slice(&state[..N]);
        Self { words }
    }

    pub fn words(&self) -> &[W; N] {
        &self.words
    }

    /// Big-endian byte form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        for (word, chunk) in self.words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
            word.write_be(chunk);
        }
        out
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a lowercase hex digest.
    ///
    /// Rejects any string of the wrong length or containing a character
    /// outside `[0-9a-f]`.
    pub fn parse_hex(s: &str) -> Result<Self, DigestError> {
        if s.len() != Self::HEX_LEN {
            return Err(DigestError::InvalidHexLength {
                expected: Self::HEX_LEN,
                got: s.len(),
            });
        }
        if let Some((offset, ch)) = s
            .char_indices()
            .find(|&(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(DigestError::InvalidHexChar { ch, offset });
        }

        let bytes = hex::decode(s).map_err(|_| DigestError::InvalidHexLength {
            expected: Self::HEX_LEN,
            got: s.len(),
        })?;
        let mut words = [W::ZERO; N];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
            *word = W::from_be_slice(chunk);
        }
        Ok(Self { words })
    }

    /// Overwrite `self` with the digest parsed from `s`.
    ///
    /// On error `self` is left unchanged.
    pub fn set_from_hex(&mut self, s: &str) -> Result<(), DigestError> {
        *self = Self::parse_hex(s)?;
        Ok(())
    }
}

impl<W: Word, const N: usize> Default for MessageDigest<W, N> {
    fn default() -> Self {
        Self::null()
    }
}

impl<W: Word, const N: usize> fmt::Display for MessageDigest<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<W: Word, const N: usize> fmt::Debug for MessageDigest<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageDigest({})", self.to_hex())
    }
}

impl<W: Word, const N: usize> FromStr for MessageDigest<W, N> {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}
