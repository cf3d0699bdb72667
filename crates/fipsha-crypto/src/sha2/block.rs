//! One block of hash input.

use super::word::Word;

/// Sixteen big-endian words of hash input: 512 bits for the 32-bit family,
/// 1024 bits for the 64-bit family.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MessageBlock<W: Word> {
    words: [W; 16],
}

impl<W: Word> MessageBlock<W> {
    /// Build a block from exactly `W::BLOCK_BYTES` bytes, interpreting each
    /// word big-endian.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != W::BLOCK_BYTES`. Every caller in this crate
    /// slices whole blocks.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), W::BLOCK_BYTES, "partial message block");
        let mut words = [W::ZERO; 16];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
            *word = W::from_be_slice(chunk);
        }
        Self { words }
    }

    pub fn from_words(words: [W; 16]) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[W; 16] {
        &self.words
    }

    /// Serialize back to wire order.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; W::BLOCK_BYTES];
        for (word, chunk) in self.words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
            word.write_be(chunk);
        }
        out
    }
}
