//! The SHA-2 compression function (FIPS 180-4 §6.2.2 / §6.4.2).

use super::block::MessageBlock;
use super::word::{ch, maj, Word};

/// Longest message schedule of the family (80 words for SHA-512).
const MAX_SCHEDULE: usize = 80;

/// Running hash state: eight words, folded one block at a time.
#[derive(Clone)]
pub struct Engine<W: Word> {
    state: [W; 8],
    blocks: u64,
}

impl<W: Word> Engine<W> {
    /// Start from an algorithm's initial hash value.
    pub fn new(iv: [W; 8]) -> Self {
        Self {
            state: iv,
            blocks: 0,
        }
    }

    /// Fold one block into the state.
    pub fn compress(&mut self, block: &MessageBlock<W>) {
        compress(&mut self.state, block);
        self.blocks += 1;
    }

    pub fn state(&self) -> &[W; 8] {
        &self.state
    }

    /// Number of blocks compressed so far.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }
}

/// Expand `block` into the message schedule and run the round function over
/// `state`. All arithmetic wraps modulo the word width.
pub(crate) fn compress<W: Word>(state: &mut [W; 8], block: &MessageBlock<W>) {
    let rounds = W::ROUNDS;
    let k = W::ROUND_CONSTANTS;

    // Message schedule
    let mut w = [W::ZERO; MAX_SCHEDULE];
    w[..16].copy_from_slice(block.words());
    for t in 16..rounds {
        w[t] = w[t - 2]
            .small_sigma1()
            .wrapping_add(w[t - 7])
            .wrapping_add(w[t - 15].small_sigma0())
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for t in 0..rounds {
        let t1 = h
            .wrapping_add(e.big_sigma1())
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k[t])
            .wrapping_add(w[t]);
        let t2 = a.big_sigma0().wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA256_IV: [u32; 8] = [
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
        0x5be0cd19,
    ];

    #[test]
    fn test_single_block_abc() {
        // "abc" padded by hand: one block, length 24 bits.
        let mut bytes = [0u8; 64];
        bytes[..3].copy_from_slice(b"abc");
        bytes[3] = 0x80;
        bytes[63] = 24;
        let mut engine = Engine::new(SHA256_IV);
        engine.compress(&MessageBlock::from_be_bytes(&bytes));
        assert_eq!(engine.blocks(), 1);
        assert_eq!(
            engine.state(),
            &[
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad
            ]
        );
    }

    #[test]
    fn test_compress_is_order_sensitive() {
        let b1 = MessageBlock::<u32>::from_words([1; 16]);
        let b2 = MessageBlock::<u32>::from_words([2; 16]);
        let mut x = Engine::new(SHA256_IV);
        x.compress(&b1);
        x.compress(&b2);
        let mut y = Engine::new(SHA256_IV);
        y.compress(&b2);
        y.compress(&b1);
        assert_ne!(x.state(), y.state());
    }
}
