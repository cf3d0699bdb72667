//! Message padding (FIPS 180-4 §5.1).
//!
//! A message of `n` bits is followed by a single `1` bit, the fewest `0`
//! bits that leave room for the length field at the end of a block, and the
//! length `n` as a big-endian integer of two words. When the final partial
//! block has no room for the `1` bit plus the length field the padding
//! spills into a second block.

use fipsha_types::DigestError;
use zeroize::Zeroizing;

use super::word::Word;

/// Where a message source stands with respect to padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingStatus {
    /// Real data still pending; no padding produced yet.
    Unpadded,
    /// Padding computed, fits in one block, not yet emitted.
    PaddedSingleBlock,
    /// Padding computed, spans two blocks, neither emitted.
    PaddedDoubleBlock,
    /// The first of two padding blocks has been emitted.
    DoubleBlockFirstHalfEmitted,
    /// Every block has been emitted; the source is exhausted.
    AllPaddingEmitted,
}

/// Largest final partial block, in bytes, that still leaves room for the
/// `0x80` marker and the length field in the same block.
pub(crate) const fn max_single_tail<W: Word>() -> usize {
    W::BLOCK_BYTES - W::LENGTH_BYTES - 1
}

/// Number of padding blocks a final partial block of `tail_len` bytes needs.
pub(crate) fn padding_blocks<W: Word>(tail_len: usize) -> usize {
    if tail_len > max_single_tail::<W>() {
        2
    } else {
        1
    }
}

/// Write `bit_len` big-endian into the last `W::LENGTH_BYTES` of `block`.
///
/// The field is two words wide; for the 32-bit family the count is taken
/// modulo 2^64.
pub(crate) fn write_length<W: Word>(block: &mut [u8], bit_len: u128) {
    let field = bit_len.to_be_bytes();
    let end = block.len();
    block[end - W::LENGTH_BYTES..].copy_from_slice(&field[field.len() - W::LENGTH_BYTES..]);
}

/// Build the complete padding tail for a message whose last
/// `tail.len() < W::BLOCK_BYTES` bytes did not fill a block.
///
/// Returns the status describing the tail and the owned tail itself, one or
/// two blocks long. The tail holds a copy of caller data and is wiped on drop.
pub(crate) fn build_tail<W: Word>(
    tail: &[u8],
    bit_len: u128,
) -> Result<(PaddingStatus, Zeroizing<Vec<u8>>), DigestError> {
    if tail.len() >= W::BLOCK_BYTES {
        return Err(DigestError::InternalInvariantViolation(
            "padding tail longer than a block",
        ));
    }
    let blocks = padding_blocks::<W>(tail.len());
    let len = blocks * W::BLOCK_BYTES;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| DigestError::MemAllocFail)?;
    buf.resize(len, 0u8);
    let mut buf = Zeroizing::new(buf);

    buf[..tail.len()].copy_from_slice(tail);
    buf[tail.len()] = 0x80;
    write_length::<W>(&mut buf, bit_len);

    let status = if blocks == 1 {
        PaddingStatus::PaddedSingleBlock
    } else {
        PaddingStatus::PaddedDoubleBlock
    };
    Ok((status, buf))
}
