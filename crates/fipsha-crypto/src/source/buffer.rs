//! Message source over a caller-owned byte slice.

use std::marker::PhantomData;

use fipsha_types::DigestError;
use zeroize::Zeroizing;

use crate::provider::MessageSource;
use crate::sha2::padding::build_tail;
use crate::sha2::{MessageBlock, PaddingStatus, Word};

/// Borrows the caller's bytes and emits them as padded blocks.
///
/// Whole blocks are read straight out of the borrowed slice. The final
/// partial block, the `1` bit, the zero fill and the length field are
/// assembled once at construction into an owned buffer of one or two blocks,
/// which is released as soon as the last padding block has been emitted.
pub struct BufferSource<'a, W: Word> {
    /// Whole-block prefix of the message.
    data: &'a [u8],
    /// Offset of the next unread block in `data`.
    offset: usize,
    /// Precomputed padding tail.
    padding: Zeroizing<Vec<u8>>,
    status: PaddingStatus,
    _word: PhantomData<W>,
}

impl<'a, W: Word> BufferSource<'a, W> {
    /// Wrap every byte of `data`.
    pub fn new(data: &'a [u8]) -> Result<Self, DigestError> {
        Self::with_byte_len(data, data.len())
    }

    /// Wrap the first `bit_len` bits of `data`.
    ///
    /// Lengths that are not a multiple of eight are rounded up to the next
    /// whole byte; both the hashed bytes and the encoded length use the
    /// rounded value.
    pub fn from_bits(data: &'a [u8], bit_len: u64) -> Result<Self, DigestError> {
        let byte_len = usize::try_from(bit_len.div_ceil(8)).map_err(|_| {
            DigestError::BitLengthOverflow {
                bits: bit_len,
                available: data.len(),
            }
        })?;
        if byte_len > data.len() {
            return Err(DigestError::BitLengthOverflow {
                bits: bit_len,
                available: data.len(),
            });
        }
        Self::with_byte_len(data, byte_len)
    }

    fn with_byte_len(data: &'a [u8], byte_len: usize) -> Result<Self, DigestError> {
        let whole = byte_len - byte_len % W::BLOCK_BYTES;
        let bit_len = (byte_len as u128) * 8;
        let (status, padding) = build_tail::<W>(&data[whole..byte_len], bit_len)?;

        tracing::debug!(
            bytes = byte_len,
            data_blocks = whole / W::BLOCK_BYTES,
            padding_blocks = padding.len() / W::BLOCK_BYTES,
            "buffer source ready"
        );

        Ok(Self {
            data: &data[..whole],
            offset: 0,
            padding,
            status,
            _word: PhantomData,
        })
    }

    /// Emit padding block `index` and move to `next`.
    fn padding_block(&mut self, index: usize, next: PaddingStatus) -> MessageBlock<W> {
        let start = index * W::BLOCK_BYTES;
        let block = MessageBlock::from_be_bytes(&self.padding[start..start + W::BLOCK_BYTES]);
        self.status = next;
        if next == PaddingStatus::AllPaddingEmitted {
            self.release();
        }
        block
    }

    /// Drop the padding buffer; it is wiped on the way out.
    fn release(&mut self) {
        self.padding = Zeroizing::new(Vec::new());
        tracing::debug!("buffer source exhausted");
    }
}

impl<W: Word> MessageSource<W> for BufferSource<'_, W> {
    fn next_block(&mut self) -> Result<Option<MessageBlock<W>>, DigestError> {
        if self.offset < self.data.len() {
            let end = self.offset + W::BLOCK_BYTES;
            let block = MessageBlock::from_be_bytes(&self.data[self.offset..end]);
            self.offset = end;
            return Ok(Some(block));
        }

        match self.status {
            PaddingStatus::PaddedSingleBlock => {
                Ok(Some(self.padding_block(0, PaddingStatus::AllPaddingEmitted)))
            }
            PaddingStatus::PaddedDoubleBlock => Ok(Some(
                self.padding_block(0, PaddingStatus::DoubleBlockFirstHalfEmitted),
            )),
            PaddingStatus::DoubleBlockFirstHalfEmitted => {
                Ok(Some(self.padding_block(1, PaddingStatus::AllPaddingEmitted)))
            }
            PaddingStatus::AllPaddingEmitted => Ok(None),
            PaddingStatus::Unpadded => {
                tracing::error!("buffer source reached the end of data without padding");
                Err(DigestError::InternalInvariantViolation(
                    "buffer source is never unpadded",
                ))
            }
        }
    }

    fn status(&self) -> PaddingStatus {
        self.status
    }
}
