//! Trait-based provider mechanism for message sources.
//!
//! The compression engine depends only on the ability to pull the next
//! padded block out of some producer. In-memory buffers and files implement
//! the same trait, so `compute` is written once and dispatched statically;
//! boxed trait objects work as well.

use fipsha_types::DigestError;

use crate::sha2::{MessageBlock, PaddingStatus, Word};

/// A producer of padded hash-input blocks.
pub trait MessageSource<W: Word> {
    /// Produce the next block, or `Ok(None)` once every real and padding
    /// block has been emitted.
    ///
    /// After the first `Ok(None)` every further call returns `Ok(None)`.
    fn next_block(&mut self) -> Result<Option<MessageBlock<W>>, DigestError>;

    /// Current position of the padding state machine.
    fn status(&self) -> PaddingStatus;

    /// Returns true once the source has nothing left to emit.
    fn is_exhausted(&self) -> bool {
        self.status() == PaddingStatus::AllPaddingEmitted
    }
}

impl<W: Word, S: MessageSource<W> + ?Sized> MessageSource<W> for Box<S> {
    fn next_block(&mut self) -> Result<Option<MessageBlock<W>>, DigestError> {
        (**self).next_block()
    }

    fn status(&self) -> PaddingStatus {
        (**self).status()
    }
}

impl<W: Word, S: MessageSource<W> + ?Sized> MessageSource<W> for &mut S {
    fn next_block(&mut self) -> Result<Option<MessageBlock<W>>, DigestError> {
        (**self).next_block()
    }

    fn status(&self) -> PaddingStatus {
        (**self).status()
    }
}
