//! Message source streamed from a file or any other reader.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use fipsha_types::DigestError;
use zeroize::Zeroizing;

use crate::provider::MessageSource;
use crate::sha2::padding::{max_single_tail, write_length};
use crate::sha2::{MessageBlock, PaddingStatus, Word};

/// Streams blocks from a reader, synthesizing padding at end of input.
///
/// Each call reads one block. A short read marks the end of the message:
/// the reader is dropped immediately and the `1` bit, zero fill and length
/// field are written in memory. When the last data block has no room for
/// the length field, one more block carrying only the length is emitted.
///
/// A read error is terminal: the reader is dropped and every later call
/// returns [`DigestError::SourceFailed`], so a partially read message can
/// never be finished into a digest.
pub struct FileSource<W: Word, R: Read = BufReader<File>> {
    /// `None` once real data is exhausted.
    reader: Option<R>,
    /// Message length so far, in bits.
    bit_len: u128,
    /// Reusable block buffer.
    buf: Zeroizing<Vec<u8>>,
    status: PaddingStatus,
    /// Set once a read has failed.
    failed: bool,
    _word: std::marker::PhantomData<W>,
}

impl<W: Word> FileSource<W> {
    /// Open `path` for binary reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DigestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "cannot open message file");
            DigestError::FileOpen {
                path: path.display().to_string(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "file source opened");
        Self::from_reader(BufReader::new(file))
    }
}

impl<W: Word, R: Read> FileSource<W, R> {
    /// Stream the message from `reader`.
    pub fn from_reader(reader: R) -> Result<Self, DigestError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(W::BLOCK_BYTES)
            .map_err(|_| DigestError::MemAllocFail)?;
        buf.resize(W::BLOCK_BYTES, 0u8);
        Ok(Self {
            reader: Some(reader),
            bit_len: 0,
            buf: Zeroizing::new(buf),
            status: PaddingStatus::Unpadded,
            failed: false,
            _word: std::marker::PhantomData,
        })
    }

    /// Bits of real data read so far.
    pub fn bit_len(&self) -> u128 {
        self.bit_len
    }

    /// Returns true once a read error has made the source unusable.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Returns true while the underlying reader is still held.
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// Read from the stream until the block buffer is full or EOF.
    fn fill(&mut self) -> Result<usize, DigestError> {
        let Some(reader) = self.reader.as_mut() else {
            return Err(DigestError::InternalInvariantViolation(
                "unpadded file source without a reader",
            ));
        };
        let mut filled = 0;
        while filled < self.buf.len() {
            match reader.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, bits_read = %self.bit_len, "read failed");
                    self.reader = None;
                    self.failed = true;
                    return Err(DigestError::Io(e));
                }
            }
        }
        Ok(filled)
    }

    /// Turn a short final read of `filled` bytes into the last data block.
    fn finish_data(&mut self, filled: usize) -> MessageBlock<W> {
        self.reader = None;

        self.buf[filled] = 0x80;
        self.buf[filled + 1..].fill(0);
        if filled <= max_single_tail::<W>() {
            write_length::<W>(&mut self.buf, self.bit_len);
            self.status = PaddingStatus::AllPaddingEmitted;
        } else {
            self.status = PaddingStatus::DoubleBlockFirstHalfEmitted;
        }
        tracing::debug!(
            bits = %self.bit_len,
            status = ?self.status,
            "file source reached end of data"
        );
        MessageBlock::from_be_bytes(&self.buf)
    }

    /// The trailing block holding nothing but the length field.
    fn length_block(&mut self) -> MessageBlock<W> {
        self.buf.fill(0);
        write_length::<W>(&mut self.buf, self.bit_len);
        self.status = PaddingStatus::AllPaddingEmitted;
        MessageBlock::from_be_bytes(&self.buf)
    }
}

impl<W: Word, R: Read> MessageSource<W> for FileSource<W, R> {
    fn next_block(&mut self) -> Result<Option<MessageBlock<W>>, DigestError> {
        if self.failed {
            return Err(DigestError::SourceFailed);
        }
        match self.status {
            PaddingStatus::Unpadded => {
                let filled = self.fill()?;
                self.bit_len += (filled as u128) * 8;
                if filled == W::BLOCK_BYTES {
                    Ok(Some(MessageBlock::from_be_bytes(&self.buf)))
                } else {
                    Ok(Some(self.finish_data(filled)))
                }
            }
            PaddingStatus::DoubleBlockFirstHalfEmitted => Ok(Some(self.length_block())),
            PaddingStatus::AllPaddingEmitted => Ok(None),
            PaddingStatus::PaddedSingleBlock | PaddingStatus::PaddedDoubleBlock => {
                tracing::error!(status = ?self.status, "file source in a buffer-only state");
                Err(DigestError::InternalInvariantViolation(
                    "file source never precomputes padding",
                ))
            }
        }
    }

    fn status(&self) -> PaddingStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testutil::{drain, wire};
    use crate::source::BufferSource;
    use std::io::Cursor;

    /// Reader that hands out at most `chunk` bytes per call and injects an
    /// `Interrupted` error before every read.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            let n = self.chunk.min(out.len()).min(self.data.len() - self.pos);
            out[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    /// Reader that fails after yielding `ok` bytes.
    struct Failing {
        ok: usize,
    }

    impl Read for Failing {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            if self.ok == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "device error"));
            }
            let n = self.ok.min(out.len());
            out[..n].fill(0x33);
            self.ok -= n;
            Ok(n)
        }
    }

    /// Reader that yields `head`, fails once, then yields `tail`.
    struct Flaky {
        head: Vec<u8>,
        tail: Vec<u8>,
        failed: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            let src = if !self.head.is_empty() {
                &mut self.head
            } else if !self.failed {
                self.failed = true;
                return Err(io::Error::new(io::ErrorKind::Other, "eio"));
            } else {
                &mut self.tail
            };
            let n = out.len().min(src.len());
            out[..n].copy_from_slice(&src[..n]);
            src.drain(..n);
            Ok(n)
        }
    }

    fn stream<W: Word>(data: &[u8]) -> Vec<u8> {
        let mut src = FileSource::<W, _>::from_reader(Cursor::new(data.to_vec())).unwrap();
        wire(&drain(&mut src))
    }

    fn buffered<W: Word>(data: &[u8]) -> Vec<u8> {
        wire(&drain(&mut BufferSource::<W>::new(data).unwrap()))
    }

    #[test]
    fn test_matches_buffer_source() {
        let data: Vec<u8> = (0..300u32).map(|i| (i * 7) as u8).collect();
        for len in [0, 1, 3, 55, 56, 63, 64, 65, 111, 112, 127, 128, 129, 300] {
            assert_eq!(stream::<u32>(&data[..len]), buffered::<u32>(&data[..len]), "u32 {len}");
            assert_eq!(stream::<u64>(&data[..len]), buffered::<u64>(&data[..len]), "u64 {len}");
        }
    }

    #[test]
    fn test_reader_closed_after_short_read() {
        let mut src = FileSource::<u32, _>::from_reader(Cursor::new(vec![1u8; 70])).unwrap();
        assert!(src.is_open());
        src.next_block().unwrap().unwrap();
        assert!(src.is_open());
        src.next_block().unwrap().unwrap();
        assert!(!src.is_open());
        assert_eq!(src.bit_len(), 560);
        assert!(src.is_exhausted());
        assert!(src.next_block().unwrap().is_none());
        assert!(src.next_block().unwrap().is_none());
    }

    #[test]
    fn test_spill_emits_length_block() {
        let mut src = FileSource::<u32, _>::from_reader(Cursor::new(vec![9u8; 60])).unwrap();
        let first = src.next_block().unwrap().unwrap().to_be_bytes();
        assert_eq!(src.status(), PaddingStatus::DoubleBlockFirstHalfEmitted);
        assert!(!src.is_open());
        assert_eq!(first[60], 0x80);
        let second = src.next_block().unwrap().unwrap().to_be_bytes();
        assert!(second[..56].iter().all(|&b| b == 0));
        assert_eq!(&second[56..], &480u64.to_be_bytes());
        assert!(src.next_block().unwrap().is_none());
    }

    #[test]
    fn test_exact_multiple_gets_padding_block() {
        let blocks = drain(
            &mut FileSource::<u64, _>::from_reader(Cursor::new(vec![0u8; 256])).unwrap(),
        );
        assert_eq!(blocks.len(), 3);
        let pad = blocks[2].to_be_bytes();
        assert_eq!(pad[0], 0x80);
        assert_eq!(&pad[112..], &2048u128.to_be_bytes());
    }

    #[test]
    fn test_short_reads_and_interrupts() {
        let data: Vec<u8> = (0..200u8).collect();
        let reader = Trickle {
            data: data.clone(),
            pos: 0,
            chunk: 7,
            interrupt: false,
        };
        let mut src = FileSource::<u32, _>::from_reader(reader).unwrap();
        assert_eq!(wire(&drain(&mut src)), buffered::<u32>(&data));
    }

    #[test]
    fn test_io_error_surfaces() {
        let mut src = FileSource::<u32, _>::from_reader(Failing { ok: 100 }).unwrap();
        assert!(src.next_block().unwrap().is_some());
        let err = src.next_block().unwrap_err();
        assert!(matches!(err, DigestError::Io(_)));
        assert!(!err.is_internal());
    }

    #[test]
    fn test_read_error_is_terminal() {
        use crate::sha2::{compute, Sha256};

        let mut src = FileSource::<u32, _>::from_reader(Flaky {
            head: vec![0x41; 10],
            tail: vec![0x42; 90],
            failed: false,
        })
        .unwrap();
        assert!(matches!(
            compute::<Sha256, _>(&mut src).unwrap_err(),
            DigestError::Io(_)
        ));
        assert!(src.is_failed());
        assert!(!src.is_open());
        assert!(!src.is_exhausted());

        let err = compute::<Sha256, _>(&mut src).unwrap_err();
        assert!(matches!(err, DigestError::SourceFailed));
        assert!(!err.is_internal());
        assert!(matches!(
            src.next_block().unwrap_err(),
            DigestError::SourceFailed
        ));
        assert_eq!(src.bit_len(), 0);
    }

    #[test]
    fn test_open_missing_file() {
        let err = FileSource::<u32>::open("/nonexistent_fipsha_test/file.bin").err().unwrap();
        assert!(matches!(err, DigestError::FileOpen { .. }));
        assert_eq!(err.kind(), fipsha_types::ErrorKind::Input);
    }

    #[test]
    fn test_open_real_file() {
        let tmp = std::env::temp_dir().join("fipsha_file_source_open.bin");
        std::fs::write(&tmp, b"abc").unwrap();
        let mut src = FileSource::<u32>::open(&tmp).unwrap();
        assert_eq!(wire(&drain(&mut src)), buffered::<u32>(b"abc"));
        let _ = std::fs::remove_file(&tmp);
    }
}
