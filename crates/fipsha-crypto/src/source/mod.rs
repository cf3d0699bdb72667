//! Message sources: in-memory buffers and streamed files.
//!
//! Both sources emit the same block sequence for the same bytes. A buffer
//! source knows its length up front and pads at construction; a file source
//! only discovers the end of the message when a read comes up short, and
//! synthesizes padding from there.

mod buffer;
mod file;

pub use buffer::BufferSource;
pub use file::FileSource;
