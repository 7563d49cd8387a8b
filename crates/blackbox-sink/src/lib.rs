#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/blackbox-sink/src/lib.rs
//!
//! # Overview
//!
//! `blackbox-sink` provides the console sink primitive the `blackbox` gate
//! writes through. A [`ConsoleSink`] wraps an arbitrary
//! [`io::Write`](std::io::Write) implementor and emits each formatted log
//! block as one contiguous write, so a single call's multi-line block is
//! never interleaved with another writer's output when the underlying
//! stream supports atomic writes.
//!
//! # Design
//!
//! The sink deliberately knows nothing about priorities, features, or the
//! block grammar. It receives fully rendered text and forwards it, which
//! keeps the formatter pure and lets tests capture output in a
//! [`Vec<u8>`].
//!
//! # Invariants
//!
//! - [`ConsoleSink::write_block`] issues exactly one `write_all` per block
//!   followed by a flush; the block is never split across writes by the
//!   sink itself.
//! - The sink holds no state between calls beyond the writer it owns.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer. Callers that must never fault (the diagnostic gate)
//! discard them.
//!
//! # Examples
//!
//! Capture a block in memory:
//!
//! ```
//! use blackbox_sink::ConsoleSink;
//!
//! let mut sink = ConsoleSink::new(Vec::new());
//! sink.write_block("\n[ERROR]\nFoo.bar():42\nhello\n")?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.starts_with('\n'));
//! assert!(output.ends_with("hello\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};

/// Streaming sink that forwards rendered log blocks into an
/// [`io::Write`](std::io::Write) target.
///
/// The sink owns the underlying writer. Each call to
/// [`write_block`](Self::write_block) forwards one block as a single
/// contiguous write and flushes, so console output appears promptly even
/// when the stream is line-buffered.
#[derive(Clone, Debug)]
pub struct ConsoleSink<W> {
    writer: W,
}

impl<W> ConsoleSink<W> {
    /// Creates a sink over the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for ConsoleSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> ConsoleSink<W>
where
    W: Write,
{
    /// Writes one rendered block as a single contiguous write, then flushes.
    pub fn write_block(&mut self, block: &str) -> io::Result<()> {
        self.writer.write_all(block.as_bytes())?;
        self.writer.flush()
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Returns a sink over a locked standard-output handle.
///
/// Locking once per block keeps the block contiguous across threads; the
/// handle's internal lock already tolerates concurrent callers.
#[must_use]
pub fn stdout() -> ConsoleSink<io::StdoutLock<'static>> {
    ConsoleSink::new(io::stdout().lock())
}
