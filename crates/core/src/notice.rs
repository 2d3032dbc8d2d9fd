//! Notice emitter
//!
//! The dump generator does not compile any SQL yet. Every invocation prints
//! one fixed status line to standard output and exits successfully.
//!
//! # Example
//!
//! ```
//! use dump_generator_core::notice::{self, NOTICE};
//!
//! # fn main() -> Result<(), anyhow::Error> {
//! let mut out = Vec::new();
//! notice::emit_to(&mut out)?;
//! assert_eq!(out, format!("{NOTICE}\n").into_bytes());
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};

/// The status line printed on every invocation, without its trailing newline
pub const NOTICE: &str = "Database dump generator - This file will be populated with SQL content";

/// Lifecycle of a [`NoticeEmitter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    /// Nothing written yet
    Ready,
    /// The notice line has been written
    Done,
}

/// Writes [`NOTICE`] to a wrapped writer, at most once
pub struct NoticeEmitter<W: Write> {
    out: W,
    state: EmitterState,
}

impl<W: Write> NoticeEmitter<W> {
    /// Create an emitter in the `Ready` state
    pub fn new(out: W) -> Self {
        Self {
            out,
            state: EmitterState::Ready,
        }
    }

    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Write the notice line and move to `Done`
    ///
    /// Calling this again once `Done` writes nothing and returns `Ok`.
    /// If the writer fails the emitter stays `Ready`.
    pub fn emit(&mut self) -> Result<()> {
        if self.state == EmitterState::Done {
            tracing::debug!("notice already emitted, skipping");
            return Ok(());
        }

        // One buffer, one write: the line never interleaves with other output
        let line = format!("{NOTICE}\n");
        self.out
            .write_all(line.as_bytes())
            .context("failed to write notice")?;
        self.out.flush().context("failed to flush notice")?;

        self.state = EmitterState::Done;
        tracing::debug!(state = ?self.state, bytes = line.len(), "notice emitted");
        Ok(())
    }

    /// Give back the wrapped writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write the notice line to `out`
pub fn emit_to<W: Write>(out: &mut W) -> Result<()> {
    NoticeEmitter::new(out).emit()
}

/// Write the notice line to standard output
///
/// This is the whole behavior of the `generate-database-dump` binary.
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit_to(&mut handle)
}
