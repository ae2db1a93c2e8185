//! The backtracking stream cursor.
//!
//! The cursor reads one byte at a time from its [`Source`] and keeps the
//! last byte read as `current`. There is no lookahead buffer: looking past
//! `current` means reading, then seeking back.
//!
//! # Position Tracking
//!
//! The cursor tracks the source offset itself (one increment per byte read,
//! reset on every seek) instead of asking the source. Snapshots therefore
//! never touch the source; only [`restore`](StreamCursor::restore),
//! [`advance`](StreamCursor::advance) and range extraction do.

use std::io::{self, Read, SeekFrom};

use strand_diagnostic::{escape_newlines, ErrorCode, Position, SyntaxError};
use tracing::trace;

use crate::{CursorError, CursorOptions, CursorState, MemorySource, Source};

/// Cursor over a seekable byte source with exact snapshot/restore.
///
/// The cursor owns its source for the duration of a parse. Dropping the
/// cursor drops the source; [`into_source`](Self::into_source) hands it
/// back instead.
#[derive(Debug)]
pub struct StreamCursor<S> {
    source: S,
    state: CursorState,
    options: CursorOptions,
}

impl StreamCursor<MemorySource> {
    /// Create a cursor over an in-memory copy of `bytes`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, CursorError> {
        Self::new(std::io::Cursor::new(bytes.into()))
    }
}

impl<S: Source> StreamCursor<S> {
    /// Bind a cursor to `source` and read its first byte.
    ///
    /// Fails with [`CursorError::InvalidSource`] if the source cannot be
    /// positioned at offset 0.
    pub fn new(source: S) -> Result<Self, CursorError> {
        Self::with_options(source, CursorOptions::default())
    }

    /// Bind a cursor to `source` with explicit options.
    pub fn with_options(source: S, options: CursorOptions) -> Result<Self, CursorError> {
        let mut cursor = StreamCursor {
            source,
            state: CursorState::INITIAL,
            options,
        };
        cursor.rewind().map_err(|err| match err {
            CursorError::Seek { source, .. } => CursorError::InvalidSource(source),
            other => other,
        })?;
        Ok(cursor)
    }

    /// Reset to the initial state and read the first byte.
    ///
    /// Returns `false` (and leaves the cursor inactive) for an empty source.
    pub fn rewind(&mut self) -> Result<bool, CursorError> {
        trace!("rewind");
        self.restore(CursorState::INITIAL)?;
        self.advance()
    }

    /// Read the next byte and make it current.
    ///
    /// At end of input the cursor becomes inactive, `current` becomes `None`
    /// and `false` is returned. Further calls are no-ops returning `false`.
    pub fn advance(&mut self) -> Result<bool, CursorError> {
        if !self.state.is_active() {
            return Ok(false);
        }
        if let Some(byte) = self.read_byte()? {
            self.state = self.state.consumed(byte);
            Ok(true)
        } else {
            self.state = self.state.exhausted();
            Ok(false)
        }
    }

    /// The byte the next [`advance`](Self::advance) would make current.
    ///
    /// Reads ahead and restores, so the visible state is unchanged.
    pub fn peek(&mut self) -> Result<Option<u8>, CursorError> {
        let saved = self.snapshot();
        let advanced = self.advance();
        let next = self.state.current();
        self.restore(saved)?;
        advanced?;
        Ok(next)
    }

    /// Capture the full cursor state.
    #[inline]
    pub fn snapshot(&self) -> CursorState {
        self.state
    }

    /// Reinstate a previously captured state, repositioning the source.
    ///
    /// Fails with [`CursorError::Seek`] if the source cannot be moved back to
    /// the saved offset; the live state is left untouched in that case.
    pub fn restore(&mut self, state: CursorState) -> Result<(), CursorError> {
        trace!(position = state.position(), "restore");
        self.seek_to(state.position())?;
        self.state = state;
        Ok(())
    }

    /// Bytes of the source in `[from, to)`.
    ///
    /// The cursor's own position is preserved. A range running past the end
    /// of the source is truncated; an empty or inverted range yields no bytes.
    pub fn extract(&mut self, from: u64, to: u64) -> Result<Vec<u8>, CursorError> {
        if to <= from {
            return Ok(Vec::new());
        }
        let resume = self.state.position();
        let bytes = read_range(&mut self.source, from, to);
        self.seek_to(resume)?;
        bytes
    }

    /// Bytes between two states, left inclusive.
    ///
    /// Starts at the byte that was current in `start` and ends at the byte
    /// that is current in `end`.
    pub fn region(&mut self, start: &CursorState, end: &CursorState) -> Result<Vec<u8>, CursorError> {
        self.extract(start.position().saturating_sub(1), end.position())
    }

    /// The next `width` bytes starting at `current`, newlines escaped.
    pub fn context(&mut self, width: usize) -> Result<String, CursorError> {
        let from = self.state.lexeme_start();
        let width = u64::try_from(width).unwrap_or(u64::MAX);
        let bytes = self.extract(from, from.saturating_add(width))?;
        Ok(escape_newlines(&bytes))
    }

    /// Build a syntax error at the current location, with the configured
    /// context window attached.
    pub fn error_at(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<SyntaxError, CursorError> {
        let context = self.context(self.options.context_width)?;
        Ok(SyntaxError::new(code, message, self.location()).with_context(context))
    }

    /// The live state.
    #[inline]
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// The current byte, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.state.current()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.state.line()
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.state.column()
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        self.state.offset()
    }

    #[inline]
    pub fn position(&self) -> u64 {
        self.state.position()
    }

    /// Line/column of the current byte.
    pub fn location(&self) -> Position {
        self.state.location()
    }

    pub fn options(&self) -> &CursorOptions {
        &self.options
    }

    /// Release the cursor and return its source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn read_byte(&mut self) -> Result<Option<u8>, CursorError> {
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    return Err(CursorError::Read {
                        position: self.state.position(),
                        source: err,
                    })
                }
            }
        }
    }

    fn seek_to(&mut self, position: u64) -> Result<(), CursorError> {
        seek_exact(&mut self.source, position).inspect_err(|err| {
            trace!(position, %err, "seek failed");
        })
    }
}

/// Read `[from, to)` from any source without a cursor.
///
/// The source is left positioned wherever the read stopped; callers that
/// care about the previous position must restore it themselves.
pub fn read_range<S: Source>(source: &mut S, from: u64, to: u64) -> Result<Vec<u8>, CursorError> {
    let mut bytes = Vec::new();
    if to <= from {
        return Ok(bytes);
    }
    seek_exact(source, from)?;
    source
        .by_ref()
        .take(to - from)
        .read_to_end(&mut bytes)
        .map_err(|err| CursorError::Read {
            position: from,
            source: err,
        })?;
    Ok(bytes)
}

fn seek_exact<S: Source>(source: &mut S, position: u64) -> Result<(), CursorError> {
    match source.seek(SeekFrom::Start(position)) {
        Ok(landed) if landed == position => Ok(()),
        Ok(landed) => Err(CursorError::Seek {
            position,
            source: io::Error::other(format!("source landed at offset {landed}")),
        }),
        Err(err) => Err(CursorError::Seek {
            position,
            source: err,
        }),
    }
}
