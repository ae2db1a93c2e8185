//! Backtracking cursor over a seekable byte source.
//!
//! [`StreamCursor`] keeps exactly one live [`CursorState`] over a
//! [`Source`]. Grammar code consumes input speculatively, takes a
//! [`snapshot`](StreamCursor::snapshot) before each attempt and
//! [`restore`](StreamCursor::restore)s it on failure. Restoring rewinds the
//! source's read position, the current byte and the line/column bookkeeping
//! together, so the next read sequence is identical to the one seen when the
//! snapshot was taken.
//!
//! The lexical primitives (`match_*`, `test_*`) are built on top of that
//! pair:
//! - `test_*` probes never move the cursor.
//! - `match_*` consumes the whole match or nothing.
//! - `*_or_fail` variants turn a mismatch into a [`SyntaxError`] carrying
//!   line, column and an escaped excerpt of the input.
//!
//! A "character" is one byte. Columns count bytes 1:1.

mod cursor;
mod error;
mod options;
mod primitives;
mod state;

use std::io::{Read, Seek};

pub use cursor::{read_range, StreamCursor};
pub use error::{CursorError, LexError};
pub use options::{CursorOptions, DEFAULT_CONTEXT_WIDTH};
pub use state::CursorState;
pub use strand_diagnostic::{ErrorCode, Position, SyntaxError};

/// Anything the cursor can read from: byte-addressable and seekable.
///
/// Streams that cannot be repositioned (pipes, sockets) are rejected when
/// the cursor is created. Buffer them into a [`MemorySource`] first.
pub trait Source: Read + Seek {}

impl<T: Read + Seek> Source for T {}

/// In-memory source used when parsing raw text.
pub type MemorySource = std::io::Cursor<Vec<u8>>;
