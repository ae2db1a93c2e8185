//! Immutable cursor snapshots.

use strand_diagnostic::Position;

/// A complete, copyable snapshot of a cursor's logical position.
///
/// Fields are private: a state is only ever produced by the cursor, so a
/// snapshot cannot be edited into an inconsistent combination after it was
/// taken. Restoring a state makes the cursor behave exactly as it did at the
/// moment the state was captured.
///
/// `position` is the source offset of the *next* byte to read, so the
/// current byte lives at `position - 1` while the cursor is active.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CursorState {
    position: u64,
    offset: i64,
    line: u32,
    column: u32,
    active: bool,
    current: Option<u8>,
}

/// Size assertion: a snapshot stays a small value type.
const _: () = assert!(std::mem::size_of::<CursorState>() <= 32);

impl CursorState {
    /// State before the first byte has been read.
    pub(crate) const INITIAL: CursorState = CursorState {
        position: 0,
        offset: -1,
        line: 1,
        column: 0,
        active: true,
        current: None,
    };

    /// Successor state after reading `byte`.
    ///
    /// Line/column follow the byte that was current *before* this read: a
    /// newline keeps its own column and the byte after it is reported at
    /// column 1 of the next line.
    #[inline]
    pub(crate) fn consumed(self, byte: u8) -> CursorState {
        let (line, column) = if self.current == Some(b'\n') {
            (self.line + 1, 1)
        } else {
            (self.line, self.column + 1)
        };
        CursorState {
            position: self.position + 1,
            offset: self.offset + 1,
            line,
            column,
            active: true,
            current: Some(byte),
        }
    }

    /// Terminal state once the source reports end of input.
    ///
    /// Position, offset, line and column are left where they were.
    #[inline]
    pub(crate) fn exhausted(self) -> CursorState {
        CursorState {
            active: false,
            current: None,
            ..self
        }
    }

    /// Absolute source offset of the next byte to be read.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bytes consumed since the start of the stream, minus one.
    ///
    /// `-1` before the first byte is read; `0` once the first byte is current.
    #[inline]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// 1-indexed line of the current byte.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-indexed column of the current byte.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// `false` once the source has reported end of input.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The byte at this state, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Line/column pair for diagnostics.
    pub fn location(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Source offset of the current byte.
    ///
    /// While active this is `position - 1`; at end of input there is no
    /// current byte and the end offset itself is returned.
    pub fn lexeme_start(&self) -> u64 {
        if self.active {
            self.position.saturating_sub(1)
        } else {
            self.position
        }
    }
}
