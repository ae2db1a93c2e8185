//! Lexical match/test primitives.
//!
//! Built only from the public cursor API (`current`, `advance`, `snapshot`,
//! `restore`, `context`, `error_at`); nothing here touches the source.
//!
//! - `test_*` probes are pure: any number of calls leave the cursor exactly
//!   where it was.
//! - `match_*` is atomic: the whole text is consumed, or the cursor is
//!   restored to where it was before the call.
//! - `*_or_fail` reports a mismatch as a [`SyntaxError`](crate::SyntaxError) instead of `false`.

use strand_diagnostic::ErrorCode;

use crate::{CursorError, LexError, Source, StreamCursor};

impl<S: Source> StreamCursor<S> {
    /// Consume `text` if the input continues with it.
    ///
    /// Returns `false` and leaves the cursor unchanged on the first mismatch.
    pub fn match_literal(&mut self, text: &str) -> Result<bool, CursorError> {
        let saved = self.snapshot();
        let matched = self.consume_literal(text.as_bytes());
        if !matches!(matched, Ok(true)) {
            self.restore(saved)?;
        }
        matched
    }

    /// Older name for [`match_literal`](Self::match_literal).
    pub fn eat(&mut self, text: &str) -> Result<bool, CursorError> {
        self.match_literal(text)
    }

    /// Consume `text` or fail with `expected "<text>", but found '<excerpt>' instead`.
    ///
    /// The excerpt is `text.len()` plus the configured context width.
    pub fn match_literal_or_fail(&mut self, text: &str) -> Result<(), LexError> {
        if self.match_literal(text)? {
            return Ok(());
        }
        let found = self.context(text.len() + self.options().context_width)?;
        let err = self.error_at(
            ErrorCode::E1001,
            format!("expected \"{text}\", but found '{found}' instead"),
        )?;
        Err(err.with_context(found).into())
    }

    /// Consume the current byte if it is one of `set`.
    pub fn match_char_in(&mut self, set: &str) -> Result<bool, CursorError> {
        if !self.test_char_in(set) {
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }

    /// Consume one byte of `set` or fail.
    ///
    /// Without a `message`, the error reads
    /// `expected one of '<set>' but found '<excerpt>'`.
    pub fn match_char_in_or_fail(
        &mut self,
        set: &str,
        message: Option<&str>,
    ) -> Result<(), LexError> {
        if self.match_char_in(set)? {
            return Ok(());
        }
        let found = self.context(self.options().context_width)?;
        let message = match message {
            Some(message) => message.to_owned(),
            None => format!("expected one of '{set}' but found '{found}'"),
        };
        Err(self.error_at(ErrorCode::E1001, message)?.into())
    }

    /// Length of `text` if the input continues with it, without consuming.
    pub fn test_literal(&mut self, text: &str) -> Result<Option<usize>, CursorError> {
        let saved = self.snapshot();
        let matched = self.consume_literal(text.as_bytes());
        self.restore(saved)?;
        Ok(matched?.then_some(text.len()))
    }

    /// Whether the current byte is one of `set`.
    ///
    /// Reads only the live state, so it cannot move the cursor.
    pub fn test_char_in(&self, set: &str) -> bool {
        self.current()
            .is_some_and(|byte| memchr::memchr(byte, set.as_bytes()).is_some())
    }

    /// Consume the longest run of bytes satisfying `pred` and return it.
    ///
    /// An empty run leaves the cursor where it was.
    pub fn match_while(&mut self, pred: impl Fn(u8) -> bool) -> Result<Vec<u8>, CursorError> {
        let mut lexeme = Vec::new();
        while let Some(byte) = self.current().filter(|&b| pred(b)) {
            lexeme.push(byte);
            self.advance()?;
        }
        Ok(lexeme)
    }

    /// Walk `text` against the input. Leaves the cursor wherever the walk
    /// stopped; callers restore.
    fn consume_literal(&mut self, text: &[u8]) -> Result<bool, CursorError> {
        for &expected in text {
            if self.current() != Some(expected) {
                return Ok(false);
            }
            self.advance()?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
