//! Cursor configuration.

/// Number of bytes shown after the failure point in diagnostics.
pub const DEFAULT_CONTEXT_WIDTH: usize = 10;

/// Tunables for a [`StreamCursor`](crate::StreamCursor).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CursorOptions {
    /// Width of the input excerpt embedded in syntax errors.
    pub context_width: usize,
}

impl CursorOptions {
    #[must_use]
    pub fn with_context_width(mut self, context_width: usize) -> Self {
        self.context_width = context_width;
        self
    }
}

impl Default for CursorOptions {
    fn default() -> Self {
        CursorOptions {
            context_width: DEFAULT_CONTEXT_WIDTH,
        }
    }
}
