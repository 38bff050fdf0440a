//! Rune cursor over the scanned input.
//!
//! The cursor tracks two byte offsets into the input: `start`, where the
//! lexeme being accumulated begins, and `pos`, the read position. Both always
//! sit on `char` boundaries and `start <= pos` holds at all times; every
//! method that moves `pos` moves it by whole UTF-8 sequences.

/// Byte-offset cursor with a lexeme anchor.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    input: &'src str,
    start: usize,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(input: &'src str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
        }
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Unread input from the cursor on.
    pub(crate) fn rest(&self) -> &'src str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Decodes the char at the cursor and steps over it.
    ///
    /// Returns `None` once the cursor is at (or past) the end of input; the
    /// cursor does not move in that case.
    pub(crate) fn next_char(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Steps over chars while `pred` holds, returning how many were skipped.
    pub(crate) fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
            count += 1;
        }
        count
    }

    /// Moves the cursor onto the next `needle`, or to the end of input when
    /// there is none. The needle itself is not consumed.
    pub(crate) fn skip_until(&mut self, needle: char) {
        let rest = self.rest();
        self.pos += rest.find(needle).unwrap_or(rest.len());
    }

    /// Whether the span `start..pos` holds anything.
    pub(crate) fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    /// Drops the span `start..pos`.
    pub(crate) fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Returns the span `start..pos` and moves `start` up to `pos`.
    pub(crate) fn take(&mut self) -> &'src str {
        let lexeme = self.input.get(self.start..self.pos).unwrap_or_default();
        self.start = self.pos;
        lexeme
    }

    /// 1-based line and column (in chars) of the byte `offset`.
    pub(crate) fn line_col(&self, offset: usize) -> (usize, usize) {
        let before = self.input.get(..offset).unwrap_or(self.input);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line = before.matches('\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}
