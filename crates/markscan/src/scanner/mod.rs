//! Scanner: the pull-driven state machine behind the token stream.
//!
//! Overview
//! - The scanner holds the whole input, a [`Cursor`] over it, the state to
//!   run next and a small FIFO of tokens that were recognized but not yet
//!   handed out.
//! - [`Scanner::next_token`] first drains that FIFO. Only when it is empty
//!   does it run the current state, which scans some input, queues zero or
//!   more tokens and picks the following state. Nothing is scanned ahead of
//!   demand.
//! - One state run queues at most two tokens (trailing text immediately
//!   followed by end of input), so the FIFO never holds more than two.
//!
//! States
//! - `LineStart`: skips newline runs, then dispatches on the header sigil.
//! - `PlainText`: accumulates up to a blank line or end of input.
//! - `HeaderMarker`: the sigil run.
//! - `HeaderText`: the rest of the header line, leading blanks dropped.
//!
//! Termination
//! - Once end of input or an error has been queued the state is cleared.
//!   After the terminal token is delivered every further call returns a
//!   copy of it; the [`Iterator`] impl instead ends with `None`.

mod cursor;

use alloc::{collections::VecDeque, string::String, string::ToString, vec::Vec};
use core::{fmt, iter::FusedIterator};

use cursor::Cursor;
use tracing::{debug, trace};

use crate::{LexicalError, ScannerOptions, Token, TokenKind};

/// Two newlines end a paragraph.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Upper bound on tokens queued by a single state run.
const MAX_PENDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    LineStart,
    PlainText,
    HeaderMarker,
    HeaderText,
}

/// Pull-based scanner over a complete input text.
///
/// `Scanner` implements [`Iterator`], yielding every token up to and
/// including the terminal one ([`TokenKind::EndOfInput`] or
/// [`TokenKind::Error`]) and then `None`.
///
/// # Examples
///
/// ```rust
/// use markscan::{Scanner, Token, TokenKind};
///
/// let mut scanner = Scanner::new("readme", "# Title\n\nBody text");
/// assert_eq!(scanner.next_token(), Token::new(TokenKind::HeaderMarker, "#"));
/// assert_eq!(scanner.next_token(), Token::new(TokenKind::Text, "Title"));
/// assert_eq!(scanner.next_token(), Token::new(TokenKind::Text, "Body text"));
/// assert_eq!(scanner.next_token(), Token::end_of_input());
/// // Terminal tokens repeat.
/// assert_eq!(scanner.next_token(), Token::end_of_input());
/// ```
#[derive(Debug)]
pub struct Scanner<'src> {
    /// Used only in error reports.
    name: String,
    options: ScannerOptions,
    cursor: Cursor<'src>,

    /// State to run next; `None` once the scan has ended.
    state: Option<State>,
    /// Tokens recognized but not yet delivered, oldest first.
    pending: VecDeque<Token<'src>>,

    /// The last token delivered, once it was a terminal one.
    terminal: Option<Token<'src>>,
    error: Option<LexicalError>,
    /// Set when the iterator has yielded the terminal token.
    exhausted: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner with default [`ScannerOptions`].
    ///
    /// `name` only shows up in error messages.
    pub fn new(name: impl Into<String>, input: &'src str) -> Self {
        Self::with_options(name, input, ScannerOptions::default())
    }

    /// Creates a scanner with the given options.
    pub fn with_options(name: impl Into<String>, input: &'src str, options: ScannerOptions) -> Self {
        Self {
            name: name.into(),
            options,
            cursor: Cursor::new(input),
            state: Some(State::LineStart),
            pending: VecDeque::with_capacity(MAX_PENDING),
            terminal: None,
            error: None,
            exhausted: false,
        }
    }

    /// Name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` once the terminal token has been delivered.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminal.is_some()
    }

    /// The error that ended the scan, if it failed.
    ///
    /// Set as soon as the failing state has run, which may be before the
    /// error token itself is delivered.
    #[must_use]
    pub fn error(&self) -> Option<&LexicalError> {
        self.error.as_ref()
    }

    /// Returns the next token, scanning only as far as needed to find it.
    ///
    /// After the terminal token has been returned, every further call
    /// returns that same token again.
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            debug_assert!(
                self.pending.len() <= MAX_PENDING,
                "more than {MAX_PENDING} tokens queued"
            );
            if let Some(token) = self.pending.pop_front() {
                if token.is_terminal() {
                    self.terminal = Some(token.clone());
                }
                return token;
            }

            match self.state {
                Some(state) => self.state = self.step(state),
                None => return self.terminal.clone().unwrap_or_else(Token::end_of_input),
            }
        }
    }

    fn step(&mut self, state: State) -> Option<State> {
        trace!(
            ?state,
            start = self.cursor.start(),
            pos = self.cursor.pos(),
            "scanner step"
        );
        match state {
            State::LineStart => self.lex_line_start(),
            State::PlainText => self.lex_plain_text(),
            State::HeaderMarker => self.lex_header_marker(),
            State::HeaderText => self.lex_header_text(),
        }
    }

    // ------------------------------------------------------------------------------------------------
    // States
    // ------------------------------------------------------------------------------------------------

    fn lex_line_start(&mut self) -> Option<State> {
        self.cursor.skip_while(|ch| ch == '\n');
        self.cursor.ignore();
        if self.cursor.peek() == Some(self.options.header_sigil) {
            Some(State::HeaderMarker)
        } else {
            Some(State::PlainText)
        }
    }

    fn lex_plain_text(&mut self) -> Option<State> {
        loop {
            if self.cursor.rest().starts_with(PARAGRAPH_BREAK) {
                if self.cursor.has_pending() {
                    self.emit(TokenKind::Text);
                }
                return Some(State::LineStart);
            }
            if self.cursor.next_char().is_none() {
                break;
            }
        }

        if self.cursor.has_pending() {
            self.emit(TokenKind::Text);
        }
        self.emit(TokenKind::EndOfInput);
        None
    }

    fn lex_header_marker(&mut self) -> Option<State> {
        let sigil = self.options.header_sigil;
        let level = self.cursor.skip_while(|ch| ch == sigil);
        if let Some(max) = self.options.max_header_level.filter(|&max| level > max) {
            return self.errorf(format_args!(
                "header level {level} exceeds maximum of {max}"
            ));
        }
        self.emit(TokenKind::HeaderMarker);
        Some(State::HeaderText)
    }

    fn lex_header_text(&mut self) -> Option<State> {
        self.cursor.skip_while(is_space);
        self.cursor.ignore();
        self.cursor.skip_until('\n');
        if self.cursor.has_pending() {
            self.emit(TokenKind::Text);
        }
        Some(State::LineStart)
    }

    // ------------------------------------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------------------------------------

    /// Queues the span `start..pos` as a token of `kind`.
    fn emit(&mut self, kind: TokenKind) {
        let text = self.cursor.take();
        trace!(?kind, text, "emit");
        self.pending.push_back(Token::new(kind, text));
    }

    /// Queues an error token for the lexeme at `start` and ends the scan.
    fn errorf(&mut self, args: fmt::Arguments<'_>) -> Option<State> {
        let (line, column) = self.cursor.line_col(self.cursor.start());
        let error = LexicalError {
            name: self.name.clone(),
            line,
            column,
            message: args.to_string(),
        };
        debug!(%error, "scan failed");
        self.pending
            .push_back(Token::new(TokenKind::Error, error.to_string()));
        self.error = Some(error);
        None
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        self.exhausted = token.is_terminal();
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

/// Scans `input` to the end and collects every token, the final
/// [`TokenKind::EndOfInput`] included.
///
/// # Errors
///
/// Returns the [`LexicalError`] that ended the scan, if any; the tokens
/// scanned before it are dropped.
///
/// # Examples
///
/// ```rust
/// use markscan::{tokenize, TokenKind};
///
/// let tokens = tokenize("memo", "go is fun\n\nrodents are gross").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds, [TokenKind::Text, TokenKind::Text, TokenKind::EndOfInput]);
/// ```
pub fn tokenize(name: impl Into<String>, input: &str) -> Result<Vec<Token<'_>>, LexicalError> {
    tokenize_with_options(name, input, ScannerOptions::default())
}

/// [`tokenize`] with explicit [`ScannerOptions`].
///
/// # Errors
///
/// Returns the [`LexicalError`] that ended the scan, if any.
pub fn tokenize_with_options(
    name: impl Into<String>,
    input: &str,
    options: ScannerOptions,
) -> Result<Vec<Token<'_>>, LexicalError> {
    let mut scanner = Scanner::with_options(name, input, options);
    let tokens = scanner.by_ref().collect();
    match scanner.error.take() {
        Some(error) => Err(error),
        None => Ok(tokens),
    }
}
