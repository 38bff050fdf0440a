use alloc::string::String;

use thiserror::Error;

/// The single error kind a scan can end with.
///
/// A scan that fails is finished: the scanner delivers one
/// [`TokenKind::Error`](crate::TokenKind::Error) token whose text is this
/// error's `Display` output, and keeps returning that token afterwards.
/// Tokens delivered before the error stay valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}:{line}:{column}: {message}")]
pub struct LexicalError {
    pub(crate) name: String,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) message: String,
}

impl LexicalError {
    /// Name of the scan session the error came from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based line of the offending lexeme.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column, counted in characters, of the offending lexeme.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The message without the `name:line:column` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
