use alloc::{borrow::Cow, string::String};
use core::fmt;

/// The kind of a scanned [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// A run of one or more header sigils at the start of a paragraph.
    HeaderMarker,
    /// Paragraph text, or the text of a header line.
    Text,
    /// End of input. Always the last token of a successful scan.
    EndOfInput,
    /// A lexical error. The token text is the error message.
    Error,
}

/// One token produced by the [`Scanner`](crate::Scanner).
///
/// For [`TokenKind::HeaderMarker`] and [`TokenKind::Text`] the text is the
/// exact, non-empty slice of the input the token covers, borrowed from the
/// input. [`TokenKind::EndOfInput`] carries an empty text and
/// [`TokenKind::Error`] an owned message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    kind: TokenKind,
    text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    /// Creates a token from its parts.
    ///
    /// ```rust
    /// use markscan::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::HeaderMarker, "##");
    /// assert_eq!(token.header_level(), Some(2));
    /// ```
    pub fn new(kind: TokenKind, text: impl Into<Cow<'src, str>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input token.
    #[must_use]
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    /// The kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The input slice this token covers, or the message of an error token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the token, returning its text.
    #[must_use]
    pub fn into_text(self) -> Cow<'src, str> {
        self.text
    }

    /// Returns `true` for [`TokenKind::EndOfInput`] and [`TokenKind::Error`].
    ///
    /// A scanner never produces anything but repeats of its terminal token.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput | TokenKind::Error)
    }

    /// Number of sigils in a header marker, `None` for every other kind.
    #[must_use]
    pub fn header_level(&self) -> Option<usize> {
        match self.kind {
            TokenKind::HeaderMarker => Some(self.text.chars().count()),
            _ => None,
        }
    }
}

/// Longest text rendered in full by `Display`; longer texts are elided.
const DISPLAY_MAX_BYTES: usize = 80;
/// Characters kept when a text is elided.
const DISPLAY_HEAD_CHARS: usize = 10;

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Error => f.write_str(&self.text),
            _ if self.text.len() > DISPLAY_MAX_BYTES => {
                let head: String = self.text.chars().take(DISPLAY_HEAD_CHARS).collect();
                write!(f, "{head:?}...")
            }
            _ => write!(f, "{:?}", self.text),
        }
    }
}
