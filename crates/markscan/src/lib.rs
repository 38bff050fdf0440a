//! A pull-based scanner for a minimal markup made of paragraphs and headers.
//!
//! Paragraphs are separated by blank lines. A paragraph that starts with a
//! run of header sigils (`#` by default) is a header: the run becomes a
//! [`TokenKind::HeaderMarker`] token and the rest of the line, leading
//! blanks dropped, a [`TokenKind::Text`] token.
//!
//! ```rust
//! use markscan::{Scanner, TokenKind};
//!
//! let kinds: Vec<_> = Scanner::new("doc", "par one\n\n# header\n\npar two")
//!     .map(|token| token.kind())
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Text,
//!         TokenKind::HeaderMarker,
//!         TokenKind::Text,
//!         TokenKind::Text,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod scanner;
mod token;

#[cfg(test)]
mod tests;

pub use error::LexicalError;
pub use options::ScannerOptions;
pub use scanner::{Scanner, tokenize, tokenize_with_options};
pub use token::{Token, TokenKind};
