/// Configuration options for the [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use markscan::{Scanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     header_sigil: '=',
///     ..Default::default()
/// };
/// let mut scanner = Scanner::with_options("notes", "= Title\n", options);
/// assert_eq!(scanner.next_token().text(), "=");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// The character that introduces a header when it starts a paragraph.
    ///
    /// A run of several sigils is a single header marker; its length is the
    /// header level. Any `char` works, multi-byte ones included.
    ///
    /// # Default
    ///
    /// `'#'`
    pub header_sigil: char,

    /// The longest sigil run accepted as a header marker.
    ///
    /// A longer run ends the scan with a
    /// [`LexicalError`](crate::LexicalError). `None` accepts runs of any
    /// length.
    ///
    /// # Default
    ///
    /// `None`
    pub max_header_level: Option<usize>,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            header_sigil: '#',
            max_header_level: None,
        }
    }
}
