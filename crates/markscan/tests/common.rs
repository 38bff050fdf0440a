#![allow(missing_docs)]
#![allow(dead_code)]

use markscan::Token;

pub const RELEASE_NOTES: &str = "# Release notes\n\nVersion 2 brings a faster scanner.\nIt also fixes two bugs.\n\n\n## Known issues\nUnicode headers like ### 日本語 stay inline.\n\n\tIndented text is kept verbatim.\n";

/// One token per line, as `Kind "text"`.
pub fn render_kinds(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| format!("{:?} {:?}", token.kind(), token.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One token per line, using the token's `Display`.
pub fn render_display(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
