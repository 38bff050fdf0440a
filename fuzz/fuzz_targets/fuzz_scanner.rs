#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use markscan::{Scanner, ScannerOptions, TokenKind};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Pick a non-ASCII sigil half of the time.
    multibyte_sigil: bool,
    max_header_level: Option<u8>,
    text: String,
}

fn scan(input: Input) {
    let options = ScannerOptions {
        header_sigil: if input.multibyte_sigil { '§' } else { '#' },
        max_header_level: input.max_header_level.map(usize::from),
    };
    let text = input.text.as_str();
    let mut scanner = Scanner::with_options("fuzz", text, options);

    // Every non-terminal token covers at least one byte.
    let mut last = None;
    for _ in 0..=text.len() {
        let token = scanner.next_token();
        if token.is_terminal() {
            last = Some(token);
            break;
        }
        assert!(!token.text().is_empty(), "empty token {token:?}");
        let offset = token.text().as_ptr() as usize - text.as_ptr() as usize;
        assert!(offset + token.text().len() <= text.len());
    }

    let last = last.expect("scan did not terminate");
    assert_eq!(scanner.next_token(), last, "terminal token changed");
    assert_eq!(last.kind() == TokenKind::Error, scanner.error().is_some());
}

fuzz_target!(|input: Input| scan(input));
