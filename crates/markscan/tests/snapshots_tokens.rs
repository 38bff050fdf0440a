#![allow(missing_docs)]

mod common;

use common::{RELEASE_NOTES, render_display, render_kinds};
use markscan::{Scanner, ScannerOptions, tokenize, tokenize_with_options};

#[test]
fn snapshot_release_notes() {
    let tokens = tokenize("release-notes.md", RELEASE_NOTES).expect("scan error");
    insta::assert_snapshot!(render_kinds(&tokens), @r###"
    HeaderMarker "#"
    Text "Release notes"
    Text "Version 2 brings a faster scanner.\nIt also fixes two bugs."
    HeaderMarker "##"
    Text "Known issues"
    Text "Unicode headers like ### 日本語 stay inline."
    Text "\tIndented text is kept verbatim.\n"
    EndOfInput ""
    "###);
}

#[test]
fn snapshot_display() {
    let long = format!("# Title\n\n{}", "Lorem ipsum ".repeat(10));
    let tokens: Vec<_> = Scanner::new("display", &long).collect();
    insta::assert_snapshot!(render_display(&tokens), @r###"
    "#"
    "Title"
    "Lorem ipsu"...
    EOF
    "###);
}

#[test]
fn snapshot_level_limit_error() {
    let options = ScannerOptions {
        max_header_level: Some(1),
        ..Default::default()
    };
    let tokens: Vec<_> =
        Scanner::with_options("release-notes.md", RELEASE_NOTES, options).collect();
    insta::assert_snapshot!(render_kinds(&tokens), @r###"
    HeaderMarker "#"
    Text "Release notes"
    Text "Version 2 brings a faster scanner.\nIt also fixes two bugs."
    Error "release-notes.md:7:1: header level 2 exceeds maximum of 1"
    "###);

    let err = tokenize_with_options("release-notes.md", RELEASE_NOTES, options).unwrap_err();
    assert_eq!((err.line(), err.column()), (7, 1));
}

#[test]
fn pull_api_matches_iterator() {
    let mut scanner = Scanner::new("pull", RELEASE_NOTES);
    let mut pulled = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is_terminal();
        pulled.push(token);
        if done {
            break;
        }
    }
    assert_eq!(pulled, tokenize("pull", RELEASE_NOTES).unwrap());
    assert!(scanner.is_terminated());
    assert_eq!(scanner.next_token(), *pulled.last().unwrap());
}
