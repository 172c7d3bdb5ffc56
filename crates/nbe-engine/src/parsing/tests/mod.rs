//! Tests for the parsing module.
//!
//! Block sequences are rendered as `Kind start-end` lines and compared with inline
//! `insta` snapshots.

use rstest::rstest;

use crate::language::{CommentFamily, Language};
use crate::parsing::{BlockKind, invariants, parse_source};

use super::types::Block;

fn render(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| format!("{:?} {}-{}", b.kind, b.start_line, b.end_line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_checked(family: CommentFamily, source: &str) -> Vec<Block> {
    let blocks = parse_source(family, source).unwrap();
    invariants::check(source, &blocks);
    blocks
}

#[test]
fn brace_comments_and_code() {
    let source = "// comment1\n// comment2\ncode1\n/* ml\nmore\n*/\ncode2\n";
    let blocks = parse_checked(CommentFamily::Brace, source);
    insta::assert_snapshot!(render(&blocks), @r"
    SingleLineComment 1-2
    Code 3-3
    MultiLineComment 4-6
    Code 7-7
    ");
}

#[test]
fn shell_with_shebang() {
    let source = "#!/bin/sh\n# a comment\necho hi\n";
    let blocks = parse_checked(CommentFamily::Hash, source);
    insta::assert_snapshot!(render(&blocks), @r"
    Code 1-1
    SingleLineComment 2-2
    Code 3-3
    ");
    assert_eq!(blocks[0].lines, vec!["#!/bin/sh"]);
}

#[test]
fn go_example() {
    let source = r#"package main

// Import the NATS client.
import (
	"fmt"

	"github.com/nats-io/nats.go"
)

/*
The connection is established with the default URL.

Errors are ignored for brevity.
*/
func main() {
	nc, _ := nats.Connect(nats.DefaultURL /*, nats.Name("x") */)
	defer nc.Close()

	// Publish a message.
	nc.Publish("greet", []byte("hello"))
	fmt.Println("done")
}"#;
    let blocks = parse_checked(Language::Go.comment_family(), source);
    insta::assert_snapshot!(render(&blocks), @r"
    Code 1-2
    SingleLineComment 3-3
    Code 4-9
    MultiLineComment 10-14
    Code 15-18
    SingleLineComment 19-19
    Code 20-22
    ");
}

#[test]
fn python_example() {
    let source = "import asyncio\n\n# Connect and publish.\n# Then drain.\n\nasync def main():\n    pass\n";
    let blocks = parse_checked(Language::Python.comment_family(), source);
    insta::assert_snapshot!(render(&blocks), @r"
    Code 1-2
    SingleLineComment 3-5
    Code 6-7
    ");
}

#[test]
fn closed_comment_is_followed_by_boundary() {
    let source = "/* a\n*/\n/* b\n*/\n";
    let blocks = parse_checked(CommentFamily::Brace, source);
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.kind == BlockKind::MultiLineComment));
}

#[test]
fn empty_source_has_no_blocks() {
    assert!(parse_checked(CommentFamily::Brace, "").is_empty());
}

#[test]
fn syntax_error_reports_line() {
    let err = parse_source(CommentFamily::Brace, "// a\n// b\n*/\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 3: comment close marker without matching open (in SingleLineComment block)"
    );
}

#[test]
fn crlf_matches_lf() {
    let crlf = parse_source(CommentFamily::Brace, "// a\r\nx := 1\r\n\r\n/*\r\n*/\r\n").unwrap();
    let lf = parse_source(CommentFamily::Brace, "// a\nx := 1\n\n/*\n*/\n").unwrap();
    assert_eq!(crlf, lf);
    assert_eq!(crlf[0].lines, vec!["// a"]);
}

#[rstest]
#[case(CommentFamily::Brace, "x\n\n\n// c\n\ny\n/*\n\n*/\n\nz\n")]
#[case(CommentFamily::Brace, "/* unterminated\nfoo\nbar")]
#[case(CommentFamily::Brace, "\n\n\n")]
#[case(CommentFamily::Brace, "x\na /* inline */ b\n/* x */\n  // c\n")]
#[case(CommentFamily::Hash, "#!/usr/bin/env bash\n\n# one\n\n# two\nset -e\n  # three\n")]
#[case(CommentFamily::Hash, "no trailing newline")]
fn blocks_partition_source(#[case] family: CommentFamily, #[case] source: &str) {
    let blocks = parse_checked(family, source);
    let joined = blocks.iter().map(Block::text).collect::<Vec<_>>().join("\n");
    assert_eq!(joined, source.lines().collect::<Vec<_>>().join("\n"));
}
