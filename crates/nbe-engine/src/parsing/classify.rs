use std::sync::OnceLock;

use regex::Regex;

use crate::language::CommentFamily;

/// Classification of a single source line, independent of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Empty,
    /// Code.
    Normal,
    /// A line that starts with a line comment.
    SingleComment,
    /// A line that starts a block comment which is not closed on the same line.
    OpenMultiComment,
    /// A line containing a block comment close marker.
    CloseMultiComment,
}

fn shebang() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#!").expect("Invalid shebang regex"))
}

fn hash_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*#").expect("Invalid hash comment regex"))
}

fn line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*//").expect("Invalid line comment regex"))
}

fn block_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*/\*").expect("Invalid block comment regex"))
}

const BLOCK_CLOSE: &str = "*/";

impl CommentFamily {
    /// Classifies one line (without its terminator).
    ///
    /// Each line is looked at in isolation using start-of-line markers, so a block comment
    /// that opens after code on the same line is not detected. Example sources are expected
    /// to be conventionally formatted.
    pub fn classify(self, line: &str) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Empty;
        }
        match self {
            CommentFamily::Hash => classify_hash(line),
            CommentFamily::Brace => classify_brace(line),
        }
    }
}

fn classify_hash(line: &str) -> LineKind {
    if shebang().is_match(line) {
        return LineKind::Normal;
    }
    if hash_comment().is_match(line) {
        return LineKind::SingleComment;
    }
    LineKind::Normal
}

fn classify_brace(line: &str) -> LineKind {
    if line_comment().is_match(line) {
        return LineKind::SingleComment;
    }
    if let Some(open) = block_open().find(line) {
        // Inline block comment, e.g. `func foo(a int /*, b int */)`.
        if line[open.end()..].contains(BLOCK_CLOSE) {
            return LineKind::Normal;
        }
        return LineKind::OpenMultiComment;
    }
    if line.contains(BLOCK_CLOSE) {
        return LineKind::CloseMultiComment;
    }
    LineKind::Normal
}
