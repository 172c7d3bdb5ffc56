use serde::Serialize;

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Only blank lines seen so far.
    Empty,
    Code,
    SingleLineComment,
    MultiLineComment,
}

/// A maximal run of contiguous lines sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// 1-based, inclusive.
    pub start_line: usize,
    /// 1-based, inclusive.
    pub end_line: usize,
    /// The literal lines, blank lines included, without terminators.
    pub lines: Vec<String>,
}

impl Block {
    pub(crate) fn open(kind: BlockKind, line_no: usize) -> Self {
        Self {
            kind,
            start_line: line_no,
            end_line: line_no,
            lines: Vec::new(),
        }
    }

    /// The block's lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
