use super::{
    ParseError,
    classify::LineKind,
    types::{Block, BlockKind},
};

/// Groups classified lines into contiguous blocks.
///
/// The kind of the open block is the builder's state. Blank lines never start a block on
/// their own; they extend whatever block is open. After a block comment closes, the next
/// line always starts a fresh block.
pub struct BlockBuilder {
    current: Option<Block>,
    line_no: usize,
    comment_closed: bool,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            current: None,
            line_no: 0,
            comment_closed: false,
            out: vec![],
        }
    }

    /// Feeds the next line of the file along with its classification.
    pub fn push(&mut self, line: &str, kind: LineKind) -> Result<(), ParseError> {
        self.line_no += 1;
        let line_no = self.line_no;

        if std::mem::take(&mut self.comment_closed) || self.current.is_none() {
            self.start(BlockKind::Empty);
        }

        let state = self.state();
        match (state, kind) {
            (_, LineKind::Empty) => {}

            (BlockKind::Empty, LineKind::Normal) => self.retag(BlockKind::Code),
            (BlockKind::Empty, LineKind::SingleComment) => {
                self.retag(BlockKind::SingleLineComment)
            }
            (BlockKind::Empty, LineKind::OpenMultiComment) => {
                self.retag(BlockKind::MultiLineComment)
            }

            (BlockKind::Code, LineKind::Normal) => {}
            (BlockKind::Code, LineKind::SingleComment) => {
                self.start(BlockKind::SingleLineComment)
            }
            (BlockKind::Code, LineKind::OpenMultiComment) => {
                self.start(BlockKind::MultiLineComment)
            }
            // A stray close marker in code is left as code text.
            (BlockKind::Code, LineKind::CloseMultiComment) => {}

            (BlockKind::SingleLineComment, LineKind::Normal) => self.start(BlockKind::Code),
            (BlockKind::SingleLineComment, LineKind::SingleComment)
            | (BlockKind::SingleLineComment, LineKind::OpenMultiComment) => {}

            (BlockKind::MultiLineComment, LineKind::CloseMultiComment) => {
                self.comment_closed = true;
            }
            (BlockKind::MultiLineComment, _) => {}

            (BlockKind::Empty, LineKind::CloseMultiComment)
            | (BlockKind::SingleLineComment, LineKind::CloseMultiComment) => {
                return Err(ParseError::UnexpectedCommentClose {
                    line: line_no,
                    state,
                });
            }
        }

        if let Some(block) = self.current.as_mut() {
            block.lines.push(line.to_string());
            block.end_line = line_no;
        }
        Ok(())
    }

    /// Closes the open block at the last line consumed.
    ///
    /// An unterminated block comment simply runs to the end of the file.
    pub fn finish(mut self) -> Vec<Block> {
        if let Some(block) = self.current.take() {
            self.out.push(block);
        }
        self.out
    }

    fn state(&self) -> BlockKind {
        self.current
            .as_ref()
            .map_or(BlockKind::Empty, |block| block.kind)
    }

    fn start(&mut self, kind: BlockKind) {
        if let Some(prev) = self.current.take() {
            self.out.push(prev);
        }
        self.current = Some(Block::open(kind, self.line_no));
    }

    fn retag(&mut self, kind: BlockKind) {
        if let Some(block) = self.current.as_mut() {
            block.kind = kind;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
