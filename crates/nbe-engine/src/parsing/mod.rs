//! # Source Parsing
//!
//! Splits an example's entry file into comment and code blocks.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each line is classified on its own into a
//!    [`LineKind`] using the [`CommentFamily`] of the file's language.
//! 2. **Block construction** (`builder`): a [`BlockBuilder`] walks the classified lines and
//!    groups them into [`Block`]s.
//!
//! ## Key Invariants
//!
//! - Blocks partition the file: line ranges cover `[1, N]` with no gap or overlap.
//! - Joining every block's lines in order reproduces the file.
//! - A block comment block is always followed by a block boundary.

pub mod builder;
pub mod classify;
pub mod invariants;
pub mod types;

use thiserror::Error;

use crate::language::CommentFamily;

pub use builder::BlockBuilder;
pub use classify::LineKind;
pub use types::{Block, BlockKind};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: comment close marker without matching open (in {state:?} block)")]
    UnexpectedCommentClose { line: usize, state: BlockKind },
}

/// Parses source text into blocks.
///
/// Lines are split on `\n`, with a trailing `\r` dropped, so CRLF files give the same
/// blocks as LF files.
pub fn parse_source(family: CommentFamily, source: &str) -> Result<Vec<Block>, ParseError> {
    let mut builder = BlockBuilder::new();
    for line in source.lines() {
        builder.push(line, family.classify(line))?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests;
