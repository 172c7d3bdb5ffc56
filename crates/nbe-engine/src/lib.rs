pub mod io;
pub mod language;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{LoadError, Loader, load_examples};
pub use language::{CommentFamily, Language, Languages};
pub use models::{Category, Example, Implementation, Root};
pub use parsing::{Block, BlockKind, ParseError, parse_source};
