use std::path::PathBuf;

use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

use crate::language::Language;
use crate::parsing::Block;

/// The whole loaded example tree.
#[derive(Debug, Clone, Serialize)]
pub struct Root {
    pub path: PathBuf,
    pub categories: Vec<Category>,
}

/// A named grouping of examples. Never holds an example without implementations.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    pub path: PathBuf,
    pub relative_path: RelativePathBuf,
    pub title: String,
    pub description: String,
    pub examples: Vec<Example>,
}

/// One topic, realized in one or more languages.
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub name: String,
    pub path: PathBuf,
    pub relative_path: RelativePathBuf,
    pub title: String,
    pub description: String,
    pub implementations: Vec<Implementation>,
}

/// One language's realization of an example, with its entry file split into blocks.
#[derive(Debug, Clone, Serialize)]
pub struct Implementation {
    pub name: String,
    pub path: PathBuf,
    pub relative_path: RelativePathBuf,
    pub language: Language,
    pub entry_file: String,
    pub blocks: Vec<Block>,
}

impl Root {
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Looks up an implementation by its `category/example/implementation` path.
    pub fn find(&self, path: &RelativePath) -> Option<&Implementation> {
        let mut parts = path.iter();
        let (Some(category), Some(example), Some(implementation), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        self.category(category)?
            .example(example)?
            .implementation(implementation)
    }

    /// Every implementation in tree order.
    pub fn implementations(&self) -> impl Iterator<Item = &Implementation> + '_ {
        self.categories
            .iter()
            .flat_map(|c| c.examples.iter())
            .flat_map(|e| e.implementations.iter())
    }

    pub fn example_count(&self) -> usize {
        self.categories.iter().map(|c| c.examples.len()).sum()
    }
}

impl Category {
    pub fn example(&self, name: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.name == name)
    }
}

impl Example {
    pub fn implementation(&self, name: &str) -> Option<&Implementation> {
        self.implementations.iter().find(|i| i.name == name)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.implementations.iter().map(|i| i.language)
    }
}

impl Implementation {
    /// Path to the entry file on disk.
    pub fn entry_path(&self) -> PathBuf {
        self.path.join(&self.entry_file)
    }

    /// The block lines joined with `\n`. Line terminators are not kept, so a trailing
    /// newline in the entry file is not reproduced.
    pub fn source(&self) -> String {
        self.blocks
            .iter()
            .flat_map(|b| b.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Default display title for a directory name: the first letter of every word is
/// upper-cased. Words are runs of letters, digits and `_`; whitespace and ASCII
/// punctuation separate them.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = is_word_separator(ch);
    }
    out
}

fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        !(ch.is_ascii_alphanumeric() || ch == '_')
    } else {
        ch.is_whitespace()
    }
}
