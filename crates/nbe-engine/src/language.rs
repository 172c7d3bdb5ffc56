//! # Languages
//!
//! Two immutable tables drive implementation loading:
//!
//! - the **recognized** identifiers, which decide how a directory name resolves to a
//!   [`Language`] (and therefore which [`CommentFamily`] classifies its source), and
//! - the **entry files**, mapping a language to the file that must exist in its directory.
//!
//! The entry-file table is a strict subset of the recognized set. A language that is
//! recognized but has no entry file is reported as unsupported by the loader rather than
//! being skipped.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

/// A recognized example language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Shell,
    Cli,
    Go,
    Rust,
    Java,
    CSharp,
    TypeScript,
    C,
    Python,
    Ruby,
    Elixir,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::Shell,
        Language::Cli,
        Language::Go,
        Language::Rust,
        Language::Java,
        Language::CSharp,
        Language::TypeScript,
        Language::C,
        Language::Python,
        Language::Ruby,
        Language::Elixir,
    ];

    /// Lower-case identifier, identical to the directory name that selects it.
    pub fn id(self) -> &'static str {
        match self {
            Language::Shell => "shell",
            Language::Cli => "cli",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::TypeScript => "typescript",
            Language::C => "c",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Elixir => "elixir",
        }
    }

    /// The comment syntax this language's source is classified with.
    pub fn comment_family(self) -> CommentFamily {
        match self {
            Language::Shell | Language::Cli | Language::Python | Language::Ruby | Language::Elixir => {
                CommentFamily::Hash
            }
            Language::Go
            | Language::Rust
            | Language::Java
            | Language::CSharp
            | Language::TypeScript
            | Language::C => CommentFamily::Brace,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Groups of languages sharing comment syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentFamily {
    /// `# comment`, with `#!` shebang lines treated as code.
    Hash,
    /// `// comment` and `/* ... */`.
    Brace,
}

/// The recognized-identifier and entry-file tables.
#[derive(Debug, Clone)]
pub struct Languages {
    recognized: BTreeMap<String, Language>,
    entry_files: BTreeMap<Language, String>,
}

impl Languages {
    /// Language used for directory names that are not recognized identifiers.
    pub const FALLBACK: Language = Language::Shell;

    pub fn new(
        recognized: impl IntoIterator<Item = Language>,
        entry_files: impl IntoIterator<Item = (Language, String)>,
    ) -> Self {
        Self {
            recognized: recognized
                .into_iter()
                .map(|lang| (lang.id().to_string(), lang))
                .collect(),
            entry_files: entry_files.into_iter().collect(),
        }
    }

    /// The process-wide default tables, built on first use.
    pub fn global() -> &'static Languages {
        static LANGUAGES: OnceLock<Languages> = OnceLock::new();
        LANGUAGES.get_or_init(Languages::default)
    }

    /// Resolves a directory name to a language, case-insensitively.
    ///
    /// Names that are not recognized fall back to [`Languages::FALLBACK`].
    pub fn resolve(&self, name: &str) -> Language {
        self.recognized
            .get(&name.to_lowercase())
            .copied()
            .unwrap_or(Self::FALLBACK)
    }

    pub fn is_recognized(&self, name: &str) -> bool {
        self.recognized.contains_key(&name.to_lowercase())
    }

    /// The entry file name for a language, if one has been assigned.
    pub fn entry_file(&self, language: Language) -> Option<&str> {
        self.entry_files.get(&language).map(String::as_str)
    }

    pub fn entry_files(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
        self.entry_files
            .iter()
            .map(|(lang, file)| (*lang, file.as_str()))
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(
            Language::ALL,
            [
                (Language::Go, "main.go"),
                (Language::Python, "main.py"),
                (Language::Cli, "main.sh"),
                (Language::Shell, "main.sh"),
            ]
            .map(|(lang, file)| (lang, file.to_string())),
        )
    }
}
