mod loader;

pub use loader::{Loader, load_examples};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::language::Language;
use crate::models::META_FILE;
use crate::parsing::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Entry file not found: {0}")]
    EntryFileNotFound(PathBuf),
    #[error("{path}: language {language:?} not yet supported")]
    UnsupportedLanguage { path: PathBuf, language: Language },
    #[error("Failed to read entry file {path}: {source}")]
    ReadEntryFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("Failed to read metadata {path}: {source}")]
    ReadMeta {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse metadata {path}: {source}")]
    ParseMeta {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid examples directory: {0}")]
    InvalidRoot(PathBuf),
}

impl LoadError {
    /// True for the one recoverable condition: an implementation directory without its
    /// entry file. The example loader skips such directories.
    pub fn is_entry_file_missing(&self) -> bool {
        matches!(self, LoadError::EntryFileNotFound(_))
    }
}

/// Reads the optional `meta.yaml` in `dir`, returning defaults when absent.
pub fn read_meta<T: DeserializeOwned + Default>(dir: &Path) -> Result<T, LoadError> {
    let path = dir.join(META_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => return Err(LoadError::ReadMeta { path, source }),
    };

    // An empty or null document carries no keys.
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str::<Option<T>>(&content)
        .map(Option::unwrap_or_default)
        .map_err(|source| LoadError::ParseMeta { path, source })
}

/// Lists the immediate, non-hidden subdirectories of `dir`, sorted by name.
pub fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>, LoadError> {
    let read_dir_err = |source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("{}: directory name is not valid UTF-8, skipping", path.display());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        dirs.push((name, path));
    }
    dirs.sort();
    Ok(dirs)
}

/// Orders loaded children: names listed in `order` first, in that order, then the rest by
/// name. Listed names that were not loaded are skipped.
pub fn order_children<T>(mut loaded: BTreeMap<String, T>, order: &[String], dir: &Path) -> Vec<T> {
    let mut out = Vec::with_capacity(loaded.len());
    for name in order {
        match loaded.remove(name) {
            Some(child) => out.push(child),
            None => log::warn!(
                "{}: {META_FILE} lists {name:?}, which is missing, empty or listed twice",
                dir.display()
            ),
        }
    }
    out.extend(loaded.into_values());
    out
}

pub fn validate_examples_dir(path: &Path) -> Result<(), LoadError> {
    if !path.is_dir() {
        return Err(LoadError::InvalidRoot(path.to_path_buf()));
    }
    Ok(())
}
