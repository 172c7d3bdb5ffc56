use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use relative_path::{RelativePath, RelativePathBuf};

use super::{LoadError, order_children, read_meta, subdirectories, validate_examples_dir};
use crate::language::Languages;
use crate::models::{
    Category, CategoryMeta, Example, ExampleMeta, Implementation, Root, RootMeta, meta::title_or,
    title_case,
};
use crate::parsing::parse_source;

/// Loads `path` as an examples root using the default language tables.
pub fn load_examples(path: impl AsRef<Path>) -> Result<Root, LoadError> {
    Loader::new().load_root(path)
}

/// Walks an examples directory: root → category → example → implementation.
///
/// Each level reads its optional `meta.yaml`, loads its subdirectories one level down,
/// drops children without content and orders the rest.
#[derive(Debug, Clone, Copy)]
pub struct Loader<'a> {
    languages: &'a Languages,
}

impl Loader<'static> {
    pub fn new() -> Self {
        Self {
            languages: Languages::global(),
        }
    }
}

impl Default for Loader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Loader<'a> {
    pub fn with_languages(languages: &'a Languages) -> Self {
        Self { languages }
    }

    pub fn load_root(&self, path: impl AsRef<Path>) -> Result<Root, LoadError> {
        let path = path.as_ref();
        validate_examples_dir(path)?;
        let meta: RootMeta = read_meta(path)?;

        let mut categories = BTreeMap::new();
        for (name, dir) in subdirectories(path)? {
            let category = self.load_category(&dir, RelativePathBuf::from(name.as_str()))?;
            if category.examples.is_empty() {
                log::debug!("{}: no examples, dropping category", dir.display());
                continue;
            }
            categories.insert(name, category);
        }

        Ok(Root {
            path: path.to_path_buf(),
            categories: order_children(categories, &meta.categories, path),
        })
    }

    pub fn load_category(
        &self,
        path: &Path,
        relative_path: RelativePathBuf,
    ) -> Result<Category, LoadError> {
        let name = dir_name(&relative_path);
        let meta: CategoryMeta = read_meta(path)?;

        let mut examples = BTreeMap::new();
        for (child, dir) in subdirectories(path)? {
            let example = self.load_example(&dir, relative_path.join(&child))?;
            if example.implementations.is_empty() {
                log::debug!("{}: no implementations, dropping example", dir.display());
                continue;
            }
            examples.insert(child, example);
        }

        Ok(Category {
            title: title_or(meta.title, || title_case(&name)),
            description: meta.description.unwrap_or_default(),
            examples: order_children(examples, &meta.examples, path),
            name,
            path: path.to_path_buf(),
            relative_path,
        })
    }

    /// Loads an example and its implementations, ordered by directory name.
    ///
    /// Implementation directories without an entry file are skipped with a warning; any
    /// other implementation error fails the example.
    pub fn load_example(
        &self,
        path: &Path,
        relative_path: RelativePathBuf,
    ) -> Result<Example, LoadError> {
        let name = dir_name(&relative_path);
        let meta: ExampleMeta = read_meta(path)?;

        let mut implementations = Vec::new();
        for (child, dir) in subdirectories(path)? {
            match self.load_implementation(&dir, relative_path.join(&child)) {
                Ok(implementation) => implementations.push(implementation),
                Err(e) if e.is_entry_file_missing() => {
                    log::warn!("{}: no entry file, skipping", dir.display());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Example {
            title: title_or(meta.title, || title_case(&name)),
            description: meta.description.unwrap_or_default(),
            implementations,
            name,
            path: path.to_path_buf(),
            relative_path,
        })
    }

    /// Loads one implementation: resolves the language from the directory name, then
    /// parses the language's entry file into blocks.
    pub fn load_implementation(
        &self,
        path: &Path,
        relative_path: RelativePathBuf,
    ) -> Result<Implementation, LoadError> {
        let name = dir_name(&relative_path);
        let language = self.languages.resolve(&name);

        let Some(entry_file) = self.languages.entry_file(language) else {
            return Err(LoadError::UnsupportedLanguage {
                path: path.to_path_buf(),
                language,
            });
        };

        let entry_path = path.join(entry_file);
        let bytes = match fs::read(&entry_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::EntryFileNotFound(entry_path));
            }
            Err(source) => {
                return Err(LoadError::ReadEntryFile {
                    path: entry_path,
                    source,
                });
            }
        };

        let source = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = source {
            log::warn!(
                "{}: not valid UTF-8, undecodable bytes replaced",
                entry_path.display()
            );
        }

        let blocks = parse_source(language.comment_family(), &source).map_err(|source| {
            LoadError::Parse {
                path: entry_path,
                source,
            }
        })?;
        log::debug!(
            "{}: {} as {language}, {} blocks",
            path.display(),
            entry_file,
            blocks.len()
        );

        Ok(Implementation {
            name,
            path: path.to_path_buf(),
            relative_path,
            language,
            entry_file: entry_file.to_string(),
            blocks,
        })
    }
}

fn dir_name(relative_path: &RelativePath) -> String {
    relative_path.file_name().unwrap_or_default().to_string()
}
