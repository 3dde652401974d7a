use crate::errors::{FsError, FsOperation};
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TreeError {
    #[error("unable to read tree manifest")]
    #[diagnostic(code(armature::tree::io))]
    Io(#[from] FsError),

    #[error("tree manifest at '{path}' is not a valid TOML tree")]
    #[diagnostic(
        code(armature::tree::parse),
        help("A string value is a file, a table is a directory.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A single named entry in a tree description.
///
/// The file/directory distinction is an explicit variant: a file carries its
/// literal initial content, a directory carries its children. When
/// deserializing from a TOML manifest, a string value is a file and a table
/// is a directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    File(String),
    Dir(Tree),
}

/// A nested description of a directory tree, keyed by entry name.
///
/// Sibling names are unique by construction (it is a map) and insertion
/// order is preserved, though nothing in materialization depends on sibling
/// order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tree(pub IndexMap<String, Entry>); // https://www.howtocodeit.com/articles/ultimate-guide-rust-newtypes

impl Tree {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds a file entry with the given initial content.
    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.0.insert(name.to_string(), Entry::File(content.to_string()));
        self
    }

    /// Adds a directory entry with the given children.
    pub fn with_dir(mut self, name: &str, children: Tree) -> Self {
        self.0.insert(name.to_string(), Entry::Dir(children));
        self
    }

    /// Number of file entries, recursively.
    pub fn file_count(&self) -> usize {
        self.0
            .values()
            .map(|entry| match entry {
                Entry::File(_) => 1,
                Entry::Dir(children) => children.file_count(),
            })
            .sum()
    }

    /// Number of directory entries, recursively.
    pub fn dir_count(&self) -> usize {
        self.0
            .values()
            .map(|entry| match entry {
                Entry::File(_) => 0,
                Entry::Dir(children) => 1 + children.dir_count(),
            })
            .sum()
    }

    /// Reads a tree description from a TOML manifest.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if the manifest cannot be read or is not
    /// valid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| FsError::new(FsOperation::ReadManifest, path.to_path_buf(), error))?;

        let parsed = toml::from_str(&content).map_err(|error| TreeError::Parse {
            path: path.to_path_buf(),
            source: error,
        })?;

        Ok(parsed)
    }
}
