//! File-backed lexicon storage.
//!
//! Persistence is an external collaborator of the scoring pipeline: the
//! core only needs to load a named lexicon, list what is available, and
//! copy an uploaded file into place. The [`LexiconStore`] trait is that
//! seam; [`DirStore`] is the standard directory-of-JSON-files backend.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lexiscore_types::LexiconTable;
use log::debug;
use thiserror::Error;

/// Errors surfaced by lexicon storage operations.
///
/// All of these are recoverable: callers either branch on the kind or
/// degrade to an empty model (see `LexiconModel::load_or_empty`).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested lexicon has no corresponding store entry.
    #[error("lexicon `{name}` is not available")]
    NotFound {
        /// The requested lexicon name.
        name: String,
    },
    /// The store directory itself does not exist.
    #[error("lexicon directory `{path}` does not exist")]
    MissingDir {
        /// The configured directory.
        path: PathBuf,
    },
    /// An upload source path does not point at a file.
    #[error("source file `{path}` does not exist")]
    MissingSource {
        /// The rejected source path.
        path: PathBuf,
    },
    /// An upload source parsed as JSON but not as an object.
    #[error("file `{path}` is not a JSON object")]
    NotAnObject {
        /// The rejected source path.
        path: PathBuf,
    },
    /// Underlying filesystem failure.
    #[error("lexicon store I/O error: {0}")]
    Io(#[from] io::Error),
    /// A lexicon file failed to parse as term → category → weight.
    #[error("malformed lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/list/persist capability for named lexica.
pub trait LexiconStore {
    /// Loads the lexicon stored under `name`.
    fn load(&self, name: &str) -> Result<LexiconTable, StoreError>;

    /// Lists every available lexicon name, sorted ascending.
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Validates and copies an external JSON file into the store under
    /// its basename. Returns the name the lexicon was stored as.
    fn save(&self, path: &Path) -> Result<String, StoreError>;
}

/// Directory-backed store: one `<name>.json` file per lexicon.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Opens a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingDir` if `dir` is not a directory, so
    /// later soft failures carry a useful diagnostic instead of a bare
    /// file-not-found.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(StoreError::MissingDir { path: dir });
        }
        Ok(Self { dir })
    }

    fn lexicon_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl LexiconStore for DirStore {
    fn load(&self, name: &str) -> Result<LexiconTable, StoreError> {
        let path = self.lexicon_path(name);
        if !path.is_file() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        let data = fs::read_to_string(&path)?;
        // Typed deserialization: anything other than an object of objects
        // of numbers fails here rather than deep inside scoring.
        let table: LexiconTable = serde_json::from_str(&data)?;
        Ok(table)
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn save(&self, path: &Path) -> Result<String, StoreError> {
        if !path.is_file() {
            return Err(StoreError::MissingSource {
                path: path.to_path_buf(),
            });
        }

        let data = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&data)?;
        if !value.is_object() {
            return Err(StoreError::NotAnObject {
                path: path.to_path_buf(),
            });
        }

        // is_file() above guarantees a final path component exists.
        let basename = path.file_name().ok_or_else(|| StoreError::MissingSource {
            path: path.to_path_buf(),
        })?;
        let dest = self.dir.join(basename);
        fs::copy(path, &dest)?;

        let name = Path::new(basename).file_stem().unwrap_or(basename);
        let name = name.to_string_lossy().into_owned();
        debug!("stored lexicon `{name}` at {}", dest.display());
        Ok(name)
    }
}
