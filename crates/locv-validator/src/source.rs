//! # File and Parser Collaborators
//!
//! The engine never touches the filesystem or the YAML parser directly; it
//! goes through [`FileLister`] and [`DocumentParser`]. Production code uses
//! [`FsFileLister`] and [`YamlParser`]; tests use [`MemoryFileLister`] for
//! deterministic runs without a filesystem.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Candidate basenames: an optional lowercase name segment followed by a
/// locale code and the `.yml` extension.
///
/// The locale codes form a fixed enumerated set rather than a general
/// locale grammar; adding a locale means extending the set here.
static CANDIDATE_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A([a-z]*\.)?(en|es)\.yml\z").expect("candidate filename pattern compiles")
});

/// Whether a basename is eligible for validation.
pub fn is_candidate_filename(name: &str) -> bool {
    CANDIDATE_FILE.is_match(name)
}

/// Failure inside a collaborator. The engine converts these into per-file
/// message strings; they never cross file boundaries as control flow.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Reading a file or listing a directory failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be parsed.
    #[error("{0}")]
    Parse(String),
}

/// Enumerates and reads locale files under a root directory.
pub trait FileLister {
    /// Every regular file directly under `root`. The engine applies the
    /// candidate filename filter itself.
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, SourceError>;

    /// Read one file to a string.
    fn read(&self, path: &Path) -> Result<String, SourceError>;

    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Parses document text into a raw YAML value.
pub trait DocumentParser {
    fn parse(&self, text: &str) -> Result<serde_yaml::Value, SourceError>;
}

/// Filesystem-backed lister. Listings are sorted so runs are reproducible
/// across platforms.
#[derive(Debug, Default)]
pub struct FsFileLister;

impl FileLister for FsFileLister {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, SourceError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn read(&self, path: &Path) -> Result<String, SourceError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// `serde_yaml`-backed parser.
#[derive(Debug, Default)]
pub struct YamlParser;

impl DocumentParser for YamlParser {
    fn parse(&self, text: &str) -> Result<serde_yaml::Value, SourceError> {
        serde_yaml::from_str(text).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// In-memory lister keyed by basename, for hermetic tests.
///
/// `list` reports each stored name joined onto the requested root, in
/// sorted order; `read` and `exists` match on the path's basename.
#[derive(Debug, Default)]
pub struct MemoryFileLister {
    files: BTreeMap<String, String>,
}

impl MemoryFileLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a file under a basename.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(name.into(), content.into());
    }

    fn lookup(&self, path: &Path) -> Option<&String> {
        let name = path.file_name()?.to_str()?;
        self.files.get(name)
    }
}

impl FileLister for MemoryFileLister {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, SourceError> {
        Ok(self.files.keys().map(|name| root.join(name)).collect())
    }

    fn read(&self, path: &Path) -> Result<String, SourceError> {
        self.lookup(path).cloned().ok_or_else(|| {
            SourceError::Io(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.lookup(path).is_some()
    }
}
