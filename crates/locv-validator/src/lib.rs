//! # locv-validator — Locale Catalog Validation Engine
//!
//! Validates a directory of YAML locale files against a single canonical
//! reference file. Per candidate file the engine checks parse validity,
//! root-language identity, interpolation-variable parity against the
//! reference, missing translations, and (via [`locv_plural`]) pluralization
//! categories.
//!
//! Findings are data: every check accumulates into one flat, file-prefixed
//! `Vec<String>`. `Result` is reserved for collaborator I/O.
//!
//! ## Collaborators
//!
//! File listing and document parsing are injected behind the
//! [`source::FileLister`] and [`source::DocumentParser`] traits so the
//! engine can be exercised hermetically; [`source::FsFileLister`] and
//! [`source::YamlParser`] are the production implementations.

pub mod source;
pub mod validator;
pub mod variables;

pub use source::{
    is_candidate_filename, DocumentParser, FileLister, FsFileLister, MemoryFileLister,
    SourceError, YamlParser,
};
pub use validator::{LocaleValidator, ValidatorOptions};
pub use variables::{reference_variables, scan_variables, ReferenceVariableMap};
