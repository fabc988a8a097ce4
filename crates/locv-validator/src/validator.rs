//! # Tree Validator
//!
//! The per-run orchestrator. Loads and normalizes the reference catalog
//! once (lazily, memoized for the validator's lifetime), computes its
//! variable map, then validates each candidate file: parse → root-language
//! check → variable parity → missing translations → pluralization.
//!
//! All findings accumulate into one flat, file-prefixed list. A parse
//! failure is fatal for its file only; a missing reference terminates the
//! whole run with a single advisory line.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use locv_core::{expected_root_language, join_path, key_to_string, LocaleCode, Node};

use crate::source::{
    is_candidate_filename, DocumentParser, FileLister, FsFileLister, YamlParser,
};
use crate::variables::{reference_variables, scan_variables, ReferenceVariableMap};

/// Options recognized by [`LocaleValidator`].
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Run the missing-translation and pluralization checks.
    pub show_missing: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self { show_missing: true }
    }
}

/// The reference catalog after normalization, with its variable map.
struct ReferenceData {
    tree: Node,
    variables: ReferenceVariableMap,
}

/// Validates locale files under a root directory against one reference
/// file.
///
/// The file-listing and parsing collaborators are injectable; production
/// callers use [`LocaleValidator::new`], which wires in [`FsFileLister`]
/// and [`YamlParser`].
pub struct LocaleValidator<L = FsFileLister, P = YamlParser> {
    root: PathBuf,
    reference_file: String,
    target_file: Option<String>,
    options: ValidatorOptions,
    lister: L,
    parser: P,
    reference: OnceCell<Option<ReferenceData>>,
}

impl LocaleValidator {
    /// Validator over the real filesystem with the `serde_yaml` parser.
    pub fn new(
        root: impl Into<PathBuf>,
        reference_file: impl Into<String>,
        target_file: Option<String>,
        options: ValidatorOptions,
    ) -> Self {
        Self::with_collaborators(root, reference_file, target_file, options, FsFileLister, YamlParser)
    }
}

impl<L: FileLister, P: DocumentParser> LocaleValidator<L, P> {
    /// Validator with explicit collaborators.
    pub fn with_collaborators(
        root: impl Into<PathBuf>,
        reference_file: impl Into<String>,
        target_file: Option<String>,
        options: ValidatorOptions,
        lister: L,
        parser: P,
    ) -> Self {
        Self {
            root: root.into(),
            reference_file: reference_file.into(),
            target_file,
            options,
            lister,
            parser,
            reference: OnceCell::new(),
        }
    }

    /// Validate every candidate file and return the accumulated findings.
    ///
    /// Returns a single advisory line when the reference file is absent or
    /// unusable. Each other entry has the form `"<filename>: <message>"`;
    /// ordering within one file is deterministic (depth-first, insertion
    /// order).
    pub fn validate(&self) -> Vec<String> {
        let Some(reference) = self.reference() else {
            return vec![format!(
                "no {0} file in the directory (an {0} file is required as reference)",
                self.reference_file
            )];
        };

        let mut findings = Vec::new();
        for path in self.candidate_files() {
            let file_findings = self.validate_file(&path, reference);
            tracing::debug!(
                file = %path.display(),
                findings = file_findings.len(),
                "validated candidate"
            );
            findings.extend(file_findings);
        }
        findings
    }

    /// The memoized reference data, computed on first use.
    fn reference(&self) -> Option<&ReferenceData> {
        self.reference.get_or_init(|| self.load_reference()).as_ref()
    }

    fn load_reference(&self) -> Option<ReferenceData> {
        let path = self.root.join(&self.reference_file);
        if !self.lister.exists(&path) {
            return None;
        }
        let text = self.lister.read(&path).ok()?;
        let raw = self.parser.parse(&text).ok()?;
        let tree = Node::normalize(content_root(&raw)?);
        let variables = reference_variables(&tree);
        tracing::debug!(
            reference = %path.display(),
            paths = variables.len(),
            "loaded reference catalog"
        );
        Some(ReferenceData { tree, variables })
    }

    /// Files under the root matching the candidate pattern, minus the
    /// reference file, restricted to the target filename when one is set.
    fn candidate_files(&self) -> Vec<PathBuf> {
        let listed = match self.lister.list(&self.root) {
            Ok(paths) => paths,
            Err(err) => {
                tracing::warn!(root = %self.root.display(), %err, "cannot list locale files");
                return Vec::new();
            }
        };
        listed
            .into_iter()
            .filter(|path| {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    return false;
                };
                if !is_candidate_filename(name) || name == self.reference_file {
                    return false;
                }
                match self.target_file.as_deref() {
                    Some(target) if !target.is_empty() => name == target,
                    _ => true,
                }
            })
            .collect()
    }

    /// Validate one candidate file, returning its file-prefixed findings.
    fn validate_file(&self, path: &Path, reference: &ReferenceData) -> Vec<String> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let text = match self.lister.read(path) {
            Ok(text) => text,
            Err(err) => return vec![format!("{filename}: {err}")],
        };
        let raw = match self.parser.parse(&text) {
            Ok(raw) => raw,
            Err(err) => return vec![format!("{filename}: {err}")],
        };

        let mut findings = validate_root_language(&raw, &filename);

        let tree = match content_root(&raw) {
            Some(content) => Node::normalize(content),
            None => Node::Branch(Vec::new()),
        };

        validate_subtree("", &tree, &reference.variables, &mut findings);

        if self.options.show_missing {
            find_missing_translations("", &reference.tree, &tree, &mut findings);
            let locale = LocaleCode::from_filename(&filename);
            findings.extend(locv_plural::validate(&locale, &tree));
        }

        findings
            .into_iter()
            .map(|finding| format!("{filename}: {finding}"))
            .collect()
    }
}

/// The content root: the subtree under the document's first top-level key
/// (the locale envelope).
///
/// Nothing checks that the candidate's inner structure mirrors the
/// reference's; a mismatched namespace surfaces as missing translations.
fn content_root(raw: &serde_yaml::Value) -> Option<&serde_yaml::Value> {
    match raw {
        serde_yaml::Value::Mapping(map) => map.iter().next().map(|(_, value)| value),
        _ => None,
    }
}

/// The raw document's first top-level key must equal the filename's
/// leading dot-segment. Runs before normalization.
fn validate_root_language(raw: &serde_yaml::Value, filename: &str) -> Vec<String> {
    let expected = expected_root_language(filename);
    let found = match raw {
        serde_yaml::Value::Mapping(map) => map.iter().next().map(|(key, _)| key_to_string(key)),
        _ => None,
    };
    match found {
        Some(language) if language == expected => Vec::new(),
        Some(language) => vec![format!("different root language ({language})")],
        None => vec!["different root language (none)".to_string()],
    }
}

/// Depth-first variable-parity walk over the candidate tree.
///
/// Leaves whose immediate parent is a pluralization container are exempt;
/// paths absent from the reference map are leniently skipped.
fn validate_subtree(
    path: &str,
    node: &Node,
    reference: &ReferenceVariableMap,
    findings: &mut Vec<String>,
) {
    let Some(children) = node.children() else {
        return;
    };
    let in_plural_container = locv_plural::is_plural_container(node);

    for (key, child) in children {
        let child_path = join_path(path, key);
        match child {
            Node::Leaf(value) => {
                if in_plural_container {
                    continue;
                }
                let Some(available) = reference.get(&child_path) else {
                    continue;
                };
                for used in scan_variables(value) {
                    if !available.iter().any(|name| *name == used) {
                        findings.push(format!(
                            "{child_path}: missing variable '{used}' (available options: {})",
                            available.join(", ")
                        ));
                    }
                }
            }
            Node::Branch(_) => validate_subtree(&child_path, child, reference, findings),
        }
    }
}

/// Walk the reference tree and report each leaf path the candidate does
/// not resolve to a leaf.
fn find_missing_translations(
    path: &str,
    reference: &Node,
    candidate: &Node,
    findings: &mut Vec<String>,
) {
    let Some(children) = reference.children() else {
        return;
    };
    for (key, child) in children {
        let child_path = join_path(path, key);
        match child {
            Node::Leaf(value) => {
                let translated = candidate
                    .resolve(&child_path)
                    .is_some_and(|node| node.as_leaf().is_some());
                if !translated {
                    findings.push(format!("missing translation for {child_path} ('{value}')"));
                }
            }
            Node::Branch(_) => {
                find_missing_translations(&child_path, child, candidate, findings);
            }
        }
    }
}
