//! # Interpolation Variable Extraction
//!
//! Scans translated strings for `%{name}` interpolation tokens and builds
//! the reference variable map: dotted leaf path → ordered list of variable
//! names used by the reference string at that path.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use locv_core::{join_path, Node};

/// A `%{name}` token: percent, open brace, one or more non-`}` characters,
/// close brace.
static VAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\{([^}]+)\}").expect("variable token pattern compiles"));

/// Variable names for each dotted leaf path of the reference tree.
///
/// A key's presence also records that the reference has a leaf at that
/// path; duplicates are preserved in first-occurrence order.
pub type ReferenceVariableMap = HashMap<String, Vec<String>>;

/// Variable names used in `text`, in order of use, duplicates preserved.
pub fn scan_variables(text: &str) -> Vec<String> {
    VAR_TOKEN
        .captures_iter(text)
        .map(|capture| capture[1].to_string())
        .collect()
}

/// Walk the reference tree once and record every leaf's variables.
pub fn reference_variables(tree: &Node) -> ReferenceVariableMap {
    let mut map = HashMap::new();
    collect(tree, "", &mut map);
    map
}

fn collect(node: &Node, path: &str, map: &mut ReferenceVariableMap) {
    match node {
        Node::Leaf(value) => {
            map.insert(path.to_string(), scan_variables(value));
        }
        Node::Branch(children) => {
            for (key, child) in children {
                collect(child, &join_path(path, key), map);
            }
        }
    }
}
