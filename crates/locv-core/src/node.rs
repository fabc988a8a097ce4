//! # Canonical Locale Tree
//!
//! Normalizes a parsed YAML document into a tree of two node kinds:
//! [`Node::Leaf`] for translatable strings and [`Node::Branch`] for nested
//! mappings. Branch children preserve document insertion order, which keeps
//! error reporting deterministic within a file.
//!
//! Locale files mix string leaves, nested mappings, and scalar markers
//! (counts, booleans, metadata flags). Everything that is neither a string
//! nor a mapping collapses into a leaf carrying no interpolation content.

use serde_yaml::Value;

/// One subtree of a normalized locale document.
///
/// Keys within a branch are unique; insertion order is preserved so that a
/// depth-first walk visits entries in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A translatable string (or a collapsed scalar marker).
    Leaf(String),
    /// An ordered mapping of key to child subtree.
    Branch(Vec<(String, Node)>),
}

impl Node {
    /// Normalize a raw YAML value into the canonical tree.
    ///
    /// Strings become leaves and mappings become branches with every value
    /// normalized recursively. YAML tags are ignored and the inner value is
    /// normalized instead. Any other value collapses into a leaf with no
    /// interpolation content: numbers and booleans keep their rendering so
    /// error messages stay informative, nulls and sequences render empty.
    ///
    /// Normalization never fails.
    pub fn normalize(raw: &Value) -> Self {
        match raw {
            Value::String(s) => Node::Leaf(s.clone()),
            Value::Mapping(map) => {
                let mut children = Vec::with_capacity(map.len());
                for (key, value) in map {
                    children.push((key_to_string(key), Node::normalize(value)));
                }
                Node::Branch(children)
            }
            Value::Tagged(tagged) => Node::normalize(&tagged.value),
            other => Node::Leaf(render_scalar(other)),
        }
    }

    /// The leaf value, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// The ordered children, if this node is a branch.
    pub fn children(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Branch(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    /// Look up a direct child of a branch by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, child)| child)
    }

    /// Resolve a dotted path by repeated child lookup.
    ///
    /// A path resolves only if every prefix segment lands on a branch;
    /// descending through a leaf yields `None`.
    pub fn resolve(&self, path: &str) -> Option<&Node> {
        let mut position = self;
        for segment in path.split('.') {
            position = position.get(segment)?;
        }
        Some(position)
    }
}

/// Join a dotted path prefix with a child key.
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Render a YAML mapping key as a string.
///
/// Locale documents key their mappings with strings, but YAML admits
/// numeric and boolean keys; those keep their scalar rendering.
pub fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn string_becomes_leaf() {
        let node = Node::normalize(&parse("hello %{name}"));
        assert_eq!(node, Node::Leaf("hello %{name}".to_string()));
    }

    #[test]
    fn mapping_becomes_branch_in_document_order() {
        let node = Node::normalize(&parse("b: two\na: one\nc: three\n"));
        let keys: Vec<&str> = node
            .children()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn scalar_markers_collapse_to_leaves() {
        assert_eq!(Node::normalize(&parse("42")), Node::Leaf("42".to_string()));
        assert_eq!(
            Node::normalize(&parse("true")),
            Node::Leaf("true".to_string())
        );
        assert_eq!(Node::normalize(&parse("null")), Node::Leaf(String::new()));
        assert_eq!(
            Node::normalize(&parse("- a\n- b\n")),
            Node::Leaf(String::new())
        );
    }

    #[test]
    fn tagged_values_normalize_their_inner_value() {
        let node = Node::normalize(&parse("!marker count"));
        assert_eq!(node, Node::Leaf("count".to_string()));
    }

    #[test]
    fn numeric_keys_are_rendered() {
        let node = Node::normalize(&parse("1: one\n"));
        assert!(node.get("1").is_some());
    }

    #[test]
    fn resolve_walks_nested_branches() {
        let node = Node::normalize(&parse("app:\n  deep:\n    greeting: hi\n"));
        assert_eq!(
            node.resolve("app.deep.greeting").and_then(Node::as_leaf),
            Some("hi")
        );
    }

    #[test]
    fn resolve_fails_through_a_leaf() {
        let node = Node::normalize(&parse("app: hi\n"));
        assert!(node.resolve("app.greeting").is_none());
        assert!(node.resolve("missing").is_none());
    }

    #[test]
    fn join_path_skips_empty_prefix() {
        assert_eq!(join_path("", "app"), "app");
        assert_eq!(join_path("app", "greeting"), "app.greeting");
    }
}
