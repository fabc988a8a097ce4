//! # locv-plural — Pluralization Rules
//!
//! Owns everything the validator engine delegates about pluralization: the
//! recognized CLDR cardinal category names, the per-locale table of
//! required categories, structural detection of pluralization containers,
//! and the walk that reports containers missing required categories.
//!
//! The engine only locates containers and hands the tree over; the rule
//! table lives entirely in this crate.

use locv_core::{join_path, LocaleCode, Node};

/// The CLDR cardinal plural categories, in canonical order.
pub const PLURAL_CATEGORIES: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

/// Whether a key is one of the recognized plural category names.
pub fn is_plural_category(key: &str) -> bool {
    PLURAL_CATEGORIES.contains(&key)
}

/// Structural detection of a pluralization container: a non-empty branch
/// whose child keys are drawn entirely from the recognized category names.
pub fn is_plural_container(node: &Node) -> bool {
    match node.children() {
        Some(children) if !children.is_empty() => {
            children.iter().all(|(key, _)| is_plural_category(key))
        }
        _ => false,
    }
}

/// Cardinal categories a locale's plural rule requires, per CLDR.
///
/// Locales absent from the table are not checked. Only the final segment
/// of a compound code would ever name a language, and compound codes are
/// deliberately left unmatched.
pub fn required_categories(locale: &LocaleCode) -> Option<&'static [&'static str]> {
    let categories: &'static [&'static str] = match locale.as_str() {
        // One plural form distinguished from the rest.
        "en" | "es" | "de" | "fr" | "it" | "pt" | "nl" | "sv" | "da" | "nb" | "fi" | "el"
        | "hu" | "tr" => &["one", "other"],
        // No plural distinction.
        "ja" | "zh" | "ko" | "th" | "vi" | "id" => &["other"],
        // East Slavic / Polish paucal systems.
        "ru" | "uk" | "pl" | "lt" => &["one", "few", "many", "other"],
        // Czech and Slovak paucal.
        "cs" | "sk" => &["one", "few", "other"],
        "ro" => &["one", "few", "other"],
        // Hebrew dual and many.
        "he" => &["one", "two", "many", "other"],
        // Arabic and Welsh use the full set.
        "ar" | "cy" => &["zero", "one", "two", "few", "many", "other"],
        _ => return None,
    };
    Some(categories)
}

/// Validate every pluralization container in `tree` against the categories
/// required for `locale`.
///
/// Returns one error per missing category, in canonical category order,
/// containers visited depth-first in insertion order. Locales without a
/// rule table entry produce no errors.
pub fn validate(locale: &LocaleCode, tree: &Node) -> Vec<String> {
    let Some(required) = required_categories(locale) else {
        return Vec::new();
    };
    let mut errors = Vec::new();
    walk(tree, "", required, &mut errors);
    errors
}

fn walk(node: &Node, path: &str, required: &[&str], errors: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };
    if is_plural_container(node) {
        let display = if path.is_empty() { "(root)" } else { path };
        for category in required {
            if node.get(category).is_none() {
                errors.push(format!("missing '{category}' pluralization for {display}"));
            }
        }
        return;
    }
    for (key, child) in children {
        walk(child, &join_path(path, key), required, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(text: &str) -> Node {
        Node::normalize(&serde_yaml::from_str(text).unwrap())
    }

    #[test]
    fn one_other_pair_is_a_container() {
        let node = tree("one: \"%{count} car\"\nother: \"%{count} cars\"\n");
        assert!(is_plural_container(&node));
    }

    #[test]
    fn foreign_key_disqualifies_a_container() {
        let node = tree("one: car\nsingular: car\n");
        assert!(!is_plural_container(&node));
    }

    #[test]
    fn empty_branches_and_leaves_are_not_containers() {
        assert!(!is_plural_container(&Node::Branch(Vec::new())));
        assert!(!is_plural_container(&Node::Leaf("one".to_string())));
    }

    #[test]
    fn rule_table_covers_representative_locales() {
        let en = required_categories(&LocaleCode::new("en")).unwrap();
        assert_eq!(en, ["one", "other"]);

        let ru = required_categories(&LocaleCode::new("ru")).unwrap();
        assert_eq!(ru, ["one", "few", "many", "other"]);

        let ar = required_categories(&LocaleCode::new("ar")).unwrap();
        assert_eq!(ar, PLURAL_CATEGORIES);

        assert!(required_categories(&LocaleCode::new("tlh")).is_none());
        assert!(required_categories(&LocaleCode::new("app.es")).is_none());
    }

    #[test]
    fn missing_categories_are_reported_in_canonical_order() {
        let node = tree("cars:\n  one: car\n");
        let errors = validate(&LocaleCode::new("ru"), &node);
        assert_eq!(
            errors,
            [
                "missing 'few' pluralization for cars",
                "missing 'many' pluralization for cars",
                "missing 'other' pluralization for cars",
            ]
        );
    }

    #[test]
    fn complete_containers_produce_no_errors() {
        let node = tree("cars:\n  one: car\n  other: cars\n");
        assert!(validate(&LocaleCode::new("es"), &node).is_empty());
    }

    #[test]
    fn unknown_locales_are_not_checked() {
        let node = tree("cars:\n  one: car\n");
        assert!(validate(&LocaleCode::new("xx"), &node).is_empty());
    }

    #[test]
    fn nested_containers_are_found_depth_first() {
        let node = tree(concat!(
            "vehicles:\n",
            "  cars:\n",
            "    one: car\n",
            "  bikes:\n",
            "    other: bikes\n",
        ));
        let errors = validate(&LocaleCode::new("en"), &node);
        assert_eq!(
            errors,
            [
                "missing 'other' pluralization for vehicles.cars",
                "missing 'one' pluralization for vehicles.bikes",
            ]
        );
    }

    #[test]
    fn root_container_renders_as_root() {
        let node = tree("one: car\n");
        let errors = validate(&LocaleCode::new("en"), &node);
        assert_eq!(errors, ["missing 'other' pluralization for (root)"]);
    }
}
