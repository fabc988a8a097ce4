//! # Locale Identity
//!
//! The [`LocaleCode`] newtype and the filename conventions that tie a locale
//! file to the language it declares. A file named `es.yml` carries the
//! locale `es`; its document's first top-level key is expected to match the
//! filename's leading dot-segment.

use std::fmt;

/// A locale code derived from a candidate filename.
///
/// Derivation strips only the final extension from the basename:
/// `es.yml` → `es`, `app.es.yml` → `app.es`. The two-segment form never
/// matches a pluralization rule table entry, so namespaced files skip
/// the pluralization checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Wrap an already-derived locale code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Derive the locale code from a filename by stripping the final
    /// extension.
    pub fn from_filename(filename: &str) -> Self {
        let stem = filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(filename);
        Self(stem.to_string())
    }

    /// Access the underlying code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The root language a filename declares: its leading dot-segment.
///
/// The document's first top-level key must equal this value.
pub fn expected_root_language(filename: &str) -> &str {
    filename.split('.').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_filename_strips_final_extension_only() {
        assert_eq!(LocaleCode::from_filename("es.yml").as_str(), "es");
        assert_eq!(LocaleCode::from_filename("app.es.yml").as_str(), "app.es");
        assert_eq!(LocaleCode::from_filename("noext").as_str(), "noext");
    }

    #[test]
    fn expected_root_language_is_the_leading_segment() {
        assert_eq!(expected_root_language("es.yml"), "es");
        assert_eq!(expected_root_language("app.es.yml"), "app");
    }

    #[test]
    fn display_matches_inner_code() {
        assert_eq!(LocaleCode::new("ru").to_string(), "ru");
    }
}
