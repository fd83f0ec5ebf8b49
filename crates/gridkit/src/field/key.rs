use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FieldKey
///
/// A logical column identifier with two optional suffixes layered onto a
/// dotted relation path: `root[.nested...][:languageCode]`.
///
/// Parsing is pure and reversible: when a language suffix is present,
/// `full_path() + ":" + language() == raw()`. Splitting happens on the
/// first `:` only; malformed suffixes (double or trailing colons) are kept
/// as-is rather than rejected.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldKey {
    raw: String,
}

impl FieldKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The key exactly as requested, suffixes included.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Dotted path without any language suffix. This is the form used for
    /// API field selection.
    #[must_use]
    pub fn full_path(&self) -> &str {
        match self.raw.split_once(':') {
            Some((path, _)) => path,
            None => &self.raw,
        }
    }

    /// Language code after the first `:`, when present.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.raw.split_once(':').map(|(_, code)| code)
    }

    /// First path segment, used for aliasing and collision decisions.
    #[must_use]
    pub fn root(&self) -> &str {
        match self.full_path().split_once('.') {
            Some((root, _)) => root,
            None => self.full_path(),
        }
    }

    /// True when the path has at least one relational hop.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.full_path().contains('.')
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FieldKey {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Build the column key for one language variant of a base field.
#[must_use]
pub fn language_variant_key(base: &str, code: &str) -> String {
    format!("{base}:{code}")
}

/// Strip the language suffix from a sort entry while preserving the
/// leading `-` descending marker.
#[must_use]
pub fn normalize_sort_key(sort: &str) -> String {
    let (desc, field) = match sort.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, sort),
    };

    let field = field.split(':').next().unwrap_or(field);

    if desc {
        format!("-{field}")
    } else {
        field.to_string()
    }
}

// ----------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{FieldKey, language_variant_key, normalize_sort_key};
    use proptest::prelude::*;

    #[test]
    fn plain_key_has_no_language() {
        let key = FieldKey::new("title");
        assert_eq!(key.full_path(), "title");
        assert_eq!(key.root(), "title");
        assert_eq!(key.language(), None);
        assert!(!key.is_nested());
    }

    #[test]
    fn nested_key_splits_root_from_path() {
        let key = FieldKey::new("author.avatar.id");
        assert_eq!(key.root(), "author");
        assert_eq!(key.full_path(), "author.avatar.id");
        assert!(key.is_nested());
    }

    #[test]
    fn language_suffix_splits_on_first_colon() {
        let key = FieldKey::new("translations.description:de-DE");
        assert_eq!(key.full_path(), "translations.description");
        assert_eq!(key.language(), Some("de-DE"));
        assert_eq!(key.root(), "translations");
    }

    #[test]
    fn double_colon_keeps_remainder_as_language() {
        let key = FieldKey::new("translations.title::x");
        assert_eq!(key.full_path(), "translations.title");
        assert_eq!(key.language(), Some(":x"));
    }

    #[test]
    fn sort_key_normalization_preserves_descending_marker() {
        assert_eq!(
            normalize_sort_key("-translations.description:de-DE"),
            "-translations.description"
        );
        assert_eq!(normalize_sort_key("title:en-US"), "title");
        assert_eq!(normalize_sort_key("-title"), "-title");
        assert_eq!(normalize_sort_key("title"), "title");
    }

    proptest! {
        #[test]
        fn parse_is_reversible(
            base in "[a-z_]{1,8}(\\.[a-z_]{1,8}){0,3}",
            code in "[a-zA-Z-]{1,8}",
        ) {
            let key = FieldKey::new(language_variant_key(&base, &code));
            prop_assert_eq!(key.full_path(), base.as_str());
            prop_assert_eq!(key.language(), Some(code.as_str()));
            prop_assert_eq!(
                format!("{}:{}", key.full_path(), key.language().unwrap()),
                key.raw()
            );
        }
    }
}
