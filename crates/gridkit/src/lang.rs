use serde::{Deserialize, Serialize};

///
/// Language
///
/// One entry of the host's languages collection.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Fallback language when the host does not track a user preference.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";

/// Built-in catalog used when the host's languages collection is
/// unavailable.
#[must_use]
pub fn default_languages() -> Vec<Language> {
    vec![
        Language::new("en-US", "English"),
        Language::new("de-DE", "Deutsch"),
        Language::new("fr-FR", "Français"),
        Language::new("es-ES", "Español"),
        Language::new("it-IT", "Italiano"),
    ]
}

/// Display name for a language code, falling back to the code itself.
#[must_use]
pub fn language_name<'a>(languages: &'a [Language], code: &'a str) -> &'a str {
    languages
        .iter()
        .find(|lang| lang.code == code)
        .map_or(code, |lang| lang.name.as_str())
}
