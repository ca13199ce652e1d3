use crate::types::Language;
use std::env;

/// Environment variables consulted in order of precedence.
pub const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Map a POSIX locale tag such as `de_DE.UTF-8` to a supported language.
pub fn language_from_locale(tag: &str) -> Option<Language> {
    let tag = tag.trim().to_lowercase();
    if tag.starts_with("de") {
        Some(Language::De)
    } else if tag.starts_with("en") {
        Some(Language::En)
    } else {
        None
    }
}

/// Pick the language from the first non-empty locale variable; anything
/// unrecognized falls back to English.
pub fn resolve_language<'a, I>(values: I) -> Language
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
        .and_then(language_from_locale)
        .unwrap_or_default()
}

pub fn detect_language() -> Language {
    let values: Vec<Option<String>> = LOCALE_VARS.iter().map(|var| env::var(var).ok()).collect();
    let language = resolve_language(values.iter().map(|v| v.as_deref()));
    log::debug!("detected display language {} from environment", language);
    language
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("de_DE.UTF-8"), Some(Language::De));
        assert_eq!(language_from_locale("de_AT"), Some(Language::De));
        assert_eq!(language_from_locale("en_US.UTF-8"), Some(Language::En));
        assert_eq!(language_from_locale("C"), None);
        assert_eq!(language_from_locale("fr_FR"), None);
    }

    #[test]
    fn test_first_non_empty_variable_wins() {
        let values = [None, Some("de_DE.UTF-8"), Some("en_US.UTF-8")];
        assert_eq!(resolve_language(values), Language::De);

        let values = [Some(""), None, Some("de_CH")];
        assert_eq!(resolve_language(values), Language::De);
    }

    #[test]
    fn test_unrecognized_falls_back_to_english() {
        assert_eq!(resolve_language([Some("fr_FR"), Some("de_DE")]), Language::En);
        assert_eq!(resolve_language([None, None, None]), Language::En);
    }
}
