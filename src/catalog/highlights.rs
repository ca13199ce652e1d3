use crate::types::Language;

/// Genres a group accepts without preferring them. Never scored.
pub const EN_TOLERATED: &[(&str, &[&str])] = &[
    ("Women", &["Drama"]),
    ("Elders", &["Drama"]),
    ("Lovers", &["Horror"]),
];

pub const DE_TOLERATED: &[(&str, &[&str])] = &[
    ("Frauen", &["Drama"]),
    ("Rentner", &["Drama"]),
    ("Paare", &["Horror"]),
];

#[derive(Debug, Clone, Copy)]
pub struct HighlightRules {
    rules: &'static [(&'static str, &'static [&'static str])],
}

impl HighlightRules {
    pub fn for_language(language: Language) -> Self {
        let rules = match language {
            Language::En => EN_TOLERATED,
            Language::De => DE_TOLERATED,
        };
        Self { rules }
    }

    pub fn tolerates(&self, group: &str, genre: &str) -> bool {
        self.rules
            .iter()
            .find(|(name, _)| *name == group)
            .is_some_and(|(_, genres)| genres.contains(&genre))
    }

    /// Two-letter code shown next to a tolerated genre: the first two
    /// letters of the group name.
    pub fn tag(group: &str) -> String {
        group.chars().take(2).collect()
    }
}
