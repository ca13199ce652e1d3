use crate::types::Language;

/// An audience group and its genre preferences, most preferred first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceGroup {
    pub name: &'static str,
    pub genres: &'static [&'static str],
}

impl AudienceGroup {
    const fn new(name: &'static str, genres: &'static [&'static str]) -> Self {
        Self { name, genres }
    }

    /// Case-insensitive comparison against the catalog name.
    pub fn matches(&self, input: &str) -> bool {
        self.name.to_lowercase() == input.trim().to_lowercase()
    }
}

pub const EN_GROUPS: &[AudienceGroup] = &[
    AudienceGroup::new("Men", &["Action", "Sport", "Western", "SciFi", "Horror"]),
    AudienceGroup::new("Women", &["Comedy", "Game Show", "Love", "Horror"]),
    AudienceGroup::new("Children", &["Fantasy", "Comedy", "SciFi", "Western", "Music"]),
    AudienceGroup::new("Elders", &["Documentary", "Western", "Game Show"]),
    AudienceGroup::new("Lovers", &["Love", "Drama", "Music", "Game Show"]),
    AudienceGroup::new("Rockers", &["Music", "Horror", "Fantasy", "Action", "Western"]),
    AudienceGroup::new(
        "Athletes",
        &["Sport", "Love", "Documentary", "Action", "Drama", "Comedy"],
    ),
    AudienceGroup::new("Nerds", &["SciFi", "Fantasy", "Documentary", "Western", "Horror"]),
];

pub const DE_GROUPS: &[AudienceGroup] = &[
    AudienceGroup::new("Männer", &["Action", "Sport", "Western", "SciFi", "Horror"]),
    AudienceGroup::new("Frauen", &["Comedy", "Spielshow", "Liebe", "Horror"]),
    AudienceGroup::new("Kinder", &["Fantasy", "Comedy", "SciFi", "Western", "Musik"]),
    AudienceGroup::new("Rentner", &["Doku", "Western", "Spielshow"]),
    AudienceGroup::new("Paare", &["Liebe", "Drama", "Musik", "Spielshow"]),
    AudienceGroup::new("Musiker", &["Musik", "Horror", "Fantasy", "Action", "Western"]),
    AudienceGroup::new(
        "Sportler",
        &["Sport", "Liebe", "Doku", "Action", "Drama", "Comedy"],
    ),
    AudienceGroup::new("Streber", &["SciFi", "Fantasy", "Doku", "Western", "Horror"]),
];

/// Read-only lookup of audience groups for one display language.
#[derive(Debug, Clone, Copy)]
pub struct GenreCatalog {
    groups: &'static [AudienceGroup],
}

impl GenreCatalog {
    pub fn for_language(language: Language) -> Self {
        let groups = match language {
            Language::En => EN_GROUPS,
            Language::De => DE_GROUPS,
        };
        Self { groups }
    }

    pub fn groups(&self) -> &'static [AudienceGroup] {
        self.groups
    }

    pub fn group_names(&self) -> impl Iterator<Item = &'static str> {
        self.groups.iter().map(|g| g.name)
    }

    /// Resolve user input to a group, ignoring surrounding whitespace and case.
    pub fn lookup(&self, input: &str) -> Option<&'static AudienceGroup> {
        self.groups.iter().find(|g| g.matches(input))
    }

    /// Preference list of a group by its canonical name.
    pub fn genres_of(&self, name: &str) -> Option<&'static [&'static str]> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.genres)
    }
}
