use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,   // Color when stdout is a terminal and NO_COLOR is unset
    Always,
    Never,
}

/// Scoring policy used by the aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    #[default]
    Union,        // One point per selected group listing the genre
    Intersection, // Only genres every group lists, weighted by preference position
}

/// Groups chosen in one interactive round, by canonical catalog name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    groups: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: impl Into<String>) {
        self.groups.push(group.into());
    }

    pub fn contains(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGenre {
    pub genre: String,
    pub score: usize,
}

impl RankedGenre {
    pub fn new(genre: impl Into<String>, score: usize) -> Self {
        Self {
            genre: genre.into(),
            score,
        }
    }
}

/// Genres ordered by descending score; ties keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedGenreList {
    entries: Vec<RankedGenre>,
}

impl RankedGenreList {
    pub fn from_sorted(entries: Vec<RankedGenre>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedGenre> {
        self.entries.iter()
    }

    pub fn genres(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.genre.as_str()).collect()
    }

    pub fn score_of(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.genre == genre)
            .map(|e| e.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A ranked genre at its 1-based display position, with tolerated-only tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedGenre {
    pub rank: usize,
    pub genre: String,
    pub score: usize,
    pub tags: Vec<String>,
}

impl AnnotatedGenre {
    /// Display text without color, e.g. `2. Drama [Wo][El]`.
    pub fn line(&self) -> String {
        let mut line = format!("{}. {}", self.rank, self.genre);
        if !self.tags.is_empty() {
            line.push(' ');
            for tag in &self.tags {
                line.push_str(&format!("[{}]", tag));
            }
        }
        line
    }
}
