use crate::catalog::HighlightRules;
use crate::types::{AnnotatedGenre, RankedGenreList, Selection};

/// Attaches tolerated-only tags to ranked genres. Rank and score pass
/// through untouched.
pub struct HighlightAnnotator<'a> {
    rules: &'a HighlightRules,
}

impl<'a> HighlightAnnotator<'a> {
    pub fn new(rules: &'a HighlightRules) -> Self {
        Self { rules }
    }

    pub fn annotate(&self, ranked: &RankedGenreList, selection: &Selection) -> Vec<AnnotatedGenre> {
        ranked
            .iter()
            .enumerate()
            .map(|(i, entry)| AnnotatedGenre {
                rank: i + 1,
                genre: entry.genre.clone(),
                score: entry.score,
                tags: self.tags_for(&entry.genre, selection),
            })
            .collect()
    }

    fn tags_for(&self, genre: &str, selection: &Selection) -> Vec<String> {
        selection
            .groups()
            .iter()
            .filter(|group| self.rules.tolerates(group, genre))
            .map(|group| HighlightRules::tag(group))
            .collect()
    }
}
