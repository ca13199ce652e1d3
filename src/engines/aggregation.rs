// src/engines/aggregation.rs
use crate::catalog::GenreCatalog;
use crate::types::{AggregationMode, RankedGenre, RankedGenreList, Selection};
use std::collections::{HashMap, HashSet};

/// Ranks genres for a selection of audience groups.
pub struct GenreAggregator<'a> {
    catalog: &'a GenreCatalog,
    mode: AggregationMode,
}

impl<'a> GenreAggregator<'a> {
    pub fn new(catalog: &'a GenreCatalog, mode: AggregationMode) -> Self {
        Self { catalog, mode }
    }

    pub fn calculate_common_genres(&self, selection: &Selection) -> RankedGenreList {
        if selection.is_empty() {
            return RankedGenreList::default();
        }

        let lists = self.preference_lists(selection);
        let mut ranked = match self.mode {
            AggregationMode::Union => Self::union_scores(&lists),
            AggregationMode::Intersection => Self::intersection_scores(&lists),
        };

        // Vec::sort_by is stable: equal scores keep first-appearance order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        log::debug!(
            "ranked {} genres for {:?} ({:?})",
            ranked.len(),
            selection.groups(),
            self.mode
        );
        RankedGenreList::from_sorted(ranked)
    }

    fn preference_lists(&self, selection: &Selection) -> Vec<&'static [&'static str]> {
        selection
            .groups()
            .iter()
            .filter_map(|group| {
                let genres = self.catalog.genres_of(group);
                if genres.is_none() {
                    log::warn!("Ignoring group not in catalog: {}", group);
                }
                genres
            })
            .collect()
    }

    /// One point per list containing the genre.
    fn union_scores(lists: &[&'static [&'static str]]) -> Vec<RankedGenre> {
        let mut ranked: Vec<RankedGenre> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for &genre in lists.iter().flat_map(|list| list.iter()) {
            match index.get(genre) {
                Some(&i) => ranked[i].score += 1,
                None => {
                    index.insert(genre, ranked.len());
                    ranked.push(RankedGenre::new(genre, 1));
                }
            }
        }
        ranked
    }

    /// Only genres present in every list. Each list adds `len - position`,
    /// so its most preferred genre weighs the most.
    fn intersection_scores(lists: &[&'static [&'static str]]) -> Vec<RankedGenre> {
        let Some((first, rest)) = lists.split_first() else {
            return Vec::new();
        };

        let common: HashSet<&str> = first
            .iter()
            .copied()
            .filter(|genre| rest.iter().all(|list| list.contains(genre)))
            .collect();

        let mut ranked: Vec<RankedGenre> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for list in lists {
            for (position, &genre) in list.iter().enumerate() {
                if !common.contains(genre) {
                    continue;
                }
                let weight = list.len() - position;
                match index.get(genre) {
                    Some(&i) => ranked[i].score += weight,
                    None => {
                        index.insert(genre, ranked.len());
                        ranked.push(RankedGenre::new(genre, weight));
                    }
                }
            }
        }
        ranked
    }
}
