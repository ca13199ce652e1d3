pub mod aggregation;
pub mod highlight;

pub use aggregation::GenreAggregator;
pub use highlight::HighlightAnnotator;
