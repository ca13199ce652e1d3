pub mod genres;
pub mod highlights;

pub use genres::{AudienceGroup, GenreCatalog};
pub use highlights::HighlightRules;
