pub mod input;
pub mod presenter;
pub mod terminal;

pub use input::{GroupPrompt, RoundOutcome};
pub use presenter::{renderer_for, ColorRenderer, LineRenderer, PlainRenderer, Presenter};

use crate::catalog::{GenreCatalog, HighlightRules};
use crate::config::AppConfig;
use crate::engines::{GenreAggregator, HighlightAnnotator};
use crate::error::{FocusError, Result};
use crate::i18n::{MessageKey, Messages};
use crate::types::{AggregationMode, AnnotatedGenre, Language, Selection};
use std::io::{BufRead, Write};

/// One interactive run: prompt, rank, annotate, present, until exit.
pub struct Session {
    catalog: GenreCatalog,
    rules: HighlightRules,
    messages: Messages,
    presenter: Presenter,
    mode: AggregationMode,
    max_groups: usize,
}

impl Session {
    pub fn new(language: Language, config: &AppConfig, renderer: Box<dyn LineRenderer>) -> Self {
        let messages = Messages::new(language);
        Self {
            catalog: GenreCatalog::for_language(language),
            rules: HighlightRules::for_language(language),
            messages,
            presenter: Presenter::new(renderer, messages),
            mode: config.ranking.mode,
            max_groups: config.ranking.max_groups,
        }
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Rank and annotate genres for an already validated selection.
    pub fn rank(&self, selection: &Selection) -> Vec<AnnotatedGenre> {
        let ranked = GenreAggregator::new(&self.catalog, self.mode).calculate_common_genres(selection);
        HighlightAnnotator::new(&self.rules).annotate(&ranked, selection)
    }

    /// Resolve free-form group names, as given on the command line, and rank them.
    /// Repeated names count once toward the group limit.
    pub fn rank_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<AnnotatedGenre>> {
        let mut selection = Selection::new();
        for name in names {
            let group = self
                .catalog
                .lookup(name.as_ref())
                .ok_or_else(|| FocusError::UnknownGroup(name.as_ref().trim().to_string()))?;
            if !selection.contains(group.name) {
                selection.push(group.name);
            }
        }

        if selection.len() > self.max_groups {
            return Err(FocusError::TooManyGroups {
                given: selection.len(),
                max: self.max_groups,
            });
        }
        Ok(self.rank(&selection))
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let prompt = GroupPrompt::new(&self.catalog, &self.messages, self.max_groups);

        loop {
            self.presenter.present_groups(out, &self.catalog)?;

            let selection = match prompt.read_selection(input, out)? {
                RoundOutcome::Exit => {
                    writeln!(out, "{}", self.messages.get(MessageKey::Exit))?;
                    break;
                }
                RoundOutcome::Selected(selection) => selection,
            };

            if selection.is_empty() {
                self.presenter.present_none(out)?;
            } else {
                let genres = self.rank(&selection);
                log::debug!("presenting {} genres", genres.len());
                self.presenter.present_ranking(out, &genres)?;
            }
            writeln!(out)?;
            writeln!(out)?;
        }

        log::info!("session ended");
        Ok(())
    }
}
