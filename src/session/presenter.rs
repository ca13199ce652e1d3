use crate::catalog::GenreCatalog;
use crate::error::Result;
use crate::i18n::{MessageKey, Messages};
use crate::types::AnnotatedGenre;
use crossterm::style::{style, Color, Stylize};
use std::io::Write;

/// Position colors, best first. Ranks past the end reuse the last color.
pub const RANK_GRADIENT: [Color; 5] = [
    Color::Green,
    Color::Yellow,
    Color::Yellow,
    Color::Red,
    Color::Red,
];

pub fn color_for_rank(rank: usize) -> Color {
    let index = rank.saturating_sub(1).min(RANK_GRADIENT.len() - 1);
    RANK_GRADIENT[index]
}

/// Turns display text into terminal output.
pub trait LineRenderer {
    /// A ranked genre line at its 1-based position.
    fn ranked_line(&self, rank: usize, text: &str) -> String;

    /// An emphasized word, such as a group name.
    fn emphasis(&self, text: &str) -> String;
}

pub struct PlainRenderer;

impl LineRenderer for PlainRenderer {
    fn ranked_line(&self, _rank: usize, text: &str) -> String {
        text.to_string()
    }

    fn emphasis(&self, text: &str) -> String {
        text.to_string()
    }
}

pub struct ColorRenderer;

impl LineRenderer for ColorRenderer {
    fn ranked_line(&self, rank: usize, text: &str) -> String {
        style(text).with(color_for_rank(rank)).to_string()
    }

    fn emphasis(&self, text: &str) -> String {
        style(text).with(Color::White).bold().to_string()
    }
}

pub fn renderer_for(color: bool) -> Box<dyn LineRenderer> {
    if color {
        Box::new(ColorRenderer)
    } else {
        Box::new(PlainRenderer)
    }
}

pub struct Presenter {
    renderer: Box<dyn LineRenderer>,
    messages: Messages,
}

impl Presenter {
    pub fn new(renderer: Box<dyn LineRenderer>, messages: Messages) -> Self {
        Self { renderer, messages }
    }

    pub fn present_groups<W: Write>(&self, out: &mut W, catalog: &GenreCatalog) -> Result<()> {
        writeln!(out, "{}", self.messages.get(MessageKey::AvailableGroups))?;
        let names: Vec<String> = catalog
            .group_names()
            .map(|name| self.renderer.emphasis(name))
            .collect();
        writeln!(out, "{}", names.join(", "))?;
        Ok(())
    }

    pub fn present_ranking<W: Write>(&self, out: &mut W, genres: &[AnnotatedGenre]) -> Result<()> {
        writeln!(out, "{}", self.messages.get(MessageKey::Header))?;
        for genre in genres {
            writeln!(out, "{}", self.renderer.ranked_line(genre.rank, &genre.line()))?;
        }
        Ok(())
    }

    pub fn present_none<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.messages.get(MessageKey::NoneEntered))?;
        Ok(())
    }

    pub fn present_json<W: Write>(&self, out: &mut W, genres: &[AnnotatedGenre]) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, genres)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn genre(rank: usize, name: &str, tags: &[&str]) -> AnnotatedGenre {
        AnnotatedGenre {
            rank,
            genre: name.to_string(),
            score: 1,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_gradient_clamps_past_fifth_rank() {
        assert_eq!(color_for_rank(1), Color::Green);
        assert_eq!(color_for_rank(2), Color::Yellow);
        assert_eq!(color_for_rank(3), Color::Yellow);
        assert_eq!(color_for_rank(4), Color::Red);
        assert_eq!(color_for_rank(5), Color::Red);
        assert_eq!(color_for_rank(9), Color::Red);
    }

    #[test]
    fn test_plain_ranking_output() {
        let presenter = Presenter::new(renderer_for(false), Messages::new(Language::En));
        let mut out = Vec::new();
        presenter
            .present_ranking(&mut out, &[genre(1, "Horror", &[]), genre(2, "Drama", &["Wo"])])
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Common genres, weighted by importance:\n1. Horror\n2. Drama [Wo]\n"
        );
    }

    #[test]
    fn test_color_renderer_wraps_in_escape_codes() {
        let line = ColorRenderer.ranked_line(1, "1. Horror");
        assert!(line.contains("1. Horror"));

        let name = ColorRenderer.emphasis("Men");
        assert!(name.starts_with("\x1b["));
        assert_eq!(PlainRenderer.emphasis("Men"), "Men");
    }

    #[test]
    fn test_groups_listing_in_german() {
        let presenter = Presenter::new(renderer_for(false), Messages::new(Language::De));
        let mut out = Vec::new();
        presenter
            .present_groups(&mut out, &GenreCatalog::for_language(Language::De))
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Verfügbare Gruppen: \n"));
        assert!(text.contains("Männer, Frauen, Kinder"));
    }

    #[test]
    fn test_json_output() {
        let presenter = Presenter::new(renderer_for(false), Messages::new(Language::En));
        let mut out = Vec::new();
        presenter
            .present_json(&mut out, &[genre(1, "Horror", &["Lo"])])
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["genre"], "Horror");
        assert_eq!(value[0]["tags"][0], "Lo");
    }
}
