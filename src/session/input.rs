use crate::catalog::{AudienceGroup, GenreCatalog};
use crate::error::Result;
use crate::i18n::{MessageKey, Messages};
use crate::types::Selection;
use std::io::{BufRead, Write};

/// Result of one prompting round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Selected(Selection),
    Exit,
}

/// What a single line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Done,
    Group(&'static AudienceGroup),
    Invalid(String),
}

/// Collects up to `max_groups` validated audience groups per round.
pub struct GroupPrompt<'a> {
    catalog: &'a GenreCatalog,
    messages: &'a Messages,
    max_groups: usize,
}

impl<'a> GroupPrompt<'a> {
    pub fn new(catalog: &'a GenreCatalog, messages: &'a Messages, max_groups: usize) -> Self {
        Self {
            catalog,
            messages,
            max_groups,
        }
    }

    pub fn classify(&self, raw: &str) -> Command {
        let trimmed = raw.trim();
        let normalized = trimmed.to_lowercase();

        if normalized.is_empty() {
            Command::Done
        } else if self.messages.is_exit(&normalized) {
            Command::Exit
        } else if self.messages.is_help(&normalized) {
            Command::Help
        } else if let Some(group) = self.catalog.lookup(trimmed) {
            Command::Group(group)
        } else {
            Command::Invalid(trimmed.to_string())
        }
    }

    pub fn read_selection<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<RoundOutcome> {
        let max = self.max_groups.to_string();
        writeln!(out)?;
        writeln!(out, "{}", self.messages.format(MessageKey::Prompt, &[("max", max.as_str())]))?;

        let label = self.messages.get(MessageKey::GroupLabel);
        let mut selection = Selection::new();
        let mut slot = 1;

        while slot <= self.max_groups {
            write!(out, "{}. {}? ", slot, label)?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                log::debug!("input closed, ending session");
                return Ok(RoundOutcome::Exit);
            };

            match self.classify(&line) {
                Command::Exit => return Ok(RoundOutcome::Exit),
                Command::Done => break,
                Command::Help => {
                    writeln!(out, "{}", self.messages.format(MessageKey::Help, &[("max", max.as_str())]))?;
                    write!(out, "{}", self.messages.get(MessageKey::PressEnter))?;
                    out.flush()?;
                    if read_line(input)?.is_none() {
                        return Ok(RoundOutcome::Exit);
                    }
                }
                Command::Invalid(text) => {
                    writeln!(
                        out,
                        "{}",
                        self.messages.format(MessageKey::InvalidGroup, &[("input", text.as_str())])
                    )?;
                }
                Command::Group(group) if selection.contains(group.name) => {
                    writeln!(
                        out,
                        "{}",
                        self.messages.format(MessageKey::DuplicateGroup, &[("group", group.name)])
                    )?;
                }
                Command::Group(group) => {
                    selection.push(group.name);
                    slot += 1;
                }
            }
        }

        log::debug!("round selection: {:?}", selection.groups());
        Ok(RoundOutcome::Selected(selection))
    }
}

/// One line without its terminator, or `None` at end of input.
/// Bytes that are not UTF-8 are replaced so the line still classifies as invalid input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;
    use std::io::Cursor;

    fn run(language: Language, script: &str, max_groups: usize) -> (RoundOutcome, String) {
        let catalog = GenreCatalog::for_language(language);
        let messages = Messages::new(language);
        let prompt = GroupPrompt::new(&catalog, &messages, max_groups);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = prompt.read_selection(&mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn selected(outcome: RoundOutcome) -> Vec<String> {
        match outcome {
            RoundOutcome::Selected(selection) => selection.groups().to_vec(),
            RoundOutcome::Exit => panic!("expected a selection"),
        }
    }

    #[test]
    fn test_three_groups_fill_all_slots() {
        let (outcome, out) = run(Language::En, "men\nWOMEN\nNerds\n", 3);
        assert_eq!(selected(outcome), vec!["Men", "Women", "Nerds"]);
        assert!(out.contains("3. Target group? "));
        assert!(!out.contains("4. Target group? "));
    }

    #[test]
    fn test_empty_first_slot_gives_empty_selection() {
        let (outcome, _) = run(Language::En, "\n", 3);
        assert!(selected(outcome).is_empty());
    }

    #[test]
    fn test_empty_line_ends_round_early() {
        let (outcome, _) = run(Language::En, "men\n\nwomen\n", 3);
        assert_eq!(selected(outcome), vec!["Men"]);
    }

    #[test]
    fn test_invalid_input_reprompts_same_slot() {
        let (outcome, out) = run(Language::En, "aliens\nmen\n\n", 3);
        assert_eq!(selected(outcome), vec!["Men"]);
        assert!(out.contains("Unknown target group 'aliens'"));
        assert_eq!(out.matches("1. Target group? ").count(), 2);
    }

    #[test]
    fn test_duplicate_group_reprompts_same_slot() {
        let (outcome, out) = run(Language::En, "men\nMEN\nwomen\n\n", 3);
        assert_eq!(selected(outcome), vec!["Men", "Women"]);
        assert!(out.contains("'Men' is already selected."));
        assert_eq!(out.matches("2. Target group? ").count(), 2);
    }

    #[test]
    fn test_exit_ends_session() {
        let (outcome, _) = run(Language::En, "men\nexit\n", 3);
        assert_eq!(outcome, RoundOutcome::Exit);
    }

    #[test]
    fn test_localized_exit_alias() {
        let (outcome, _) = run(Language::De, "Beenden\n", 3);
        assert_eq!(outcome, RoundOutcome::Exit);
    }

    #[test]
    fn test_help_waits_then_reprompts_same_slot() {
        let (outcome, out) = run(Language::En, "help\n\nmen\n\n", 3);
        assert_eq!(selected(outcome), vec!["Men"]);
        assert!(out.contains("Press Enter to continue..."));
        assert_eq!(out.matches("1. Target group? ").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_exit() {
        let (outcome, _) = run(Language::En, "men\n", 3);
        assert_eq!(outcome, RoundOutcome::Exit);
    }

    #[test]
    fn test_undecodable_line_reprompts_same_slot() {
        let catalog = GenreCatalog::for_language(Language::En);
        let messages = Messages::new(Language::En);
        let prompt = GroupPrompt::new(&catalog, &messages, 3);
        let mut input = Cursor::new(b"\xff\xfe\nmen\n\n".to_vec());
        let mut out = Vec::new();

        let outcome = prompt.read_selection(&mut input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(selected(outcome), vec!["Men"]);
        assert!(out.contains("Unknown target group"));
        assert_eq!(out.matches("1. Target group? ").count(), 2);
    }

    #[test]
    fn test_max_groups_limits_slots() {
        let (outcome, _) = run(Language::En, "men\n", 1);
        assert_eq!(selected(outcome), vec!["Men"]);
    }

    #[test]
    fn test_classify() {
        let catalog = GenreCatalog::for_language(Language::En);
        let messages = Messages::new(Language::En);
        let prompt = GroupPrompt::new(&catalog, &messages, 3);

        assert_eq!(prompt.classify("   "), Command::Done);
        assert_eq!(prompt.classify(" EXIT "), Command::Exit);
        assert_eq!(prompt.classify("?"), Command::Help);
        assert!(matches!(prompt.classify("rockers"), Command::Group(g) if g.name == "Rockers"));
        assert_eq!(prompt.classify(" Zombies "), Command::Invalid("Zombies".to_string()));
    }
}
