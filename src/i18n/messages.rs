//! Localized user-facing strings with fallback to English.
//!
//! Every key is present in the English table; other languages may omit keys
//! and fall back to it. `format()` replaces `{name}` tokens in a single pass;
//! tokens without a matching argument are left as-is.

use crate::types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Prompt,
    Exit,
    NoneEntered,
    GroupLabel,
    InvalidGroup,
    DuplicateGroup,
    Header,
    AvailableGroups,
    Help,
    PressEnter,
}

const EN: &[(MessageKey, &str)] = &[
    (MessageKey::Prompt, "Please enter up to {max} target groups (or 'exit' to quit, 'help' for help):"),
    (MessageKey::Exit, "Program exited."),
    (MessageKey::NoneEntered, "No target groups entered."),
    (MessageKey::GroupLabel, "Target group"),
    (MessageKey::InvalidGroup, "Unknown target group '{input}'. Please try again."),
    (MessageKey::DuplicateGroup, "'{group}' is already selected."),
    (MessageKey::Header, "Common genres, weighted by importance:"),
    (MessageKey::AvailableGroups, "Available Groups: "),
    (
        MessageKey::Help,
        "Enter the name of a target group and press Enter.\n\
         Up to {max} groups can be combined; an empty line shows the result.\n\
         Genres are ranked by how many of the chosen groups like them.\n\
         A tag like [Wo] marks a genre that group tolerates but does not prefer.\n\
         Commands: 'help' shows this text, 'exit' quits.",
    ),
    (MessageKey::PressEnter, "Press Enter to continue..."),
];

const DE: &[(MessageKey, &str)] = &[
    (MessageKey::Prompt, "Bitte geben Sie bis zu {max} Zielgruppen ein (oder 'exit' zum Beenden, 'hilfe' für Hilfe):"),
    (MessageKey::Exit, "Programm beendet."),
    (MessageKey::NoneEntered, "Keine Zielgruppen eingegeben."),
    (MessageKey::GroupLabel, "Zielgruppe"),
    (MessageKey::InvalidGroup, "Unbekannte Zielgruppe '{input}'. Bitte erneut versuchen."),
    (MessageKey::DuplicateGroup, "'{group}' wurde bereits gewählt."),
    (MessageKey::Header, "Gemeinsame Genres, gewichtet nach Wichtigkeit:"),
    (MessageKey::AvailableGroups, "Verfügbare Gruppen: "),
    (
        MessageKey::Help,
        "Geben Sie den Namen einer Zielgruppe ein und drücken Sie Enter.\n\
         Bis zu {max} Gruppen können kombiniert werden; eine leere Zeile zeigt das Ergebnis.\n\
         Genres werden danach sortiert, wie vielen der gewählten Gruppen sie gefallen.\n\
         Ein Kürzel wie [Fr] markiert ein Genre, das die Gruppe toleriert, aber nicht bevorzugt.\n\
         Befehle: 'hilfe' zeigt diesen Text, 'exit' beendet das Programm.",
    ),
    (MessageKey::PressEnter, "Weiter mit Enter..."),
];

const EN_EXIT: &[&str] = &["exit", "quit"];
const DE_EXIT: &[&str] = &["exit", "beenden", "ende"];
const EN_HELP: &[&str] = &["help", "?"];
const DE_HELP: &[&str] = &["help", "hilfe", "?"];

/// String table for one display language.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    language: Language,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn table(language: Language) -> &'static [(MessageKey, &'static str)] {
        match language {
            Language::En => EN,
            Language::De => DE,
        }
    }

    pub fn get(&self, key: MessageKey) -> &'static str {
        let lookup = |table: &'static [(MessageKey, &'static str)]| {
            table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        };
        lookup(Self::table(self.language))
            .or_else(|| lookup(EN))
            .unwrap_or("")
    }

    /// Look up `key` and substitute `{name}` tokens from `args`.
    pub fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let template = self.get(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match args.iter().find(|(k, _)| *k == name) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    pub fn is_exit(&self, normalized: &str) -> bool {
        let aliases = match self.language {
            Language::En => EN_EXIT,
            Language::De => DE_EXIT,
        };
        aliases.contains(&normalized)
    }

    pub fn is_help(&self, normalized: &str) -> bool {
        let aliases = match self.language {
            Language::En => EN_HELP,
            Language::De => DE_HELP,
        };
        aliases.contains(&normalized)
    }
}
