use super::traits::ConfigSection;
use crate::error::FocusError;
use crate::types::{ColorMode, Language};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Forced display language; detected from the locale when unset.
    pub language: Option<Language>,
    pub color: ColorMode,
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: None,
            color: ColorMode::Auto,
            clear_screen: true,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), FocusError> {
        Ok(())
    }
}
