use super::traits::ConfigSection;
use crate::error::FocusError;
use crate::types::AggregationMode;
use serde::{Deserialize, Serialize};

/// Hard upper bound on groups per round.
pub const MAX_GROUPS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub mode: AggregationMode,
    pub max_groups: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::Union,
            max_groups: MAX_GROUPS,
        }
    }
}

impl ConfigSection for RankingConfig {
    fn section_name() -> &'static str {
        "ranking"
    }

    fn validate(&self) -> Result<(), FocusError> {
        if self.max_groups == 0 || self.max_groups > MAX_GROUPS {
            return Err(FocusError::Configuration(format!(
                "[{}] max_groups must be between 1 and {}",
                Self::section_name(),
                MAX_GROUPS
            )));
        }
        Ok(())
    }
}
