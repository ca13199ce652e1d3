pub mod traits;
pub mod display;
pub mod ranking;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use display::DisplayConfig;
pub use ranking::RankingConfig;
