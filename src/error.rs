use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocusError {
    #[error("Unknown audience group: {0}")]
    UnknownGroup(String),

    #[error("Too many audience groups: {given} given, at most {max} allowed")]
    TooManyGroups { given: usize, max: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FocusError>;
