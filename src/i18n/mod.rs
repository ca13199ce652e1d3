pub mod locale;
pub mod messages;

pub use locale::detect_language;
pub use messages::{MessageKey, Messages};
