//! Focus Finder: ranks the television genres shared by up to three
//! audience groups.

pub mod catalog;
pub mod config;
pub mod engines;
pub mod error;
pub mod i18n;
pub mod session;
pub mod types;

pub use error::{FocusError, Result};
