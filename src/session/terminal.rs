use crate::types::ColorMode;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::env;
use std::io::{self, IsTerminal, Write};

/// Decide whether to color output. `no_color` reflects explicit user intent
/// (the NO_COLOR convention) and wins over terminal detection in auto mode.
pub const fn color_enabled(mode: ColorMode, is_terminal: bool, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && !no_color,
    }
}

pub fn detect_color(mode: ColorMode) -> bool {
    let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let enabled = color_enabled(mode, io::stdout().is_terminal(), no_color);
    log::debug!("color output {} (mode {:?})", if enabled { "on" } else { "off" }, mode);
    enabled
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_modes_ignore_detection() {
        assert!(color_enabled(ColorMode::Always, false, true));
        assert!(!color_enabled(ColorMode::Never, true, false));
    }

    #[test]
    fn test_auto_requires_terminal_and_no_opt_out() {
        assert!(color_enabled(ColorMode::Auto, true, false));
        assert!(!color_enabled(ColorMode::Auto, false, false));
        assert!(!color_enabled(ColorMode::Auto, true, true));
    }

    #[test]
    fn test_clear_screen_emits_escape_sequence() {
        let mut buf: Vec<u8> = Vec::new();
        clear_screen(&mut buf).unwrap();
        assert!(buf.starts_with(b"\x1b["));
    }
}
