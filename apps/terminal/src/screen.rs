//! # Screen
//!
//! Lays out the display line, keypad and footer as one block of text.
//!
//! ```text
//!                12   ◄── display, right aligned to the keypad
//! [ C ] [+/-] [ % ] < / >
//! ( 7 ) ( 8 ) ( 9 ) < X >
//! ...
//!       Calculator    ◄── footer, centered
//! ```

use crate::keypad;
use crate::state::ConfigState;

/// Renders the full screen for a display line.
pub fn render(display: &str, config: &ConfigState) -> String {
    let width = keypad::row_width();
    let mut lines = vec![format!("{:>width$}", display, width = width)];

    if config.show_keypad {
        lines.push(keypad::render());
    }

    if let Some(footer) = &config.footer {
        lines.push(format!("{:^width$}", footer, width = width));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_right_aligned() {
        let config = ConfigState {
            show_keypad: false,
            footer: None,
            ..ConfigState::default()
        };
        let screen = render("1,234", &config);
        assert_eq!(screen.len(), keypad::row_width());
        assert!(screen.ends_with("1,234"));
    }

    #[test]
    fn test_full_screen() {
        let screen = render("0", &ConfigState::default());
        let lines: Vec<&str> = screen.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "[ C ] [+/-] [ % ] < / >");
        assert_eq!(lines[6].trim(), "Calculator");
    }
}
