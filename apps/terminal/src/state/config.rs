//! # Configuration State
//!
//! Stores display configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--no-keypad`)
//! 2. Environment variables (`CALC_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::display::{DisplayOptions, DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};

/// Footer shown under the keypad unless overridden.
pub const DEFAULT_FOOTER: &str = "Calculator";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Insert thousands separators on the display line
    pub grouping: bool,

    /// Maximum fraction digits on the display line
    pub max_fraction_digits: u8,

    /// Draw the keypad in interactive mode
    pub show_keypad: bool,

    /// Text under the keypad; `None` hides the footer
    pub footer: Option<String>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Grouping: on (`1,234`)
    /// - Fraction digits: 3
    /// - Keypad: shown
    /// - Footer: "Calculator"
    fn default() -> Self {
        ConfigState {
            grouping: true,
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
            show_keypad: true,
            footer: Some(DEFAULT_FOOTER.to_string()),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CALC_GROUPING`: `true`/`false` thousands separators
    /// - `CALC_FRACTION_DIGITS`: 0-20
    /// - `CALC_SHOW_KEYPAD`: `true`/`false`
    /// - `CALC_FOOTER`: footer text, empty to hide
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Invalid values are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(value) = lookup("CALC_GROUPING") {
            match parse_flag(&value) {
                Some(flag) => config.grouping = flag,
                None => warn!(%value, "Ignoring invalid CALC_GROUPING"),
            }
        }

        if let Some(value) = lookup("CALC_FRACTION_DIGITS") {
            match value.trim().parse::<u8>() {
                Ok(digits) if digits <= MAX_FRACTION_DIGITS => config.max_fraction_digits = digits,
                _ => warn!(%value, "Ignoring invalid CALC_FRACTION_DIGITS"),
            }
        }

        if let Some(value) = lookup("CALC_SHOW_KEYPAD") {
            match parse_flag(&value) {
                Some(flag) => config.show_keypad = flag,
                None => warn!(%value, "Ignoring invalid CALC_SHOW_KEYPAD"),
            }
        }

        if let Some(value) = lookup("CALC_FOOTER") {
            config.footer = if value.trim().is_empty() {
                None
            } else {
                Some(value)
            };
        }

        config
    }

    /// Returns the options used to format the display line.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            grouping: self.grouping,
            max_fraction_digits: self.max_fraction_digits,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ConfigState {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        assert_eq!(config_from(&[]), ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CALC_GROUPING", "off"),
            ("CALC_FRACTION_DIGITS", "6"),
            ("CALC_SHOW_KEYPAD", "FALSE"),
            ("CALC_FOOTER", "Pocket Calc"),
        ]);
        assert!(!config.grouping);
        assert_eq!(config.max_fraction_digits, 6);
        assert!(!config.show_keypad);
        assert_eq!(config.footer.as_deref(), Some("Pocket Calc"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("CALC_GROUPING", "maybe"),
            ("CALC_FRACTION_DIGITS", "99"),
            ("CALC_SHOW_KEYPAD", ""),
        ]);
        assert!(config.grouping);
        assert_eq!(config.max_fraction_digits, DEFAULT_FRACTION_DIGITS);
        assert!(config.show_keypad);
    }

    #[test]
    fn test_empty_footer_hides_it() {
        let config = config_from(&[("CALC_FOOTER", "  ")]);
        assert_eq!(config.footer, None);
    }

    #[test]
    fn test_display_options() {
        let config = config_from(&[("CALC_GROUPING", "0"), ("CALC_FRACTION_DIGITS", "2")]);
        assert_eq!(
            config.display_options(),
            DisplayOptions {
                grouping: false,
                max_fraction_digits: 2
            }
        );
    }
}
