//! Day/night color themes using ratatui colors
//!
//! Each theme is a pair of base colors, "dark" and "light", swapped between day and night.
//! Every style the terminal UI uses is derived from that pair.

use crate::error::{BookError, Result};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named theme selectable from settings, config file or command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Day,
    Night,
}

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Day => ThemeName::Night,
            ThemeName::Night => ThemeName::Day,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Day => "day",
            ThemeName::Night => "night",
        }
    }

    /// Guess the terminal's preferred scheme from the environment
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    /// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
    ///
    /// A dark background (ANSI 0-6 or 8) selects night; anything else, including an absent
    /// or unparsable value, selects day.
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(0..=6) | Some(8) => ThemeName::Night,
            _ => ThemeName::Day,
        }
    }
}

impl FromStr for ThemeName {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "light" => Ok(ThemeName::Day),
            "night" | "dark" => Ok(ThemeName::Night),
            other => Err(BookError::invalid_argument(format!(
                "unknown theme {other:?}, expected \"day\" or \"night\""
            ))),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme for terminal UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    pub name: ThemeName,

    /// Foreground base color
    pub dark: Color,

    /// Background base color
    pub light: Color,

    /// Normal text on the background
    pub text: Style,

    /// Focused preview or form field
    pub selected: Style,

    /// Footer line
    pub status: Style,

    /// Disabled "show more" label
    pub disabled: Style,

    /// Links and highlights in the footer
    pub accent: Color,

    /// Error/warning text
    pub error_text: Color,
}

impl ColorTheme {
    fn from_pair(name: ThemeName, dark: Color, light: Color) -> Self {
        Self {
            name,
            dark,
            light,
            text: Style::default().fg(dark).bg(light),
            selected: Style::default()
                .fg(light)
                .bg(dark)
                .add_modifier(Modifier::BOLD),
            status: Style::default().fg(light).bg(dark),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .bg(dark)
                .add_modifier(Modifier::DIM),
            accent: Color::Rgb(255, 204, 0),
            error_text: Color::Red,
        }
    }

    /// Dark text on a white background
    pub fn day() -> Self {
        Self::from_pair(ThemeName::Day, Color::Rgb(10, 10, 20), Color::Rgb(255, 255, 255))
    }

    /// White text on a near-black background
    pub fn night() -> Self {
        Self::from_pair(ThemeName::Night, Color::Rgb(255, 255, 255), Color::Rgb(10, 10, 20))
    }
}

impl From<ThemeName> for ColorTheme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Day => Self::day(),
            ThemeName::Night => Self::night(),
        }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_theme() {
        let theme = ColorTheme::day();
        assert_eq!(theme.name, ThemeName::Day);
        assert_eq!(theme.dark, Color::Rgb(10, 10, 20));
        assert_eq!(theme.light, Color::Rgb(255, 255, 255));
        assert_eq!(theme.text.fg, Some(Color::Rgb(10, 10, 20)));
        assert_eq!(theme.text.bg, Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_night_theme_swaps_colors() {
        let day = ColorTheme::day();
        let night = ColorTheme::night();
        assert_eq!(night.dark, day.light);
        assert_eq!(night.light, day.dark);
        assert_eq!(night.selected.fg, Some(day.dark));
        assert_eq!(ColorTheme::from(ThemeName::Night), night);
    }

    #[test]
    fn test_theme_name_parsing() {
        assert_eq!("day".parse::<ThemeName>().unwrap(), ThemeName::Day);
        assert_eq!(" NIGHT ".parse::<ThemeName>().unwrap(), ThemeName::Night);
        assert_eq!("dark".parse::<ThemeName>().unwrap(), ThemeName::Night);
        assert!("sepia".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::Day.toggled(), ThemeName::Night);
        assert_eq!(ThemeName::Night.to_string(), "night");
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert_eq!(ThemeName::from_colorfgbg(Some("15;0")), ThemeName::Night);
        assert_eq!(ThemeName::from_colorfgbg(Some("15;default;8")), ThemeName::Night);
        assert_eq!(ThemeName::from_colorfgbg(Some("0;15")), ThemeName::Day);
        assert_eq!(ThemeName::from_colorfgbg(Some("garbage")), ThemeName::Day);
        assert_eq!(ThemeName::from_colorfgbg(None), ThemeName::Day);
    }
}
