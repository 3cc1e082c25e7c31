//! Themes and ANSI escape sequence generation.
//!
//! Colors are hex strings rendered as 24-bit ANSI. Themes come from the
//! built-in TOML files or from a user TOML file with the same shape.
//!
//! # Built-in Themes
//!
//! - `emerald`: Deep green header, mint selection (default)
//! - `emerald-night`: Emerald accents on a dark background
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ecfdf5"
//! header_bg = "#065f46"        # optional
//! selection_fg = "#022c22"
//! selection_bg = "#6ee7b7"
//! text_normal = "#d1fae5"
//! text_dim = "#6b9080"
//! border = "#115e59"
//! search_bar_border = "#34d399"
//! match_highlight_fg = "#022c22"
//! match_highlight_bg = "#fde68a"
//! empty_state_fg = "#a7f3d0"
//! badge_fg = "#022c22"
//! badge_bg = "#10b981"
//! accent = "#34d399"
//! ad_fg = "#fef3c7"
//! ad_bg = "#78350f"
//! ```

use crate::domain::error::{Result, ShakerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "emerald";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors of every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground.
    pub selection_fg: String,
    /// Selected card background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text: footer, glass, pairings.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Alcohol-type badge.
    pub badge_fg: String,
    pub badge_bg: String,

    /// Active tab, active chip, detail headings.
    pub accent: String,

    /// Banner line and interstitial frame.
    pub ad_fg: String,
    pub ad_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use emerald_shaker::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("emerald-night").unwrap();
    /// assert_eq!(theme.name, "emerald-night");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "emerald" => include_str!("../../themes/emerald.toml"),
            "emerald-night" => include_str!("../../themes/emerald-night.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(theme = name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShakerError::Io`] if the file cannot be read and
    /// [`ShakerError::Theme`] if its content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ShakerError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Hex color to RGB; white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    fn fallback() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: "#ecfdf5".to_string(),
                header_bg: Some("#065f46".to_string()),
                selection_fg: "#022c22".to_string(),
                selection_bg: "#6ee7b7".to_string(),
                text_normal: "#d1fae5".to_string(),
                text_dim: "#6b9080".to_string(),
                border: "#115e59".to_string(),
                search_bar_border: "#34d399".to_string(),
                match_highlight_fg: "#022c22".to_string(),
                match_highlight_bg: "#fde68a".to_string(),
                empty_state_fg: "#a7f3d0".to_string(),
                badge_fg: "#022c22".to_string(),
                badge_bg: "#10b981".to_string(),
                accent: "#34d399".to_string(),
                ad_fg: "#fef3c7".to_string(),
                ad_bg: "#78350f".to_string(),
            },
        }
    }
}

impl Default for Theme {
    /// The `emerald` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in ["emerald", "emerald-night", "catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_matches_bundled_emerald() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn custom_theme_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = include_str!("../../themes/emerald-night.toml").replace("emerald-night", "mine");
        file.write_all(source.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nheader_fg = \"#fff\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(ShakerError::Theme(_))));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Theme::from_file(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ShakerError::Io(_))));
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#10b981"), "\u{1b}[38;2;16;185;129m");
        assert_eq!(Theme::bg("oops"), "\u{1b}[48;2;255;255;255m");
    }
}
