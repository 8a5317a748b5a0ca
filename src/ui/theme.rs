use ratatui::style::Color;

use crate::config::{parse_color, ConfigError, ThemeConfig};
use crate::ui::counter::ColorBand;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
/// Footer text naming the focused button.
pub const FOCUS_HINT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_BORDER: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Resolved colors for the counter screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub track: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            primary: parse_color("primary", &config.primary)?,
            secondary: parse_color("secondary", &config.secondary)?,
            tertiary: parse_color("tertiary", &config.tertiary)?,
            track: parse_color("track", &config.track)?,
        })
    }

    pub fn band_color(&self, band: ColorBand) -> Color {
        match band {
            ColorBand::Primary => self.primary,
            ColorBand::Secondary => self.secondary,
            ColorBand::Tertiary => self.tertiary,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x67, 0x50, 0xa4),
            secondary: Color::Rgb(0x62, 0x5b, 0x71),
            tertiary: Color::Rgb(0x7d, 0x52, 0x60),
            track: Color::Rgb(0x3a, 0x3a, 0x3a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_default_config() {
        let resolved = Theme::from_config(&ThemeConfig::default()).unwrap();
        assert_eq!(resolved, Theme::default());
    }

    #[test]
    fn band_color_picks_matching_entry() {
        let theme = Theme::default();
        assert_eq!(theme.band_color(ColorBand::Primary), theme.primary);
        assert_eq!(theme.band_color(ColorBand::Secondary), theme.secondary);
        assert_eq!(theme.band_color(ColorBand::Tertiary), theme.tertiary);
    }
}
