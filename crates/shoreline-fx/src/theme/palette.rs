use crate::color::Rgb;
use crate::error::ColorError;
use crate::ramp::ColorStops;

use super::Theme;

/// Fallback for `--accent` (ocean)
pub const DEFAULT_ACCENT: &str = "#0B5C6B";
/// Fallback for `--accent2` (seafoam)
pub const DEFAULT_ACCENT2: &str = "#73D7C6";
/// Third stop in light mode
pub const SAND: &str = "#F0D6A5";
/// Third stop in dark mode
pub const MOONLIGHT: &str = "#F8FAFF";

/// Accent colors read from the page's CSS custom properties
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub accent: String,
    pub accent2: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT.to_string(),
            accent2: DEFAULT_ACCENT2.to_string(),
        }
    }
}

impl ThemePalette {
    /// Build from raw `--accent` / `--accent2` values; blank values fall back to defaults
    pub fn from_css(accent: Option<&str>, accent2: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            accent: pick(accent, DEFAULT_ACCENT),
            accent2: pick(accent2, DEFAULT_ACCENT2),
        }
    }

    /// Tertiary stop for `theme`
    pub fn tertiary(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => SAND,
            Theme::Dark => MOONLIGHT,
        }
    }

    /// Stops built from the built-in defaults; never fails
    pub fn fallback_stops(theme: Theme) -> ColorStops {
        let tertiary = match theme {
            Theme::Light => Rgb::from_u8(0xF0, 0xD6, 0xA5),
            Theme::Dark => Rgb::from_u8(0xF8, 0xFA, 0xFF),
        };
        ColorStops::new(
            Rgb::from_u8(0x0B, 0x5C, 0x6B),
            Rgb::from_u8(0x73, 0xD7, 0xC6),
            tertiary,
        )
    }

    /// Gradient stops for `theme`: accent, accent2, then sand or moonlight
    pub fn stops_for(&self, theme: Theme) -> Result<ColorStops, ColorError> {
        Ok(ColorStops::new(
            Rgb::parse(&self.accent)?,
            Rgb::parse(&self.accent2)?,
            Rgb::parse(Self::tertiary(theme))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_css_fallbacks() {
        let palette = ThemePalette::from_css(Some("  "), None);
        assert_eq!(palette, ThemePalette::default());

        let custom = ThemePalette::from_css(Some(" #1E6A7A"), Some("#66C6B6 "));
        assert_eq!(custom.accent, "#1E6A7A");
        assert_eq!(custom.accent2, "#66C6B6");
    }

    #[test]
    fn test_stops_differ_only_in_tertiary() {
        let palette = ThemePalette::default();
        let light = palette.stops_for(Theme::Light).unwrap();
        let dark = palette.stops_for(Theme::Dark).unwrap();
        assert_eq!(light.0[0], dark.0[0]);
        assert_eq!(light.0[1], dark.0[1]);
        assert_eq!(light.0[2], Rgb::parse(SAND).unwrap());
        assert_eq!(dark.0[2], Rgb::parse(MOONLIGHT).unwrap());
    }

    #[test]
    fn test_fallback_matches_defaults() {
        let palette = ThemePalette::default();
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(ThemePalette::fallback_stops(theme), palette.stops_for(theme).unwrap());
        }
    }

    #[test]
    fn test_invalid_accent_is_error() {
        let palette = ThemePalette::from_css(Some("var(--ocean)"), None);
        assert!(palette.stops_for(Theme::Light).is_err());
    }
}
