//! Mount configuration passed in from JavaScript

use serde::{Deserialize, Serialize};

use crate::error::FxError;
use crate::ramp::ColorStops;
use crate::theme::{Theme, ThemePalette};

/// Default noise displacement scale
pub const DEFAULT_AMPLITUDE: f32 = 1.35;
/// Default softness of the alpha ramp
pub const DEFAULT_BLEND: f32 = 0.75;
/// Default overall alpha multiplier
pub const DEFAULT_OPACITY: f32 = 0.85;
/// Default time-scale multiplier
pub const DEFAULT_SPEED: f32 = 0.85;

/// Smallest blend accepted; a zero-width ramp is undefined on the GPU
const MIN_BLEND: f32 = 1e-4;

/// Aurora options as supplied by the page; every field is optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MountConfig {
    /// Explicit gradient colors; the first three are used when at least three are given
    pub color_stops: Option<Vec<String>>,
    pub amplitude: Option<f32>,
    pub blend: Option<f32>,
    pub opacity: Option<f32>,
    pub speed: Option<f32>,
}

impl MountConfig {
    /// Parse a JSON config; empty input, `null` and `undefined` yield the defaults
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Preset used by the site's page controller
    pub fn site_preset() -> Self {
        Self {
            color_stops: None,
            amplitude: Some(1.35),
            blend: Some(0.75),
            opacity: Some(0.85),
            speed: Some(0.9),
        }
    }

    /// Whether the stops are pinned by configuration (and so ignore theme changes)
    pub fn has_explicit_stops(&self) -> bool {
        self.color_stops.as_ref().is_some_and(|s| s.len() >= 3)
    }

    /// Resolve the three color stops: explicit ones if configured, otherwise the theme's
    pub fn resolve_stops(&self, palette: &ThemePalette, theme: Theme) -> Result<ColorStops, FxError> {
        if let Some(colors) = &self.color_stops {
            if let Some(stops) = ColorStops::parse(colors)? {
                return Ok(stops);
            }
        }
        Ok(palette.stops_for(theme)?)
    }

    /// Numeric parameters with defaults filled in and ranges enforced
    pub fn params(&self) -> AuroraParams {
        let pick = |value: Option<f32>, default: f32| match value {
            Some(v) if v.is_finite() => v,
            _ => default,
        };

        AuroraParams {
            amplitude: pick(self.amplitude, DEFAULT_AMPLITUDE),
            blend: pick(self.blend, DEFAULT_BLEND).max(MIN_BLEND),
            opacity: pick(self.opacity, DEFAULT_OPACITY).clamp(0.0, 1.0),
            speed: pick(self.speed, DEFAULT_SPEED),
        }
    }
}

/// Fully-resolved numeric aurora parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuroraParams {
    pub amplitude: f32,
    pub blend: f32,
    pub opacity: f32,
    pub speed: f32,
}

impl Default for AuroraParams {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            blend: DEFAULT_BLEND,
            opacity: DEFAULT_OPACITY,
            speed: DEFAULT_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_from_json_empty_is_default() {
        assert_eq!(MountConfig::from_json("").unwrap(), MountConfig::default());
        assert_eq!(MountConfig::from_json("null").unwrap(), MountConfig::default());
        assert_eq!(MountConfig::from_json("{}").unwrap(), MountConfig::default());
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = MountConfig::from_json(
            r##"{ "colorStops": ["#CFEDE8", "#F2E7D6", "#BFD4F0"], "amplitude": 1.0, "blend": 0.6, "speed": 1.0 }"##,
        )
        .unwrap();
        assert_eq!(config.color_stops.as_ref().map(Vec::len), Some(3));
        assert_eq!(config.amplitude, Some(1.0));
        assert_eq!(config.blend, Some(0.6));
        assert_eq!(config.opacity, None);
        assert_eq!(config.speed, Some(1.0));
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let config = MountConfig::from_json(r#"{ "mode": "fancy", "speed": 2 }"#).unwrap();
        assert_eq!(config.speed, Some(2.0));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(MountConfig::from_json("{ speed: }"), Err(FxError::Config(_))));
        assert!(MountConfig::from_json(r#"{ "speed": "fast" }"#).is_err());
    }

    #[test]
    fn test_params_defaults() {
        assert_eq!(MountConfig::default().params(), AuroraParams::default());
    }

    #[test]
    fn test_params_clamps() {
        let config = MountConfig {
            opacity: Some(3.0),
            blend: Some(0.0),
            speed: Some(f32::NAN),
            ..Default::default()
        };
        let params = config.params();
        assert_eq!(params.opacity, 1.0);
        assert!(params.blend > 0.0);
        assert_eq!(params.speed, DEFAULT_SPEED);
    }

    #[test]
    fn test_site_preset() {
        let params = MountConfig::site_preset().params();
        assert_eq!(params.speed, 0.9);
        assert_eq!(params.amplitude, 1.35);
        assert!(!MountConfig::site_preset().has_explicit_stops());
    }

    #[test]
    fn test_resolve_explicit_stops() {
        let config = MountConfig {
            color_stops: Some(vec!["#000".into(), "#fff".into(), "#f00".into()]),
            ..Default::default()
        };
        assert!(config.has_explicit_stops());
        let stops = config.resolve_stops(&ThemePalette::default(), Theme::Dark).unwrap();
        assert_eq!(stops.0[0], Rgb::BLACK);
        assert_eq!(stops.0[1], Rgb::WHITE);
    }

    #[test]
    fn test_resolve_short_list_falls_back_to_theme() {
        let config = MountConfig {
            color_stops: Some(vec!["#000".into()]),
            ..Default::default()
        };
        assert!(!config.has_explicit_stops());
        let palette = ThemePalette::default();
        let stops = config.resolve_stops(&palette, Theme::Light).unwrap();
        assert_eq!(stops, palette.stops_for(Theme::Light).unwrap());
    }

    #[test]
    fn test_resolve_bad_color_is_error() {
        let config = MountConfig {
            color_stops: Some(vec!["#000".into(), "#ggg".into(), "#fff".into()]),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve_stops(&ThemePalette::default(), Theme::Light),
            Err(FxError::Color(_))
        ));
    }
}
