//! CSS color parsing into normalized RGB

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Linear RGB triple with each channel in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Create a color from normalized channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse a CSS-like color: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a keyword
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return Self::parse_rgb_function(&lower);
        }

        match lower.as_str() {
            "black" | "transparent" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::from_u8(255, 0, 0)),
            "green" => Ok(Self::from_u8(0, 128, 0)),
            "blue" => Ok(Self::from_u8(0, 0, 255)),
            _ => Err(ColorError::UnknownName(s.to_string())),
        }
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit(bad));
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);

        match hex.len() {
            // #abc expands each nibble: a -> aa
            3 => Ok(Self::from_u8(digit(0) * 17, digit(1) * 17, digit(2) * 17)),
            6 => Ok(Self::from_u8(pair(0), pair(2), pair(4))),
            n => Err(ColorError::InvalidHexLength(n)),
        }
    }

    fn parse_rgb_function(lower: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFunction(lower.to_string());

        let open = lower.find('(').ok_or_else(invalid)?;
        let close = lower.rfind(')').ok_or_else(invalid)?;
        let name = lower[..open].trim();
        if (name != "rgb" && name != "rgba") || close < open {
            return Err(invalid());
        }

        let channels: Vec<f32> = lower[open + 1..close]
            .split(|c: char| c == ',' || c.is_whitespace() || c == '/')
            .filter(|part| !part.is_empty())
            .take(3)
            .map(|part| part.parse::<f32>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(
                (r / 255.0).clamp(0.0, 1.0),
                (g / 255.0).clamp(0.0, 1.0),
                (b / 255.0).clamp(0.0, 1.0),
            )),
            _ => Err(invalid()),
        }
    }

    /// Channels as an array
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear interpolation `self * (1 - t) + other * t`, exact at `t = 0` and `t = 1`
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let lerp = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Rgb::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }

    /// Scale every channel by `k`
    pub fn scale(self, k: f32) -> Rgb {
        Rgb::new(self.r * k, self.g * k, self.b * k)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6
    }

    #[test]
    fn test_parse_long_hex() {
        let c = Rgb::parse("#0B5C6B").unwrap();
        assert_eq!(c, Rgb::from_u8(0x0B, 0x5C, 0x6B));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Rgb::parse("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::parse("#f00").unwrap(), Rgb::from_u8(255, 0, 0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        // getComputedStyle often returns custom properties with a leading space
        assert_eq!(Rgb::parse("  #73D7C6 ").unwrap(), Rgb::from_u8(0x73, 0xD7, 0xC6));
    }

    #[test]
    fn test_parse_rgb_function() {
        let c = Rgb::parse("rgb(255, 128, 0)").unwrap();
        assert!(approx(c, Rgb::new(1.0, 128.0 / 255.0, 0.0)));

        let spaced = Rgb::parse("rgb(255 128 0 / 0.5)").unwrap();
        assert!(approx(spaced, c));

        let rgba = Rgb::parse("RGBA(0, 0, 255, 0.3)").unwrap();
        assert!(approx(rgba, Rgb::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Rgb::parse("White").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::parse("transparent").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Rgb::parse(""), Err(ColorError::Empty));
        assert_eq!(Rgb::parse("#abcd"), Err(ColorError::InvalidHexLength(4)));
        assert_eq!(Rgb::parse("#zz0000"), Err(ColorError::InvalidHexDigit('z')));
        assert!(matches!(Rgb::parse("rgb(1, 2)"), Err(ColorError::InvalidFunction(_))));
        assert!(matches!(Rgb::parse("seafoam"), Err(ColorError::UnknownName(_))));
    }

    #[test]
    fn test_mix_endpoints_exact() {
        let a = Rgb::parse("#1E6A7A").unwrap();
        let b = Rgb::parse("#F0D6A5").unwrap();
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn test_from_str() {
        let c: Rgb = "#000000".parse().unwrap();
        assert_eq!(c, Rgb::BLACK);
    }
}
