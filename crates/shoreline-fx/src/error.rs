//! Error types for the effects core

use core::fmt;

/// Errors produced while parsing a CSS color string
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// Empty or whitespace-only input
    Empty,

    /// `#` form with a length other than 3 or 6 digits
    InvalidHexLength(usize),

    /// Non-hex character in a `#` form
    InvalidHexDigit(char),

    /// Malformed `rgb(...)` function
    InvalidFunction(String),

    /// Not a recognized color keyword
    UnknownName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Empty => write!(f, "Empty color string"),
            ColorError::InvalidHexLength(len) => {
                write!(f, "Hex color must have 3 or 6 digits, got {}", len)
            }
            ColorError::InvalidHexDigit(c) => write!(f, "Invalid hex digit: {:?}", c),
            ColorError::InvalidFunction(s) => write!(f, "Malformed color function: {}", s),
            ColorError::UnknownName(s) => write!(f, "Unknown color name: {}", s),
        }
    }
}

impl std::error::Error for ColorError {}

/// Errors surfaced by the effects core
#[derive(Clone, Debug)]
pub enum FxError {
    /// A configured color could not be parsed
    Color(ColorError),

    /// Mount configuration was not valid JSON for `MountConfig`
    Config(String),

    /// A required browser capability is missing
    Unsupported(String),

    /// GPU adapter, device or surface failure
    Gpu(String),

    /// The surface was lost or outdated; the frame was dropped
    FrameSkipped,
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FxError::Color(e) => write!(f, "Color error: {}", e),
            FxError::Config(msg) => write!(f, "Config error: {}", msg),
            FxError::Unsupported(what) => write!(f, "Not supported: {}", what),
            FxError::Gpu(msg) => write!(f, "GPU error: {}", msg),
            FxError::FrameSkipped => write!(f, "Surface reconfigured, frame skipped"),
        }
    }
}

impl std::error::Error for FxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FxError::Color(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorError> for FxError {
    fn from(e: ColorError) -> Self {
        FxError::Color(e)
    }
}

impl From<serde_json::Error> for FxError {
    fn from(e: serde_json::Error) -> Self {
        FxError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_display() {
        assert_eq!(
            ColorError::InvalidHexLength(4).to_string(),
            "Hex color must have 3 or 6 digits, got 4"
        );
        assert!(ColorError::UnknownName("teal".into()).to_string().contains("teal"));
    }

    #[test]
    fn test_fx_error_from_color_error() {
        let err: FxError = ColorError::Empty.into();
        assert!(matches!(err, FxError::Color(ColorError::Empty)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_fx_error_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FxError = json_err.into();
        assert!(matches!(err, FxError::Config(_)));
        assert!(err.to_string().starts_with("Config error"));
    }
}
