/// How long a wake element stays in the document, slightly past its CSS animation
pub const SPLASH_LIFETIME_MS: i32 = 1900;

/// Offset from the click point to the wake element's top-left corner
pub const SPLASH_OFFSET: (f64, f64) = (20.0, 22.0);

/// A wake/splash spawned at a click position
#[derive(Clone, Debug, PartialEq)]
pub struct Splash {
    /// Value of the clicked element's `data-wake` attribute (e.g. "surf", "dolphin")
    pub variant: String,
    /// Document-relative position in CSS pixels
    pub left_px: f64,
    pub top_px: f64,
}

impl Splash {
    /// Place a splash at viewport point `client` on a page scrolled by `scroll`
    pub fn at(variant: &str, client: (f64, f64), scroll: (f64, f64)) -> Self {
        Self {
            variant: variant.trim().to_string(),
            left_px: client.0 + scroll.0 - SPLASH_OFFSET.0,
            top_px: client.1 + scroll.1 - SPLASH_OFFSET.1,
        }
    }

    /// Class attribute of the wake element
    pub fn class_name(&self) -> String {
        if self.variant.is_empty() {
            "wake".to_string()
        } else {
            format!("wake {}", self.variant)
        }
    }

    pub fn left(&self) -> String {
        format!("{}px", self.left_px)
    }

    pub fn top(&self) -> String {
        format!("{}px", self.top_px)
    }
}
