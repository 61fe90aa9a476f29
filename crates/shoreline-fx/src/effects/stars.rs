use crate::theme::Theme;

/// Number of stars in the dark-mode sky
pub const STAR_COUNT: usize = 32;

/// Vertical band (percent of container height) stars are placed in
const TOP_SPAN_PCT: f64 = 55.0;
const MAX_DELAY_S: f64 = 2.5;
const MIN_DURATION_S: f64 = 2.0;
const DURATION_SPAN_S: f64 = 2.6;

/// Placement and twinkle timing of one star
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Star {
    /// Draw a star from `rng`, which yields values in `[0, 1)`
    pub fn random(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            left_pct: rng() * 100.0,
            top_pct: rng() * TOP_SPAN_PCT,
            delay_s: rng() * MAX_DELAY_S,
            duration_s: MIN_DURATION_S + rng() * DURATION_SPAN_S,
        }
    }

    /// Inline style properties as (name, value) pairs
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("animation-duration", format!("{}s", self.duration_s)),
        ]
    }
}

/// Stars for `theme`: a full sky in dark mode, none in light mode
pub fn starfield(theme: Theme, mut rng: impl FnMut() -> f64) -> Vec<Star> {
    if !theme.is_dark() {
        return Vec::new();
    }
    (0..STAR_COUNT).map(|_| Star::random(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_light_mode_has_no_stars() {
        assert!(starfield(Theme::Light, || 0.5).is_empty());
    }

    #[test]
    fn test_dark_mode_star_count() {
        assert_eq!(starfield(Theme::Dark, || 0.5).len(), STAR_COUNT);
    }

    #[test]
    fn test_star_ranges() {
        let low = Star::random(&mut sequence(vec![0.0]));
        assert_eq!(low, Star { left_pct: 0.0, top_pct: 0.0, delay_s: 0.0, duration_s: 2.0 });

        let high = Star::random(&mut sequence(vec![0.999]));
        assert!(high.left_pct < 100.0);
        assert!(high.top_pct < 55.0);
        assert!(high.delay_s < 2.5);
        assert!(high.duration_s < 4.6);
    }

    #[test]
    fn test_star_style() {
        let star = Star::random(&mut sequence(vec![0.5, 0.5, 0.4, 0.0]));
        let style = star.style();
        assert_eq!(style[0], ("left", "50%".to_string()));
        assert_eq!(style[1], ("top", "27.5%".to_string()));
        assert_eq!(style[2], ("animation-delay", "1s".to_string()));
        assert_eq!(style[3], ("animation-duration", "2s".to_string()));
    }
}
