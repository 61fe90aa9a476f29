//! Decorative page effects
//!
//! Pure geometry for the three small effects; the browser layer turns
//! these into DOM nodes and styles.

mod splash;
mod stars;
mod wave;

pub use splash::{Splash, SPLASH_LIFETIME_MS, SPLASH_OFFSET};
pub use stars::{starfield, Star, STAR_COUNT};
pub use wave::{scroll_factor, wave_offset, wave_transform, FrameThrottle, WAVE_LOOP_PX};
