//! Three-stop color ramp used by the aurora shader

use crate::color::Rgb;
use crate::error::ColorError;

/// Relative positions of the three stops along the horizontal axis
pub const STOP_POSITIONS: [f32; 3] = [0.0, 0.5, 1.0];

/// Ordered set of exactly three gradient colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStops(pub [Rgb; 3]);

impl ColorStops {
    pub fn new(first: Rgb, middle: Rgb, last: Rgb) -> Self {
        Self([first, middle, last])
    }

    /// Parse the first three entries of a list of CSS colors
    ///
    /// Returns `Ok(None)` when fewer than three colors are supplied.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Option<Self>, ColorError> {
        match colors {
            [a, b, c, ..] => Ok(Some(Self::new(
                Rgb::parse(a.as_ref())?,
                Rgb::parse(b.as_ref())?,
                Rgb::parse(c.as_ref())?,
            ))),
            _ => Ok(None),
        }
    }

    /// Evaluate the ramp at `factor`
    ///
    /// The active segment is the last stop whose position is `<= factor`
    /// (clamped to the first segment pair), then the two neighbouring stops
    /// are blended linearly. Values outside `[0, 1]` extrapolate along the
    /// outer segments, as the GPU version does.
    pub fn sample(&self, factor: f32) -> Rgb {
        let mut index = 0;
        for (i, position) in STOP_POSITIONS.iter().take(2).enumerate() {
            if *position <= factor {
                index = i;
            }
        }

        let current = STOP_POSITIONS[index];
        let next = STOP_POSITIONS[index + 1];
        let t = (factor - current) / (next - current);
        self.0[index].mix(self.0[index + 1], t)
    }

    /// Stops padded to `vec4` for the uniform block
    pub fn to_uniform(&self) -> [[f32; 4]; 3] {
        self.0.map(|c| [c.r, c.g, c.b, 1.0])
    }
}
