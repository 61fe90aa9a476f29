//! Per-mount render state advanced by the animation-frame loop

use crate::config::AuroraParams;
use crate::ramp::ColorStops;
use crate::uniforms::AuroraUniforms;

/// Largest size with the aspect of `width`×`height` whose sides fit in `max_dimension`
///
/// Sizes already within the limit are returned unchanged.
pub fn fit_surface_size(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max_dimension = max_dimension.max(1);
    let largest = width.max(height);
    if largest <= max_dimension {
        return (width, height);
    }
    let scale = max_dimension as f64 / largest as f64;
    let fit = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, max_dimension);
    (fit(width), fit(height))
}

/// Virtual time, surface size and shader inputs of one aurora mount
///
/// Created on mount, mutated every frame and on resize/theme change,
/// dropped on unmount. Time only moves forward.
#[derive(Clone, Debug)]
pub struct RenderState {
    time: f32,
    last_frame_ms: Option<f64>,
    resolution: [f32; 2],
    params: AuroraParams,
    stops: ColorStops,
}

impl RenderState {
    pub fn new(params: AuroraParams, stops: ColorStops, width: f32, height: f32) -> Self {
        Self {
            time: 0.0,
            last_frame_ms: None,
            resolution: [width.max(0.0), height.max(0.0)],
            params,
            stops,
        }
    }

    /// Elapsed virtual time in seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn resolution(&self) -> [f32; 2] {
        self.resolution
    }

    pub fn params(&self) -> &AuroraParams {
        &self.params
    }

    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    /// Advance virtual time to the frame timestamp `now_ms`
    ///
    /// Virtual time grows by the real elapsed time since the previous frame
    /// times `speed`. The first frame only records the timestamp. A
    /// timestamp earlier than the previous one counts as zero elapsed.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        if let Some(last) = self.last_frame_ms {
            let elapsed_s = ((now_ms - last).max(0.0) / 1000.0) as f32;
            self.time += elapsed_s * self.params.speed;
        }
        self.last_frame_ms = Some(match self.last_frame_ms {
            Some(last) => last.max(now_ms),
            None => now_ms,
        });
        self.time
    }

    /// Update the surface size; returns false when unchanged or degenerate
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
            return false;
        }
        if self.resolution == [width, height] {
            return false;
        }
        self.resolution = [width, height];
        true
    }

    /// Replace the color stops; returns false when unchanged
    pub fn set_stops(&mut self, stops: ColorStops) -> bool {
        if self.stops == stops {
            return false;
        }
        self.stops = stops;
        true
    }

    /// Snapshot of the uniform block for the current frame
    pub fn uniforms(&self) -> AuroraUniforms {
        AuroraUniforms {
            time: self.time,
            amplitude: self.params.amplitude,
            blend: self.params.blend,
            opacity: self.params.opacity,
            resolution: self.resolution,
            _pad: [0.0, 0.0],
            color_stops: self.stops.to_uniform(),
        }
    }
}
