//! CPU reference of the aurora fragment shader
//!
//! Mirrors `background::shaders::SHADER_AURORA` operation for operation so
//! the visual behavior can be tested without a GPU. Everything here is a
//! pure function of (uv, time, params, stops).

use crate::config::AuroraParams;
use crate::ramp::ColorStops;

/// Intensity at which the alpha ramp is centered
pub const MID_POINT: f32 = 0.12;

/// Exponent of the glow curve
pub const GLOW_POWER: f32 = 1.35;

/// Upper clamp of intensity before the glow curve
pub const GLOW_CLAMP: f32 = 1.2;

// Skew/unskew constants for 2D simplex noise
const C: [f32; 4] = [
    0.211_324_87,  // (3 - sqrt(3)) / 6
    0.366_025_42,  // (sqrt(3) - 1) / 2
    -0.577_350_26, // -1 + 2 * C[0]
    0.024_390_243, // 1 / 41
];

/// GLSL-style `mod`: result has the sign of the divisor
fn mod289(x: f32) -> f32 {
    x - (x / 289.0).floor() * 289.0
}

fn permute(x: f32) -> f32 {
    mod289((x * 34.0 + 1.0) * x)
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// 2D simplex gradient noise, roughly in `[-1, 1]`
pub fn snoise(vx: f32, vy: f32) -> f32 {
    let skew = (vx + vy) * C[1];
    let ix = (vx + skew).floor();
    let iy = (vy + skew).floor();

    let unskew = (ix + iy) * C[0];
    let x0 = [vx - ix + unskew, vy - iy + unskew];

    let i1 = if x0[0] > x0[1] { [1.0, 0.0] } else { [0.0, 1.0] };

    let x12 = [
        x0[0] + C[0] - i1[0],
        x0[1] + C[0] - i1[1],
        x0[0] + C[2],
        x0[1] + C[2],
    ];

    let ix = mod289(ix);
    let iy = mod289(iy);

    let p = [
        permute(permute(iy) + ix),
        permute(permute(iy + i1[1]) + ix + i1[0]),
        permute(permute(iy + 1.0) + ix + 1.0),
    ];

    let d = [
        x0[0] * x0[0] + x0[1] * x0[1],
        x12[0] * x12[0] + x12[1] * x12[1],
        x12[2] * x12[2] + x12[3] * x12[3],
    ];

    let corner = [(x0[0], x0[1]), (x12[0], x12[1]), (x12[2], x12[3])];

    let mut total = 0.0;
    for k in 0..3 {
        let mut m = (0.5 - d[k]).max(0.0);
        m *= m;
        m *= m;

        let x = 2.0 * fract(p[k] * C[3]) - 1.0;
        let h = x.abs() - 0.5;
        let ox = (x + 0.5).floor();
        let a0 = x - ox;
        m *= 1.792_842_9 - 0.853_734_7 * (a0 * a0 + h * h);

        let g = a0 * corner[k].0 + h * corner[k].1;
        total += m * g;
    }

    130.0 * total
}

/// Hermite smoothstep; degenerates to a hard step when `edge0 >= edge1`
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 >= edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Aurora band intensity at `uv` and virtual time `time`
pub fn intensity(uv: [f32; 2], time: f32, amplitude: f32) -> f32 {
    let mut height = snoise(uv[0] * 2.0 + time * 0.1, time * 0.25) * 0.5 * amplitude;
    height = height.exp();
    height = uv[1] * 2.0 - height + 0.2;
    1.25 * height
}

/// Shade one pixel; returns premultiplied `[r, g, b, a]`
///
/// `uv` has its origin at the bottom-left of the surface.
pub fn shade(uv: [f32; 2], time: f32, params: &AuroraParams, stops: &ColorStops) -> [f32; 4] {
    let ramp = stops.sample(uv[0]);

    let intensity = intensity(uv, time, params.amplitude);
    let half = params.blend * 0.5;
    let mut alpha = smoothstep(MID_POINT - half, MID_POINT + half, intensity);

    let glow = intensity.clamp(0.0, GLOW_CLAMP).powf(GLOW_POWER);
    let color = ramp.scale(glow);

    alpha *= params.opacity;
    [color.r * alpha, color.g * alpha, color.b * alpha, alpha]
}
