/// Aurora band: simplex-noise height field over a three-stop color ramp,
/// premultiplied alpha output
pub const SHADER_AURORA: &str = r#"
struct Uniforms {
    time: f32,
    amplitude: f32,
    blend: f32,
    opacity: f32,
    resolution: vec2<f32>,
    _pad: vec2<f32>,
    color_stops: array<vec4<f32>, 3>,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VsOut {
    var out: VsOut;
    // Oversized triangle: (-1, -1), (3, -1), (-1, 3)
    let x = f32(i32(vertex_index & 1u) * 4 - 1);
    let y = f32(i32(vertex_index >> 1u) * 4 - 1);
    out.position = vec4<f32>(x, y, 0.0, 1.0);
    // Origin at the bottom-left, y up
    out.uv = vec2<f32>((x + 1.0) * 0.5, (y + 1.0) * 0.5);
    return out;
}

fn mod289_3(x: vec3<f32>) -> vec3<f32> {
    return x - floor(x / 289.0) * 289.0;
}

fn mod289_2(x: vec2<f32>) -> vec2<f32> {
    return x - floor(x / 289.0) * 289.0;
}

fn permute(x: vec3<f32>) -> vec3<f32> {
    return mod289_3(((x * 34.0) + 1.0) * x);
}

fn snoise(v: vec2<f32>) -> f32 {
    let C = vec4<f32>(
        0.211324865405187,
        0.366025403784439,
        -0.577350269189626,
        0.024390243902439
    );
    var i = floor(v + dot(v, C.yy));
    let x0 = v - i + dot(i, C.xx);
    var i1 = vec2<f32>(0.0, 1.0);
    if (x0.x > x0.y) {
        i1 = vec2<f32>(1.0, 0.0);
    }
    var x12 = x0.xyxy + C.xxzz;
    x12 = vec4<f32>(x12.xy - i1, x12.zw);
    i = mod289_2(i);

    let p = permute(
        permute(i.y + vec3<f32>(0.0, i1.y, 1.0))
        + i.x + vec3<f32>(0.0, i1.x, 1.0)
    );

    var m = max(
        vec3<f32>(0.5) - vec3<f32>(
            dot(x0, x0),
            dot(x12.xy, x12.xy),
            dot(x12.zw, x12.zw)
        ),
        vec3<f32>(0.0)
    );
    m = m * m;
    m = m * m;

    let x = 2.0 * fract(p * C.www) - 1.0;
    let h = abs(x) - 0.5;
    let ox = floor(x + 0.5);
    let a0 = x - ox;
    m = m * (1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h));

    let g = vec3<f32>(
        a0.x * x0.x + h.x * x0.y,
        a0.y * x12.x + h.y * x12.y,
        a0.z * x12.z + h.z * x12.w
    );
    return 130.0 * dot(m, g);
}

// Piecewise-linear ramp with stops at 0.0, 0.5 and 1.0
fn color_ramp(factor: f32) -> vec3<f32> {
    var index = 0;
    if (0.5 <= factor) {
        index = 1;
    }
    let start = f32(index) * 0.5;
    let t = (factor - start) / 0.5;
    let a = uniforms.color_stops[index].rgb;
    let b = uniforms.color_stops[index + 1].rgb;
    return a * (1.0 - t) + b * t;
}

fn hard_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    if (edge0 >= edge1) {
        return select(1.0, 0.0, x < edge0);
    }
    return smoothstep(edge0, edge1, x);
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let uv = in.uv;
    let t = uniforms.time;

    let ramp = color_ramp(uv.x);

    var height = snoise(vec2<f32>(uv.x * 2.0 + t * 0.1, t * 0.25)) * 0.5 * uniforms.amplitude;
    height = exp(height);
    height = uv.y * 2.0 - height + 0.2;

    let intensity = 1.25 * height;
    let mid_point = 0.12;
    var alpha = hard_step(
        mid_point - uniforms.blend * 0.5,
        mid_point + uniforms.blend * 0.5,
        intensity
    );

    let glow = pow(clamp(intensity, 0.0, 1.2), 1.35);
    let color = glow * ramp;

    alpha = alpha * uniforms.opacity;
    return vec4<f32>(color * alpha, alpha);
}
"#;
