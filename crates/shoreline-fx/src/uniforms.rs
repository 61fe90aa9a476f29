/// Uniform block sent to the aurora shader
/// NOTE: This struct must match WGSL alignment requirements!
/// Total struct size must be 80 bytes (padded to 16-byte boundary).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "wasm", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct AuroraUniforms {
    pub time: f32,                  // offset 0
    pub amplitude: f32,             // offset 4
    pub blend: f32,                 // offset 8
    pub opacity: f32,               // offset 12
    pub resolution: [f32; 2],       // offset 16
    pub _pad: [f32; 2],             // offset 24
    pub color_stops: [[f32; 4]; 3], // offset 32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_matches_wgsl() {
        assert_eq!(std::mem::size_of::<AuroraUniforms>(), 80);
        assert_eq!(std::mem::size_of::<AuroraUniforms>() % 16, 0);
    }
}
