//! Aurora GPU renderer
//!
//! wgpu renderer drawing the aurora into a browser canvas through the
//! WebGL2 backend.
//!
//! ## Design
//!
//! - Full-screen triangle generated in the vertex shader (no geometry)
//! - One uniform buffer rewritten every frame from [`crate::RenderState`]
//! - Premultiplied alpha output blended over a transparent clear, so the
//!   page shows through where the band fades out

mod init;
mod render;
mod renderer;
mod shaders;

pub use renderer::AuroraRenderer;
pub use shaders::SHADER_AURORA;
