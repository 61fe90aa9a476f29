//! Decorative effects core for the Shoreline site
//!
//! This crate holds everything about the site's visual effects that can be
//! reasoned about without a browser:
//! - Color parsing and the three-stop aurora color ramp
//! - A CPU reference of the aurora fragment shader
//! - Mount configuration and per-mount render state
//! - Theme model, persistence seam and change notifications
//! - Mount registry (one live surface per container)
//! - Starfield, splash and scroll-wave geometry
//!
//! ## Architecture
//!
//! - [`color`]: `Rgb` and CSS color parsing
//! - [`ramp`]: `ColorStops` and the piecewise-linear ramp
//! - [`shader`]: simplex noise and per-pixel aurora shading
//! - [`config`]: `MountConfig` (from JS) resolved into `AuroraParams`
//! - [`state`]: `RenderState` advanced every animation frame
//! - [`theme`]: `Theme`, `ThemePalette`, `ThemeController`
//! - [`registry`]: `MountRegistry` keyed by container id
//! - [`effects`]: stars, splash and wave helpers
//! - `background` (feature `wasm`): the wgpu aurora renderer
//!
//! ## Example
//!
//! ```rust
//! use shoreline_fx::{MountConfig, RenderState, Theme, ThemePalette};
//!
//! let config = MountConfig::from_json(r#"{ "speed": 1.0 }"#).unwrap();
//! let stops = config
//!     .resolve_stops(&ThemePalette::default(), Theme::Light)
//!     .unwrap();
//! let mut state = RenderState::new(config.params(), stops, 800.0, 400.0);
//! state.advance(0.0);
//! state.advance(500.0);
//! assert!((state.time() - 0.5).abs() < 1e-6);
//! ```

pub mod color;
pub mod config;
pub mod effects;
pub mod error;
pub mod ramp;
pub mod registry;
pub mod shader;
pub mod state;
pub mod theme;
mod uniforms;

// GPU renderer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod background;

pub use color::Rgb;
pub use config::{AuroraParams, MountConfig};
pub use error::{ColorError, FxError};
pub use ramp::{ColorStops, STOP_POSITIONS};
pub use registry::{MountRegistry, Teardown};
pub use state::{fit_surface_size, RenderState};
pub use theme::{MemoryStore, SubscriptionId, Theme, ThemeController, ThemePalette, ThemeStore};
pub use uniforms::AuroraUniforms;
