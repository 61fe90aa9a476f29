//! Browser layer for the Shoreline site effects
//!
//! Exposes to JS:
//! - `mountAurora(target, config)` / `unmountAurora(id)` for standalone mounts
//! - `PageController` driving the theme toggle, starfield, click wakes,
//!   scrolling wave and the page aurora
//!
//! All rendering math lives in `shoreline-fx`; this crate only wires it to
//! the DOM.

pub mod aurora;
pub mod effects;
pub mod listener;
pub mod page;
pub mod theme;
pub mod util;

use wasm_bindgen::prelude::*;

pub use aurora::{mount_aurora, unmount_aurora, AuroraHandle, ThemeSource};
pub use page::PageController;

/// Module start hook: installs the panic hook
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
