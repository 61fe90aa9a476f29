//! Shared browser utilities: console bindings and small DOM helpers

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    /// Console.warn binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(s: &str);

    /// Console.error binding for WASM
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn error(s: &str);
}

/// Upper bound on the device pixel ratio used for canvas backing stores
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

/// Device pixel ratio, capped at [`MAX_DEVICE_PIXEL_RATIO`]
pub fn device_pixel_ratio(window: &web_sys::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Computed value of a CSS custom property on the root element
pub fn css_var(window: &web_sys::Window, document: &web_sys::Document, name: &str) -> Option<String> {
    let root = document.document_element()?;
    let style = window.get_computed_style(&root).ok().flatten()?;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
