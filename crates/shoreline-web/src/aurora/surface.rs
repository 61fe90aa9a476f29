//! Canvas creation, sizing and WebGL2 context handling

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, WebGl2RenderingContext, WebglLoseContext, Window};

use crate::util::device_pixel_ratio;

/// Class added to the container for the page's glow/blur styles
pub const CONTAINER_CLASS: &str = "aurora-container";

/// Probe for WebGL2 on a scratch canvas, releasing the probe context
pub fn webgl2_available(document: &Document) -> bool {
    let Ok(element) = document.create_element("canvas") else {
        return false;
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        return false;
    };
    match canvas.get_context("webgl2") {
        Ok(Some(context)) => {
            if let Ok(gl) = context.dyn_into::<WebGl2RenderingContext>() {
                lose_gl(&gl);
            }
            true
        }
        _ => false,
    }
}

/// Create the transparent canvas that fills the container
pub fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let style = canvas.style();
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("display", "block")?;
    style.set_property("background-color", "transparent")?;
    Ok(canvas)
}

/// Mark the container as a decorative aurora host
pub fn prepare_container(container: &HtmlElement) {
    let _ = container.class_list().add_1(CONTAINER_CLASS);
    let _ = container.set_attribute("aria-hidden", "true");
}

/// Container size in CSS pixels
pub fn container_size(container: &HtmlElement) -> (f32, f32) {
    (container.client_width() as f32, container.client_height() as f32)
}

/// Backing-store size in device pixels for a CSS size
pub fn backing_size(window: &Window, width: f32, height: f32) -> (u32, u32) {
    let dpr = device_pixel_ratio(window);
    let scale = |v: f32| ((v as f64 * dpr).round() as u32).max(1);
    (scale(width), scale(height))
}

/// Resize the canvas backing store; returns true when it changed
pub fn set_backing_size(canvas: &HtmlCanvasElement, width: u32, height: u32) -> bool {
    if canvas.width() == width && canvas.height() == height {
        return false;
    }
    canvas.set_width(width);
    canvas.set_height(height);
    true
}

fn lose_gl(gl: &WebGl2RenderingContext) {
    if let Ok(Some(ext)) = gl.get_extension("WEBGL_lose_context") {
        ext.unchecked_into::<WebglLoseContext>().lose_context();
    }
}

/// Release the canvas' WebGL2 context
pub fn release_context(canvas: &HtmlCanvasElement) {
    if let Ok(Some(context)) = canvas.get_context("webgl2") {
        if let Ok(gl) = context.dyn_into::<WebGl2RenderingContext>() {
            lose_gl(&gl);
        }
    }
}
