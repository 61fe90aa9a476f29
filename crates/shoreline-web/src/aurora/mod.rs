//! Aurora background mount
//!
//! Mounting puts a WebGL2 canvas in a container, keeps it sized to the
//! container, recolors it on theme changes and drives it from
//! `requestAnimationFrame`. The returned [`AuroraHandle`] releases every
//! resource the mount acquired.

mod binding;
mod frame;
mod surface;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shoreline_fx::background::AuroraRenderer;
use shoreline_fx::{
    ColorStops, FxError, MountConfig, MountRegistry, RenderState, Teardown, Theme, ThemePalette,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::listener::EventListener;
use crate::theme::read_palette;
use crate::util::{error, log, warn};

pub use binding::{ThemeBinding, ThemeSource};
pub use frame::FrameLoop;
pub use surface::{webgl2_available, CONTAINER_CLASS};

/// Attribute holding a generated registry key for containers without an id
const KEY_ATTRIBUTE: &str = "data-aurora-key";

thread_local! {
    static MOUNTS: RefCell<MountRegistry<AuroraHandle>> = RefCell::new(MountRegistry::new());
    static NEXT_KEY: Cell<u32> = const { Cell::new(0) };
}

/// State shared by the frame loop, resize handler, theme binding and GPU init
struct MountState {
    render: RenderState,
    renderer: Option<AuroraRenderer>,
    disposed: bool,
    reported_error: bool,
}

/// Everything a live mount holds
struct Mounted {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    state: Rc<RefCell<MountState>>,
    frame: Rc<FrameLoop>,
    binding: ThemeBinding,
    resize: EventListener,
}

impl Mounted {
    fn create(
        window: &Window,
        document: &Document,
        container: &HtmlElement,
        config: &MountConfig,
        source: &ThemeSource,
    ) -> Result<Self, JsValue> {
        surface::prepare_container(container);
        let canvas = surface::create_canvas(document)?;

        let (width, height) = surface::container_size(container);
        let (backing_w, backing_h) = surface::backing_size(window, width, height);
        surface::set_backing_size(&canvas, backing_w, backing_h);

        let theme = source.current(document);
        let stops = resolve_stops(config, &read_palette(window, document), theme);
        let state = Rc::new(RefCell::new(MountState {
            render: RenderState::new(config.params(), stops, width.max(1.0), height.max(1.0)),
            renderer: None,
            disposed: false,
            reported_error: false,
        }));

        let resize = {
            let window_ref = window.clone();
            let container = container.clone();
            let canvas = canvas.clone();
            let state = state.clone();
            EventListener::new(window.as_ref(), "resize", move |_| {
                sync_size(&window_ref, &container, &canvas, &state);
            })?
        };

        let binding = if config.has_explicit_stops() {
            ThemeBinding::Static
        } else {
            let window_ref = window.clone();
            let document_ref = document.clone();
            let config = config.clone();
            let state = state.clone();
            ThemeBinding::connect(source, document, move |theme| {
                let palette = read_palette(&window_ref, &document_ref);
                let stops = resolve_stops(&config, &palette, theme);
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.render.set_stops(stops);
                }
            })?
        };

        container.append_child(&canvas)?;

        let frame = {
            let state = state.clone();
            FrameLoop::start(window, move |now| draw_frame(&state, now))
        };

        spawn_renderer(canvas.clone(), state.clone());

        Ok(Self {
            container: container.clone(),
            canvas,
            state,
            frame,
            binding,
            resize,
        })
    }

    /// Release everything the mount holds; later calls do nothing
    fn release(&mut self) {
        {
            let mut state = self.state.borrow_mut();
            if state.disposed {
                return;
            }
            state.disposed = true;
        }

        self.frame.cancel();
        self.binding.release();
        self.resize.remove();

        if let Some(parent) = self.canvas.parent_node() {
            let container: &web_sys::Node = self.container.as_ref();
            if parent.is_same_node(Some(container)) {
                let _ = container.remove_child(&self.canvas);
            }
        }

        self.state.borrow_mut().renderer.take();
        surface::release_context(&self.canvas);
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.release();
    }
}

/// Theme stops unless the config pins its own; bad colors fall back to built-ins
fn resolve_stops(config: &MountConfig, palette: &ThemePalette, theme: Theme) -> ColorStops {
    match config.resolve_stops(palette, theme) {
        Ok(stops) => stops,
        Err(e) => {
            warn(&format!("[aurora] {}, using default colors", e));
            ThemePalette::fallback_stops(theme)
        }
    }
}

fn sync_size(
    window: &Window,
    container: &HtmlElement,
    canvas: &HtmlCanvasElement,
    state: &Rc<RefCell<MountState>>,
) {
    let (width, height) = surface::container_size(container);
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let (backing_w, backing_h) = surface::backing_size(window, width, height);

    let Ok(mut state) = state.try_borrow_mut() else {
        return;
    };
    state.render.resize(width, height);

    // Keep the canvas at the size the surface accepted
    let (backing_w, backing_h) = match state.renderer.as_mut() {
        Some(renderer) => renderer.resize(backing_w, backing_h),
        None => (backing_w, backing_h),
    };
    surface::set_backing_size(canvas, backing_w, backing_h);
}

fn draw_frame(state: &Rc<RefCell<MountState>>, now: f64) {
    let Ok(mut guard) = state.try_borrow_mut() else {
        return;
    };
    let state = &mut *guard;
    if state.disposed {
        return;
    }
    state.render.advance(now);

    // Frames before GPU init completes only advance time
    let Some(renderer) = state.renderer.as_mut() else {
        return;
    };
    match renderer.render(&state.render.uniforms()) {
        Ok(()) | Err(FxError::FrameSkipped) => {}
        Err(e) => {
            if !state.reported_error {
                error(&format!("[aurora] Frame failed: {}", e));
                state.reported_error = true;
            }
        }
    }
}

fn spawn_renderer(canvas: HtmlCanvasElement, state: Rc<RefCell<MountState>>) {
    let initial = state.borrow().render.uniforms();
    wasm_bindgen_futures::spawn_local(async move {
        if state.borrow().disposed {
            return;
        }
        match AuroraRenderer::new(canvas.clone(), &initial).await {
            Ok(mut renderer) => {
                let mut state = state.borrow_mut();
                if state.disposed {
                    drop(renderer);
                    surface::release_context(&canvas);
                    return;
                }
                // The canvas may have been resized while the device was pending
                let (width, height) = renderer.resize(canvas.width(), canvas.height());
                surface::set_backing_size(&canvas, width, height);
                state.renderer = Some(renderer);
                log("[aurora] Renderer ready");
            }
            Err(e) => {
                if !state.borrow().disposed {
                    error(&format!("[aurora] Failed to initialize renderer: {}", e));
                }
            }
        }
    });
}

/// Handle to one aurora mount; cloning shares the same mount
#[derive(Clone, Default)]
pub struct AuroraHandle {
    inner: Rc<RefCell<Option<Mounted>>>,
}

impl AuroraHandle {
    /// A handle that owns nothing
    pub fn inert() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Snapshot of the mount's render state; `None` once unmounted
    pub fn render_state(&self) -> Option<RenderState> {
        let inner = self.inner.borrow();
        let state = inner.as_ref()?.state.try_borrow().ok()?;
        Some(state.render.clone())
    }

    /// Whether both handles refer to the same mount
    pub fn same_mount(&self, other: &AuroraHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Release the mount; later calls do nothing
    pub fn unmount(&self) {
        let mounted = self.inner.borrow_mut().take();
        drop(mounted);
    }
}

impl Teardown for AuroraHandle {
    fn teardown(&mut self) {
        self.unmount();
    }
}

/// Mount an aurora into `container` without touching the registry
///
/// Returns an inert handle when WebGL2 is unavailable.
pub fn mount(
    window: &Window,
    document: &Document,
    container: &HtmlElement,
    config: &MountConfig,
    source: &ThemeSource,
) -> Result<AuroraHandle, JsValue> {
    if !webgl2_available(document) {
        warn("[aurora] WebGL2 not available");
        return Ok(AuroraHandle::inert());
    }
    let mounted = Mounted::create(window, document, container, config, source)?;
    Ok(AuroraHandle {
        inner: Rc::new(RefCell::new(Some(mounted))),
    })
}

/// Registry key of a container: its id, or a generated key stored on it
pub fn container_key(container: &HtmlElement) -> String {
    let id = container.id();
    if !id.is_empty() {
        return id;
    }
    if let Some(key) = container.get_attribute(KEY_ATTRIBUTE) {
        return key;
    }
    let key = NEXT_KEY.with(|next| {
        let n = next.get();
        next.set(n + 1);
        format!("aurora-{}", n)
    });
    let _ = container.set_attribute(KEY_ATTRIBUTE, &key);
    key
}

/// Mount into `container`, first tearing down any mount it already holds
pub fn mount_exclusive(
    window: &Window,
    document: &Document,
    container: &HtmlElement,
    config: &MountConfig,
    source: &ThemeSource,
) -> AuroraHandle {
    let key = container_key(container);

    MOUNTS.with(|mounts| mounts.borrow_mut().unmount(&key));

    let handle = match mount(window, document, container, config, source) {
        Ok(handle) => handle,
        Err(e) => {
            error(&format!("[aurora] Mount failed: {:?}", e));
            return AuroraHandle::inert();
        }
    };
    if handle.is_live() {
        MOUNTS.with(|mounts| {
            mounts.borrow_mut().replace_with(&key, || Some(handle.clone()));
        });
    }
    handle
}

/// Unmount whatever the registry holds for `key`
pub fn unmount_key(key: &str) -> bool {
    MOUNTS.with(|mounts| mounts.borrow_mut().unmount(key))
}

/// Unmount `handle` and forget it, leaving a newer mount in the same slot alone
pub fn release(key: &str, handle: &AuroraHandle) {
    handle.unmount();
    MOUNTS.with(|mounts| {
        let mut mounts = mounts.borrow_mut();
        if mounts.get(key).is_some_and(|current| current.same_mount(handle)) {
            mounts.unmount(key);
        }
    });
}

fn resolve_target(document: &Document, target: &JsValue) -> Option<HtmlElement> {
    if let Some(id) = target.as_string() {
        return document.get_element_by_id(&id)?.dyn_into().ok();
    }
    target.clone().dyn_into::<HtmlElement>().ok()
}

fn parse_config(config: &JsValue) -> MountConfig {
    if config.is_undefined() || config.is_null() {
        return MountConfig::default();
    }
    let json = js_sys::JSON::stringify(config)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    MountConfig::from_json(&json).unwrap_or_else(|e| {
        warn(&format!("[aurora] {}, using defaults", e));
        MountConfig::default()
    })
}

fn noop() -> js_sys::Function {
    js_sys::Function::new_no_args("")
}

/// Mount an aurora background into a container
///
/// `target` is a container id or an element; `config` is an options object
/// (`colorStops`, `amplitude`, `blend`, `opacity`, `speed`). Returns a
/// function that unmounts; it is safe to call more than once.
#[wasm_bindgen(js_name = mountAurora)]
pub fn mount_aurora(target: JsValue, config: JsValue) -> js_sys::Function {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return noop();
    };
    let Some(document) = window.document() else {
        return noop();
    };
    let Some(container) = resolve_target(&document, &target) else {
        return noop();
    };

    let config = parse_config(&config);
    let handle = mount_exclusive(&window, &document, &container, &config, &ThemeSource::Document);
    if !handle.is_live() {
        return noop();
    }

    let key = container_key(&container);
    let unmount = Closure::wrap(Box::new(move || release(&key, &handle)) as Box<dyn FnMut()>);
    unmount.into_js_value().unchecked_into()
}

/// Unmount the aurora in the container with this id, if any
#[wasm_bindgen(js_name = unmountAurora)]
pub fn unmount_aurora(container_id: &str) -> bool {
    unmount_key(container_id)
}
