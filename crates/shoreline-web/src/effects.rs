//! Decorative page effects: starfield, click wakes and the scrolling wave

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use shoreline_fx::effects::{starfield, wave_transform, FrameThrottle, Splash, SPLASH_LIFETIME_MS};
use shoreline_fx::Theme;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, SvgElement, Window};

use crate::listener::EventListener;
use crate::theme::document_theme;

/// Selector of the starfield container
pub const STARS_SELECTOR: &str = ".stars";
/// Selector of the wave SVG moved on scroll
pub const WAVE_SELECTOR: &str = ".wave-divider svg";
/// Attribute marking elements that spawn a wake when clicked
pub const WAKE_ATTRIBUTE: &str = "data-wake";

/// Refill the starfield for `theme`; light mode leaves it empty
pub fn render_stars(document: &Document, theme: Theme) -> Result<(), JsValue> {
    let Some(container) = document.query_selector(STARS_SELECTOR)? else {
        return Ok(());
    };
    container.set_inner_html("");

    for star in starfield(theme, js_sys::Math::random) {
        let element: HtmlElement = document.create_element("div")?.dyn_into()?;
        element.set_class_name("star");
        let style = element.style();
        for (property, value) in star.style() {
            style.set_property(property, &value)?;
        }
        container.append_child(&element)?;
    }
    Ok(())
}

/// Spawn a wake for a click inside a `[data-wake]` element
fn spawn_wake(window: &Window, document: &Document, event: &MouseEvent) -> Result<(), JsValue> {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };
    let Some(source) = target.closest(&format!("[{}]", WAKE_ATTRIBUTE))? else {
        return Ok(());
    };
    let Some(body) = document.body() else {
        return Ok(());
    };

    let variant = source.get_attribute(WAKE_ATTRIBUTE).unwrap_or_default();
    let splash = Splash::at(
        &variant,
        (event.client_x() as f64, event.client_y() as f64),
        (window.scroll_x()?, window.scroll_y()?),
    );

    let wake: HtmlElement = document.create_element("div")?.dyn_into()?;
    wake.set_class_name(&splash.class_name());
    wake.style().set_property("left", &splash.left())?;
    wake.style().set_property("top", &splash.top())?;

    let ripple = document.create_element("div")?;
    ripple.set_class_name("splash");
    wake.append_child(&ripple)?;
    body.append_child(&wake)?;

    let remove = Closure::once_into_js(move || wake.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.unchecked_ref(),
        SPLASH_LIFETIME_MS,
    )?;
    Ok(())
}

/// Document click listener spawning wakes
pub fn splash_listener(window: &Window, document: &Document) -> Result<EventListener, JsValue> {
    let window_ref = window.clone();
    let document_ref = document.clone();
    EventListener::new(document.as_ref(), "click", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            let _ = spawn_wake(&window_ref, &document_ref, event);
        }
    })
}

struct WaveState {
    window: Window,
    document: Document,
    throttle: Cell<FrameThrottle>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl WaveState {
    fn update(&self) {
        let Ok(Some(svg)) = self.document.query_selector(WAVE_SELECTOR) else {
            return;
        };
        let Ok(svg) = svg.dyn_into::<SvgElement>() else {
            return;
        };
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let transform = wave_transform(scroll_y, document_theme(&self.document));
        let _ = svg.style().set_property("transform", &transform);
    }

    fn schedule(&self) {
        let mut throttle = self.throttle.get();
        let callback = self.callback.borrow();
        let id = throttle.schedule_with(|| {
            let callback = callback.as_ref()?;
            self.window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()
        });
        self.throttle.set(throttle);
        if id.is_some() {
            self.pending.set(id);
        }
    }

    fn run_frame(&self) {
        self.pending.set(None);
        let mut throttle = self.throttle.get();
        throttle.complete();
        self.throttle.set(throttle);
        self.update();
    }
}

/// Moves the wave SVG with the scroll position, at most once per frame
pub struct WaveEffect {
    state: Rc<WaveState>,
    _scroll: EventListener,
    _resize: EventListener,
}

impl WaveEffect {
    pub fn new(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let state = Rc::new(WaveState {
            window: window.clone(),
            document: document.clone(),
            throttle: Cell::new(FrameThrottle::new()),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<WaveState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |_now: f64| {
            if let Some(state) = weak.upgrade() {
                state.run_frame();
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(callback);

        let on_scroll = Rc::downgrade(&state);
        let scroll = EventListener::passive(window.as_ref(), "scroll", move |_| {
            if let Some(state) = on_scroll.upgrade() {
                state.schedule();
            }
        })?;
        let on_resize = Rc::downgrade(&state);
        let resize = EventListener::new(window.as_ref(), "resize", move |_| {
            if let Some(state) = on_resize.upgrade() {
                state.schedule();
            }
        })?;

        state.update();
        Ok(Self {
            state,
            _scroll: scroll,
            _resize: resize,
        })
    }

    /// Queue an update on the next animation frame
    pub fn schedule(&self) {
        self.state.schedule();
    }
}

impl Drop for WaveEffect {
    fn drop(&mut self) {
        if let Some(id) = self.state.pending.take() {
            let _ = self.state.window.cancel_animation_frame(id);
        }
        self.state.callback.borrow_mut().take();
    }
}
