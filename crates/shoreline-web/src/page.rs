//! Page controller: owns the theme, effects and the page aurora
//!
//! One `PageController` replaces the page's global script state. `init`
//! wires everything up, `dispose` takes it all down again.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;
use shoreline_fx::{MountConfig, Theme, ThemeController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::aurora::{self, AuroraHandle, ThemeSource};
use crate::effects::{render_stars, splash_listener, WaveEffect};
use crate::listener::EventListener;
use crate::theme::{apply_theme, update_icon, LocalStorageStore, SharedTheme, TOGGLE_ID};
use crate::util::{log, warn};

/// Id of the container holding the page's aurora
pub const AURORA_ID: &str = "aurora";

/// Snapshot reported to JS by `PageController::state_json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageState {
    theme: Theme,
    aurora_mounted: bool,
    /// Virtual time of the page aurora in seconds
    aurora_time: Option<f32>,
}

struct Page {
    document: Document,
    theme: SharedTheme,
    aurora: AuroraHandle,
    wave: Option<WaveEffect>,
    toggle: RefCell<Option<EventListener>>,
    _splash: Option<EventListener>,
}

impl Page {
    fn build(window: &Window, document: &Document) -> Rc<Self> {
        let controller = ThemeController::new(LocalStorageStore::new(window));
        let theme = controller.theme();
        let shared: SharedTheme = Rc::new(RefCell::new(controller));

        apply_theme(document, theme);
        update_icon(document, theme);
        if let Err(e) = render_stars(document, theme) {
            warn(&format!("[page] Failed to render stars: {:?}", e));
        }

        let aurora = match document
            .get_element_by_id(AURORA_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(container) => aurora::mount_exclusive(
                window,
                document,
                &container,
                &MountConfig::site_preset(),
                &ThemeSource::Controller(shared.clone()),
            ),
            None => AuroraHandle::inert(),
        };

        let splash = splash_listener(window, document)
            .map_err(|e| warn(&format!("[page] Click effects unavailable: {:?}", e)))
            .ok();
        let wave = WaveEffect::new(window, document)
            .map_err(|e| warn(&format!("[page] Wave effect unavailable: {:?}", e)))
            .ok();

        let page = Rc::new(Self {
            document: document.clone(),
            theme: shared,
            aurora,
            wave,
            toggle: RefCell::new(None),
            _splash: splash,
        });

        if let Some(button) = document.get_element_by_id(TOGGLE_ID) {
            let weak: Weak<Page> = Rc::downgrade(&page);
            match EventListener::new(button.as_ref(), "click", move |_| {
                if let Some(page) = weak.upgrade() {
                    page.toggle_theme();
                }
            }) {
                Ok(listener) => *page.toggle.borrow_mut() = Some(listener),
                Err(e) => warn(&format!("[page] Theme toggle unavailable: {:?}", e)),
            }
        }

        log(&format!("[page] Initialized in {} mode", theme.as_str()));
        page
    }

    fn current(&self) -> Theme {
        self.theme.borrow().theme()
    }

    fn toggle_theme(&self) -> Theme {
        let next = self.current().toggled();

        // Class first so subscribers read the new CSS variables
        apply_theme(&self.document, next);
        self.theme.borrow_mut().set(next);

        update_icon(&self.document, next);
        if let Err(e) = render_stars(&self.document, next) {
            warn(&format!("[page] Failed to render stars: {:?}", e));
        }
        if let Some(wave) = &self.wave {
            wave.schedule();
        }
        next
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.toggle.borrow_mut().take();
        aurora::release(AURORA_ID, &self.aurora);
    }
}

/// Site-wide controller exported to JS
#[wasm_bindgen]
pub struct PageController {
    page: Option<Rc<Page>>,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PageController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self { page: None }
    }

    /// Restore the theme and start every effect; re-initializing disposes first
    #[wasm_bindgen]
    pub fn init(&mut self) -> Result<(), JsValue> {
        self.dispose();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        self.page = Some(Page::build(&window, &document));
        Ok(())
    }

    /// Flip the theme; returns true when dark mode is now active
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> bool {
        match &self.page {
            Some(page) => page.toggle_theme().is_dark(),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.page.as_ref().is_some_and(|page| page.theme.borrow().is_dark())
    }

    /// Current state as JSON: `{"theme":"dark","auroraMounted":true,"auroraTime":12.5}`
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        let render = self.page.as_ref().and_then(|p| p.aurora.render_state());
        let state = PageState {
            theme: self.page.as_ref().map(|p| p.current()).unwrap_or_default(),
            aurora_mounted: self.page.as_ref().is_some_and(|p| p.aurora.is_live()),
            aurora_time: render.map(|r| r.time()),
        };
        serde_json::to_string(&state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Remove every listener and unmount the aurora; safe to call repeatedly
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        if self.page.take().is_some() {
            log("[page] Disposed");
        }
    }
}
