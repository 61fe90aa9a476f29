//! How a mount learns about theme changes

use std::cell::RefCell;
use std::rc::Rc;

use shoreline_fx::{SubscriptionId, Theme};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MutationObserver, MutationObserverInit};

use crate::theme::{document_theme, SharedTheme};

/// Where theme changes come from
#[derive(Clone)]
pub enum ThemeSource {
    /// Watch the root element's `class` attribute (standalone mounts)
    Document,
    /// Subscribe to the page's theme controller
    Controller(SharedTheme),
}

impl ThemeSource {
    /// Current theme according to this source
    pub fn current(&self, document: &Document) -> Theme {
        match self {
            ThemeSource::Document => document_theme(document),
            ThemeSource::Controller(controller) => controller.borrow().theme(),
        }
    }
}

/// Live theme subscription of one mount; released on drop
pub enum ThemeBinding {
    /// Stops are pinned by config
    Static,
    Observer {
        observer: MutationObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
    },
    Subscription {
        controller: SharedTheme,
        id: Option<SubscriptionId>,
    },
}

impl ThemeBinding {
    /// Connect `on_change` to `source`
    pub fn connect(
        source: &ThemeSource,
        document: &Document,
        on_change: impl FnMut(Theme) + 'static,
    ) -> Result<Self, JsValue> {
        match source {
            ThemeSource::Document => {
                let on_change = Rc::new(RefCell::new(on_change));
                let doc = document.clone();
                let callback = Closure::wrap(Box::new(move |_records: js_sys::Array, _observer: MutationObserver| {
                    (on_change.borrow_mut())(document_theme(&doc));
                }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

                let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
                let options = MutationObserverInit::new();
                options.set_attributes(true);
                options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));

                let root = document
                    .document_element()
                    .ok_or_else(|| JsValue::from_str("document has no root element"))?;
                observer.observe_with_options(&root, &options)?;

                Ok(ThemeBinding::Observer {
                    observer,
                    _callback: callback,
                })
            }
            ThemeSource::Controller(controller) => {
                let id = controller.borrow_mut().subscribe(on_change);
                Ok(ThemeBinding::Subscription {
                    controller: controller.clone(),
                    id: Some(id),
                })
            }
        }
    }

    /// Stop receiving theme changes; later calls do nothing
    pub fn release(&mut self) {
        match self {
            ThemeBinding::Static => {}
            ThemeBinding::Observer { observer, .. } => observer.disconnect(),
            ThemeBinding::Subscription { controller, id } => {
                if let Some(id) = id.take() {
                    if let Ok(mut controller) = controller.try_borrow_mut() {
                        controller.unsubscribe(id);
                    }
                }
            }
        }
    }
}

impl Drop for ThemeBinding {
    fn drop(&mut self) {
        self.release();
    }
}
