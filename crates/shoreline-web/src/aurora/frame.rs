//! Self-rescheduling animation-frame loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Calls a tick function on every animation frame until cancelled
pub struct FrameLoop {
    window: Window,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    /// Start the loop; `tick` receives the frame timestamp in milliseconds
    pub fn start(window: &Window, mut tick: impl FnMut(f64) + 'static) -> Rc<Self> {
        let frame = Rc::new(Self {
            window: window.clone(),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        // Weak so the closure does not keep its own loop alive
        let weak = Rc::downgrade(&frame);
        let callback = Closure::wrap(Box::new(move |now: f64| {
            let Some(frame) = weak.upgrade() else {
                return;
            };
            frame.pending.set(None);
            frame.schedule();
            tick(now);
        }) as Box<dyn FnMut(f64)>);

        *frame.callback.borrow_mut() = Some(callback);
        frame.schedule();
        frame
    }

    fn schedule(&self) {
        let callback = self.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            let id = self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok();
            self.pending.set(id);
        }
    }

    /// Cancel the pending frame and drop the callback; later calls do nothing
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
