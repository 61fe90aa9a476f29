use crate::theme::Theme;

/// Horizontal loop length of the wave SVG (matches its width buffer in CSS)
pub const WAVE_LOOP_PX: f64 = 140.0;

/// Scroll-to-offset factor; the night wave drifts more slowly
pub fn scroll_factor(theme: Theme) -> f64 {
    match theme {
        Theme::Dark => 0.45,
        Theme::Light => 0.65,
    }
}

/// Horizontal wave offset in pixels for a vertical scroll position
pub fn wave_offset(scroll_y: f64, theme: Theme) -> f64 {
    -((scroll_y * scroll_factor(theme)) % WAVE_LOOP_PX)
}

/// CSS `transform` value for the wave SVG
pub fn wave_transform(scroll_y: f64, theme: Theme) -> String {
    format!("translateX({}px)", wave_offset(scroll_y, theme))
}

/// Coalesces bursts of scroll events into one update per animation frame
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should schedule a frame
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Schedule a frame through `schedule` unless one is already pending
    ///
    /// `schedule` returns the frame handle, or `None` when nothing was
    /// queued; a failed schedule leaves the throttle open.
    pub fn schedule_with<T>(&mut self, schedule: impl FnOnce() -> Option<T>) -> Option<T> {
        if !self.request() {
            return None;
        }
        let handle = schedule();
        if handle.is_none() {
            self.complete();
        }
        handle
    }

    /// Mark the scheduled frame as run
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
