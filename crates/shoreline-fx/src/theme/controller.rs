use super::Theme;

/// Storage key holding the persisted theme
pub const STORAGE_KEY: &str = "theme";

/// Persistence seam for the theme preference (`localStorage` in the browser)
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// In-memory store, used natively and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Handle returned by [`ThemeController::subscribe`]
pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(Theme)>;

/// Owns the current theme, persists it and notifies subscribers on change
pub struct ThemeController<S: ThemeStore> {
    theme: Theme,
    store: S,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Create a controller, restoring the persisted theme from `store`
    pub fn new(store: S) -> Self {
        let theme = Theme::from_stored(store.load().as_deref());
        Self {
            theme,
            store,
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the theme, persist it and notify subscribers; returns the new theme
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Set the theme; persists on every call, notifies only on change
    pub fn set(&mut self, theme: Theme) {
        let changed = theme != self.theme;
        self.theme = theme;
        self.store.save(theme.as_str());

        if changed {
            for (_, listener) in self.listeners.iter_mut() {
                listener(theme);
            }
        }
    }

    /// Register a listener called with the new theme after every change
    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_restores_persisted_theme() {
        let controller = ThemeController::new(MemoryStore::with_value("dark"));
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.is_dark());

        let controller = ThemeController::new(MemoryStore::new());
        assert_eq!(controller.theme(), Theme::Light);
        assert!(!controller.is_dark());
    }

    #[test]
    fn test_toggle_persists_last_value() {
        let mut controller = ThemeController::new(MemoryStore::new());
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().load().as_deref(), Some("dark"));
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn test_subscribers_notified_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut controller = ThemeController::new(MemoryStore::new());

        let sink = seen.clone();
        controller.subscribe(move |theme| sink.borrow_mut().push(theme));

        controller.toggle();
        controller.set(Theme::Dark); // no change, no notification
        controller.toggle();

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut controller = ThemeController::new(MemoryStore::new());

        let c = count.clone();
        let id = controller.subscribe(move |_| *c.borrow_mut() += 1);
        assert_eq!(controller.subscriber_count(), 1);

        controller.toggle();
        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.toggle();

        assert_eq!(*count.borrow(), 1);
        assert_eq!(controller.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_ids_unique() {
        let mut controller = ThemeController::new(MemoryStore::new());
        let a = controller.subscribe(|_| {});
        let b = controller.subscribe(|_| {});
        assert_ne!(a, b);
    }
}
