//! Theme persistence and DOM application

use std::cell::RefCell;
use std::rc::Rc;

use shoreline_fx::theme::{DARK_CLASS, STORAGE_KEY};
use shoreline_fx::{Theme, ThemeController, ThemePalette, ThemeStore};
use web_sys::{Document, Storage, Window};

use crate::util::{css_var, warn};

/// Id of the element showing the theme icon
pub const ICON_ID: &str = "themeIcon";
/// Id of the theme toggle button
pub const TOGGLE_ID: &str = "themeToggle";

/// Theme controller shared between the page and aurora mounts
pub type SharedTheme = Rc<RefCell<ThemeController<LocalStorageStore>>>;

/// `localStorage`-backed theme store; degrades to no persistence when storage is blocked
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            warn("[theme] localStorage unavailable, preference will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
}

/// Theme currently signalled by the root element's class list
pub fn document_theme(document: &Document) -> Theme {
    let dark = document
        .document_element()
        .map(|root| root.class_list().contains(DARK_CLASS))
        .unwrap_or(false);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Set or clear the `dark` class on the root element
pub fn apply_theme(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}

/// Show the icon for the mode the toggle switches to
pub fn update_icon(document: &Document, theme: Theme) {
    if let Some(icon) = document.get_element_by_id(ICON_ID) {
        icon.set_text_content(Some(theme.icon()));
    }
}

/// Accent colors from `--accent` / `--accent2`
pub fn read_palette(window: &Window, document: &Document) -> ThemePalette {
    ThemePalette::from_css(
        css_var(window, document, "--accent").as_deref(),
        css_var(window, document, "--accent2").as_deref(),
    )
}
