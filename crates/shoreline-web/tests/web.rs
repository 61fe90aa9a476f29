//! Browser tests for DOM wiring
//!
//! Run with `wasm-pack test --headless --firefox crates/shoreline-web`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use shoreline_fx::theme::STORAGE_KEY;
use shoreline_fx::{MountConfig, Theme, ThemeController, ThemeStore};
use shoreline_web::aurora::{self, webgl2_available, ThemeSource, CONTAINER_CLASS};
use shoreline_web::effects::render_stars;
use shoreline_web::theme::{apply_theme, document_theme, LocalStorageStore, SharedTheme};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn env() -> (Window, Document) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    (window, document)
}

fn container(document: &Document, id: &str) -> HtmlElement {
    let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    el.set_id(id);
    el.style().set_property("width", "200px").unwrap();
    el.style().set_property("height", "100px").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn test_missing_container_returns_callable_noop() {
    let unmount = shoreline_web::mount_aurora(JsValue::from_str("no-such-container"), JsValue::NULL);
    unmount.call0(&JsValue::NULL).unwrap();
    unmount.call0(&JsValue::NULL).unwrap();
}

#[wasm_bindgen_test]
fn test_mount_then_unmount_leaves_no_children() {
    let (window, document) = env();
    let el = container(&document, "aurora-test-unmount");

    let handle = aurora::mount_exclusive(
        &window,
        &document,
        &el,
        &MountConfig::default(),
        &ThemeSource::Document,
    );
    if webgl2_available(&document) {
        assert!(handle.is_live());
        assert_eq!(el.child_element_count(), 1);
        assert!(el.class_list().contains(CONTAINER_CLASS));
        assert_eq!(el.get_attribute("aria-hidden").as_deref(), Some("true"));
    } else {
        assert!(!handle.is_live());
    }

    aurora::release("aurora-test-unmount", &handle);
    assert!(!handle.is_live());
    assert_eq!(el.child_element_count(), 0);
    el.remove();
}

#[wasm_bindgen_test]
fn test_unmount_twice_is_harmless() {
    let (_, document) = env();
    let el = container(&document, "aurora-test-twice");

    let unmount = shoreline_web::mount_aurora(JsValue::from_str("aurora-test-twice"), JsValue::NULL);
    unmount.call0(&JsValue::NULL).unwrap();
    unmount.call0(&JsValue::NULL).unwrap();
    assert!(!shoreline_web::unmount_aurora("aurora-test-twice"));
    assert_eq!(el.child_element_count(), 0);
    el.remove();
}

#[wasm_bindgen_test]
fn test_double_mount_keeps_one_canvas() {
    let (window, document) = env();
    let el = container(&document, "aurora-test-double");
    let config = MountConfig::site_preset();

    let first = aurora::mount_exclusive(&window, &document, &el, &config, &ThemeSource::Document);
    let second = aurora::mount_exclusive(&window, &document, &el, &config, &ThemeSource::Document);

    assert!(!first.is_live());
    assert!(el.query_selector_all("canvas").unwrap().length() <= 1);
    if second.is_live() {
        assert_eq!(el.query_selector_all("canvas").unwrap().length(), 1);
    }

    let live = second.is_live();
    assert_eq!(aurora::unmount_key("aurora-test-double"), live);
    assert!(!second.is_live());
    assert_eq!(el.child_element_count(), 0);
    el.remove();
}

#[wasm_bindgen_test]
fn test_theme_store_persists_toggle() {
    let (window, _) = env();
    let storage = window.local_storage().unwrap().unwrap();
    storage.remove_item(STORAGE_KEY).unwrap();

    let mut controller = ThemeController::new(LocalStorageStore::new(&window));
    assert_eq!(controller.theme(), Theme::Light);
    controller.toggle();
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap().as_deref(), Some("dark"));

    let restored = ThemeController::new(LocalStorageStore::new(&window));
    assert_eq!(restored.theme(), Theme::Dark);
    assert_eq!(restored.store().load().as_deref(), Some("dark"));

    storage.remove_item(STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn test_apply_theme_sets_root_class() {
    let (_, document) = env();
    apply_theme(&document, Theme::Dark);
    assert_eq!(document_theme(&document), Theme::Dark);
    apply_theme(&document, Theme::Light);
    assert_eq!(document_theme(&document), Theme::Light);
}

#[wasm_bindgen_test]
fn test_stars_follow_theme() {
    let (_, document) = env();
    let stars = document.create_element("div").unwrap();
    stars.set_class_name("stars");
    document.body().unwrap().append_child(&stars).unwrap();

    render_stars(&document, Theme::Dark).unwrap();
    assert_eq!(stars.child_element_count(), 32);
    render_stars(&document, Theme::Dark).unwrap();
    assert_eq!(stars.child_element_count(), 32);
    render_stars(&document, Theme::Light).unwrap();
    assert_eq!(stars.child_element_count(), 0);

    stars.remove();
}

#[wasm_bindgen_test]
fn test_theme_round_trip_restores_mount_stops() {
    let (window, document) = env();
    if !webgl2_available(&document) {
        return;
    }
    let storage = window.local_storage().unwrap().unwrap();
    storage.remove_item(STORAGE_KEY).unwrap();

    let el = container(&document, "aurora-test-theme");
    let controller: SharedTheme = Rc::new(RefCell::new(ThemeController::new(
        LocalStorageStore::new(&window),
    )));
    let handle = aurora::mount_exclusive(
        &window,
        &document,
        &el,
        &MountConfig::default(),
        &ThemeSource::Controller(controller.clone()),
    );
    assert_eq!(controller.borrow().subscriber_count(), 1);

    let light = *handle.render_state().unwrap().stops();
    controller.borrow_mut().toggle();
    let dark = *handle.render_state().unwrap().stops();
    assert_ne!(light, dark);

    controller.borrow_mut().toggle();
    assert_eq!(*handle.render_state().unwrap().stops(), light);

    aurora::release("aurora-test-theme", &handle);
    assert!(handle.render_state().is_none());
    assert_eq!(controller.borrow().subscriber_count(), 0);

    storage.remove_item(STORAGE_KEY).unwrap();
    el.remove();
}

#[wasm_bindgen_test]
fn test_resize_event_updates_resolution() {
    let (window, document) = env();
    if !webgl2_available(&document) {
        return;
    }
    let el = container(&document, "aurora-test-resize");
    let handle = aurora::mount_exclusive(
        &window,
        &document,
        &el,
        &MountConfig::default(),
        &ThemeSource::Document,
    );
    assert_eq!(handle.render_state().unwrap().resolution(), [200.0, 100.0]);

    for (width, height) in [(320, 180), (640, 120)] {
        el.style().set_property("width", &format!("{}px", width)).unwrap();
        el.style().set_property("height", &format!("{}px", height)).unwrap();
        window.dispatch_event(&Event::new("resize").unwrap()).unwrap();

        let resolution = handle.render_state().unwrap().resolution();
        assert_eq!(resolution, [el.client_width() as f32, el.client_height() as f32]);
        assert_eq!(resolution, [width as f32, height as f32]);
    }

    aurora::release("aurora-test-resize", &handle);
    el.remove();
}
