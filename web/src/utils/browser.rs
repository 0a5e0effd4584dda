//! Thin wrappers over the browser APIs the page touches.
//!
//! Everything here must only run on the client: call these from effects and
//! event handlers, never while rendering on the server.

use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::js_sys;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("localStorage is unavailable")]
    NoStorage,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, BrowserError> {
    window()?.document().ok_or(BrowserError::NoDocument)
}

fn storage() -> Result<web_sys::Storage, BrowserError> {
    window()?.local_storage()?.ok_or(BrowserError::NoStorage)
}

pub fn storage_get(key: &str) -> Result<Option<String>, BrowserError> {
    Ok(storage()?.get_item(key)?)
}

pub fn storage_set(key: &str, value: &str) -> Result<(), BrowserError> {
    Ok(storage()?.set_item(key, value)?)
}

pub fn prefers_light() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Whether `IntersectionObserver` exists on `window`.
pub fn has_intersection_observer() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

/// Adds or removes a class on `<html>`.
pub fn toggle_root_class(class: &str, on: bool) -> Result<(), BrowserError> {
    let root = document()?
        .document_element()
        .ok_or(BrowserError::NoDocument)?;
    root.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn active_element() -> Option<web_sys::HtmlElement> {
    document()
        .ok()?
        .active_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

pub fn smooth_scroll_to(id: &str) -> Result<(), BrowserError> {
    if let Some(target) = document()?.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

/// Focusable descendants of `root`, in document order.
pub fn focusables(root: &web_sys::Element, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Reports `(element id, is_intersecting)` for each watched element as it
/// crosses `threshold`. Missing ids are skipped.
pub fn observe_ids<F>(ids: &[&str], threshold: f64, mut on_change: F) -> Result<(), BrowserError>
where
    F: FnMut(String, bool) + 'static,
{
    let document = document()?;
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                on_change(entry.target().id(), entry.is_intersecting());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for id in ids {
        if let Some(target) = document.get_element_by_id(id) {
            observer.observe(&target);
        }
    }
    callback.forget();
    Ok(())
}
