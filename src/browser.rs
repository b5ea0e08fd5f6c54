//! Browser Services
//!
//! One-shot geolocation probe plus the alert and navigation calls the page
//! makes around submit.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Ask the browser for the current position once. `on_position` fires only
/// on success; permission denial or an unavailable provider never calls
/// back, matching the page's silent-ignore behavior.
pub fn current_position(on_position: impl Fn(f64, f64) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(geolocation) = window.navigator().geolocation() else {
        return;
    };

    let callback =
        Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
            let coords = position.coords();
            on_position(coords.latitude(), coords.longitude());
        });
    let _ = geolocation.get_current_position(callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Blocking acknowledgement dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Navigate to the root route.
pub fn navigate_home() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}
