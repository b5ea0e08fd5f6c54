//! Leaflet Bindings
//!
//! Minimal wasm-bindgen surface over the Leaflet global `L` loaded in
//! `index.html`: map, tile layer, marker and the map click event.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A map instance (`L.Map`)
    pub type LeafletMap;
    /// A tile layer (`L.TileLayer`)
    pub type TileLayer;
    /// A point marker (`L.Marker`)
    pub type Marker;
    /// Mouse event delivered on map `click`
    pub type LeafletMouseEvent;
    /// Latitude/longitude pair (`L.LatLng`)
    pub type LatLng;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(latlng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_map(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, latlng: &JsValue) -> Marker;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &LeafletMouseEvent) -> LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

/// OpenStreetMap tile template
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="http://osm.org/copyright">OpenStreetMap</a> contributors"#;

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

/// Tile layer options for the OpenStreetMap layer.
pub fn tile_options() -> JsValue {
    serde_wasm_bindgen::to_value(&TileOptions {
        attribution: TILE_ATTRIBUTION,
    })
    .unwrap_or(JsValue::NULL)
}

/// Convert a (lat, lng) pair into the `[lat, lng]` array Leaflet accepts.
pub fn lat_lng(position: (f64, f64)) -> JsValue {
    serde_wasm_bindgen::to_value(&[position.0, position.1]).unwrap_or(JsValue::NULL)
}
