//! Map Picker Component
//!
//! Leaflet map with a single marker; clicking the map moves the marker and
//! records the picked position.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::leaflet::{self, LeafletMouseEvent};

const MAP_CONTAINER_ID: &str = "map";
const INITIAL_ZOOM: u8 = 15;

#[component]
pub fn MapPicker(
    initial_position: ReadSignal<(f64, f64)>,
    selected_position: ReadSignal<(f64, f64)>,
    set_selected_position: WriteSignal<(f64, f64)>,
) -> impl IntoView {
    // Leaflet handles are plain JS objects, kept out of the reactive graph
    let map_handle = StoredValue::new_local(None::<leaflet::LeafletMap>);
    let marker_handle = StoredValue::new_local(None::<leaflet::Marker>);

    // Build the map once the container div is in the DOM
    Effect::new(move |_| {
        if map_handle.with_value(|map| map.is_some()) {
            return;
        }

        let map = leaflet::new_map(MAP_CONTAINER_ID);
        map.set_view(
            &leaflet::lat_lng(initial_position.get_untracked()),
            INITIAL_ZOOM,
        );
        leaflet::new_tile_layer(leaflet::TILE_URL, &leaflet::tile_options()).add_to(&map);

        let marker = leaflet::new_marker(&leaflet::lat_lng(selected_position.get_untracked()));
        marker.add_to_map(&map);

        let on_click =
            Closure::<dyn FnMut(LeafletMouseEvent)>::new(move |ev: LeafletMouseEvent| {
                let latlng = ev.latlng();
                web_sys::console::log_1(
                    &format!("[MAP] click at {} {}", latlng.lat(), latlng.lng()).into(),
                );
                set_selected_position.set((latlng.lat(), latlng.lng()));
            });
        map.on("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        marker_handle.set_value(Some(marker));
        map_handle.set_value(Some(map));
    });

    // Recenter when the geolocation probe resolves
    Effect::new(move |_| {
        let center = initial_position.get();
        map_handle.with_value(|map| {
            if let Some(map) = map {
                map.set_view(&leaflet::lat_lng(center), INITIAL_ZOOM);
            }
        });
    });

    // Keep the marker on the picked position
    Effect::new(move |_| {
        let position = selected_position.get();
        marker_handle.with_value(|marker| {
            if let Some(marker) = marker {
                marker.set_lat_lng(&leaflet::lat_lng(position));
            }
        });
    });

    view! {
        <div id=MAP_CONTAINER_ID class="map-container"></div>
    }
}
