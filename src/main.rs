//! Coleta Frontend Entry Point

mod models;
mod state;
mod api;
mod geo;
mod leaflet;
mod browser;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
