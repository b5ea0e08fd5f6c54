//! Coleta Frontend App
//!
//! Root component; the app is the single create-point page.

use leptos::prelude::*;

use crate::components::CreatePoint;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CreatePoint />
    }
}
