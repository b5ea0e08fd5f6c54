//! Address Select Component
//!
//! Cascading state and city dropdowns backed by the IBGE listings. The
//! placeholder option carries an empty value, which parses to `None`.

use leptos::prelude::*;

use crate::state::parse_selection;

#[component]
pub fn AddressSelect(
    ufs: ReadSignal<Vec<String>>,
    cities: ReadSignal<Vec<String>>,
    selected_uf: ReadSignal<Option<String>>,
    selected_city: ReadSignal<Option<String>>,
    set_selected_uf: WriteSignal<Option<String>>,
    set_selected_city: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"State (UF)"</label>
                <select
                    name="uf"
                    id="uf"
                    prop:value=move || selected_uf.get().unwrap_or_default()
                    on:change=move |ev| {
                        set_selected_uf.set(parse_selection(event_target_value(&ev)))
                    }
                >
                    <option value="">"Select an UF"</option>
                    <For
                        each=move || ufs.get()
                        key=|uf| uf.clone()
                        children=move |uf| {
                            view! { <option value=uf.clone()>{uf.clone()}</option> }
                        }
                    />
                </select>
            </div>

            <div class="field">
                <label for="city">"City"</label>
                <select
                    name="city"
                    id="city"
                    prop:value=move || selected_city.get().unwrap_or_default()
                    on:change=move |ev| {
                        set_selected_city.set(parse_selection(event_target_value(&ev)))
                    }
                >
                    <option value="">"Select a city"</option>
                    <For
                        each=move || cities.get()
                        key=|city| city.clone()
                        children=move |city| {
                            view! { <option value=city.clone()>{city.clone()}</option> }
                        }
                    />
                </select>
            </div>
        </div>
    }
}
