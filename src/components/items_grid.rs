//! Items Grid Component
//!
//! Multi-select grid of recyclable item categories.

use leptos::prelude::*;

use crate::models::Item;
use crate::state::toggle_item;

#[component]
pub fn ItemsGrid(
    items: ReadSignal<Vec<Item>>,
    selected_items: ReadSignal<Vec<u32>>,
    set_selected_items: WriteSignal<Vec<u32>>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Collect items"</h2>
                <span>"Select one or more items below"</span>
            </legend>

            <ul class="items-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let is_selected = move || selected_items.get().contains(&id);
                        view! {
                            <li
                                class=move || if is_selected() { "selected" } else { "" }
                                on:click=move |_| {
                                    set_selected_items.update(|selected| toggle_item(selected, id))
                                }
                            >
                                <img src=item.image_url.clone() alt=item.title.clone() />
                                <span>{item.title.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </fieldset>
    }
}
