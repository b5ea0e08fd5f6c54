//! Create Collection Point Page
//!
//! Single form page: contact info, a map-picked location, the IBGE
//! state/city pair and the recyclable-items grid, posted together on
//! submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::{AddressSelect, ContactFields, ItemsGrid, MapPicker};
use crate::geo;
use crate::models::Item;
use crate::state::{assemble_point, ContactForm, RequestGuard};

#[component]
pub fn CreatePoint() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<Item>::new());
    let (ufs, set_ufs) = signal(Vec::<String>::new());
    let (selected_uf, set_selected_uf) = signal::<Option<String>>(None);
    let (cities, set_cities) = signal(Vec::<String>::new());
    let (selected_city, set_selected_city) = signal::<Option<String>>(None);
    let (initial_position, set_initial_position) = signal((0.0f64, 0.0f64));
    let (selected_position, set_selected_position) = signal((0.0f64, 0.0f64));
    let (form, set_form) = signal(ContactForm::default());
    let (selected_items, set_selected_items) = signal(Vec::<u32>::new());

    // Tokens for in-flight cities requests
    let cities_guard = StoredValue::new(RequestGuard::default());

    // Load item categories on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_items().await {
                Ok(loaded) => set_items.set(loaded),
                Err(err) => web_sys::console::error_1(
                    &format!("[CREATE-POINT] items load failed: {}", err).into(),
                ),
            }
        });
    });

    // Load state codes on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match geo::list_ufs().await {
                Ok(loaded) => set_ufs.set(loaded),
                Err(err) => web_sys::console::error_1(
                    &format!("[CREATE-POINT] states load failed: {}", err).into(),
                ),
            }
        });
    });

    // Center the map on the browser position, once, if permission is given
    Effect::new(move |_| {
        browser::current_position(move |latitude, longitude| {
            set_initial_position.set((latitude, longitude));
        });
    });

    // Reload cities whenever the state selection changes. A change
    // invalidates both the previous list and the previous city selection.
    Effect::new(move |_| {
        let uf = selected_uf.get();

        set_selected_city.set(None);
        set_cities.set(Vec::new());

        let Some(uf) = uf else {
            return;
        };
        let token = cities_guard
            .try_update_value(|guard| guard.begin())
            .unwrap_or_default();
        spawn_local(async move {
            match geo::list_cities(&uf).await {
                Ok(loaded) => {
                    // Drop responses that lost the race to a newer selection
                    if cities_guard.with_value(|guard| guard.is_current(token)) {
                        set_cities.set(loaded);
                    }
                }
                Err(err) => web_sys::console::error_1(
                    &format!("[CREATE-POINT] cities load failed for {}: {}", uf, err).into(),
                ),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let point = assemble_point(
            &form.get(),
            selected_uf.get(),
            selected_city.get(),
            selected_position.get(),
            selected_items.get(),
        );

        spawn_local(async move {
            match api::create_point(&point).await {
                Ok(()) => {
                    browser::alert("Collect point registered!");
                    browser::navigate_home();
                }
                Err(err) => web_sys::console::error_1(
                    &format!("[CREATE-POINT] registration failed: {}", err).into(),
                ),
            }
        });
    };

    view! {
        <div id="page-create-point">
            <header>
                <span class="logo">"coleta"</span>
                <a href="/">"Go back to Home"</a>
            </header>

            <form on:submit=on_submit>
                <h1>"Register the collect point"</h1>

                <ContactFields set_form=set_form />

                <fieldset>
                    <legend>
                        <h2>"Address"</h2>
                        <span>"Select the address in the map"</span>
                    </legend>

                    <MapPicker
                        initial_position=initial_position
                        selected_position=selected_position
                        set_selected_position=set_selected_position
                    />

                    <AddressSelect
                        ufs=ufs
                        cities=cities
                        selected_uf=selected_uf
                        selected_city=selected_city
                        set_selected_uf=set_selected_uf
                        set_selected_city=set_selected_city
                    />
                </fieldset>

                <ItemsGrid
                    items=items
                    selected_items=selected_items
                    set_selected_items=set_selected_items
                />

                <button type="submit">"Register a collect point"</button>
            </form>
        </div>
    }
}
