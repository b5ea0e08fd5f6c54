//! Contact Fields Component
//!
//! Name/email/whatsapp inputs sharing one change handler keyed by the
//! input's `name` attribute.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::ContactForm;

/// Merge the changed input into the form, keyed by its `name` attribute.
fn merge_field(set_form: WriteSignal<ContactForm>, ev: &web_sys::Event) {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    let field = input.name();
    let value = input.value();
    set_form.update(|form| form.set_field(&field, value));
}

#[component]
pub fn ContactFields(set_form: WriteSignal<ContactForm>) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Info"</h2>
            </legend>

            <div class="field">
                <label for="name">"Company name"</label>
                <input type="text" name="name" id="name" on:input=move |ev| merge_field(set_form, &ev) />
            </div>

            <div class="field-group">
                <div class="field">
                    <label for="email">"Email"</label>
                    <input type="email" name="email" id="email" on:input=move |ev| merge_field(set_form, &ev) />
                </div>

                <div class="field">
                    <label for="whatsapp">"WhatsApp"</label>
                    <input type="text" name="whatsapp" id="whatsapp" on:input=move |ev| merge_field(set_form, &ev) />
                </div>
            </div>
        </fieldset>
    }
}
