//! Item Row Component
//!
//! One list entry: pantry toggle, name, price, retailer links, delete.

use leptos::prelude::*;

use grocery_core::{links_for, Item};

use crate::store::{store_remove_item, store_toggle_pantry, store_update_price, use_app_store};

/// A single item row in the list
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let in_pantry = item.in_pantry;
    let links = if in_pantry { Vec::new() } else { links_for(&item.name) };

    view! {
        <div class=if in_pantry { "item-row in-pantry" } else { "item-row" }>
            <label class="pantry-toggle" title="Already have it">
                <input
                    type="checkbox"
                    checked=in_pantry
                    on:change=move |_| store_toggle_pantry(&store, id)
                />
                <span class="item-name">{item.name.clone()}</span>
            </label>

            <input
                class="price-input"
                type="text"
                inputmode="decimal"
                placeholder="$ est."
                prop:value=item.estimated_price.clone()
                disabled=in_pantry
                on:input=move |ev| store_update_price(&store, id, &event_target_value(&ev))
            />

            <span class="retailer-links">
                {links.into_iter().map(|(retailer, url)| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="retailer-link">
                        {retailer.name()}
                    </a>
                }).collect_view()}
            </span>

            <button class="delete-btn" title="Remove" on:click=move |_| store_remove_item(&store, id)>"×"</button>
        </div>
    }
}
