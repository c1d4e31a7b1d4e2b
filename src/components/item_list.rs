//! Item List Component
//!
//! Renders the grocery list in insertion order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{store_items, use_app_store};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="item-list">
            <Show
                when=move || !store_items(&store).is_empty()
                fallback=|| view! { <p class="empty-list">"Your list is empty."</p> }
            >
                <For
                    each=move || store_items(&store)
                    // Price edits must not rebuild the row (the input would lose focus)
                    key=|item| (item.id, item.in_pantry)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </Show>
        </div>
    }
}
