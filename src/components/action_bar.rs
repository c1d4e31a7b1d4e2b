//! Action Bar Component
//!
//! Whole-list actions: share link, open all retailer links, clear.

use leptos::prelude::*;
use leptos::task::spawn_local;

use grocery_core::{encode_share_url, open_all_plan};

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_clear_all, store_has_shopping_items, store_items, store_share_snapshot};

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let share = move |_| {
        let (items, budget) = store_share_snapshot(&store);
        spawn_local(async move {
            let copied = match commands::page_base_url() {
                Ok(base) => commands::copy_text(&encode_share_url(&base, &items, &budget)).await,
                Err(e) => Err(e),
            };
            match copied {
                Ok(()) => ctx.notify("Share link copied to clipboard!"),
                Err(e) => {
                    log::warn!("share failed: {}", e);
                    ctx.notify("Could not copy the share link.");
                }
            }
        });
    };

    let open_all = move |_| {
        let stagger = ctx.config().link_stagger_ms;
        let plan = open_all_plan(&store_items(&store), stagger);
        log::debug!("opening {} retailer links", plan.len());
        spawn_local(commands::open_staggered(plan));
    };

    let clear_all = move |_| {
        store_clear_all(&store);
        ctx.notify("List cleared");
    };

    let list_empty = Signal::derive(move || store_items(&store).is_empty());

    view! {
        <div class="action-bar">
            <button class="share-btn" on:click=share>"Share list"</button>
            <button
                class="open-all-btn"
                disabled=move || !store_has_shopping_items(&store)
                on:click=open_all
            >
                "Open all price links"
            </button>
            <DeleteConfirmButton
                label="Clear all"
                button_class="clear-btn"
                on_confirm=clear_all
                disabled=list_empty
            />
        </div>
    }
}
