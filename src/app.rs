//! Grocery List App
//!
//! Root component: builds the store, restores a shared list from the URL and
//! lays out the single page.

use leptos::prelude::*;
use reactive_stores::Store;

use grocery_core::{decode_share_query, AppConfig};

use crate::commands;
use crate::components::{ActionBar, BudgetPanel, ItemList, NewItemForm, RecipeImportForm, Toast};
use crate::context::AppContext;
use crate::store::{store_counts, store_restore_shared, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let config = AppConfig::from_values(
        option_env!("GEMINI_API_KEY"),
        option_env!("GEMINI_MODEL"),
        option_env!("GEMINI_ENDPOINT"),
    );
    log::info!(
        "recipe import {}",
        if config.import_enabled() { "enabled" } else { "disabled (no GEMINI_API_KEY)" }
    );

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(store, config));

    // A share link replaces the initial state wholesale
    match commands::current_search() {
        Ok(search) => store_restore_shared(&store, decode_share_query(&search)),
        Err(e) => log::warn!("could not read page URL: {}", e),
    }

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Grocery List"</h1>

                <NewItemForm />
                <RecipeImportForm />
                <BudgetPanel />
                <ItemList />
                <ActionBar />

                <p class="item-count">
                    {move || {
                        let (total, in_pantry) = store_counts(&store);
                        format!("{} items, {} to buy, {} in pantry", total, total - in_pantry, in_pantry)
                    }}
                </p>
            </main>

            <Toast />
        </div>
    }
}
