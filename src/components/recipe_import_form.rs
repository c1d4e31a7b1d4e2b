//! Recipe Import Form Component
//!
//! Pulls ingredient names from a recipe URL through Gemini.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_add_items, store_is_importing, store_set_importing};

#[component]
pub fn RecipeImportForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let import_enabled = ctx.config().import_enabled();

    let (recipe_url, set_recipe_url) = signal(String::new());

    let import_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_is_importing(&store) {
            return;
        }
        let url = recipe_url.get_untracked().trim().to_string();
        if url.is_empty() {
            return;
        }
        let Some(gemini) = ctx.config().gemini else {
            ctx.notify("Recipe import needs a Gemini API key (set GEMINI_API_KEY at build time).");
            return;
        };

        store_set_importing(&store, true);
        log::info!("importing recipe from {}", url);
        spawn_local(async move {
            match commands::fetch_recipe_ingredients(&gemini, &url).await {
                Ok(names) => ctx.notify_added(store_add_items(&store, names)),
                Err(e) => {
                    log::warn!("recipe import failed: {}", e);
                    ctx.notify("Could not import ingredients from that recipe.");
                }
            }
            store_set_importing(&store, false);
            set_recipe_url.set(String::new());
        });
    };

    view! {
        <form class="recipe-import-form" on:submit=import_recipe>
            <input
                type="url"
                placeholder="Paste a recipe URL..."
                prop:value=move || recipe_url.get()
                on:input=move |ev| set_recipe_url.set(event_target_value(&ev))
                disabled=move || store_is_importing(&store)
            />
            <button
                type="submit"
                disabled=move || store_is_importing(&store)
                title=if import_enabled { "Import ingredients" } else { "Recipe import is not configured" }
            >
                {move || if store_is_importing(&store) { "Importing..." } else { "Import recipe" }}
            </button>
        </form>
    }
}
