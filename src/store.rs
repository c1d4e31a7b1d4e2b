//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use grocery_core::{BudgetSummary, GroceryList, Item, ItemId, SharedState, ToastSlot};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The grocery list itself
    pub list: GroceryList,
    /// Raw budget text, kept verbatim for the input field
    pub budget: String,
    /// Single-slot notification
    pub toast: ToastSlot,
    /// Recipe import in flight
    pub importing: bool,
    /// Speech recognition session active
    pub listening: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// List Helpers
// ========================

/// Snapshot of the items (tracked)
pub fn store_items(store: &AppStore) -> Vec<Item> {
    store.list().read().items().to_vec()
}

/// Whether any item still needs buying (tracked)
pub fn store_has_shopping_items(store: &AppStore) -> bool {
    store.list().read().shopping_items().next().is_some()
}

/// `(total, in pantry)` counts (tracked)
pub fn store_counts(store: &AppStore) -> (usize, usize) {
    let list = store.list().read();
    (list.len(), list.pantry_count())
}

pub fn store_add_item(store: &AppStore, name: &str) -> bool {
    store.list().write().add_item(name).is_some()
}

pub fn store_add_items(store: &AppStore, names: Vec<String>) -> usize {
    store.list().write().add_multiple_items(names)
}

pub fn store_remove_item(store: &AppStore, id: ItemId) {
    store.list().write().remove_item(id);
}

pub fn store_toggle_pantry(store: &AppStore, id: ItemId) {
    store.list().write().toggle_pantry(id);
}

pub fn store_update_price(store: &AppStore, id: ItemId, raw: &str) {
    store.list().write().update_price(id, raw);
}

pub fn store_clear_all(store: &AppStore) {
    store.list().write().clear_all();
}

// ========================
// Budget Helpers
// ========================

pub fn store_budget(store: &AppStore) -> String {
    store.budget().get()
}

pub fn store_set_budget(store: &AppStore, raw: String) {
    *store.budget().write() = raw;
}

/// Budget figures derived from the current list and budget (tracked)
pub fn store_summary(store: &AppStore) -> BudgetSummary {
    let budget = store.budget().read();
    BudgetSummary::compute(&store.list().read(), &budget)
}

// ========================
// Share Helpers
// ========================

/// Items and budget as they should go into a share link (untracked)
pub fn store_share_snapshot(store: &AppStore) -> (Vec<Item>, String) {
    let items = store.list().read_untracked().items().to_vec();
    (items, store.budget().get_untracked())
}

/// Apply a decoded share link; a malformed items payload leaves the list alone
pub fn store_restore_shared(store: &AppStore, shared: SharedState) {
    match shared.items {
        Ok(Some(items)) => {
            log::info!("restored {} items from share link", items.len());
            store.list().write().replace_all(items);
        }
        Ok(None) => {}
        Err(e) => log::warn!("ignoring share link items: {}", e),
    }
    if let Some(budget) = shared.budget {
        store_set_budget(store, budget);
    }
}

// ========================
// Toast / Busy Flags
// ========================

/// Show a message, returning the generation its hide timer must pass back
pub fn store_show_toast(store: &AppStore, message: String) -> u64 {
    store.toast().write().show(message)
}

pub fn store_expire_toast(store: &AppStore, generation: u64) {
    store.toast().write().expire(generation);
}

pub fn store_toast(store: &AppStore) -> Option<String> {
    let toast = store.toast().read();
    toast.is_visible().then(|| toast.message().to_string())
}

pub fn store_is_importing(store: &AppStore) -> bool {
    store.importing().get()
}

pub fn store_set_importing(store: &AppStore, importing: bool) {
    *store.importing().write() = importing;
}

pub fn store_is_listening(store: &AppStore) -> bool {
    store.listening().get()
}

pub fn store_set_listening(store: &AppStore, listening: bool) {
    *store.listening().write() = listening;
}
