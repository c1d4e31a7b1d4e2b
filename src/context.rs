//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use grocery_core::AppConfig;

use crate::store::{store_expire_toast, store_show_toast, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive app state
    pub store: AppStore,
    /// Build-time configuration, passed explicitly rather than read globally
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Show a toast and schedule its hide; a newer toast is never hidden early
    pub fn notify(&self, message: impl Into<String>) {
        let store = self.store;
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        let generation = store_show_toast(&store, message.into());

        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_expire_toast(&store, generation);
        });
    }

    /// Toast the result of a batch add; silent when nothing was added
    pub fn notify_added(&self, count: usize) {
        match count {
            0 => {}
            1 => self.notify("Added 1 item"),
            n => self.notify(format!("Added {} items", n)),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
