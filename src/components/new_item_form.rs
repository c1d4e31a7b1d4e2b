//! New Item Form Component
//!
//! Text entry plus voice dictation for adding items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use grocery_core::normalize_transcript;

use crate::commands::{self, SpeechError};
use crate::context::use_app_context;
use crate::store::{store_add_item, store_add_items, store_is_listening, store_set_listening};

/// Form for adding a single item by typing, or several by voice
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Only a name that actually landed on the list clears the input
        if store_add_item(&store, &new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    let start_voice = move |_| {
        if store_is_listening(&store) {
            return;
        }
        let started = commands::start_dictation(
            move |transcript| {
                let names = normalize_transcript(&transcript);
                log::debug!("dictated {:?} -> {:?}", transcript, names);
                ctx.notify_added(store_add_items(&store, names));
            },
            move |reason| {
                log::warn!("speech recognition error: {}", reason);
                store_set_listening(&store, false);
                ctx.notify("Voice input failed. Please try again.");
            },
            move || store_set_listening(&store, false),
        );
        match started {
            Ok(()) => store_set_listening(&store, true),
            Err(SpeechError::Unsupported) => ctx.notify("Voice input is not supported in this browser."),
            Err(e) => {
                log::warn!("{}", e);
                ctx.notify("Voice input failed. Please try again.");
            }
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add an item..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            set_new_text.set(input.value());
                        }
                    }
                />
                <button type="submit">"Add"</button>
                <button
                    type="button"
                    class=move || if store_is_listening(&store) { "voice-btn listening" } else { "voice-btn" }
                    title="Dictate items, e.g. \"milk and eggs, bread\""
                    disabled=move || store_is_listening(&store)
                    on:click=start_voice
                >
                    {move || if store_is_listening(&store) { "Listening..." } else { "🎤" }}
                </button>
            </div>
        </form>
    }
}
