//! Toast Component

use leptos::prelude::*;

use crate::store::{store_toast, use_app_store};

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store_toast(&store).map(|message| view! {
            <div class="toast" role="status">{message}</div>
        })}
    }
}
