//! Budget Panel Component
//!
//! Budget input, estimated total and a progress bar.

use leptos::prelude::*;

use crate::store::{store_budget, store_set_budget, store_summary, use_app_store};

#[component]
pub fn BudgetPanel() -> impl IntoView {
    let store = use_app_store();
    let summary = Memo::new(move |_| store_summary(&store));

    let bar_class = move || {
        if summary.get().is_over_budget {
            "budget-bar over"
        } else {
            "budget-bar"
        }
    };

    view! {
        <section class="budget-panel">
            <label class="budget-input">
                "Budget $"
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=move || store_budget(&store)
                    on:input=move |ev| store_set_budget(&store, event_target_value(&ev))
                />
            </label>

            <p class="budget-total">
                {move || format!("Estimated total: ${:.2}", summary.get().estimated_total)}
            </p>

            <Show when=move || (summary.get().budget > 0.0)>
                <div class="budget-track">
                    <div class=bar_class style=move || format!("width: {:.1}%;", summary.get().progress)></div>
                </div>
                <p class=move || if summary.get().is_over_budget { "budget-status over" } else { "budget-status" }>
                    {move || match summary.get().remaining {
                        Some(left) if left < 0.0 => format!("Over budget by ${:.2}", -left),
                        Some(left) => format!("${:.2} left", left),
                        None => String::new(),
                    }}
                </p>
            </Show>
        </section>
    }
}
