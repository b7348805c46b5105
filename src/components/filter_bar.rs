//! Filter Bar Component
//!
//! all / got / need buttons. Only changes what the list view shows.

use leptos::prelude::*;

use crate::models::FilterMode;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <div class="filters">
            {FilterMode::ALL.iter().map(|&mode| {
                let is_active = move || ui.filter().get() == mode;
                view! {
                    <button
                        data-filter=mode.as_str()
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ui.filter().set(mode)
                    >
                        {mode.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
