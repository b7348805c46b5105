//! Stats Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Total / got / remaining counters
#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_app_context();
    let stats = Memo::new(move |_| ctx.stats());

    view! {
        <div class="stats">
            <p>"Total: " <span id="totalItems">{move || stats.get().total}</span></p>
            <p>"Got: " <span id="gotItems">{move || stats.get().got}</span></p>
            <p>"Remaining: " <span id="remainingItems">{move || stats.get().remaining}</span></p>
        </div>
    }
}
