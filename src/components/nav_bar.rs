//! Nav Bar Component
//!
//! Tab bar for switching between the list, profile and register views.

use leptos::prelude::*;

use crate::store::{use_ui_store, Page, UiStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <nav class="nav-bar">
            {Page::ALL.iter().map(|&tab| {
                let is_active = move || ui.page().get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| ui.page().set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
