//! Shopping List View Component
//!
//! Renders the rows the list controller exposes under the current filter.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ShoppingListView() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let rows = move || ctx.display_entries(ui.filter().get());

    view! {
        <ul id="itemList" class=move || if ctx.is_demo() { "item-list demo-list" } else { "item-list" }>
            <For
                each=rows
                // Every rendered field is in the key so a toggle re-renders the row
                key=|entry| (entry.id, entry.text.clone(), entry.got, entry.demo)
                children=move |entry| view! { <ItemRow entry=entry /> }
            />
        </ul>
    }
}
