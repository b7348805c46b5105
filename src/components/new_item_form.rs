//! New Item Form Component
//!
//! Single text input for adding items to the list.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Form for adding a new item
#[component]
pub fn NewItemForm(input_ref: NodeRef<html::Input>) -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_item(&ui.draft().get()).is_none() {
            return;
        }
        ui.draft().set(String::new());
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <form id="itemForm" class="item-form" on:submit=add_item>
            <input
                id="itemInput"
                type="text"
                placeholder="Add an item..."
                node_ref=input_ref
                prop:value=move || ui.draft().get()
                on:input=move |ev| ui.draft().set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
