//! Item Row Component
//!
//! One row of the shopping list. Demo rows are greyed and inert.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::DisplayEntry;

/// A single list row
#[component]
pub fn ItemRow(entry: DisplayEntry) -> impl IntoView {
    let ctx = use_app_context();

    let id = entry.id;
    let row_class = match (entry.demo, entry.got) {
        (true, true) => "item demo got",
        (true, false) => "item demo",
        (false, true) => "item got",
        (false, false) => "item",
    };

    view! {
        <li
            class=row_class
            on:click=move |_| {
                if let Some(id) = id {
                    ctx.toggle(id);
                }
            }
        >
            <span class="item-text" style=if entry.demo { "color: #888;" } else { "" }>
                {entry.text}
            </span>
            <button
                class="remove-btn"
                disabled=entry.demo
                style=if entry.demo { "opacity: 0.5;" } else { "" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(id) = id {
                        ctx.remove(id);
                    }
                }
            >
                "Remove"
            </button>
        </li>
    }
}
