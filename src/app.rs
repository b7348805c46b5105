//! Shopping List App
//!
//! Root component: provides the controllers and UI store, switches views.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NavBar, NewItemForm, ProfileCard, RegisterForm, ShoppingListView, StatsBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{Page, UiState, UiStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(&config));
    let ui = Store::new(UiState::default());
    provide_context(ui);

    let input_ref = NodeRef::<html::Input>::new();

    // Escape clears and unfocuses the item input from anywhere on the page
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        ui.draft().set(String::new());
        if let Some(input) = input_ref.get() {
            let _ = input.blur();
        }
    });

    view! {
        <main class="app-layout">
            <NavBar />
            <h1>"Shopping List"</h1>

            {move || match ui.page().get() {
                Page::List => view! {
                    <section class="list-view">
                        <NewItemForm input_ref=input_ref />
                        <StatsBar />
                        <FilterBar />
                        <ShoppingListView />
                    </section>
                }.into_any(),
                Page::Profile => view! { <ProfileCard /> }.into_any(),
                Page::Register => view! { <RegisterForm /> }.into_any(),
            }}
        </main>
    }
}
