//! Register Form Component
//!
//! Saves `{username, email}` as the profile. The password is required but
//! never stored.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_ui_store, Page, UiStateStoreFields};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !ctx.register(&username.get(), &email.get(), &password.get()) {
            return;
        }
        let _ = window().alert_with_message("Registered! Profile saved.");
        set_password.set(String::new());
        ui.page().set(Page::Profile);
    };

    view! {
        <form class="register-form" on:submit=register>
            <input
                id="username"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                id="email"
                type="text"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                id="password"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Register"</button>
        </form>
    }
}
