//! Profile Card Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Shows the stored (or default) profile
#[component]
pub fn ProfileCard() -> impl IntoView {
    let ctx = use_app_context();
    let profile = Memo::new(move |_| ctx.profile());

    view! {
        <div class="profile-card">
            <p><strong>{move || profile.get().username}</strong></p>
            <p>{move || format!("Email: {}", profile.get().email)}</p>
        </div>
    }
}
