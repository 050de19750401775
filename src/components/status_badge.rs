//! Status Badge Component

use leptos::prelude::*;

use crate::status::classify;

/// Colored badge showing a conversation's raw hit status.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = classify(&status).class();
    view! { <span class=class>{status}</span> }
}
