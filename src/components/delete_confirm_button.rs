//! Delete Confirm Button Component
//!
//! Inline delete confirmation: the first click arms the button, a second
//! explicit click confirms. No request is issued without the confirmation.

use leptos::prelude::*;

/// Two-step delete button.
///
/// # Arguments
/// * `label` - text of the initial delete button
/// * `on_confirm` - callback run when the user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show when=move || !armed.get()>
            <button
                class="btn danger small"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
