//! Conversation Detail Component
//!
//! Read-only modal showing a single conversation log in full.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::models::Conversation;

/// Detail modal for one conversation.
#[component]
pub fn ConversationDetail(
    conversation: Conversation,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <h2>"Conversation Detail"</h2>
                <div class="detail-card">
                    <div class="detail-row">
                        <span class="detail-label">"User"</span>
                        <span>{conversation.user_id.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">"Message"</span>
                        <span>{conversation.user_message.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">"Response"</span>
                        <span>{conversation.response.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">"Timestamp"</span>
                        <span>{conversation.timestamp.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">"Status"</span>
                        <StatusBadge status=conversation.hit_status.clone() />
                    </div>
                </div>
                <div class="form-actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
