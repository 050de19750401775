//! Conversations View
//!
//! Conversation log list with search, a read-only detail panel, and
//! promotion of unanswered conversations into new FAQ entries.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConversationDetail, FaqEditorModal, FormNotice, StatusBadge};
use crate::models::{Conversation, Faq};
use crate::search::conversation_matches;
use crate::status::can_promote;

const LOAD_ERROR: &str = "Failed to load conversations.";
const SAVE_SUCCESS: &str = "FAQ added.";
const SAVE_ERROR: &str = "Failed to add the FAQ.";
const VALIDATION_ERROR: &str = "Question and answer are required.";

/// Conversation log management page.
#[component]
pub fn ConversationsView() -> impl IntoView {
    let (conversations, set_conversations) = signal(Vec::<Conversation>::new());
    let (search_term, set_search_term) = signal(String::new());
    let (selected, set_selected) = signal::<Option<Conversation>>(None);
    let (loading, set_loading) = signal(false);
    let (error_message, set_error_message) = signal::<Option<&'static str>>(None);

    // FAQ-creation draft, opened from an unanswered conversation
    let draft = RwSignal::new(Faq::default());
    let (draft_open, set_draft_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let (draft_notice, set_draft_notice) = signal::<Option<FormNotice>>(None);

    // Load conversations on view activation
    Effect::new(move |_| {
        set_loading.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            match api::list_conversations().await {
                Ok(list) => set_conversations.set(list),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[Conversations] load failed: {err}").into(),
                    );
                    set_error_message.set(Some(LOAD_ERROR));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = move || {
        let term = search_term.get();
        conversations
            .get()
            .into_iter()
            .filter(|c| conversation_matches(c, &term))
            .collect::<Vec<_>>()
    };

    let open_promote = move |message: String| {
        draft.set(Faq::draft_from_message(&message));
        set_draft_notice.set(None);
        set_draft_open.set(true);
    };

    // Submit the promotion draft. Intentionally does not reload the
    // conversation list afterwards: the promoted conversation keeps its
    // original status until the view is next activated.
    let on_draft_save = Callback::new(move |_| {
        let current = draft.get_untracked();
        if current.validate().is_err() {
            set_draft_notice.set(Some(FormNotice::error(VALIDATION_ERROR)));
            return;
        }
        set_saving.set(true);
        set_draft_notice.set(None);
        spawn_local(async move {
            match api::create_faq(&current).await {
                Ok(()) => {
                    set_draft_notice.set(Some(FormNotice::info(SAVE_SUCCESS)));
                    draft.set(Faq::default());
                    set_draft_open.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Conversations] save failed: {err}").into());
                    set_draft_notice.set(Some(FormNotice::error(SAVE_ERROR)));
                }
            }
            set_saving.set(false);
        });
    });

    view! {
        <div class="page">
            <h1>"Conversation Logs"</h1>

            <div class="toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by user, message or response"
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
            </div>

            {move || error_message.get().map(|msg| view! {
                <div class="error-banner">{msg}</div>
            })}

            {move || (!draft_open.get())
                .then(|| draft_notice.get())
                .flatten()
                .filter(|n| !n.error)
                .map(|n| view! { <div class=n.class()>{n.text}</div> })}

            <div class="table-container">
                <Show when=move || loading.get()>
                    <div class="loading">"Loading..."</div>
                </Show>
                <Show when=move || !loading.get()>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"User"</th>
                                <th>"Message"</th>
                                <th>"Timestamp"</th>
                                <th>"Status"</th>
                                <th class="col-actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                key=|c| c.id.clone()
                                children=move |c: Conversation| {
                                    let detail = c.clone();
                                    let promotable = can_promote(&c.hit_status);
                                    let message = c.user_message.clone();
                                    view! {
                                        <tr>
                                            <td>{c.user_id.clone()}</td>
                                            <td class="cell-message">{c.user_message.clone()}</td>
                                            <td>{c.timestamp.clone()}</td>
                                            <td><StatusBadge status=c.hit_status.clone() /></td>
                                            <td class="cell-actions">
                                                <button
                                                    class="btn small"
                                                    on:click=move |_| set_selected.set(Some(detail.clone()))
                                                >
                                                    "Detail"
                                                </button>
                                                {promotable.then(|| view! {
                                                    <button
                                                        class="btn secondary small"
                                                        on:click=move |_| open_promote(message.clone())
                                                    >
                                                        "Add FAQ"
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || filtered().is_empty()>
                        <div class="empty-state">"No matching conversations."</div>
                    </Show>
                </Show>
            </div>

            {move || selected.get().map(|c| view! {
                <ConversationDetail
                    conversation=c
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}

            <FaqEditorModal
                title=Signal::derive(|| "Add FAQ")
                draft=draft
                open=draft_open
                notice=draft_notice
                saving=saving
                on_save=on_draft_save
                on_cancel=Callback::new(move |_| set_draft_open.set(false))
            />
        </div>
    }
}
