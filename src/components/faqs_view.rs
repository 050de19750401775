//! FAQ View
//!
//! FAQ knowledge base management: list with search, create/edit through a
//! modal editor, and inline-confirmed deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, FaqEditorModal, FormNotice};
use crate::models::{remove_faq, Faq, SaveAction};
use crate::search::faq_matches;

const LOAD_ERROR: &str = "Failed to load FAQs.";
const SAVE_ERROR: &str = "Failed to save the FAQ.";
const DELETE_ERROR: &str = "Failed to delete the FAQ.";
const VALIDATION_ERROR: &str = "Question and answer are required.";

/// FAQ management page.
#[component]
pub fn FaqsView() -> impl IntoView {
    let (faqs, set_faqs) = signal(Vec::<Faq>::new());
    let (search_term, set_search_term) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error_message, set_error_message) = signal::<Option<&'static str>>(None);

    // Editor draft; id 0 marks a new entry
    let draft = RwSignal::new(Faq::default());
    let (editor_open, set_editor_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let (form_notice, set_form_notice) = signal::<Option<FormNotice>>(None);

    // Load FAQs on view activation
    Effect::new(move |_| {
        set_loading.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            match api::list_faqs().await {
                Ok(list) => set_faqs.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("[Faqs] load failed: {err}").into());
                    set_error_message.set(Some(LOAD_ERROR));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = move || {
        let term = search_term.get();
        faqs.get()
            .into_iter()
            .filter(|f| faq_matches(f, &term))
            .collect::<Vec<_>>()
    };

    let open_editor = move |faq: Faq| {
        draft.set(faq);
        set_form_notice.set(None);
        set_editor_open.set(true);
    };

    // Create or update, then reload the full collection from the backend so
    // the local copy reflects server-assigned ids and ordering. The editor
    // closes only after the reload finishes.
    let on_save = Callback::new(move |_| {
        let current = draft.get_untracked();
        let action = match current.plan_save() {
            Ok(action) => action,
            Err(_) => {
                set_form_notice.set(Some(FormNotice::error(VALIDATION_ERROR)));
                return;
            }
        };
        set_saving.set(true);
        set_form_notice.set(None);
        spawn_local(async move {
            let result = match action {
                SaveAction::Create => api::create_faq(&current).await,
                SaveAction::Update(_) => api::update_faq(&current).await,
            };
            match result {
                Ok(()) => {
                    match api::list_faqs().await {
                        Ok(list) => set_faqs.set(list),
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("[Faqs] reload failed: {err}").into(),
                            );
                            set_error_message.set(Some(LOAD_ERROR));
                        }
                    }
                    set_editor_open.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Faqs] save failed: {err}").into());
                    set_form_notice.set(Some(FormNotice::error(SAVE_ERROR)));
                }
            }
            set_saving.set(false);
        });
    });

    // Delete by id; on success drop the entry locally, no full reload
    let delete_faq_by_id = move |id: i64| {
        spawn_local(async move {
            match api::delete_faq(id).await {
                Ok(()) => set_faqs.update(|list| remove_faq(list, id)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[Faqs] delete failed: {err}").into());
                    set_error_message.set(Some(DELETE_ERROR));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"FAQ Management"</h1>
                <button
                    class="btn primary"
                    on:click=move |_| open_editor(Faq::default())
                >
                    "+ New FAQ"
                </button>
            </div>

            <div class="toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by question or answer"
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
            </div>

            {move || error_message.get().map(|msg| view! {
                <div class="error-banner">{msg}</div>
            })}

            <div class="table-container">
                <Show when=move || loading.get()>
                    <div class="loading">"Loading..."</div>
                </Show>
                <Show when=move || !loading.get()>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Question"</th>
                                <th>"Answer"</th>
                                <th>"Language"</th>
                                <th class="col-actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                // Key on content as well as id so edited rows re-render
                                key=|f| (f.id, f.question.clone(), f.answer.clone(), f.lang.clone())
                                children=move |faq: Faq| {
                                    let id = faq.id;
                                    let for_edit = faq.clone();
                                    view! {
                                        <tr>
                                            <td class="cell-question">{faq.question.clone()}</td>
                                            <td class="cell-answer">{faq.answer.clone()}</td>
                                            <td>{faq.lang.clone()}</td>
                                            <td class="cell-actions">
                                                <button
                                                    class="btn small"
                                                    on:click=move |_| open_editor(for_edit.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <DeleteConfirmButton
                                                    label="Delete"
                                                    on_confirm=Callback::new(move |_| delete_faq_by_id(id))
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || filtered().is_empty()>
                        <div class="empty-state">"No matching FAQs."</div>
                    </Show>
                </Show>
            </div>

            <FaqEditorModal
                title=Signal::derive(move || {
                    if draft.with(|d| d.is_new()) { "New FAQ" } else { "Edit FAQ" }
                })
                draft=draft
                open=editor_open
                notice=form_notice
                saving=saving
                on_save=on_save
                on_cancel=Callback::new(move |_| set_editor_open.set(false))
            />
        </div>
    }
}
