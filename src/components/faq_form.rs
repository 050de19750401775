//! FAQ Editor Modal Component
//!
//! Field editor for a FAQ draft, shared by the FAQ view (create/edit) and
//! the conversations view (promote to FAQ). The owning view keeps the draft
//! and decides what happens on save; this component only binds the fields.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Faq;

/// Inline notice shown in the editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormNotice {
    pub text: &'static str,
    pub error: bool,
}

impl FormNotice {
    pub fn error(text: &'static str) -> Self {
        Self { text, error: true }
    }

    pub fn info(text: &'static str) -> Self {
        Self { text, error: false }
    }

    pub fn class(self) -> &'static str {
        if self.error { "form-notice error" } else { "form-notice" }
    }
}

/// Modal dialog editing a FAQ draft.
#[component]
pub fn FaqEditorModal(
    title: Signal<&'static str>,
    draft: RwSignal<Faq>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] notice: Signal<Option<FormNotice>>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let input_value = |ev: &web_sys::Event| -> String {
        let target = ev.target().unwrap();
        target.dyn_ref::<web_sys::HtmlInputElement>().unwrap().value()
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <h2>{move || title.get()}</h2>
                    <form
                        class="faq-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            on_save.run(());
                        }
                    >
                        <label class="faq-field">
                            "Question"
                            <input
                                type="text"
                                placeholder="Question"
                                prop:value=move || draft.with(|d| d.question.clone())
                                on:input=move |ev| {
                                    let value = input_value(&ev);
                                    draft.update(|d| d.question = value);
                                }
                            />
                        </label>
                        <label class="faq-field">
                            "Answer"
                            <textarea
                                placeholder="Answer"
                                prop:value=move || draft.with(|d| d.answer.clone())
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let value = target
                                        .dyn_ref::<web_sys::HtmlTextAreaElement>()
                                        .unwrap()
                                        .value();
                                    draft.update(|d| d.answer = value);
                                }
                            ></textarea>
                        </label>
                        <label class="faq-field">
                            "Language"
                            <input
                                type="text"
                                placeholder="Language"
                                prop:value=move || draft.with(|d| d.lang.clone())
                                on:input=move |ev| {
                                    let value = input_value(&ev);
                                    draft.update(|d| d.lang = value);
                                }
                            />
                        </label>

                        {move || notice.get().map(|n| view! {
                            <div class=n.class()>{n.text}</div>
                        })}

                        <div class="form-actions">
                            <button type="submit" class="btn primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
