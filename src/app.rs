//! Application Shell
//!
//! Sidebar navigation plus the active admin view.

use leptos::prelude::*;

use crate::components::{ConversationsView, FaqsView, Sidebar};

/// Top-level navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Conversations,
    Faqs,
    Settings,
}

impl Section {
    pub const ALL: &'static [Section] =
        &[Section::Conversations, Section::Faqs, Section::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Conversations => "Conversations",
            Self::Faqs => "FAQs",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Conversations => "📜",
            Self::Faqs => "💬",
            Self::Settings => "⚙️",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Conversations => "#/conversations",
            Self::Faqs => "#/faqs",
            Self::Settings => "#/settings",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (section, set_section) = signal(Section::Conversations);

    view! {
        <div class="app-layout">
            <Sidebar section=section set_section=set_section />
            <main class="content">
                {move || match section.get() {
                    Section::Conversations => view! { <ConversationsView/> }.into_any(),
                    Section::Faqs => view! { <FaqsView/> }.into_any(),
                    Section::Settings => view! { <SettingsView/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Placeholder until a settings surface exists on the backend.
#[component]
fn SettingsView() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Settings"</h1>
            <p class="placeholder">"Nothing to configure yet."</p>
        </div>
    }
}
