//! Navigation Sidebar Component
//!
//! Fixed sidebar with the static list of admin sections.

use leptos::prelude::*;

use crate::app::Section;

/// Navigation sidebar. Clicking an entry switches the active section.
#[component]
pub fn Sidebar(
    section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-title">"FAQ Admin"</div>
            <nav class="sidebar-nav">
                {Section::ALL.iter().map(|&target| {
                    let is_active = move || section.get() == target;
                    view! {
                        <a
                            href=target.path()
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| set_section.set(target)
                        >
                            <span class="nav-icon">{target.icon()}</span>
                            <span class="nav-label">{target.label()}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
