//! UI Components
//!
//! Reusable Leptos components.

mod conversation_detail;
mod conversations_view;
mod delete_confirm_button;
mod faq_form;
mod faqs_view;
mod sidebar;
mod status_badge;

pub use conversation_detail::ConversationDetail;
pub use conversations_view::ConversationsView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use faq_form::{FaqEditorModal, FormNotice};
pub use faqs_view::FaqsView;
pub use sidebar::Sidebar;
pub use status_badge::StatusBadge;
