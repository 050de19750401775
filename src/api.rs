//! Backend API Commands
//!
//! Thin async wrappers around the admin HTTP API, one function per backend
//! operation. Every call returns an explicit `Result`; the views map errors
//! onto their own inline messages and never inspect failure detail beyond
//! success/failure.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Conversation, Faq};

/// Backend base path for this build (the admin API of the FAQ service).
pub const API_BASE: &str = "http://localhost:5000/api";

/// Failure of a backend call. Transport problems and non-2xx statuses are
/// distinct variants but render identically in the UI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

// ========================
// Conversation Commands
// ========================

/// GET `/conversations`.
pub async fn list_conversations() -> Result<Vec<Conversation>, ApiError> {
    fetch_list("/conversations").await
}

// ========================
// FAQ Commands
// ========================

/// GET `/faqs`.
pub async fn list_faqs() -> Result<Vec<Faq>, ApiError> {
    fetch_list("/faqs").await
}

/// POST `/faqs`. The body carries the sentinel id `0`, which the backend
/// ignores; the response body is not inspected.
pub async fn create_faq(faq: &Faq) -> Result<(), ApiError> {
    let resp = reqwest::Client::new()
        .post(url("/faqs"))
        .json(faq)
        .send()
        .await?;
    ok_status(&resp)
}

/// PUT `/faqs/{id}`.
pub async fn update_faq(faq: &Faq) -> Result<(), ApiError> {
    let resp = reqwest::Client::new()
        .put(url(&format!("/faqs/{}", faq.id)))
        .json(faq)
        .send()
        .await?;
    ok_status(&resp)
}

/// DELETE `/faqs/{id}`.
pub async fn delete_faq(id: i64) -> Result<(), ApiError> {
    let resp = reqwest::Client::new()
        .delete(url(&format!("/faqs/{id}")))
        .send()
        .await?;
    ok_status(&resp)
}

// ========================
// Helpers
// ========================

async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let resp = reqwest::Client::new().get(url(path)).send().await?;
    ok_status(&resp)?;
    let text = resp.text().await?;
    Ok(decode_collection(&text))
}

fn ok_status(resp: &reqwest::Response) -> Result<(), ApiError> {
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status().as_u16()))
    }
}

/// Decode a collection response body. The backend is expected to return a
/// JSON array; anything else decodes as an empty collection rather than an
/// error.
fn decode_collection<T: DeserializeOwned>(body: &str) -> Vec<T> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) if value.is_array() => serde_json::from_value(value).unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_collection_array() {
        let faqs: Vec<Faq> = decode_collection(
            r#"[{"id":1,"question":"q","answer":"a","lang":"ja"},
                {"id":2,"question":"q2","answer":"a2","lang":"en"}]"#,
        );
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[1].lang, "en");
    }

    #[test]
    fn test_decode_collection_non_array_is_empty() {
        let faqs: Vec<Faq> = decode_collection(r#"{"error":"DB down"}"#);
        assert!(faqs.is_empty());

        let conversations: Vec<Conversation> = decode_collection("null");
        assert!(conversations.is_empty());

        let conversations: Vec<Conversation> = decode_collection("not json at all");
        assert!(conversations.is_empty());
    }

    #[test]
    fn test_decode_collection_mismatched_array_is_empty() {
        // An array whose elements cannot be the entity shape at all
        let faqs: Vec<Faq> = decode_collection("[1,2,3]");
        assert!(faqs.is_empty());
    }

    #[test]
    fn test_decode_collection_tolerates_missing_fields() {
        let conversations: Vec<Conversation> = decode_collection(r#"[{"id":"c1"}]"#);
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].user_id, "");
    }

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(url("/faqs/7"), format!("{API_BASE}/faqs/7"));
    }
}
