//! JSON request/response bodies for the catalog backend.
//!
//! DESIGN
//! ======
//! Optional response fields default instead of failing the decode, so a
//! backend that omits an envelope field still yields a usable value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Username/password pair posted to `/register` and `/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The signed-in user as held by the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Bearer token issued by `/login`.
    pub token: String,
}

/// Success body of `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// A catalog product as returned by `GET /products/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Product category (`type` on the wire).
    #[serde(rename = "type")]
    pub kind: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Id of the user who created the product.
    #[serde(default)]
    pub created_by: Option<i64>,
}

/// Success body of `GET /products/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// Error body fields the backend may send with a non-2xx status.
///
/// `detail` is a plain string for most errors and a list of
/// `{loc, msg, type}` objects for request-validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// Decode an error body, falling back to an empty one for non-JSON text.
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// Human-readable `detail`, if the server sent a non-empty one.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                    .collect();
                if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
            }
            _ => None,
        }
    }

    /// Non-empty `message` field.
    pub fn message_text(&self) -> Option<String> {
        self.message.clone().filter(|m| !m.is_empty())
    }
}
