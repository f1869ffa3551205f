//! Wire DTOs for the backend JSON API.
//!
//! DESIGN
//! ======
//! The backend omits empty fields from responses, so every optional field
//! carries `#[serde(default)]` and decodes to its empty value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Empty request/response body (`{}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyMessage {}

/// Identity of the session cookie holder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authorization URL handed out by `BeginAuth`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUrl {
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeCodeRequest {
    pub code: String,
    pub state: String,
}

/// An asset class: a category of tracked inventory items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetClass {
    /// UUID string; empty when the record has not been created yet.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Key of the storage provider, see [`crate::state::providers`].
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub order: i32,
}

/// Response of the list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetClassList {
    #[serde(default)]
    pub classes: Vec<AssetClass>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAssetClassRequest {
    pub id: String,
}
