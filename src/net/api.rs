//! REST API wrappers for communicating with the backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`, always sending
//! credentials so the backend's HTTP-only session cookie travels along.
//! Native builds: every call fails with [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` instead of panicking. A non-2xx answer
//! keeps its status so state containers can react to 401 specifically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AssetClass, AssetClassList, AuthUrl, DeleteAssetClassRequest, EmptyMessage, ExchangeCodeRequest, UserInfo,
};
use crate::error::ApiError;

pub const USER_INFO_PATH: &str = "/api/auth/user-info";
pub const BEGIN_AUTH_PATH: &str = "/api/auth/begin";
pub const EXCHANGE_CODE_PATH: &str = "/api/auth/exchange-code";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const LIST_ASSET_CLASSES_PATH: &str = "/api/asset-classes/list";
pub const CREATE_ASSET_CLASS_PATH: &str = "/api/asset-classes/create";
pub const UPDATE_ASSET_CLASS_PATH: &str = "/api/asset-classes/update";
pub const DELETE_ASSET_CLASS_PATH: &str = "/api/asset-classes/delete";

/// OpenID session operations exposed by the backend.
#[async_trait::async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// Fetch the identity behind the current session cookie.
    ///
    /// # Errors
    ///
    /// Fails with a 401 status when no valid session exists.
    async fn get_user_info(&self) -> Result<UserInfo, ApiError>;

    /// Start an authorization flow and return the identity-provider URL.
    async fn begin_auth(&self) -> Result<AuthUrl, ApiError>;

    /// Trade a one-time authorization code for a session cookie.
    async fn exchange_code(&self, request: &ExchangeCodeRequest) -> Result<(), ApiError>;

    /// Clear the session cookies server-side.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// CRUD operations on the asset-class collection.
#[async_trait::async_trait(?Send)]
pub trait AssetClassApi: Send + Sync {
    async fn list_asset_classes(&self) -> Result<AssetClassList, ApiError>;
    async fn create_asset_class(&self, class: &AssetClass) -> Result<AssetClass, ApiError>;
    async fn update_asset_class(&self, class: &AssetClass) -> Result<AssetClass, ApiError>;
    async fn delete_asset_class(&self, id: &str) -> Result<(), ApiError>;
}

/// Join a base URL and an absolute endpoint path without doubling slashes.
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `gloo-net` implementation of the backend traits.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    /// `POST` a JSON body and decode the JSON answer.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let url = self.endpoint(path);
            let resp = gloo_net::http::Request::post(&url)
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let message = resp.text().await.unwrap_or_default();
                log::debug!("{url} answered {status}");
                return Err(ApiError::Status { status, message });
            }
            resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(path), body);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpBackend {
    async fn get_user_info(&self) -> Result<UserInfo, ApiError> {
        self.post(USER_INFO_PATH, &EmptyMessage::default()).await
    }

    async fn begin_auth(&self) -> Result<AuthUrl, ApiError> {
        self.post(BEGIN_AUTH_PATH, &EmptyMessage::default()).await
    }

    async fn exchange_code(&self, request: &ExchangeCodeRequest) -> Result<(), ApiError> {
        let _: EmptyMessage = self.post(EXCHANGE_CODE_PATH, request).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let _: EmptyMessage = self.post(LOGOUT_PATH, &EmptyMessage::default()).await?;
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl AssetClassApi for HttpBackend {
    async fn list_asset_classes(&self) -> Result<AssetClassList, ApiError> {
        self.post(LIST_ASSET_CLASSES_PATH, &EmptyMessage::default()).await
    }

    async fn create_asset_class(&self, class: &AssetClass) -> Result<AssetClass, ApiError> {
        self.post(CREATE_ASSET_CLASS_PATH, class).await
    }

    async fn update_asset_class(&self, class: &AssetClass) -> Result<AssetClass, ApiError> {
        self.post(UPDATE_ASSET_CLASS_PATH, class).await
    }

    async fn delete_asset_class(&self, id: &str) -> Result<(), ApiError> {
        let request = DeleteAssetClassRequest { id: id.to_owned() };
        let _: EmptyMessage = self.post(DELETE_ASSET_CLASS_PATH, &request).await?;
        Ok(())
    }
}
