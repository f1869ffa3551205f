//! Shared wrapper for backend-backed state mutations.
//!
//! DESIGN
//! ======
//! Every resource container routes its backend calls through
//! [`Endpoint::call`], which owns the cross-cutting behavior: a loading flag
//! for the duration of the call, an error toast on failure, and a global
//! logout when the backend answers 401. The failure is still returned so the
//! caller can react.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use std::future::Future;

use leptos::prelude::*;

use crate::error::{ApiError, ClientError};
use crate::state::auth::AuthController;
use crate::state::toast::Toasts;

pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Clears the loading flag when the call finishes or its future is dropped.
struct LoadingGuard(RwSignal<bool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.0.try_set(false);
    }
}

#[derive(Clone)]
pub struct Endpoint {
    loading: RwSignal<bool>,
    toasts: Toasts,
    auth: AuthController,
}

impl Endpoint {
    #[must_use]
    pub fn new(toasts: Toasts, auth: AuthController) -> Self {
        Self { loading: RwSignal::new(false), toasts, auth }
    }

    #[must_use]
    pub fn loading(&self) -> RwSignal<bool> {
        self.loading
    }

    /// Run `request` with the default error message.
    ///
    /// # Errors
    ///
    /// See [`Endpoint::call_with_message`].
    pub async fn call<T, F>(&self, request: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.call_with_message(request, DEFAULT_ERROR_MESSAGE).await
    }

    /// Run `request`, toasting `error_message` if it fails.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] after logging out if the backend answered
    /// 401, [`ClientError::Api`] for any other failure.
    pub async fn call_with_message<T, F>(&self, request: F, error_message: &str) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.loading.set(true);
        let _guard = LoadingGuard(self.loading);

        let err = match request.await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_unauthorized() => {
                log::warn!("unauthorized access, logging out: {e}");
                self.auth.logout().await;
                ClientError::Unauthorized
            }
            Err(e) => ClientError::Api(e),
        };

        log::error!("api error: {err}");
        self.toasts.error(error_message);
        Err(err)
    }
}
