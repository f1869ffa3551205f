//! Auth-session state and the controller driving the OpenID lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read [`AuthState`]; the
//! [`AuthController`] is the only writer. On page load it either finishes an
//! authorization-code callback, restores the session behind the cookie, or
//! sends the browser to the identity provider.
//!
//! ERROR HANDLING
//! ==============
//! `initialize` never returns an error. Failures already shown to the user
//! where they happened (empty authorization URL, rejected code) only settle
//! the state; anything else becomes a generic toast plus a move to the login
//! page, so the flow always ends in a defined phase.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::*;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api::AuthApi;
use crate::net::navigation::{Navigator, auth_callback_params, is_route, strip_auth_params};
use crate::net::types::{ExchangeCodeRequest, UserInfo};
use crate::state::toast::Toasts;

pub const GENERIC_AUTH_ERROR: &str = "Authentication failed. Please sign in again.";

/// Identity of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub subject: Option<String>,
    pub email: Option<String>,
}

impl From<UserInfo> for Session {
    fn from(info: UserInfo) -> Self {
        Self { subject: info.subject, email: info.email }
    }
}

/// Where the session lifecycle currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Loading,
    /// No session; the browser is being sent to the identity provider.
    Redirecting,
    ExchangingCode,
    Authenticated,
    LoggingOut,
    /// Settled without a session.
    Unauthenticated,
}

impl AuthPhase {
    /// Whether the flow is still in motion.
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Loading | Self::Redirecting | Self::ExchangingCode | Self::LoggingOut)
    }
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub phase: AuthPhase,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, phase: AuthPhase::Loading, loading: true }
    }
}

impl AuthState {
    pub fn enter(&mut self, phase: AuthPhase) {
        self.phase = phase;
        self.loading = phase.is_pending();
    }
}

type RunFuture<'a> = Pin<Box<dyn Future<Output = Result<(), ClientError>> + 'a>>;

/// Owns [`AuthState`] and drives login redirect, code exchange, session
/// restore and logout.
#[derive(Clone)]
pub struct AuthController {
    state: RwSignal<AuthState>,
    api: Arc<dyn AuthApi>,
    navigator: Arc<dyn Navigator>,
    toasts: Toasts,
    config: Arc<ClientConfig>,
}

impl AuthController {
    #[must_use]
    pub fn new(
        api: Arc<dyn AuthApi>,
        navigator: Arc<dyn Navigator>,
        toasts: Toasts,
        config: Arc<ClientConfig>,
    ) -> Self {
        Self { state: RwSignal::new(AuthState::default()), api, navigator, toasts, config }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.state.with_untracked(|s| s.session.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(|s| s.phase == AuthPhase::Authenticated && s.session.is_some())
    }

    /// Page-load entry point. Always settles; see the module docs.
    pub async fn initialize(&self) {
        if let Err(e) = self.run(false).await {
            self.recover(e);
        }
    }

    /// Start the authorization flow on user request (login page button).
    pub async fn sign_in(&self) {
        if let Err(e) = self.begin_auth().await {
            self.recover(e);
        }
    }

    fn run(&self, after_exchange: bool) -> RunFuture<'_> {
        Box::pin(async move {
            self.enter(AuthPhase::Loading);
            let location = self.navigator.location()?;
            if let Some((code, state)) = auth_callback_params(&location) {
                return self.exchange_code(&code, &state).await;
            }
            self.restore_session(&location, after_exchange).await
        })
    }

    async fn restore_session(&self, location: &Url, after_exchange: bool) -> Result<(), ClientError> {
        match self.api.get_user_info().await {
            Ok(info) => {
                let session = Session::from(info);
                log::info!("session active for {}", session.subject.as_deref().unwrap_or("<unknown subject>"));
                self.state.update(|s| {
                    s.session = Some(session);
                    s.enter(AuthPhase::Authenticated);
                });
                if after_exchange || is_route(location, &self.config.login_path) {
                    self.to_dashboard();
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("no active session: {e}");
                self.state.update(|s| {
                    s.session = None;
                    s.enter(AuthPhase::Redirecting);
                });
                self.begin_auth().await
            }
        }
    }

    /// Ask the backend for an authorization URL and leave for it.
    ///
    /// # Errors
    ///
    /// [`ClientError::MissingRedirectUrl`] (already toasted, no navigation)
    /// if the backend hands out an empty URL; backend and navigation failures
    /// otherwise.
    pub async fn begin_auth(&self) -> Result<(), ClientError> {
        let auth_url = self.api.begin_auth().await?;
        if auth_url.url.is_empty() {
            log::error!("authorization url is empty");
            self.toasts.error(GENERIC_AUTH_ERROR);
            self.enter(AuthPhase::Unauthenticated);
            return Err(ClientError::MissingRedirectUrl);
        }

        let target = match &self.config.auth_url_rewrite {
            Some(rewrite) => rewrite.apply(&auth_url.url),
            None => auth_url.url,
        };
        log::info!("redirecting to identity provider: {target}");
        self.enter(AuthPhase::Redirecting);
        self.navigator.redirect(&target)?;
        Ok(())
    }

    /// Finish an authorization-code callback.
    ///
    /// The `code`/`state` parameters are removed from the address bar before
    /// the exchange request goes out, so a refresh cannot replay them.
    ///
    /// # Errors
    ///
    /// [`ClientError::CodeExchange`] (already toasted) if the backend rejects
    /// the code; navigation failures and errors of the follow-up session
    /// restore otherwise.
    pub async fn exchange_code(&self, code: &str, state: &str) -> Result<(), ClientError> {
        self.enter(AuthPhase::ExchangingCode);
        let location = self.navigator.location()?;
        self.navigator.replace_location(&strip_auth_params(&location))?;

        let request = ExchangeCodeRequest { code: code.to_owned(), state: state.to_owned() };
        if let Err(e) = self.api.exchange_code(&request).await {
            log::error!("code exchange failed: {e}");
            self.toasts.error(GENERIC_AUTH_ERROR);
            self.enter(AuthPhase::Unauthenticated);
            return Err(ClientError::CodeExchange(e));
        }

        log::debug!("authorization code exchanged");
        self.run(true).await
    }

    /// End the session. The backend call is best-effort: local state is
    /// cleared and the login page shown whatever it returns.
    pub async fn logout(&self) {
        self.enter(AuthPhase::LoggingOut);
        if let Err(e) = self.api.logout().await {
            log::error!("logout failed: {e}");
            self.toasts.error(GENERIC_AUTH_ERROR);
        }
        self.clear_session();
        self.to_login();
    }

    fn recover(&self, err: ClientError) {
        if err.is_reported() {
            log::warn!("auth flow halted: {err}");
            self.enter(AuthPhase::Unauthenticated);
            return;
        }
        log::error!("auth initialization failed: {err}");
        self.toasts.error(GENERIC_AUTH_ERROR);
        self.clear_session();
        self.to_login();
    }

    fn clear_session(&self) {
        self.state.update(|s| {
            s.session = None;
            s.enter(AuthPhase::Unauthenticated);
        });
    }

    fn enter(&self, phase: AuthPhase) {
        self.state.update(|s| s.enter(phase));
    }

    fn to_login(&self) {
        self.navigator.navigate(&self.config.login_path, true);
    }

    fn to_dashboard(&self) {
        self.navigator.navigate(&self.config.dashboard_path, true);
    }
}
