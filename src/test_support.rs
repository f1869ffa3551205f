//! In-memory fakes for the browser and backend seams.
//!
//! Fakes write to a shared [`Journal`] so tests can assert the relative order
//! of navigation and backend calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, NavigationError};
use crate::net::api::{AssetClassApi, AuthApi};
use crate::net::navigation::Navigator;
use crate::net::types::{AssetClass, AssetClassList, AuthUrl, ExchangeCodeRequest, UserInfo};
use crate::state::auth::AuthController;
use crate::state::toast::Toasts;
use crate::util::timer::{Scheduler, Task};

// =============================================================================
// JOURNAL
// =============================================================================

#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.position(entry).is_some()
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, message: "unauthenticated".into() }
}

pub fn server_error() -> ApiError {
    ApiError::Status { status: 500, message: "internal".into() }
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

/// Scheduler driven by an explicit clock.
#[derive(Default)]
pub struct ManualScheduler {
    now: Mutex<Duration>,
    pending: Mutex<Vec<(Duration, Task)>>,
}

impl ManualScheduler {
    /// Move the clock forward and run every task that became due.
    pub fn advance(&self, by: Duration) {
        let now = {
            let mut now = self.now.lock().unwrap();
            *now += by;
            *now
        };
        let due: Vec<Task> = {
            let mut pending = self.pending.lock().unwrap();
            let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _)| *at <= now);
            *pending = rest;
            due.into_iter().map(|(_, task)| task).collect()
        };
        for task in due {
            task();
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let at = *self.now.lock().unwrap() + delay;
        self.pending.lock().unwrap().push((at, task));
    }
}

// =============================================================================
// FAKE NAVIGATOR
// =============================================================================

pub struct FakeNavigator {
    location: Mutex<Url>,
    journal: Journal,
}

impl FakeNavigator {
    pub fn new(location: &str, journal: Journal) -> Self {
        Self { location: Mutex::new(Url::parse(location).unwrap()), journal }
    }

    pub fn current(&self) -> String {
        self.location.lock().unwrap().to_string()
    }
}

impl Navigator for FakeNavigator {
    fn location(&self) -> Result<Url, NavigationError> {
        Ok(self.location.lock().unwrap().clone())
    }

    fn replace_location(&self, url: &Url) -> Result<(), NavigationError> {
        self.journal.record(format!("replace {url}"));
        *self.location.lock().unwrap() = url.clone();
        Ok(())
    }

    fn navigate(&self, path: &str, replace: bool) {
        self.journal.record(format!("navigate {path} replace={replace}"));
        let mut location = self.location.lock().unwrap();
        if let Ok(next) = location.join(path) {
            *location = next;
        }
    }

    fn redirect(&self, url: &str) -> Result<(), NavigationError> {
        self.journal.record(format!("redirect {url}"));
        Ok(())
    }
}

// =============================================================================
// FAKE AUTH API
// =============================================================================

/// Scripted auth backend. `get_user_info` answers from a queue and reports
/// 401 once the queue runs dry.
pub struct FakeAuthApi {
    journal: Journal,
    user_info: Mutex<VecDeque<Result<UserInfo, ApiError>>>,
    auth_url: Mutex<Result<AuthUrl, ApiError>>,
    exchange: Mutex<Result<(), ApiError>>,
    logout: Mutex<Result<(), ApiError>>,
}

impl FakeAuthApi {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            user_info: Mutex::new(VecDeque::new()),
            auth_url: Mutex::new(Ok(AuthUrl { url: "https://idp/auth".into() })),
            exchange: Mutex::new(Ok(())),
            logout: Mutex::new(Ok(())),
        }
    }

    pub fn push_user_info(&self, result: Result<UserInfo, ApiError>) {
        self.user_info.lock().unwrap().push_back(result);
    }

    pub fn set_auth_url(&self, result: Result<AuthUrl, ApiError>) {
        *self.auth_url.lock().unwrap() = result;
    }

    pub fn set_exchange(&self, result: Result<(), ApiError>) {
        *self.exchange.lock().unwrap() = result;
    }

    pub fn set_logout(&self, result: Result<(), ApiError>) {
        *self.logout.lock().unwrap() = result;
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn get_user_info(&self) -> Result<UserInfo, ApiError> {
        self.journal.record("get_user_info");
        self.user_info.lock().unwrap().pop_front().unwrap_or_else(|| Err(unauthorized()))
    }

    async fn begin_auth(&self) -> Result<AuthUrl, ApiError> {
        self.journal.record("begin_auth");
        self.auth_url.lock().unwrap().clone()
    }

    async fn exchange_code(&self, request: &ExchangeCodeRequest) -> Result<(), ApiError> {
        self.journal.record(format!("exchange_code {} {}", request.code, request.state));
        self.exchange.lock().unwrap().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.journal.record("logout");
        self.logout.lock().unwrap().clone()
    }
}

// =============================================================================
// FAKE ASSET CLASS API
// =============================================================================

/// In-memory asset-class backend. `fail_next` makes the next call fail.
#[derive(Default)]
pub struct FakeAssetClassApi {
    server: Mutex<Vec<AssetClass>>,
    next_error: Mutex<Option<ApiError>>,
    next_id: Mutex<u32>,
}

impl FakeAssetClassApi {
    pub fn with_classes(classes: Vec<AssetClass>) -> Self {
        Self { server: Mutex::new(classes), ..Self::default() }
    }

    pub fn fail_next(&self, err: ApiError) {
        *self.next_error.lock().unwrap() = Some(err);
    }

    pub fn server_classes(&self) -> Vec<AssetClass> {
        self.server.lock().unwrap().clone()
    }

    fn take_error(&self) -> Result<(), ApiError> {
        match self.next_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AssetClassApi for FakeAssetClassApi {
    async fn list_asset_classes(&self) -> Result<AssetClassList, ApiError> {
        self.take_error()?;
        Ok(AssetClassList { classes: self.server_classes() })
    }

    async fn create_asset_class(&self, class: &AssetClass) -> Result<AssetClass, ApiError> {
        self.take_error()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = AssetClass { id: format!("ac-{next_id}"), ..class.clone() };
        self.server.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_asset_class(&self, class: &AssetClass) -> Result<AssetClass, ApiError> {
        self.take_error()?;
        let mut server = self.server.lock().unwrap();
        if let Some(existing) = server.iter_mut().find(|c| c.id == class.id) {
            *existing = class.clone();
        }
        Ok(class.clone())
    }

    async fn delete_asset_class(&self, id: &str) -> Result<(), ApiError> {
        self.take_error()?;
        self.server.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

pub fn asset_class(id: &str, name: &str) -> AssetClass {
    AssetClass { id: id.to_owned(), name: name.to_owned(), ..AssetClass::default() }
}

// =============================================================================
// HARNESS
// =============================================================================

/// Auth controller wired to fakes, starting at `location`.
pub struct AuthHarness {
    pub journal: Journal,
    pub scheduler: Arc<ManualScheduler>,
    pub navigator: Arc<FakeNavigator>,
    pub api: Arc<FakeAuthApi>,
    pub toasts: Toasts,
    pub auth: AuthController,
}

impl AuthHarness {
    pub fn new(location: &str) -> Self {
        Self::with_config(location, ClientConfig::default())
    }

    pub fn with_config(location: &str, config: ClientConfig) -> Self {
        let journal = Journal::default();
        let scheduler = Arc::new(ManualScheduler::default());
        let navigator = Arc::new(FakeNavigator::new(location, journal.clone()));
        let api = Arc::new(FakeAuthApi::new(journal.clone()));
        let toasts = Toasts::new(scheduler.clone(), config.toast_lifetime);
        let auth = AuthController::new(api.clone(), navigator.clone(), toasts.clone(), Arc::new(config));
        Self { journal, scheduler, navigator, api, toasts, auth }
    }

    pub fn toast_messages(&self) -> Vec<String> {
        use leptos::prelude::GetUntracked;
        self.toasts.toasts().get_untracked().items.into_iter().map(|t| t.message).collect()
    }
}
