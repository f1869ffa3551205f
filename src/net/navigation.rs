//! Browser navigation primitives used by the auth flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth controller needs four things from the browser: read the current
//! URL, rewrite the current history entry without a reload, move to another
//! in-app route, and leave the app for the identity provider. `Navigator`
//! abstracts them so the controller runs unchanged against an in-memory fake.
//!
//! In-app moves go through the router: [`BrowserNavigator`] queues a
//! [`NavigationRequest`] that `NavigationBridge` (mounted inside `<Router>`)
//! performs with `use_navigate`. History replacement is synchronous through
//! `history.replaceState`, so it is visible before any later request is sent.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use url::Url;

use crate::error::NavigationError;

pub const CODE_PARAM: &str = "code";
pub const STATE_PARAM: &str = "state";

pub trait Navigator: Send + Sync {
    /// Current absolute location.
    ///
    /// # Errors
    ///
    /// Fails outside the browser or if the location does not parse.
    fn location(&self) -> Result<Url, NavigationError>;

    /// Replace the current history entry with `url` without reloading.
    fn replace_location(&self, url: &Url) -> Result<(), NavigationError>;

    /// Move to an in-app route; `replace` overwrites the current history entry.
    fn navigate(&self, path: &str, replace: bool);

    /// Full-page navigation to an external URL.
    fn redirect(&self, url: &str) -> Result<(), NavigationError>;
}

/// A pending in-app route change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    pub replace: bool,
}

/// Authorization-code callback parameters, if both are present and non-empty.
#[must_use]
pub fn auth_callback_params(url: &Url) -> Option<(String, String)> {
    let mut code = None;
    let mut state = None;
    for (key, value) in url.query_pairs() {
        match &*key {
            CODE_PARAM => code = Some(value.into_owned()),
            STATE_PARAM => state = Some(value.into_owned()),
            _ => {}
        }
    }
    match (code, state) {
        (Some(code), Some(state)) if !code.is_empty() && !state.is_empty() => Some((code, state)),
        _ => None,
    }
}

/// Copy of `url` with the `code`/`state` parameters removed.
///
/// Other query parameters survive in order; an empty query is dropped
/// entirely so no dangling `?` remains.
#[must_use]
pub fn strip_auth_params(url: &Url) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| *key != CODE_PARAM && *key != STATE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let mut stripped = url.clone();
    if kept.is_empty() {
        stripped.set_query(None);
    } else {
        stripped.query_pairs_mut().clear().extend_pairs(kept);
    }
    stripped
}

/// Whether `url` points at the in-app route `path`, ignoring a trailing slash.
#[must_use]
pub fn is_route(url: &Url, path: &str) -> bool {
    let current = url.path().trim_end_matches('/');
    let wanted = path.trim_end_matches('/');
    current == wanted
}

/// `web-sys` backed navigator for the running page.
#[derive(Clone, Copy, Debug)]
pub struct BrowserNavigator {
    pending: RwSignal<Option<NavigationRequest>>,
}

impl Default for BrowserNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None) }
    }

    /// Queue of in-app moves consumed by `NavigationBridge`.
    #[must_use]
    pub fn pending(&self) -> RwSignal<Option<NavigationRequest>> {
        self.pending
    }
}

#[cfg(feature = "csr")]
fn browser_window() -> Result<web_sys::Window, NavigationError> {
    web_sys::window().ok_or(NavigationError::Unavailable)
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(err: wasm_bindgen::JsValue) -> NavigationError {
    NavigationError::Browser(format!("{err:?}"))
}

impl Navigator for BrowserNavigator {
    fn location(&self) -> Result<Url, NavigationError> {
        #[cfg(feature = "csr")]
        {
            let href = browser_window()?.location().href().map_err(js_error)?;
            Url::parse(&href).map_err(|e| NavigationError::InvalidUrl(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(NavigationError::Unavailable)
        }
    }

    fn replace_location(&self, url: &Url) -> Result<(), NavigationError> {
        #[cfg(feature = "csr")]
        {
            browser_window()?
                .history()
                .map_err(js_error)?
                .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url.as_str()))
                .map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(NavigationError::Unavailable)
        }
    }

    fn navigate(&self, path: &str, replace: bool) {
        self.pending.set(Some(NavigationRequest { path: path.to_owned(), replace }));
    }

    fn redirect(&self, url: &str) -> Result<(), NavigationError> {
        #[cfg(feature = "csr")]
        {
            browser_window()?.location().set_href(url).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(NavigationError::Unavailable)
        }
    }
}
