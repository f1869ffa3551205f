//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so deployment settings are baked
//! in with `option_env!` when the WASM bundle is compiled. Parsing lives in
//! [`ClientConfig::from_values`] so it can be tested natively.

use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "/";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/";
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(5);
pub const DEFAULT_AUTH_URL_REWRITE: &str = "http://dex=http://localhost";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DIG_INV_AUTH_URL_REWRITE '{0}' (expected 'from=to' or 'off')")]
    InvalidRewrite(String),
}

/// Host substitution applied to the authorization URL before redirecting.
///
/// Local stacks hand out identity-provider URLs with a container hostname
/// (`http://dex`) that the browser cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRewrite {
    pub from: String,
    pub to: String,
}

impl UrlRewrite {
    /// Replace the first occurrence of `from` in `url`.
    #[must_use]
    pub fn apply(&self, url: &str) -> String {
        url.replacen(&self.from, &self.to, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
    pub login_path: String,
    pub dashboard_path: String,
    pub toast_lifetime: Duration,
    pub auth_url_rewrite: Option<UrlRewrite>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            toast_lifetime: DEFAULT_TOAST_LIFETIME,
            auth_url_rewrite: parse_rewrite(DEFAULT_AUTH_URL_REWRITE).ok().flatten(),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// - `DIG_INV_BACKEND_URL`: backend base URL, default `/`
    /// - `DIG_INV_AUTH_URL_REWRITE`: `from=to`, or empty/`off` to disable;
    ///   default `http://dex=http://localhost`
    ///
    /// Falls back to defaults (with a warning) if a value does not parse.
    #[must_use]
    pub fn from_build_env() -> Self {
        match Self::from_values(option_env!("DIG_INV_BACKEND_URL"), option_env!("DIG_INV_AUTH_URL_REWRITE")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default client config");
                Self::default()
            }
        }
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRewrite`] if the rewrite rule has no `=`
    /// or an empty left-hand side.
    pub fn from_values(backend_url: Option<&str>, auth_url_rewrite: Option<&str>) -> Result<Self, ConfigError> {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_owned();
        let auth_url_rewrite = parse_rewrite(auth_url_rewrite.unwrap_or(DEFAULT_AUTH_URL_REWRITE))?;
        Ok(Self { backend_url, auth_url_rewrite, ..Self::default() })
    }
}

fn parse_rewrite(raw: &str) -> Result<Option<UrlRewrite>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    match raw.split_once('=') {
        Some((from, to)) if !from.trim().is_empty() => {
            Ok(Some(UrlRewrite { from: from.trim().to_owned(), to: to.trim().to_owned() }))
        }
        _ => Err(ConfigError::InvalidRewrite(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
