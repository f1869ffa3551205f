//! Networking and browser-boundary modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the backend REST calls, `navigation` wraps the browser
//! location/history, and `types` defines the shared wire schema.

pub mod api;
pub mod navigation;
pub mod types;
