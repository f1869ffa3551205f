//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, `asset_classes`) so components
//! depend on small focused models. Containers are constructed once in `App`
//! and handed out through Leptos context.

pub mod asset_classes;
pub mod auth;
pub mod collection;
pub mod endpoint;
pub mod providers;
pub mod toast;
